use regex::Regex;
use std::sync::LazyLock;

use crate::constants::{ENDPOINT_PREFIX, FAILURE_PREFIX, REQUEST_TARGET_PATTERN};
use crate::types::{Outcome, Verb};

static REQUEST_TARGET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(REQUEST_TARGET_PATTERN).expect("request target pattern is valid")
});

/// Format the header printed before the results for a URL
pub fn format_endpoint_header(url: &str) -> String {
    format!("{}{}\n", ENDPOINT_PREFIX, url)
}

/// Remove everything from `request to ` through the last colon on the line.
///
/// The match is greedy, so on failure lines it also swallows any error
/// causes that are themselves separated by colons.
pub fn strip_request_target(raw: &str) -> String {
    REQUEST_TARGET.replace_all(raw, "").into_owned()
}

/// Format the result line for one request.
///
/// The line keeps the legacy layout byte for byte: the raw message is built
/// as `"<METHOD> request to <url>: <code>"`, its target is stripped, and a
/// success line then gets a second `"<METHOD> "` prefix. A 200 for GET thus
/// renders as `"GET GET  200\n"`. Failure lines carry no extra prefix and
/// keep only the text after the last colon, e.g.
/// `"Failed to make POST  Connection refused (os error 111)\n"`.
pub fn format_result_line(verb: Verb, url: &str, outcome: &Outcome) -> String {
    match outcome {
        Outcome::Success(status) => {
            let raw = format!("{} request to {}: {}", verb, url, status.as_u16());
            format!("{} {}\n", verb, strip_request_target(&raw))
        }
        Outcome::Failure(message) => {
            let raw = format!("{} {} request to {}: {}", FAILURE_PREFIX, verb, url, message);
            format!("{}\n", strip_request_target(&raw))
        }
    }
}
