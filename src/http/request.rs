use reqwest::Client;

use crate::types::{Outcome, Verb};

/// Build an HTTP request for the given verb, with no body and no extra headers
pub fn build_request(client: &Client, verb: Verb, url: &str) -> reqwest::RequestBuilder {
    client.request(verb.into(), url)
}

/// Send one request and fold the result into an [`Outcome`].
///
/// Any received status counts as success; only errors that stop the
/// request/response cycle become failures.
pub async fn send_request(client: &Client, verb: Verb, url: &str) -> Outcome {
    match build_request(client, verb, url).send().await {
        Ok(resp) => Outcome::Success(resp.status()),
        Err(err) => Outcome::Failure(format!("{:#}", anyhow::Error::new(err))),
    }
}
