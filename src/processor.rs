use anyhow::Result;
use reqwest::Client;
use std::io::Write;

use crate::config::Config;
use crate::constants::NO_VALID_METHODS_MESSAGE;
use crate::http::{build_http_client, send_request};
use crate::output::{Reporter, format_endpoint_header, format_result_line};
use crate::types::Outcome;
use crate::utils::read_url_list;

/// Counters for a finished run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub requests: usize,
    pub failures: usize,
}

/// Run a whole invocation, writing results to `console`.
///
/// With no usable methods only the fixed notice is written and the urls
/// file is never opened.
pub async fn run<W: Write>(config: &Config, console: &mut W) -> Result<RunSummary> {
    if !config.has_methods() {
        writeln!(console, "{}", NO_VALID_METHODS_MESSAGE)?;
        console.flush()?;
        return Ok(RunSummary::default());
    }

    let urls = read_url_list(&config.urls_file).await?;
    let client = build_http_client()?;
    let mut reporter = Reporter::new(console, config.output.as_deref()).await?;

    Ok(process_urls(&client, config, &urls, &mut reporter).await)
}

/// Send every selected method to every URL, strictly in order.
///
/// A failed request is reported as a line and never stops the run.
pub async fn process_urls<W: Write>(
    client: &Client,
    config: &Config,
    urls: &[String],
    reporter: &mut Reporter<W>,
) -> RunSummary {
    let mut summary = RunSummary::default();
    tracing::info!(
        urls = urls.len(),
        methods = config.methods.len(),
        "starting run"
    );

    for url in urls {
        reporter.emit(&format_endpoint_header(url)).await;

        for &verb in &config.methods {
            tracing::debug!(method = %verb, url = %url, "sending request");
            let outcome = send_request(client, verb, url).await;
            match &outcome {
                Outcome::Success(status) => {
                    tracing::debug!(
                        method = %verb,
                        url = %url,
                        status = status.as_u16(),
                        "response received"
                    );
                }
                Outcome::Failure(message) => {
                    tracing::debug!(method = %verb, url = %url, error = %message, "request failed");
                    summary.failures += 1;
                }
            }
            summary.requests += 1;

            reporter.emit(&format_result_line(verb, url, &outcome)).await;
        }
    }

    tracing::info!(
        requests = summary.requests,
        failures = summary.failures,
        "run complete"
    );
    summary
}
