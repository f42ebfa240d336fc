use anyhow::Result;
use reqwest::Client;

/// Build the HTTP client shared by every request.
///
/// Headers, timeouts and redirect handling stay at reqwest's defaults.
pub fn build_http_client() -> Result<Client> {
    Ok(Client::builder().build()?)
}
