//! HTTP utilities shared by the fetch boundary.

use crate::Result;
use reqwest::Client;
use std::time::Duration;

/// Request timeout; the stats endpoint usually answers within a second.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Build the shared HTTP client.
pub fn build_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!("vlr-picks/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}
