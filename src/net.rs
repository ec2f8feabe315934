// src/net.rs

// One blocking GET against the jobs page. No retries; the caller
// classifies any failure here as a request failure.

use crate::config::ScrapeConfig;

/// Fetch the configured page and return the body as text.
///
/// Errors on connect/timeout trouble and on any non-2xx status.
pub fn http_get(config: &ScrapeConfig) -> Result<String, reqwest::Error> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(config.timeout)
        .build()?;

    client
        .get(&config.url)
        .send()?
        .error_for_status()?
        .text()
}
