//! HTTP fetching for the primary page request
//!
//! This module builds the shared HTTP client and performs the initial GET:
//! - client construction with the configured user-agent label
//! - overall fetch timeout enforcement
//! - non-2xx short-circuit (the body is never read)
//! - transport error classification

use crate::config::EngineConfig;
use crate::{EngineError, Result};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Result of a successful primary fetch
#[derive(Debug)]
pub struct FetchedPage {
    /// Final URL after transport-level redirects; the base for link resolution
    pub final_url: Url,
    /// HTTP status code of the final response
    pub status: u16,
    /// Full response body
    pub body: Vec<u8>,
}

/// Builds the HTTP client shared by the primary fetch and all probes
///
/// Redirects are followed at the transport level (reqwest's default policy);
/// the effective final URL is taken from the response afterwards.
pub fn build_http_client(config: &EngineConfig) -> Result<Client> {
    let client = Client::builder()
        .user_agent(config.user_agent.user_agent_string())
        .timeout(config.analyzer.fetch_timeout())
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()?;

    Ok(client)
}

/// Performs the primary GET for the target page
///
/// Fails with [`EngineError::Timeout`] / [`EngineError::Fetch`] on transport
/// failure and with [`EngineError::HttpStatus`] on any non-2xx response; in
/// the latter case the body is not read and the analysis terminates.
pub async fn fetch_page(client: &Client, url: &Url) -> Result<FetchedPage> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|error| classify_transport_error(url, error))?;

    let status = response.status();
    if !status.is_success() {
        return Err(EngineError::HttpStatus {
            url: url.to_string(),
            code: status.as_u16(),
        });
    }

    let final_url = response.url().clone();
    let body = response
        .bytes()
        .await
        .map_err(|error| classify_transport_error(url, error))?
        .to_vec();

    tracing::debug!(
        "Fetched {} ({} bytes, final URL {})",
        url,
        body.len(),
        final_url
    );

    Ok(FetchedPage {
        final_url,
        status: status.as_u16(),
        body,
    })
}

/// Maps a transport-level reqwest error to the engine taxonomy
fn classify_transport_error(url: &Url, error: reqwest::Error) -> EngineError {
    if error.is_timeout() {
        EngineError::Timeout {
            url: url.to_string(),
        }
    } else {
        EngineError::Fetch {
            url: url.to_string(),
            source: error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let config = EngineConfig::default();
        let client = build_http_client(&config);
        assert!(client.is_ok());
    }

    // Fetch behavior against live responses (2xx bodies, non-2xx
    // short-circuit, redirects, timeouts) is covered with wiremock in the
    // integration tests.
}
