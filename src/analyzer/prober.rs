//! Link health probing
//!
//! Probes every eligible link with a lightweight existence request and
//! records exactly one outcome per link:
//! - concurrency is bounded by semaphore admission
//! - each probe carries its own timeout
//! - outcomes are collected by a single consumer loop, never by the probe
//!   tasks themselves
//! - the whole stage runs under a deadline; probes still outstanding when it
//!   expires are aborted and recorded unreachable

use crate::config::EngineConfig;
use crate::report::ProbeOutcome;
use reqwest::{Client, Method, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio::time::Instant;
use url::Url;

/// Probes every link and returns one outcome per input, index-aligned
///
/// Returns only after every probe has completed, timed out, or been
/// abandoned at the stage deadline; abandoned probes are recorded
/// [`ProbeOutcome::Unreachable`].
///
/// # Arguments
///
/// * `client` - The shared HTTP client (carries the user-agent label)
/// * `links` - The probe-eligible links, already resolved and normalized
/// * `config` - Source of the per-probe timeout, stage deadline, and
///   concurrency bound
///
/// # Returns
///
/// One [`ProbeOutcome`] per input link, in input order — none missing, none
/// duplicated.
pub async fn probe_links(
    client: &Client,
    links: &[Url],
    config: &EngineConfig,
) -> Vec<ProbeOutcome> {
    let mut outcomes = vec![ProbeOutcome::Unreachable; links.len()];
    if links.is_empty() {
        return outcomes;
    }

    let semaphore = Arc::new(Semaphore::new(
        config.analyzer.max_concurrent_probes as usize,
    ));
    let probe_timeout = config.analyzer.probe_timeout();
    let deadline = Instant::now() + config.analyzer.overall_timeout();

    let mut probes = JoinSet::new();
    for (index, link) in links.iter().enumerate() {
        let client = client.clone();
        let semaphore = Arc::clone(&semaphore);
        let url = link.clone();
        probes.spawn(async move {
            // The semaphore is never closed; acquire_owned cannot fail here
            let _permit = match semaphore.acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => return (index, ProbeOutcome::Unreachable),
            };
            (index, probe_one(&client, &url, probe_timeout).await)
        });
    }

    // Single consumer: outcome slots are written only from this loop
    let mut completed = 0usize;
    while completed < links.len() {
        match tokio::time::timeout_at(deadline, probes.join_next()).await {
            Ok(Some(Ok((index, outcome)))) => {
                outcomes[index] = outcome;
                completed += 1;
            }
            Ok(Some(Err(join_error))) => {
                tracing::warn!("Probe task failed: {}", join_error);
                completed += 1;
            }
            Ok(None) => break,
            Err(_) => {
                tracing::warn!(
                    "Probe stage deadline elapsed with {} of {} probes outstanding",
                    links.len() - completed,
                    links.len()
                );
                probes.abort_all();
                break;
            }
        }
    }

    outcomes
}

/// Probes a single link
///
/// Issues a HEAD request first; some servers refuse HEAD outright, so a 405
/// or 501 reply is retried once as GET before the outcome is recorded.
async fn probe_one(client: &Client, url: &Url, timeout: Duration) -> ProbeOutcome {
    match send_probe(client, Method::HEAD, url, timeout).await {
        ProbeOutcome::Status(code)
            if code == StatusCode::METHOD_NOT_ALLOWED.as_u16()
                || code == StatusCode::NOT_IMPLEMENTED.as_u16() =>
        {
            send_probe(client, Method::GET, url, timeout).await
        }
        outcome => outcome,
    }
}

/// Sends one probe request and classifies the reply
async fn send_probe(client: &Client, method: Method, url: &Url, timeout: Duration) -> ProbeOutcome {
    match client
        .request(method, url.clone())
        .timeout(timeout)
        .send()
        .await
    {
        Ok(response) => ProbeOutcome::Status(response.status().as_u16()),
        Err(error) => {
            tracing::debug!("Probe failed for {}: {}", url, error);
            ProbeOutcome::Unreachable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;

    #[tokio::test]
    async fn test_empty_link_set_completes_immediately() {
        let config = EngineConfig::default();
        let client = crate::analyzer::build_http_client(&config).unwrap();
        let outcomes = probe_links(&client, &[], &config).await;
        assert!(outcomes.is_empty());
    }

    // Probe outcomes against live servers (status codes, timeouts, HEAD
    // fallback, deterministic completion under concurrency pressure) are
    // covered with wiremock in the integration tests.
}
