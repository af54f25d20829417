//! Page analysis pipeline
//!
//! This module contains the core analysis logic, including:
//! - Target URL validation
//! - The primary page fetch
//! - HTML version detection and structural extraction
//! - Link classification and concurrent health probing
//! - Assembly of the final result

mod doctype;
mod fetcher;
mod links;
mod phase;
mod prober;
mod structure;

pub use doctype::detect_html_version;
pub use fetcher::{build_http_client, fetch_page, FetchedPage};
pub use links::classify_links;
pub use phase::AnalysisPhase;
pub use prober::probe_links;
pub use structure::extract_structure;

use crate::config::EngineConfig;
use crate::report::{AnalysisResult, ProbeOutcome};
use crate::{EngineError, Result};
use reqwest::Client;
use scraper::Html;
use url::Url;

/// Shared analysis engine
///
/// Holds the HTTP client and configuration; building the client once and
/// reusing it across invocations keeps connection pooling effective. The
/// analyzer has no per-invocation state, so one instance may serve many
/// concurrent `analyze` calls.
#[derive(Debug, Clone)]
pub struct Analyzer {
    client: Client,
    config: EngineConfig,
}

impl Analyzer {
    /// Creates an analyzer with its own HTTP client
    pub fn new(config: EngineConfig) -> Result<Self> {
        let client = build_http_client(&config)?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Analyzes one page end to end
    ///
    /// Pipeline: validate → fetch → parse/extract/classify → probe →
    /// assemble. Fetch and parse failures are fatal and surface as
    /// [`EngineError`]; per-link resolution and probe failures are recorded
    /// in the result instead. Callers that persist failed invocations can
    /// build the error-status record with [`AnalysisResult::failed`].
    pub async fn analyze(&self, target: &str) -> Result<AnalysisResult> {
        let target_url = validate_target(target)?;

        tracing::debug!("{} {}", AnalysisPhase::Fetching, target_url);
        let page = fetch_page(&self.client, &target_url).await?;

        let html_version = detect_html_version(&page.body);

        // The scraper DOM is not Send: parse and fully consume it in this
        // block so nothing borrowed from it crosses the probing await below.
        let (structure, link_records) = {
            tracing::debug!("{} {}", AnalysisPhase::Parsing, target_url);
            let body_text = String::from_utf8_lossy(&page.body);
            let document = Html::parse_document(&body_text);
            let structure = extract_structure(&document);

            tracing::debug!("{} {}", AnalysisPhase::Classifying, target_url);
            let link_records = classify_links(&document, &page.final_url);
            (structure, link_records)
        };

        let probe_targets: Vec<Url> = link_records
            .iter()
            .filter(|record| record.is_probe_eligible())
            .map(|record| record.url.clone())
            .collect();

        tracing::debug!(
            "{} {} ({} eligible of {} links)",
            AnalysisPhase::Probing,
            target_url,
            probe_targets.len(),
            link_records.len()
        );
        let outcomes = probe_links(&self.client, &probe_targets, &self.config).await;

        let probed: Vec<(Url, ProbeOutcome)> =
            probe_targets.into_iter().zip(outcomes).collect();

        Ok(AnalysisResult::assemble(
            target,
            html_version,
            structure,
            &link_records,
            &probed,
        ))
    }
}

/// Analyzes one page with a freshly built client
///
/// Convenience wrapper for one-shot callers; anything analyzing more than
/// one URL should hold an [`Analyzer`] instead.
///
/// # Example
///
/// ```no_run
/// use pagelens::{analyze_url, EngineConfig};
///
/// # async fn run() {
/// let result = analyze_url("https://example.com/", &EngineConfig::default())
///     .await
///     .unwrap();
/// println!(
///     "{}: {} internal, {} external, {} broken",
///     result.url,
///     result.internal_links,
///     result.external_links,
///     result.inaccessible_links.len()
/// );
/// # }
/// ```
pub async fn analyze_url(target: &str, config: &EngineConfig) -> Result<AnalysisResult> {
    Analyzer::new(config.clone())?.analyze(target).await
}

/// Validates the target before any I/O
///
/// The target must parse as an absolute URL with an http or https scheme
/// and a host component.
fn validate_target(target: &str) -> Result<Url> {
    let url = Url::parse(target).map_err(|error| EngineError::InvalidUrl {
        url: target.to_string(),
        reason: error.to_string(),
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(EngineError::InvalidUrl {
            url: target.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    if url.host_str().is_none() {
        return Err(EngineError::InvalidUrl {
            url: target.to_string(),
            reason: "missing host".to_string(),
        });
    }

    Ok(url)
}
