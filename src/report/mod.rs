//! Analysis result model
//!
//! This module defines the data produced by one analysis invocation:
//! the heading histogram, link records with their classification and probe
//! outcomes, and the final immutable [`AnalysisResult`].
//!
//! Field names serialize to the snake_case JSON the orchestration layer
//! expects (`html_version`, `heading_counts`, `inaccessible_links`, ...).

use serde::Serialize;
use url::Url;

/// Terminal status of an analysis invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    /// Analysis ran to completion; all fields are populated
    Done,
    /// The primary fetch or parse failed; structural fields hold defaults
    Error,
}

impl AnalysisStatus {
    /// Returns the lowercase string form used in serialized results
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Done => "done",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for AnalysisStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counts of heading elements by level
///
/// Mutated only during structural extraction; immutable once the result is
/// assembled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HeadingHistogram {
    pub h1: u32,
    pub h2: u32,
    pub h3: u32,
    pub h4: u32,
    pub h5: u32,
    pub h6: u32,
}

impl HeadingHistogram {
    /// Total number of heading elements across all levels
    pub fn total(&self) -> u32 {
        self.h1 + self.h2 + self.h3 + self.h4 + self.h5 + self.h6
    }
}

/// Whether a link points at the page's own host or elsewhere
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkScope {
    /// Host component equals the base URL's host exactly
    Internal,
    /// Any other host (including hostless schemes like mailto:)
    External,
}

/// One resolved, normalized hyperlink from the analyzed page
///
/// The URL is the canonical comparison form: absolute, with fragment and
/// query string stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    pub url: Url,
    pub scope: LinkScope,
}

impl LinkRecord {
    pub fn new(url: Url, scope: LinkScope) -> Self {
        Self { url, scope }
    }

    /// Only http/https links are ever probed for reachability
    pub fn is_probe_eligible(&self) -> bool {
        matches!(self.url.scheme(), "http" | "https")
    }
}

/// Outcome of one reachability probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// A reply was received with this HTTP status code
    Status(u16),
    /// Transport failure or timeout; no status code available
    Unreachable,
}

impl ProbeOutcome {
    /// A link is broken iff it is unreachable or replied with status >= 400
    pub fn is_broken(&self) -> bool {
        match self {
            Self::Status(code) => *code >= 400,
            Self::Unreachable => true,
        }
    }

    /// The status code, if a reply was received
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status(code) => Some(*code),
            Self::Unreachable => None,
        }
    }
}

/// A link whose probe outcome marked it broken
///
/// `status_code` is `None` when the probe got no reply at all (network
/// failure, DNS error, timeout).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrokenLink {
    pub url: String,
    pub status_code: Option<u16>,
}

/// Structural metadata extracted from the parsed document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageStructure {
    /// Text of the first `<title>` element, empty string if absent
    pub title: String,
    pub headings: HeadingHistogram,
    pub has_login_form: bool,
}

/// The complete, immutable result of one analysis invocation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub url: String,
    pub status: AnalysisStatus,
    pub html_version: String,
    pub page_title: String,
    pub heading_counts: HeadingHistogram,
    pub internal_links: u32,
    pub external_links: u32,
    pub inaccessible_links: Vec<BrokenLink>,
    pub has_login_form: bool,
}

impl AnalysisResult {
    /// Merges the pipeline stages into the final result with status `Done`
    ///
    /// `probed` pairs each probe-eligible link with its outcome, in link
    /// order; broken entries are carried over in that order.
    pub fn assemble(
        target: &str,
        html_version: &str,
        structure: PageStructure,
        links: &[LinkRecord],
        probed: &[(Url, ProbeOutcome)],
    ) -> Self {
        let mut internal_links = 0u32;
        let mut external_links = 0u32;
        for record in links {
            match record.scope {
                LinkScope::Internal => internal_links += 1,
                LinkScope::External => external_links += 1,
            }
        }

        let inaccessible_links = probed
            .iter()
            .filter(|(_, outcome)| outcome.is_broken())
            .map(|(url, outcome)| BrokenLink {
                url: url.to_string(),
                status_code: outcome.status_code(),
            })
            .collect();

        Self {
            url: target.to_string(),
            status: AnalysisStatus::Done,
            html_version: html_version.to_string(),
            page_title: structure.title,
            heading_counts: structure.headings,
            internal_links,
            external_links,
            inaccessible_links,
            has_login_form: structure.has_login_form,
        }
    }

    /// Builds the error-status record for a failed invocation
    ///
    /// All structural fields hold defaults; callers that persist failed
    /// analyses store this alongside the typed [`crate::EngineError`].
    pub fn failed(target: &str) -> Self {
        Self {
            url: target.to_string(),
            status: AnalysisStatus::Error,
            html_version: "Unknown".to_string(),
            page_title: String::new(),
            heading_counts: HeadingHistogram::default(),
            internal_links: 0,
            external_links: 0,
            inaccessible_links: Vec::new(),
            has_login_form: false,
        }
    }
}
