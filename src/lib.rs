//! Pagelens: a single-page analysis engine
//!
//! Given one URL, pagelens fetches the page, detects the HTML version,
//! extracts structural metadata (title, heading histogram, login-form
//! presence), classifies every outbound hyperlink as internal or external,
//! and concurrently probes the absolute links for reachability.

pub mod analyzer;
pub mod config;
pub mod report;

use thiserror::Error;

/// Main error type for pagelens operations
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid target URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Fetch failed for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("HTTP status {code} for {url}")]
    HttpStatus { url: String, code: u16 },

    #[error("HTML parse error for {url}: {message}")]
    Parse { url: String, message: String },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for pagelens operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use analyzer::{analyze_url, Analyzer};
pub use config::EngineConfig;
pub use report::{
    AnalysisResult, AnalysisStatus, BrokenLink, HeadingHistogram, LinkRecord, LinkScope,
    PageStructure, ProbeOutcome,
};
