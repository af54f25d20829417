//! Configuration module for pagelens
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. All keys are optional; [`EngineConfig::default`] is a fully working
//! configuration for library callers that skip TOML entirely.
//!
//! # Example
//!
//! ```no_run
//! use pagelens::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("pagelens.toml")).unwrap();
//! println!("Probe timeout: {}s", config.analyzer.probe_timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{AnalyzerConfig, EngineConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
