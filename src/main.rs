//! Pagelens main entry point
//!
//! Command-line driver for the page analysis engine: analyzes each given
//! URL and prints either a human summary or the serialized result.

use anyhow::Result;
use clap::Parser;
use pagelens::config::{load_config_with_hash, EngineConfig};
use pagelens::{AnalysisResult, AnalysisStatus, Analyzer};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Pagelens: single-page structure and link-health analyzer
///
/// For each URL, pagelens fetches the page, detects the HTML version,
/// extracts the title, heading histogram, and login-form presence,
/// classifies outbound links as internal or external, and probes the
/// absolute links for reachability.
#[derive(Parser, Debug)]
#[command(name = "pagelens")]
#[command(version = "1.0.0")]
#[command(about = "Analyze a web page's structure and link health", long_about = None)]
struct Cli {
    /// URLs to analyze
    #[arg(value_name = "URL", required = true)]
    urls: Vec<String>,

    /// Path to TOML configuration file (defaults apply when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Print results as JSON instead of a human summary
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => EngineConfig::default(),
    };

    let analyzer = Analyzer::new(config)?;
    let mut failures = 0usize;

    for target in &cli.urls {
        let result = match analyzer.analyze(target).await {
            Ok(result) => result,
            Err(error) => {
                tracing::error!("Analysis failed for {}: {}", target, error);
                failures += 1;
                AnalysisResult::failed(target)
            }
        };

        if cli.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            print_summary(&result);
        }
    }

    if failures > 0 {
        std::process::exit(1);
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("pagelens=info,warn"),
            1 => EnvFilter::new("pagelens=debug,info"),
            2 => EnvFilter::new("pagelens=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Prints the human-readable summary for one analysis
fn print_summary(result: &AnalysisResult) {
    println!("=== {} ===", result.url);
    println!("  Status: {}", result.status);

    if result.status == AnalysisStatus::Error {
        println!();
        return;
    }

    println!("  HTML version: {}", result.html_version);
    println!("  Title: {}", result.page_title);

    let headings = &result.heading_counts;
    println!(
        "  Headings: h1={} h2={} h3={} h4={} h5={} h6={} (total {})",
        headings.h1,
        headings.h2,
        headings.h3,
        headings.h4,
        headings.h5,
        headings.h6,
        headings.total()
    );

    println!(
        "  Links: {} internal, {} external",
        result.internal_links, result.external_links
    );
    println!(
        "  Login form: {}",
        if result.has_login_form { "yes" } else { "no" }
    );

    if result.inaccessible_links.is_empty() {
        println!("  Broken links: none");
    } else {
        println!("  Broken links ({}):", result.inaccessible_links.len());
        for broken in &result.inaccessible_links {
            match broken.status_code {
                Some(code) => println!("    - {} (HTTP {})", broken.url, code),
                None => println!("    - {} (unreachable)", broken.url),
            }
        }
    }

    println!();
}
