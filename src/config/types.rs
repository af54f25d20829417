use serde::Deserialize;
use std::time::Duration;

/// Main configuration structure for pagelens
///
/// Every field has a default, so an empty TOML file (or no file at all)
/// yields a working configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
    #[serde(default, rename = "user-agent")]
    pub user_agent: UserAgentConfig,
}

/// Analysis pipeline configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzerConfig {
    /// Overall timeout for the primary page fetch (seconds)
    #[serde(default = "default_fetch_timeout", rename = "fetch-timeout-secs")]
    pub fetch_timeout_secs: u64,

    /// Ceiling on the whole link-probing stage (seconds)
    #[serde(default = "default_overall_timeout", rename = "overall-timeout-secs")]
    pub overall_timeout_secs: u64,

    /// Per-link probe timeout (seconds)
    #[serde(default = "default_probe_timeout", rename = "probe-timeout-secs")]
    pub probe_timeout_secs: u64,

    /// Maximum number of concurrent link probes
    #[serde(default = "default_max_probes", rename = "max-concurrent-probes")]
    pub max_concurrent_probes: u32,
}

fn default_fetch_timeout() -> u64 {
    15
}

fn default_overall_timeout() -> u64 {
    30
}

fn default_probe_timeout() -> u64 {
    5
}

fn default_max_probes() -> u32 {
    20
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_secs: default_fetch_timeout(),
            overall_timeout_secs: default_overall_timeout(),
            probe_timeout_secs: default_probe_timeout(),
            max_concurrent_probes: default_max_probes(),
        }
    }
}

impl AnalyzerConfig {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn overall_timeout(&self) -> Duration {
        Duration::from_secs(self.overall_timeout_secs)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }
}

/// User agent identification configuration
///
/// The formatted label is sent on the primary fetch and on every probe.
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the analyzer client
    #[serde(default = "default_client_name", rename = "client-name")]
    pub client_name: String,

    /// Version of the analyzer client
    #[serde(default = "default_client_version", rename = "client-version")]
    pub client_version: String,

    /// URL with information about the client
    #[serde(default = "default_contact_url", rename = "contact-url")]
    pub contact_url: String,

    /// Email address for client-related contact
    #[serde(default = "default_contact_email", rename = "contact-email")]
    pub contact_email: String,
}

fn default_client_name() -> String {
    "Pagelens".to_string()
}

fn default_client_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_contact_url() -> String {
    "https://example.com/pagelens".to_string()
}

fn default_contact_email() -> String {
    "admin@example.com".to_string()
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            client_name: default_client_name(),
            client_version: default_client_version(),
            contact_url: default_contact_url(),
            contact_email: default_contact_email(),
        }
    }
}

impl UserAgentConfig {
    /// Formats the outbound user-agent string
    ///
    /// Format: `ClientName/Version (+ContactURL; ContactEmail)`
    pub fn user_agent_string(&self) -> String {
        format!(
            "{}/{} (+{}; {})",
            self.client_name, self.client_version, self.contact_url, self.contact_email
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.analyzer.fetch_timeout_secs, 15);
        assert_eq!(config.analyzer.overall_timeout_secs, 30);
        assert_eq!(config.analyzer.probe_timeout_secs, 5);
        assert_eq!(config.analyzer.max_concurrent_probes, 20);
    }

    #[test]
    fn test_duration_helpers() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.fetch_timeout(), Duration::from_secs(15));
        assert_eq!(config.overall_timeout(), Duration::from_secs(30));
        assert_eq!(config.probe_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_user_agent_format() {
        let user_agent = UserAgentConfig {
            client_name: "Pagelens".to_string(),
            client_version: "1.0".to_string(),
            contact_url: "https://example.com/about".to_string(),
            contact_email: "admin@example.com".to_string(),
        };
        assert_eq!(
            user_agent.user_agent_string(),
            "Pagelens/1.0 (+https://example.com/about; admin@example.com)"
        );
    }
}
