use crate::config::types::{AnalyzerConfig, EngineConfig, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &EngineConfig) -> Result<(), ConfigError> {
    validate_analyzer_config(&config.analyzer)?;
    validate_user_agent_config(&config.user_agent)?;
    Ok(())
}

/// Validates analyzer timeouts and concurrency bounds
fn validate_analyzer_config(config: &AnalyzerConfig) -> Result<(), ConfigError> {
    if config.fetch_timeout_secs < 1 || config.fetch_timeout_secs > 120 {
        return Err(ConfigError::Validation(format!(
            "fetch-timeout-secs must be between 1 and 120, got {}",
            config.fetch_timeout_secs
        )));
    }

    if config.probe_timeout_secs < 1 || config.probe_timeout_secs > 60 {
        return Err(ConfigError::Validation(format!(
            "probe-timeout-secs must be between 1 and 60, got {}",
            config.probe_timeout_secs
        )));
    }

    if config.overall_timeout_secs < config.probe_timeout_secs {
        return Err(ConfigError::Validation(format!(
            "overall-timeout-secs must be >= probe-timeout-secs, got {} < {}",
            config.overall_timeout_secs, config.probe_timeout_secs
        )));
    }

    if config.max_concurrent_probes < 1 || config.max_concurrent_probes > 100 {
        return Err(ConfigError::Validation(format!(
            "max-concurrent-probes must be between 1 and 100, got {}",
            config.max_concurrent_probes
        )));
    }

    Ok(())
}

/// Validates user agent identification
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.client_name.is_empty() {
        return Err(ConfigError::Validation(
            "client-name cannot be empty".to_string(),
        ));
    }

    if !config
        .client_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "client-name must contain only alphanumeric characters and hyphens, got '{}'",
            config.client_name
        )));
    }

    if config.client_version.is_empty() {
        return Err(ConfigError::Validation(
            "client-version cannot be empty".to_string(),
        ));
    }

    if Url::parse(&config.contact_url).is_err() {
        return Err(ConfigError::Validation(format!(
            "contact-url is not a valid URL: '{}'",
            config.contact_url
        )));
    }

    if !config.contact_email.contains('@') {
        return Err(ConfigError::Validation(format!(
            "contact-email is not a valid email address: '{}'",
            config.contact_email
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&EngineConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_fetch_timeout_rejected() {
        let mut config = EngineConfig::default();
        config.analyzer.fetch_timeout_secs = 0;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_zero_probe_timeout_rejected() {
        let mut config = EngineConfig::default();
        config.analyzer.probe_timeout_secs = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_overall_timeout_below_probe_timeout_rejected() {
        let mut config = EngineConfig::default();
        config.analyzer.overall_timeout_secs = 2;
        config.analyzer.probe_timeout_secs = 5;
        let error = validate(&config).unwrap_err();
        assert!(error.to_string().contains("overall-timeout-secs"));
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let mut config = EngineConfig::default();
        config.analyzer.max_concurrent_probes = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_excessive_concurrency_rejected() {
        let mut config = EngineConfig::default();
        config.analyzer.max_concurrent_probes = 500;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_empty_client_name_rejected() {
        let mut config = EngineConfig::default();
        config.user_agent.client_name = String::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_client_name_with_spaces_rejected() {
        let mut config = EngineConfig::default();
        config.user_agent.client_name = "Page Lens".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_invalid_contact_url_rejected() {
        let mut config = EngineConfig::default();
        config.user_agent.contact_url = "not a url".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_invalid_contact_email_rejected() {
        let mut config = EngineConfig::default();
        config.user_agent.contact_email = "admin.example.com".to_string();
        assert!(validate(&config).is_err());
    }
}
