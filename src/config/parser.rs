use crate::config::types::EngineConfig;
use crate::config::validation::validate;
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// Missing keys fall back to their defaults; the parsed configuration is
/// validated before it is returned.
pub fn load_config(path: &Path) -> Result<EngineConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;

    let config: EngineConfig = toml::from_str(&content)?;

    validate(&config)?;

    Ok(config)
}

/// Computes a SHA-256 hash of the configuration file content
///
/// Used to log which configuration an analysis run was performed with.
pub fn compute_config_hash(path: &Path) -> Result<String, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    Ok(hex::encode(result))
}

/// Loads a configuration and returns both the config and its hash
pub fn load_config_with_hash(path: &Path) -> Result<(EngineConfig, String), ConfigError> {
    let config = load_config(path)?;
    let hash = compute_config_hash(path)?;
    Ok((config, hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_full_config() {
        let file = create_temp_config(
            r#"
[analyzer]
fetch-timeout-secs = 10
overall-timeout-secs = 20
probe-timeout-secs = 3
max-concurrent-probes = 8

[user-agent]
client-name = "TestLens"
client-version = "0.1"
contact-url = "https://example.com/about"
contact-email = "admin@example.com"
"#,
        );

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.analyzer.fetch_timeout_secs, 10);
        assert_eq!(config.analyzer.overall_timeout_secs, 20);
        assert_eq!(config.analyzer.probe_timeout_secs, 3);
        assert_eq!(config.analyzer.max_concurrent_probes, 8);
        assert_eq!(config.user_agent.client_name, "TestLens");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let file = create_temp_config("");
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.analyzer.probe_timeout_secs, 5);
        assert_eq!(config.analyzer.max_concurrent_probes, 20);
        assert_eq!(config.user_agent.client_name, "Pagelens");
    }

    #[test]
    fn test_partial_section_uses_defaults_for_rest() {
        let file = create_temp_config(
            r#"
[analyzer]
probe-timeout-secs = 2
"#,
        );
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.analyzer.probe_timeout_secs, 2);
        assert_eq!(config.analyzer.fetch_timeout_secs, 15);
    }

    #[test]
    fn test_invalid_toml_rejected() {
        let file = create_temp_config("[analyzer\nprobe-timeout-secs = 2");
        assert!(matches!(
            load_config(file.path()),
            Err(crate::ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let file = create_temp_config(
            r#"
[analyzer]
probe-timeout-secs = 0
"#,
        );
        assert!(matches!(
            load_config(file.path()),
            Err(crate::ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_missing_file_rejected() {
        let result = load_config(Path::new("/nonexistent/pagelens.toml"));
        assert!(matches!(result, Err(crate::ConfigError::Io(_))));
    }

    #[test]
    fn test_config_hash_is_stable() {
        let file = create_temp_config("[analyzer]\nprobe-timeout-secs = 2\n");
        let first = compute_config_hash(file.path()).unwrap();
        let second = compute_config_hash(file.path()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
    }

    #[test]
    fn test_config_hash_differs_on_content_change() {
        let first_file = create_temp_config("[analyzer]\nprobe-timeout-secs = 2\n");
        let second_file = create_temp_config("[analyzer]\nprobe-timeout-secs = 3\n");
        let first = compute_config_hash(first_file.path()).unwrap();
        let second = compute_config_hash(second_file.path()).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_load_config_with_hash() {
        let file = create_temp_config("");
        let (config, hash) = load_config_with_hash(file.path()).unwrap();
        assert_eq!(config.analyzer.probe_timeout_secs, 5);
        assert_eq!(hash.len(), 64);
    }
}
