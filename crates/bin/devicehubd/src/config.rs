//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `devicehub.toml` in the working directory (or the path in
//! `DEVICEHUB_CONFIG`). Every field has a sensible default so the file is
//! optional. Environment variables take precedence over file values.

use serde::Deserialize;

const DEFAULT_PATH: &str = "devicehub.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from the TOML file (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let path =
            std::env::var("DEVICEHUB_CONFIG").unwrap_or_else(|_| DEFAULT_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// Apply overrides read through `lookup`. Later keys win; empty values
    /// count as unset.
    fn apply_env_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        let lookup = |key: &str| lookup(key).filter(|val| !val.is_empty());

        for key in ["HOST", "DEVICEHUB_HOST"] {
            if let Some(val) = lookup(key) {
                self.server.host = val;
            }
        }
        for key in ["PORT", "DEVICEHUB_PORT"] {
            if let Some(val) = lookup(key) {
                self.server.port = val
                    .parse()
                    .map_err(|_| ConfigError::Validation(format!("{key} is not a port: {val}")))?;
            }
        }
        for key in ["DEVICEHUB_LOG", "RUST_LOG"] {
            if let Some(val) = lookup(key) {
                self.logging.filter = val;
            }
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.is_empty() {
            return Err(ConfigError::Validation("host must not be empty".to_string()));
        }
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        Ok(())
    }

    /// Return the `host:port` bind address, bracketing IPv6 hosts.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        let host = &self.server.host;
        if host.contains(':') {
            format!("[{host}]:{}", self.server.port)
        } else {
            format!("{host}:{}", self.server.port)
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "devicehubd=info,devicehub=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert!(config.logging.filter.contains("devicehubd=info"));
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [server]
            port = 3000
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn should_apply_plain_host_and_port_variables() {
        let mut config = Config::default();
        config
            .apply_env_overrides(env(&[("HOST", "127.0.0.1"), ("PORT", "9000")]))
            .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
    }

    #[test]
    fn should_prefer_prefixed_variables_over_plain_ones() {
        let mut config = Config::default();
        config
            .apply_env_overrides(env(&[
                ("HOST", "127.0.0.1"),
                ("DEVICEHUB_HOST", "10.0.0.1"),
                ("PORT", "9000"),
                ("DEVICEHUB_PORT", "9001"),
            ]))
            .unwrap();
        assert_eq!(config.server.host, "10.0.0.1");
        assert_eq!(config.server.port, 9001);
    }

    #[test]
    fn should_prefer_rust_log_for_filter() {
        let mut config = Config::default();
        config
            .apply_env_overrides(env(&[("DEVICEHUB_LOG", "info"), ("RUST_LOG", "trace")]))
            .unwrap();
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_ignore_empty_variables() {
        let mut config = Config::default();
        config
            .apply_env_overrides(env(&[("HOST", ""), ("PORT", "")]))
            .unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn should_reject_non_numeric_port_variable() {
        let mut config = Config::default();
        let result = config.apply_env_overrides(env(&[("PORT", "http")]));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_empty_host() {
        let mut config = Config::default();
        config.server.host = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_valid_config() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn should_bracket_ipv6_host_in_bind_addr() {
        let mut config = Config::default();
        config.server.host = "::1".to_string();
        config.server.port = 9090;
        assert_eq!(config.bind_addr(), "[::1]:9090");
    }
}
