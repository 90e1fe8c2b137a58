// src/setup.rs

use std::time::Duration;

use tracing_subscriber::EnvFilter;

const DEFAULT_BACKEND_URL: &str = "http://localhost:4000";
const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AppConfig {
    pub backend_url: String,
    pub request_timeout: Duration,
    pub log_format: LogFormat,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub(crate) enum ConfigError {
    #[error("REQUEST_TIMEOUT_SECONDS must be a positive number of seconds, got '{0}'")]
    InvalidTimeout(String),
    #[error("LOG_FORMAT must be 'pretty' or 'json', got '{0}'")]
    InvalidLogFormat(String),
}

impl AppConfig {
    pub(crate) fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend_url = lookup("BACKEND_URL")
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        let request_timeout = match lookup("REQUEST_TIMEOUT_SECONDS") {
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(seconds) if seconds > 0 => Duration::from_secs(seconds),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
        };

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            None | Some("") | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => return Err(ConfigError::InvalidLogFormat(other.to_string())),
        };

        Ok(AppConfig {
            backend_url,
            request_timeout,
            log_format,
        })
    }
}

/// Logs go to stderr; stdout carries the submission report.
pub(crate) fn set_up_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.backend_url, "http://localhost:4000");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("BACKEND_URL", "https://api.example.com"),
            ("REQUEST_TIMEOUT_SECONDS", "3"),
            ("LOG_FORMAT", "json"),
        ])
        .unwrap();
        assert_eq!(config.backend_url, "https://api.example.com");
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            config(&[("REQUEST_TIMEOUT_SECONDS", "0")]),
            Err(ConfigError::InvalidTimeout("0".to_string()))
        );
        assert_eq!(
            config(&[("LOG_FORMAT", "xml")]),
            Err(ConfigError::InvalidLogFormat("xml".to_string()))
        );
    }
}
