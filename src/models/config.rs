use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("unsupported URL scheme '{scheme}' (expected http or https)")]
    UnsupportedScheme { scheme: String },
}

/// Immutable per-run configuration. Built once, validated at construction;
/// a bad base URL is the only error the prober surfaces as a hard failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProberConfig {
    pub base_url: String,
    pub auth_token: Option<String>,
    pub timeout_ms: u64,
}

impl ProberConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = base_url.into();

        let parsed = reqwest::Url::parse(&raw).map_err(|e| ConfigError::InvalidBaseUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ConfigError::UnsupportedScheme {
                    scheme: other.to_string(),
                });
            }
        }

        Ok(Self {
            base_url: raw.trim_end_matches('/').to_string(),
            auth_token: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// The TLS check inspects the configured scheme rather than probing.
    pub fn is_https(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_url_trims_trailing_slash() {
        let config = ProberConfig::new("https://api.example.com/").unwrap();
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert!(config.auth_token.is_none());
    }

    #[test]
    fn test_invalid_url_rejected() {
        assert!(ProberConfig::new("not a url").is_err());
        assert!(ProberConfig::new("").is_err());
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let err = ProberConfig::new("ftp://example.com").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedScheme { .. }));
    }

    #[test]
    fn test_https_detection() {
        assert!(ProberConfig::new("https://example.com").unwrap().is_https());
        assert!(!ProberConfig::new("http://example.com").unwrap().is_https());
    }

    #[test]
    fn test_builders() {
        let config = ProberConfig::new("http://localhost:3000")
            .unwrap()
            .with_token("abc123")
            .with_timeout_ms(5_000);
        assert_eq!(config.auth_token.as_deref(), Some("abc123"));
        assert_eq!(config.timeout_ms, 5_000);
    }
}
