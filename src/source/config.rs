/// Client configuration for the token-data service.
use std::time::Duration;

use url::Url;

use super::errors::{SourceError, SourceResult};

/// Base URL used when neither `--api-url` nor `AGENT_MINT_API_URL` is set.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for [`super::ApiClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service base URL. Request paths are appended to it.
    pub api_url: Url,
    /// Optional key sent as `X-API-KEY`.
    pub api_key: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Build and validate a configuration.
    ///
    /// A blank API key is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Config` for a non-http(s) URL, a URL that cannot
    /// carry a path, or a zero timeout.
    pub fn new(api_url: Url, api_key: Option<String>, timeout_secs: u64) -> SourceResult<Self> {
        if !matches!(api_url.scheme(), "http" | "https") {
            return Err(SourceError::Config(format!(
                "API URL must be http or https, got '{api_url}'"
            )));
        }
        if api_url.cannot_be_a_base() {
            return Err(SourceError::Config(format!(
                "API URL '{api_url}' cannot be used as a base"
            )));
        }
        if timeout_secs == 0 {
            return Err(SourceError::Config(
                "timeout must be at least 1 second".to_owned(),
            ));
        }

        let api_key = api_key
            .map(|k| k.trim().to_owned())
            .filter(|k| !k.is_empty());

        Ok(Self {
            api_url,
            api_key,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Configuration from the environment (after `.env` is loaded), falling
    /// back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if a variable is set to an unusable value.
    pub fn from_env() -> SourceResult<Self> {
        let api_url = std::env::var("AGENT_MINT_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_owned());
        let api_key = std::env::var("AGENT_MINT_API_KEY").ok();
        let timeout = match std::env::var("AGENT_MINT_TIMEOUT") {
            Ok(raw) => raw.trim().parse().map_err(|_| {
                SourceError::Config(format!("AGENT_MINT_TIMEOUT must be whole seconds, got '{raw}'"))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };
        Self::new(Url::parse(&api_url)?, api_key, timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_defaults_are_valid() {
        let cfg = ClientConfig::new(url(DEFAULT_API_URL), None, DEFAULT_TIMEOUT_SECS).unwrap();
        assert_eq!(cfg.timeout, Duration::from_secs(30));
        assert!(cfg.api_key.is_none());
    }

    #[test]
    fn test_blank_api_key_is_dropped() {
        let cfg = ClientConfig::new(url("https://example.com"), Some("  ".to_owned()), 5).unwrap();
        assert!(cfg.api_key.is_none());
    }

    #[test]
    fn test_rejects_other_schemes() {
        let err = ClientConfig::new(url("ftp://example.com"), None, 5).unwrap_err();
        assert!(matches!(err, SourceError::Config(_)));
    }

    #[test]
    fn test_rejects_cannot_be_base() {
        assert!(ClientConfig::new(url("mailto:ops@example.com"), None, 5).is_err());
    }

    #[test]
    fn test_rejects_zero_timeout() {
        assert!(ClientConfig::new(url("https://example.com"), None, 0).is_err());
    }
}
