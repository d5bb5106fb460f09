//! Gateway configuration

use std::time::Duration;

/// Backend URL used when nothing is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Request timeout used when nothing is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the backend gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL, without a trailing slash
    pub base_url: String,

    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Create a configuration for `base_url` with the default timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ClientConfig::new("https://api.example.dev/").with_timeout(Duration::from_secs(5));
        assert_eq!(config.base_url, "https://api.example.dev");
        assert_eq!(config.timeout.as_secs(), 5);
    }
}
