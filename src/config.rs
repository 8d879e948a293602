//! Client configuration
//!
//! Everything a [`crate::client::RushmoreClient`] needs before the first
//! request: the participant API key, the API version and page size, and the
//! transport knobs (base URL, timeout, user agent). Page-size validation
//! happens at client construction, before any network call.

use crate::error::{Error, Result};
use std::time::Duration;

/// Production host for the Rushmore data API
pub const DEFAULT_BASE_URL: &str = "https://data-api.rushmorereviews.com";

/// API version segment used when none is configured
pub const DEFAULT_API_VERSION: &str = "0.1";

/// Default number of rows requested per page
///
/// The vendor limit is size-based (responses may not exceed 10 MiB), so the
/// only hard constraint here is positivity; callers hitting the overflow
/// fault should configure a smaller value.
pub const DEFAULT_PAGE_SIZE: u32 = 1000;

/// Configuration for the Rushmore client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// The X-API-key credential issued to Rushmore participants. Opaque,
    /// passed through verbatim, never validated or parsed.
    pub api_key: String,
    /// API version segment of the URL path
    pub api_version: String,
    /// Rows requested per page
    pub page_size: u32,
    /// Base URL of the vendor API (overridable for tests)
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a config with defaults for everything but the API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("rushmore-extractor/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Create a new config builder
    pub fn builder(api_key: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder {
            config: Self::new(api_key),
        }
    }

    /// Check the config for values that would make every extraction fail
    pub(crate) fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::InvalidPageSize {
                size: self.page_size,
            });
        }
        if self.api_version.is_empty() {
            return Err(Error::config("API version must not be empty"));
        }
        Ok(())
    }
}

/// Builder for client config
#[derive(Debug, Clone)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the API version segment
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.config.api_version = version.into();
        self
    }

    /// Set the page size
    pub fn page_size(mut self, size: u32) -> Self {
        self.config.page_size = size;
        self
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::new("ABC");
        assert_eq!(config.api_key, "ABC");
        assert_eq!(config.api_version, "0.1");
        assert_eq!(config.page_size, 1000);
        assert_eq!(config.base_url, "https://data-api.rushmorereviews.com");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::builder("ABC")
            .api_version("0.2")
            .page_size(250)
            .base_url("http://localhost:8080")
            .timeout(Duration::from_secs(5))
            .user_agent("test-agent")
            .build();

        assert_eq!(config.api_version, "0.2");
        assert_eq!(config.page_size, 250);
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "test-agent");
    }

    #[test]
    fn test_config_rejects_zero_page_size() {
        let config = ClientConfig::builder("ABC").page_size(0).build();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidPageSize { size: 0 }));
    }

    #[test]
    fn test_config_rejects_empty_api_version() {
        let config = ClientConfig::builder("ABC").api_version("").build();
        assert!(config.validate().is_err());
    }
}
