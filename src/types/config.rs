//! Client configuration

use crate::{Result, SdkError};
use std::env;
use std::time::Duration;

/// Environment variable holding the payments API base URI
pub const BASE_URI_ENV: &str = "PAYMENTS_BASE_URI";
/// Environment variable holding the API key used by the binary
pub const API_KEY_ENV: &str = "PAYMENTS_API_KEY";
/// Environment variable holding the request timeout in seconds
pub const TIMEOUT_ENV: &str = "PAYMENTS_TIMEOUT_SECONDS";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the HTTP client talking to the payments API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URI of the payments API, e.g. `https://api.eoneopay.test`
    pub base_uri: String,
    /// Request timeout
    pub timeout: Option<Duration>,
    /// User agent sent with every request
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Create a new client config
    pub fn new(base_uri: impl Into<String>) -> Self {
        Self {
            base_uri: base_uri.into(),
            timeout: Some(DEFAULT_TIMEOUT),
            user_agent: None,
        }
    }

    /// Build a config from `PAYMENTS_BASE_URI` and `PAYMENTS_TIMEOUT_SECONDS`
    pub fn from_env() -> Result<Self> {
        let base_uri = env::var(BASE_URI_ENV)
            .map_err(|_| SdkError::config(format!("{} must be set", BASE_URI_ENV)))?;

        let mut config = Self::new(base_uri);
        if let Ok(seconds) = env::var(TIMEOUT_ENV) {
            let seconds: u64 = seconds.parse().map_err(|_| {
                SdkError::config(format!("{} must be a number of seconds", TIMEOUT_ENV))
            })?;
            config = config.with_timeout(Duration::from_secs(seconds));
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the client configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_uri.is_empty() {
            return Err(SdkError::config("Base URI cannot be empty"));
        }

        if !self.base_uri.starts_with("http://") && !self.base_uri.starts_with("https://") {
            return Err(SdkError::config(
                "Base URI must start with http:// or https://",
            ));
        }

        Ok(())
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Disable the request timeout
    pub fn without_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    /// Set the user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// User agent to send, falling back to the crate name and version
    pub fn user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("eoneopay-sdk-rust/{}", crate::VERSION))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::new("https://api.eoneopay.test")
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("merchant-portal/2.0");

        assert_eq!(config.base_uri, "https://api.eoneopay.test");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.user_agent(), "merchant-portal/2.0");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::new("http://payments.box");
        assert_eq!(config.timeout, Some(DEFAULT_TIMEOUT));
        assert!(config.user_agent().starts_with("eoneopay-sdk-rust/"));
        assert_eq!(config.without_timeout().timeout, None);
    }

    #[test]
    fn test_config_validation() {
        assert!(ClientConfig::new("").validate().is_err());

        let result = ClientConfig::new("ftp://payments.box").validate();
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("must start with http:// or https://"));
    }
}
