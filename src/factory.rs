//! Construction of ready-to-use API managers

use crate::manager::{ApiManager, DefaultExceptionFactory};
use crate::sdk::SdkManager;
use crate::types::ClientConfig;
use crate::Result;

/// Builds an [`ApiManager`] with the default engine and error mapping
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiManagerFactory;

impl ApiManagerFactory {
    /// Manager for a base URI with default client settings
    pub fn create(base_uri: &str) -> Result<ApiManager> {
        Self::create_with_config(ClientConfig::new(base_uri))
    }

    pub fn create_with_config(config: ClientConfig) -> Result<ApiManager> {
        tracing::debug!("Creating API manager for {}", config.base_uri);
        Ok(ApiManager::new(
            SdkManager::new(config)?,
            DefaultExceptionFactory,
        ))
    }

    /// Manager configured from `PAYMENTS_BASE_URI` and `PAYMENTS_TIMEOUT_SECONDS`
    pub fn from_env() -> Result<ApiManager> {
        Self::create_with_config(ClientConfig::from_env()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BASE_URI_ENV, TIMEOUT_ENV};
    use crate::SdkError;
    use std::env;
    use std::time::Duration;

    #[test]
    fn test_create() {
        let manager = ApiManagerFactory::create("https://api.eoneopay.test/").unwrap();
        assert_eq!(manager.sdk().base_uri(), "https://api.eoneopay.test");
    }

    #[test]
    fn test_create_with_config() {
        let config = ClientConfig::new("http://payments.box").with_timeout(Duration::from_secs(3));
        assert!(ApiManagerFactory::create_with_config(config).is_ok());

        let result = ApiManagerFactory::create("");
        assert!(matches!(result, Err(SdkError::Config(_))));
    }

    #[test]
    fn test_from_env() {
        // The only test touching the PAYMENTS_* variables
        env::remove_var(BASE_URI_ENV);
        env::remove_var(TIMEOUT_ENV);
        assert!(matches!(ClientConfig::from_env(), Err(SdkError::Config(_))));

        env::set_var(BASE_URI_ENV, "https://api.eoneopay.test/");
        env::set_var(TIMEOUT_ENV, "5");
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));

        let manager = ApiManagerFactory::from_env().unwrap();
        assert_eq!(manager.sdk().base_uri(), "https://api.eoneopay.test");

        env::set_var(TIMEOUT_ENV, "thirty");
        let error = ApiManagerFactory::from_env().unwrap_err();
        assert!(error.to_string().contains(TIMEOUT_ENV));

        env::set_var(TIMEOUT_ENV, "5");
        env::set_var(BASE_URI_ENV, "api.eoneopay.test");
        assert!(matches!(ClientConfig::from_env(), Err(SdkError::Config(_))));

        env::remove_var(BASE_URI_ENV);
        env::remove_var(TIMEOUT_ENV);
    }
}
