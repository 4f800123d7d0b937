//! Execution engine for entity requests
//!
//! [`SdkManager`] turns an entity and an [`Action`] into an HTTP request against
//! the payments API and maps the answer back onto the entity's output type. It is
//! unaware of the API's error format: every non-2xx answer surfaces
//! as [`SdkError::InvalidApiResponse`] for the
//! [`ApiManager`](crate::manager::ApiManager) to classify.
//!
//! ```no_run
//! use eoneopay_sdk::endpoints::Webhook;
//! use eoneopay_sdk::sdk::SdkManager;
//! use eoneopay_sdk::types::{Action, ClientConfig};
//!
//! # async fn example() -> eoneopay_sdk::Result<()> {
//! let sdk = SdkManager::new(ClientConfig::new("https://api.eoneopay.test"))?;
//! let created = sdk
//!     .execute(&Webhook::new("https://merchant.test/hook"), Action::Create, "api-key")
//!     .await?;
//! # let _ = created;
//! # Ok(())
//! # }
//! ```

use crate::entity::{has_dot_segment, Entity};
use crate::types::{Action, ClientConfig, Group};
use crate::{Result, SdkError};
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

#[cfg(test)]
mod tests;

/// Message of the error raised when an entity fails local validation
pub const VALIDATION_FAILED: &str = "Validation failed.";

/// HTTP execution engine
#[derive(Debug, Clone)]
pub struct SdkManager {
    /// Base URI without a trailing slash
    base_uri: String,
    /// HTTP client
    client: Client,
}

impl SdkManager {
    /// Create a new engine from a client config
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut client_builder = Client::builder().user_agent(config.user_agent());

        if let Some(timeout) = config.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        let client = client_builder
            .build()
            .map_err(|e| SdkError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_uri: config.base_uri.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Base URI requests are sent to
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Run a single-entity action
    pub async fn execute<E: Entity>(
        &self,
        entity: &E,
        action: Action,
        api_key: &str,
    ) -> Result<Option<E::Output>> {
        let (status, body) = self.send(entity, action, api_key).await?;
        ResponseHandler::handle(status, &body)
    }

    /// Run [`Action::List`], the entity's list fields become query parameters
    pub async fn execute_list<E: Entity>(
        &self,
        entity: &E,
        api_key: &str,
    ) -> Result<Vec<E::Output>> {
        let (status, body) = self.send(entity, Action::List, api_key).await?;
        Ok(ResponseHandler::handle::<Vec<E::Output>>(status, &body)?.unwrap_or_default())
    }

    /// Full URL for an entity path
    fn endpoint(&self, uri: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.base_uri, uri))?)
    }

    async fn send<E: Entity>(
        &self,
        entity: &E,
        action: Action,
        api_key: &str,
    ) -> Result<(StatusCode, String)> {
        let violations = entity.validate(Group::from(action));
        if !violations.is_empty() {
            tracing::debug!("{} failed {} validation: {}", E::NAME, action, violations);
            return Err(SdkError::validation(VALIDATION_FAILED, violations));
        }

        let uri = entity.uri(action).ok_or_else(|| {
            SdkError::config(format!("{} does not support the {} action", E::NAME, action))
        })?;
        if has_dot_segment(&uri) {
            return Err(SdkError::config(format!(
                "{} {} URI has a dot path segment: {}",
                E::NAME,
                action,
                uri
            )));
        }
        let url = self.endpoint(&uri)?;
        let method = action.method();

        tracing::debug!("Sending {} {} request to: {}", E::NAME, method, url);

        let mut request = self
            .client
            .request(method, url.clone())
            .basic_auth(api_key, None::<&str>)
            .header(ACCEPT, "application/json");

        let payload = entity.payload(action)?;
        if action.has_body() {
            tracing::debug!(
                "{} {} payload: {}",
                E::NAME,
                action,
                serde_json::to_string_pretty(&payload).unwrap_or_default()
            );
            request = request.json(&payload);
        } else if action == Action::List && !payload.is_empty() {
            request = request.query(&query_pairs(payload));
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(
                "{} {} to {} failed with status: {}. Response body: {}",
                E::NAME,
                action,
                url,
                status,
                body
            );
        }

        Ok((status, body))
    }
}

/// Flatten criteria into query string pairs
fn query_pairs(payload: serde_json::Map<String, Value>) -> Vec<(String, String)> {
    payload
        .into_iter()
        .map(|(key, value)| match value {
            Value::String(s) => (key, s),
            other => (key, other.to_string()),
        })
        .collect()
}

/// Maps a raw HTTP answer onto an output type
pub struct ResponseHandler;

impl ResponseHandler {
    /// Non-2xx answers become [`SdkError::InvalidApiResponse`], empty 2xx answers `None`
    pub fn handle<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<Option<T>> {
        if !status.is_success() {
            return Err(SdkError::InvalidApiResponse {
                status: status.as_u16(),
                body: body.to_string(),
            });
        }

        if status == StatusCode::NO_CONTENT || body.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(serde_json::from_str(body)?))
    }
}
