//! The public API manager
//!
//! [`ApiManager`] is what applications hold on to. It runs entity actions through
//! the [`SdkManager`] and converts raw API failures into typed errors with an
//! [`ExceptionFactory`].
//!
//! ```no_run
//! use eoneopay_sdk::endpoints::Webhook;
//! use eoneopay_sdk::ApiManagerFactory;
//!
//! # async fn example() -> eoneopay_sdk::Result<()> {
//! let manager = ApiManagerFactory::create("https://api.eoneopay.test")?;
//!
//! let webhook = manager
//!     .create("api-key", &Webhook::new("https://merchant.test/hook"))
//!     .await?;
//! let all = manager.find_all::<Webhook>("api-key").await?;
//! # let _ = (webhook, all);
//! # Ok(())
//! # }
//! ```

use crate::entity::{attributes, Entity};
use crate::repository::Repository;
use crate::sdk::SdkManager;
use crate::types::Action;
use crate::validation::Violations;
use crate::{Result, SdkError};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::sync::Arc;


/// Turns a raw non-2xx API answer into a typed error
pub trait ExceptionFactory: Send + Sync {
    fn create(&self, status: u16, body: &str) -> SdkError;
}

/// Error body returned by the payments API
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ErrorBody {
    code: Option<i64>,
    sub_code: Option<i64>,
    message: Option<String>,
    violations: Option<Violations>,
}

/// Maps the API error body `{"code", "sub_code", "message", "violations"}`
///
/// Violations win over the status; then 5xx is critical, 4xx is a client error
/// and anything else is a runtime error.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultExceptionFactory;

impl ExceptionFactory for DefaultExceptionFactory {
    fn create(&self, status: u16, body: &str) -> SdkError {
        let error: ErrorBody = match serde_json::from_str(body) {
            Ok(error) => error,
            Err(_) => return SdkError::runtime(body, 0, 0),
        };

        let code = error.code.unwrap_or_default();
        let sub_code = error.sub_code.unwrap_or_default();
        let message = error.message.unwrap_or_else(|| body.to_string());

        match error.violations {
            Some(violations) if !violations.is_empty() => {
                SdkError::validation(message, violations)
            }
            _ if (500..600).contains(&status) => SdkError::critical(message, code, sub_code),
            _ if (400..500).contains(&status) => SdkError::client(message, code, sub_code, status),
            _ => SdkError::runtime(message, code, sub_code),
        }
    }
}

/// Entry point for talking to the payments API
#[derive(Clone)]
pub struct ApiManager {
    sdk: SdkManager,
    exceptions: Arc<dyn ExceptionFactory>,
}

impl std::fmt::Debug for ApiManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiManager")
            .field("sdk", &self.sdk)
            .field("exceptions", &"<factory>")
            .finish()
    }
}

impl ApiManager {
    pub fn new(sdk: SdkManager, exceptions: impl ExceptionFactory + 'static) -> Self {
        Self {
            sdk,
            exceptions: Arc::new(exceptions),
        }
    }

    pub fn sdk(&self) -> &SdkManager {
        &self.sdk
    }

    /// Create an entity
    pub async fn create<E: Entity>(&self, api_key: &str, entity: &E) -> Result<Option<E::Output>> {
        self.execute(entity, Action::Create, api_key).await
    }

    /// Delete an entity; the API may answer without a body
    pub async fn delete<E: Entity>(&self, api_key: &str, entity: &E) -> Result<Option<E::Output>> {
        self.execute(entity, Action::Delete, api_key).await
    }

    /// Fetch an entity by id
    pub async fn find<E: Entity>(&self, api_key: &str, id: &str) -> Result<Option<E::Output>> {
        let entity = E::from_attributes(attributes([("id", id)]))?;
        self.execute(&entity, Action::Get, api_key).await
    }

    /// List every entity of a type
    pub async fn find_all<E: Entity>(&self, api_key: &str) -> Result<Vec<E::Output>> {
        self.execute_list(&E::default(), api_key).await
    }

    /// List entities matching criteria
    pub async fn find_by<E: Entity>(
        &self,
        api_key: &str,
        criteria: Map<String, Value>,
    ) -> Result<Vec<E::Output>> {
        let entity = E::from_attributes(criteria)?;
        self.execute_list(&entity, api_key).await
    }

    /// Fetch a single entity identified by criteria
    pub async fn find_one_by<E: Entity>(
        &self,
        api_key: &str,
        criteria: Map<String, Value>,
    ) -> Result<Option<E::Output>> {
        let entity = E::from_attributes(criteria)?;
        self.execute(&entity, Action::Get, api_key).await
    }

    /// Update an entity
    pub async fn update<E: Entity>(&self, api_key: &str, entity: &E) -> Result<Option<E::Output>> {
        self.execute(entity, Action::Update, api_key).await
    }

    /// Repository for an entity type
    pub fn repository<E: Entity>(&self) -> E::Repository {
        <E::Repository as Repository>::new(self.clone())
    }

    async fn execute<E: Entity>(
        &self,
        entity: &E,
        action: Action,
        api_key: &str,
    ) -> Result<Option<E::Output>> {
        self.sdk
            .execute(entity, action, api_key)
            .await
            .map_err(|e| self.map_error(e))
    }

    async fn execute_list<E: Entity>(&self, entity: &E, api_key: &str) -> Result<Vec<E::Output>> {
        self.sdk
            .execute_list(entity, api_key)
            .await
            .map_err(|e| self.map_error(e))
    }

    fn map_error(&self, error: SdkError) -> SdkError {
        match error {
            SdkError::InvalidApiResponse { status, body } => self.exceptions.create(status, &body),
            other => other,
        }
    }
}
