//! Typed finders bound to an [`ApiManager`]
//!
//! Every entity names its repository through
//! [`Entity::Repository`](crate::entity::Entity::Repository), so
//! `manager.repository::<E>()` is resolved at compile time. Payment source kinds
//! share [`PaymentSourceRepository`]; everything else uses [`EntityRepository`].
//!
//! ```no_run
//! use eoneopay_sdk::endpoints::CreditCard;
//! use eoneopay_sdk::ApiManagerFactory;
//!
//! # async fn example() -> eoneopay_sdk::Result<()> {
//! let manager = ApiManagerFactory::create("https://api.eoneopay.test")?;
//! let source = manager
//!     .repository::<CreditCard>()
//!     .find_by_token("RPW2NYUJCGHFJ72WTDZ1", "api-key")
//!     .await?;
//! # let _ = source;
//! # Ok(())
//! # }
//! ```

use crate::endpoints::PaymentSource;
use crate::entity::{attributes, Entity};
use crate::manager::ApiManager;
use crate::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::marker::PhantomData;

/// Output type of a repository's entity
pub type OutputOf<R> = <<R as Repository>::Entity as Entity>::Output;

/// Finder operations for one entity type
#[async_trait]
pub trait Repository: Send + Sync + Sized {
    type Entity: Entity;

    /// Bind a repository to a manager
    fn new(manager: ApiManager) -> Self;

    fn manager(&self) -> &ApiManager;

    async fn find(&self, id: &str, api_key: &str) -> Result<Option<OutputOf<Self>>> {
        self.manager().find::<Self::Entity>(api_key, id).await
    }

    async fn find_all(&self, api_key: &str) -> Result<Vec<OutputOf<Self>>> {
        self.manager().find_all::<Self::Entity>(api_key).await
    }

    async fn find_by(
        &self,
        criteria: Map<String, Value>,
        api_key: &str,
    ) -> Result<Vec<OutputOf<Self>>> {
        self.manager().find_by::<Self::Entity>(api_key, criteria).await
    }

    async fn find_one_by(
        &self,
        criteria: Map<String, Value>,
        api_key: &str,
    ) -> Result<Option<OutputOf<Self>>> {
        self.manager()
            .find_one_by::<Self::Entity>(api_key, criteria)
            .await
    }
}

/// Repository with only the generic finders
pub struct EntityRepository<E> {
    manager: ApiManager,
    _entity: PhantomData<fn() -> E>,
}

impl<E> std::fmt::Debug for EntityRepository<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityRepository")
            .field("entity", &std::any::type_name::<E>())
            .finish()
    }
}

impl<E: Entity> Repository for EntityRepository<E> {
    type Entity = E;

    fn new(manager: ApiManager) -> Self {
        Self {
            manager,
            _entity: PhantomData,
        }
    }

    fn manager(&self) -> &ApiManager {
        &self.manager
    }
}

/// Repository shared by payment sources and their kinds
pub struct PaymentSourceRepository<E = PaymentSource> {
    manager: ApiManager,
    _entity: PhantomData<fn() -> E>,
}

impl<E> std::fmt::Debug for PaymentSourceRepository<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentSourceRepository")
            .field("entity", &std::any::type_name::<E>())
            .finish()
    }
}

impl<E: Entity> Repository for PaymentSourceRepository<E> {
    type Entity = E;

    fn new(manager: ApiManager) -> Self {
        Self {
            manager,
            _entity: PhantomData,
        }
    }

    fn manager(&self) -> &ApiManager {
        &self.manager
    }
}

impl<E: Entity> PaymentSourceRepository<E> {
    /// Look up any payment source by its token
    pub async fn find_by_token(&self, token: &str, api_key: &str) -> Result<Option<PaymentSource>> {
        self.manager
            .find_one_by::<PaymentSource>(api_key, attributes([("token", token)]))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::{BankAccount, User, Webhook};
    use crate::ApiManagerFactory;
    use mockito::Server;
    use serde_json::json;

    #[tokio::test]
    async fn test_find_by_token() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/tokens/RPW2NYUJCGHFJ72WTDZ1")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "token": "RPW2NYUJCGHFJ72WTDZ1",
                    "type": "bank_account",
                    "pan": "123-456...4321"
                })
                .to_string(),
            )
            .create();

        let manager = ApiManagerFactory::create(&server.url()).unwrap();
        let source = manager
            .repository::<BankAccount>()
            .find_by_token("RPW2NYUJCGHFJ72WTDZ1", "api-key")
            .await
            .unwrap()
            .unwrap();

        mock.assert();
        assert!(source.is_bank_account());
        assert_eq!(source.pan.as_deref(), Some("123-456...4321"));
    }

    #[tokio::test]
    async fn test_entity_repository_find() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/users/U-1")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"id": "U-1", "email": "user@email.test"}).to_string())
            .create();

        let manager = ApiManagerFactory::create(&server.url()).unwrap();
        let user = manager
            .repository::<User>()
            .find("U-1", "api-key")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(user.email.as_deref(), Some("user@email.test"));
    }

    #[tokio::test]
    async fn test_entity_repository_find_all() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/webhooks")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!([{"id": "6NC2WWP", "url": "http://sdktest.local"}]).to_string())
            .create();

        let manager = ApiManagerFactory::create(&server.url()).unwrap();
        let webhooks = manager
            .repository::<Webhook>()
            .find_all("api-key")
            .await
            .unwrap();

        assert_eq!(webhooks.len(), 1);
        assert_eq!(webhooks[0].id.as_deref(), Some("6NC2WWP"));
    }
}
