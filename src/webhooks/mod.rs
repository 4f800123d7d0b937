//! Inbound webhook parsing
//!
//! The payments service calls merchant endpoints with JSON representations of
//! entities (tokens added or revoked, transaction updates). [`Parser`] turns such
//! a body into the typed entity and checks it against the entity's
//! [`Group::Default`] constraints.
//!
//! ```
//! use eoneopay_sdk::endpoints::PaymentSource;
//! use eoneopay_sdk::webhooks::Parser;
//!
//! # fn example() -> eoneopay_sdk::Result<()> {
//! let source: PaymentSource = Parser::new().parse(r#"{"token": "RPW2NYUJCGHFJ72WTDZ1", "type": "bank_account"}"#)?;
//! assert!(source.is_bank_account());
//! # Ok(())
//! # }
//! ```

use crate::entity::Entity;
use crate::types::Group;
use crate::{Result, SdkError};
use std::path::Path;

/// Webhook body parser
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser;

impl Parser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a JSON document into a validated entity
    pub fn parse<E: Entity>(&self, json: &str) -> Result<E> {
        self.parse_slice(json.as_bytes())
    }

    /// Parse the body of an inbound HTTP request
    pub fn parse_request<E: Entity, B: AsRef<[u8]>>(&self, request: &http::Request<B>) -> Result<E> {
        tracing::debug!(
            "Parsing {} webhook {} {}",
            E::NAME,
            request.method(),
            request.uri()
        );
        self.parse_slice(request.body().as_ref())
    }

    /// Parse a webhook body stored on disk
    pub fn parse_file<E: Entity>(&self, path: impl AsRef<Path>) -> Result<E> {
        let body = std::fs::read(path)?;
        self.parse_slice(&body)
    }

    fn parse_slice<E: Entity>(&self, body: &[u8]) -> Result<E> {
        let entity: E = serde_json::from_slice(body)?;

        let violations = entity.validate(Group::Default);
        if !violations.is_empty() {
            tracing::warn!("{} webhook failed validation: {}", E::NAME, violations);
            return Err(SdkError::webhook_validation(violations));
        }

        Ok(entity)
    }
}
