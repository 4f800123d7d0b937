//! # EoneoPay SDK
//!
//! A typed Rust client for the EoneoPay payments gateway REST API.
//!
//! ## Features
//!
//! - **Entities**: users, ewallets, tokenised payment sources, transactions and webhooks
//! - **Requests**: card authorisation, capture and retrieval, ewallet token lookups
//! - **Validation**: field constraints checked before anything is sent
//! - **Repositories**: typed finders resolved per entity at compile time
//! - **Webhooks**: parse and validate inbound webhook bodies
//! - **Typed errors**: API failures mapped to critical, client, runtime and validation errors
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use eoneopay_sdk::endpoints::Webhook;
//! use eoneopay_sdk::ApiManagerFactory;
//!
//! #[tokio::main]
//! async fn main() -> eoneopay_sdk::Result<()> {
//!     let manager = ApiManagerFactory::create("https://api.eoneopay.test")?;
//!
//!     let webhook = Webhook::new("https://merchant.test/hooks/eoneopay")
//!         .with_header("x-merchant-key", "secret");
//!     let created = manager.create("api-key", &webhook).await?;
//!     println!("created webhook: {:?}", created.and_then(|w| w.id));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **`entity`**: the [`Entity`] trait every resource and request implements
//! - **`endpoints`**: REST resources
//! - **`requests`** / **`responses`**: request objects and what the API answers them with
//! - **`sdk`**: the HTTP execution engine
//! - **`manager`**: [`ApiManager`] and API error mapping
//! - **`repository`**: typed finders
//! - **`factory`**: [`ApiManagerFactory`]
//! - **`webhooks`**: inbound webhook [`Parser`](webhooks::Parser)
//! - **`validation`**: constraint helpers and [`Violations`](validation::Violations)
//! - **`types`**: actions, validation groups and client configuration
//! - **`error`**: [`SdkError`] and [`Result`]

pub mod endpoints;
pub mod entity;
pub mod error;
pub mod factory;
pub mod manager;
pub mod repository;
pub mod requests;
pub mod responses;
pub mod sdk;
pub mod types;
pub mod validation;
pub mod webhooks;

// Re-exports for convenience
pub use entity::Entity;
pub use error::{Result, SdkError};
pub use factory::ApiManagerFactory;
pub use manager::{ApiManager, DefaultExceptionFactory, ExceptionFactory};
pub use repository::{EntityRepository, PaymentSourceRepository, Repository};
pub use types::*;

/// Current version of the SDK
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
