//! REST resources of the payments API
//!
//! Each type here is an [`Entity`](crate::entity::Entity): the API answers with the
//! same type that is sent.
//!
//! - [`User`] - merchant users
//! - [`Ewallet`] - stored-value wallets
//! - [`PaymentSource`], [`BankAccount`], [`CreditCard`] - tokenised payment sources
//! - [`Transaction`] with its [`Allocation`] and [`Record`]s
//! - [`Webhook`] - callback subscriptions

pub mod ewallet;
pub mod payment_source;
pub mod transaction;
pub mod user;
pub mod webhook;

pub use ewallet::Ewallet;
pub use payment_source::{BankAccount, CreditCard, Customer, Expiry, PaymentSource};
pub use transaction::{Allocation, Record, Transaction};
pub use user::User;
pub use webhook::Webhook;
