//! Core types shared by entities and the execution engine
//!
//! - [`action`] - request actions ([`Action`]) and validation groups ([`Group`])
//! - [`config`] - client configuration ([`ClientConfig`])
//!
//! ```
//! use eoneopay_sdk::types::{Action, ClientConfig, Group};
//! use std::time::Duration;
//!
//! # fn example() -> eoneopay_sdk::Result<()> {
//! let config = ClientConfig::new("https://api.eoneopay.test")
//!     .with_timeout(Duration::from_secs(10));
//! config.validate()?;
//!
//! assert_eq!(Group::from(Action::Create), Group::Create);
//! # Ok(())
//! # }
//! ```

pub mod action;
pub mod config;

pub use action::{Action, Group};
pub use config::{ClientConfig, API_KEY_ENV, BASE_URI_ENV, DEFAULT_TIMEOUT, TIMEOUT_ENV};
