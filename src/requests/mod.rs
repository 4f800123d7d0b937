//! Request objects
//!
//! Requests are entities whose answer is a separate response type from
//! [`crate::responses`].

pub mod payloads;
pub mod tokens;
pub mod transactions;

pub use payloads::{BankAccountPayload, CardSource, CreditCardPayload, Gateway, TokenPayload};
pub use tokens::EwalletTokenRequest;
pub use transactions::{AuthoriseRequest, RetrieveRequest};

use uuid::Uuid;

/// Unique client-side order id, e.g. `ORDER-1b4e28ba2fa1411b8a5e3b1c2d3e4f50`
pub fn generate_id(prefix: &str) -> String {
    format!("{}{}", prefix, Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id() {
        let first = generate_id("ORDER-");
        let second = generate_id("ORDER-");

        assert!(first.starts_with("ORDER-"));
        assert_eq!(first.len(), "ORDER-".len() + 32);
        assert_ne!(first, second);
        assert_eq!(generate_id("").len(), 32);
    }
}
