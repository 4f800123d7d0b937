//! Nested payload objects sent inside requests

use crate::endpoints::Expiry;
use crate::validation::Violations;
use serde::{Deserialize, Serialize};

/// Raw card details
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreditCardPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<Expiry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
}

impl CreditCardPayload {
    pub fn new(
        name: impl Into<String>,
        number: impl Into<String>,
        cvc: impl Into<String>,
        expiry: Expiry,
    ) -> Self {
        Self {
            cvc: Some(cvc.into()),
            expiry: Some(expiry),
            name: Some(name.into()),
            number: Some(number.into()),
        }
    }

    pub fn validate(&self) -> Violations {
        let mut violations = Violations::new();
        violations
            .not_blank("name", self.name.as_deref())
            .not_blank("number", self.number.as_deref())
            .not_null("expiry", self.expiry.as_ref());
        if let Some(expiry) = &self.expiry {
            violations.nested("expiry", expiry.validate());
        }
        violations
    }
}

/// Bank account details sent when creating or tokenising an account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankAccountPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bsb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Token of an existing account, never sent when tokenising
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl BankAccountPayload {
    pub fn new(
        name: impl Into<String>,
        bsb: impl Into<String>,
        number: impl Into<String>,
    ) -> Self {
        Self {
            bsb: Some(bsb.into()),
            name: Some(name.into()),
            number: Some(number.into()),
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Copy without the token, as sent to the tokenise endpoint
    pub fn for_tokenise(&self) -> Self {
        Self {
            token: None,
            ..self.clone()
        }
    }

    pub fn validate(&self) -> Violations {
        let mut violations = Violations::new();
        violations
            .not_blank("bsb", self.bsb.as_deref())
            .not_blank("name", self.name.as_deref())
            .not_blank("number", self.number.as_deref());
        violations
    }
}

/// A previously tokenised card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPayload {
    pub token: String,
}

impl TokenPayload {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

/// Card to charge: raw details or a token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CardSource {
    Token(TokenPayload),
    Card(CreditCardPayload),
}

impl CardSource {
    pub fn validate(&self) -> Violations {
        match self {
            CardSource::Card(card) => card.validate(),
            CardSource::Token(token) => {
                let mut violations = Violations::new();
                violations.not_blank("token", Some(token.token.as_str()));
                violations
            }
        }
    }
}

impl From<CreditCardPayload> for CardSource {
    fn from(card: CreditCardPayload) -> Self {
        CardSource::Card(card)
    }
}

impl From<TokenPayload> for CardSource {
    fn from(token: TokenPayload) -> Self {
        CardSource::Token(token)
    }
}

/// Gateway routing for a transaction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gateway {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_of_business: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
}

impl Gateway {
    pub fn new(service: impl Into<String>, line_of_business: impl Into<String>) -> Self {
        Self {
            line_of_business: Some(line_of_business.into()),
            service: Some(service.into()),
        }
    }

    pub fn validate(&self) -> Violations {
        let mut violations = Violations::new();
        violations
            .not_blank("line_of_business", self.line_of_business.as_deref())
            .not_blank("service", self.service.as_deref());
        violations
    }
}
