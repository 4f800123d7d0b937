//! Payment sources (tokenised bank accounts and credit cards)
//!
//! [`PaymentSource`] is the generic view returned by token lookups and token
//! webhooks. [`BankAccount`] and [`CreditCard`] are the concrete kinds; they share
//! the `/tokens` endpoints and the [`PaymentSourceRepository`].

use crate::entity::{path_segment, Entity, FieldGroups, CREATE, CREATE_UPDATE};
use crate::repository::PaymentSourceRepository;
use crate::types::{Action, Group};
use crate::validation::Violations;
use serde::{Deserialize, Serialize};

pub const BANK_ACCOUNT: &str = "bank_account";
pub const CREDIT_CARD: &str = "credit_card";

fn token_uri(action: Action, token: Option<&str>) -> Option<String> {
    match action {
        Action::Create => Some("/tokens".to_string()),
        Action::Get | Action::Delete => Some(format!("/tokens/{}", path_segment(token))),
        _ => None,
    }
}

fn validate_timestamps(
    violations: &mut Violations,
    created_at: Option<&str>,
    updated_at: Option<&str>,
) {
    violations
        .zulu_datetime("created_at", created_at)
        .zulu_datetime("updated_at", updated_at);
}

/// Owner details attached to a token
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Card expiry, month and year as strings ("12", "2019")
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Expiry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

impl Expiry {
    pub fn new(month: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            month: Some(month.into()),
            year: Some(year.into()),
        }
    }

    pub fn validate(&self) -> Violations {
        let mut violations = Violations::new();
        violations
            .not_blank("month", self.month.as_deref())
            .not_blank("year", self.year.as_deref());
        violations
    }
}

/// Any tokenised payment source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<Expiry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_time: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl PaymentSource {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Self::default()
        }
    }

    pub fn is_bank_account(&self) -> bool {
        self.r#type.as_deref() == Some(BANK_ACCOUNT)
    }

    pub fn is_credit_card(&self) -> bool {
        self.r#type.as_deref() == Some(CREDIT_CARD)
    }
}

impl Entity for PaymentSource {
    type Output = PaymentSource;
    type Repository = PaymentSourceRepository<PaymentSource>;

    const NAME: &'static str = "payment_source";
    const FIELDS: FieldGroups = &[("token", &[Action::Delete])];

    fn uri(&self, action: Action) -> Option<String> {
        match action {
            Action::Create => None,
            _ => token_uri(action, self.token.as_deref()),
        }
    }

    fn validate(&self, group: Group) -> Violations {
        let mut violations = Violations::new();
        match group {
            Group::Get | Group::Delete => {
                violations.not_blank("token", self.token.as_deref());
            }
            Group::Default => validate_timestamps(
                &mut violations,
                self.created_at.as_deref(),
                self.updated_at.as_deref(),
            ),
            _ => {}
        }
        violations
    }
}

/// Tokenised bank account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bsb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_time: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl BankAccount {
    pub fn new(
        name: impl Into<String>,
        bsb: impl Into<String>,
        number: impl Into<String>,
    ) -> Self {
        Self {
            bsb: Some(bsb.into()),
            name: Some(name.into()),
            number: Some(number.into()),
            r#type: Some(BANK_ACCOUNT.to_string()),
            ..Self::default()
        }
    }
}

impl Entity for BankAccount {
    type Output = BankAccount;
    type Repository = PaymentSourceRepository<BankAccount>;

    const NAME: &'static str = "bank_account";
    const FIELDS: FieldGroups = &[
        ("bsb", CREATE_UPDATE),
        ("name", CREATE_UPDATE),
        ("number", CREATE_UPDATE),
        ("token", CREATE_UPDATE),
        ("type", CREATE),
    ];

    fn uri(&self, action: Action) -> Option<String> {
        token_uri(action, self.token.as_deref())
    }

    fn validate(&self, group: Group) -> Violations {
        let mut violations = Violations::new();
        match group {
            Group::Create => {
                violations
                    .not_blank("bsb", self.bsb.as_deref())
                    .not_blank("name", self.name.as_deref())
                    .not_blank("number", self.number.as_deref());
            }
            Group::Get | Group::Delete => {
                violations.not_blank("token", self.token.as_deref());
            }
            Group::Default => validate_timestamps(
                &mut violations,
                self.created_at.as_deref(),
                self.updated_at.as_deref(),
            ),
            _ => {}
        }
        violations
    }
}

/// Tokenised credit card
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreditCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Only ever sent, the API never echoes it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<Expiry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_time: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl CreditCard {
    pub fn new(name: impl Into<String>, number: impl Into<String>, expiry: Expiry) -> Self {
        Self {
            expiry: Some(expiry),
            name: Some(name.into()),
            number: Some(number.into()),
            r#type: Some(CREDIT_CARD.to_string()),
            ..Self::default()
        }
    }
}

impl Entity for CreditCard {
    type Output = CreditCard;
    type Repository = PaymentSourceRepository<CreditCard>;

    const NAME: &'static str = "credit_card";
    const FIELDS: FieldGroups = &[
        ("cvc", CREATE),
        ("expiry", CREATE_UPDATE),
        ("name", CREATE_UPDATE),
        ("number", CREATE),
        ("token", CREATE_UPDATE),
        ("type", CREATE),
    ];

    fn uri(&self, action: Action) -> Option<String> {
        token_uri(action, self.token.as_deref())
    }

    fn validate(&self, group: Group) -> Violations {
        let mut violations = Violations::new();
        match group {
            Group::Create => {
                violations
                    .not_blank("name", self.name.as_deref())
                    .not_blank("number", self.number.as_deref())
                    .not_null("expiry", self.expiry.as_ref());
                if let Some(expiry) = &self.expiry {
                    violations.nested("expiry", expiry.validate());
                }
            }
            Group::Get | Group::Delete => {
                violations.not_blank("token", self.token.as_deref());
            }
            Group::Default => validate_timestamps(
                &mut violations,
                self.created_at.as_deref(),
                self.updated_at.as_deref(),
            ),
            _ => {}
        }
        violations
    }
}
