//! Credit card transaction requests

use super::payloads::{CardSource, Gateway};
use crate::entity::{path_segment, Entity, FieldGroups, CREATE_UPDATE};
use crate::repository::EntityRepository;
use crate::responses::TransactionResponse;
use crate::types::{Action, Group};
use crate::validation::Violations;
use serde::{Deserialize, Serialize};

/// Authorise a card payment (create) and capture it later (update)
///
/// ```
/// use eoneopay_sdk::endpoints::Expiry;
/// use eoneopay_sdk::requests::{AuthoriseRequest, CreditCardPayload, Gateway};
///
/// let authorise = AuthoriseRequest::new("ORDER-1", "10", "AUD", "julian test")
///     .with_gateway(Gateway::new("default", "eWallet"))
///     .with_card(CreditCardPayload::new(
///         "Julian",
///         "5123450000000008",
///         "123",
///         Expiry::new("12", "2019"),
///     ));
///
/// let capture = AuthoriseRequest::capture_of("ORDER-1", "ORDER-2", "10", "AUD", "julian test")
///     .with_gateway(Gateway::new("default", "eWallet"));
/// # let _ = (authorise, capture);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoriseRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card: Option<CardSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<Gateway>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Id of the authorisation being captured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl AuthoriseRequest {
    pub fn new(
        id: impl Into<String>,
        amount: impl Into<String>,
        currency: impl Into<String>,
        reference: impl Into<String>,
    ) -> Self {
        Self {
            amount: Some(amount.into()),
            currency: Some(currency.into()),
            id: Some(id.into()),
            reference: Some(reference.into()),
            ..Self::default()
        }
    }

    /// Capture request for an earlier authorisation
    pub fn capture_of(
        original_id: impl Into<String>,
        id: impl Into<String>,
        amount: impl Into<String>,
        currency: impl Into<String>,
        reference: impl Into<String>,
    ) -> Self {
        Self {
            original_id: Some(original_id.into()),
            ..Self::new(id, amount, currency, reference)
        }
    }

    pub fn with_card(mut self, card: impl Into<CardSource>) -> Self {
        self.credit_card = Some(card.into());
        self
    }

    pub fn with_gateway(mut self, gateway: Gateway) -> Self {
        self.gateway = Some(gateway);
        self
    }

    fn validate_common(&self, violations: &mut Violations) {
        violations
            .not_blank("amount", self.amount.as_deref())
            .amount("amount", self.amount.as_deref())
            .not_blank("currency", self.currency.as_deref())
            .currency("currency", self.currency.as_deref())
            .not_null("gateway", self.gateway.as_ref())
            .not_blank("id", self.id.as_deref());
        if let Some(gateway) = &self.gateway {
            violations.nested("gateway", gateway.validate());
        }
        if let Some(card) = &self.credit_card {
            violations.nested("credit_card", card.validate());
        }
    }
}

impl Entity for AuthoriseRequest {
    type Output = TransactionResponse;
    type Repository = EntityRepository<AuthoriseRequest>;

    const NAME: &'static str = "authorise_request";
    const FIELDS: FieldGroups = &[
        ("amount", CREATE_UPDATE),
        ("credit_card", CREATE_UPDATE),
        ("currency", CREATE_UPDATE),
        ("gateway", CREATE_UPDATE),
        ("id", CREATE_UPDATE),
        ("original_id", &[Action::Update]),
        ("reference", CREATE_UPDATE),
    ];

    fn uri(&self, action: Action) -> Option<String> {
        match action {
            Action::Create => Some(format!(
                "/orders/{}/authorise",
                path_segment(self.id.as_deref())
            )),
            Action::Update => Some(format!(
                "/orders/{}/capture",
                path_segment(self.original_id.as_deref())
            )),
            _ => None,
        }
    }

    fn validate(&self, group: Group) -> Violations {
        let mut violations = Violations::new();
        match group {
            Group::Create => {
                violations.not_null("credit_card", self.credit_card.as_ref());
                self.validate_common(&mut violations);
            }
            Group::Update => {
                violations.not_blank("original_id", self.original_id.as_deref());
                self.validate_common(&mut violations);
            }
            _ => {}
        }
        violations
    }
}

/// Look up a transaction by id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrieveRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl RetrieveRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
        }
    }
}

impl Entity for RetrieveRequest {
    type Output = TransactionResponse;
    type Repository = EntityRepository<RetrieveRequest>;

    const NAME: &'static str = "retrieve_request";
    const FIELDS: FieldGroups = &[];

    fn uri(&self, action: Action) -> Option<String> {
        match action {
            Action::Get => Some(format!("/orders/{}", path_segment(self.id.as_deref()))),
            _ => None,
        }
    }

    fn validate(&self, group: Group) -> Violations {
        let mut violations = Violations::new();
        if group == Group::Get {
            violations.not_blank("id", self.id.as_deref());
        }
        violations
    }
}
