//! Transactions and their allocations

use super::{Ewallet, PaymentSource, User};
use crate::entity::{path_segment, Entity, FieldGroups, CREATE, CREATE_UPDATE, WRITE};
use crate::repository::EntityRepository;
use crate::types::{Action, Group};
use crate::validation::Violations;
use serde::{Deserialize, Serialize};

/// One leg of an allocation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ewallet: Option<Ewallet>,
}

/// How the transaction amount is spread over ewallets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Allocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ewallet: Option<Ewallet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<Vec<Record>>,
}

impl Allocation {
    /// Allocate the whole amount to one ewallet
    pub fn to_ewallet(amount: impl Into<String>, ewallet: Ewallet) -> Self {
        Self {
            amount: Some(amount.into()),
            ewallet: Some(ewallet),
            records: None,
        }
    }
}

/// A payment transaction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation: Option<Allocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Remitter name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_transaction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_source: Option<PaymentSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl Transaction {
    pub fn new(
        action: impl Into<String>,
        id: impl Into<String>,
        secondary_id: impl Into<String>,
    ) -> Self {
        Self {
            action: Some(action.into()),
            id: Some(id.into()),
            secondary_id: Some(secondary_id.into()),
            ..Self::default()
        }
    }

    pub fn is_approved(&self) -> bool {
        self.approved.unwrap_or(false)
    }
}

impl Entity for Transaction {
    type Output = Transaction;
    type Repository = EntityRepository<Transaction>;

    const NAME: &'static str = "transaction";
    const FIELDS: FieldGroups = &[
        ("action", WRITE),
        ("allocation", CREATE),
        ("amount", CREATE),
        ("currency", CREATE),
        ("id", WRITE),
        ("name", CREATE_UPDATE),
        ("parent_transaction_id", CREATE_UPDATE),
        ("payment_source", CREATE),
        ("reference", CREATE),
        ("secondary_id", WRITE),
        ("security_id", WRITE),
        ("statement_description", WRITE),
    ];

    fn uri(&self, action: Action) -> Option<String> {
        match action {
            Action::List => None,
            _ => Some(format!(
                "/transactions/{}",
                path_segment(self.id.as_deref())
            )),
        }
    }

    fn validate(&self, group: Group) -> Violations {
        let mut violations = Violations::new();
        match group {
            Group::Create => {
                violations
                    .not_blank("action", self.action.as_deref())
                    .not_blank("id", self.id.as_deref())
                    .not_blank("secondary_id", self.secondary_id.as_deref())
                    .amount("amount", self.amount.as_deref())
                    .currency("currency", self.currency.as_deref());
            }
            Group::Update | Group::Delete => {
                violations
                    .not_blank("id", self.id.as_deref())
                    .not_blank("secondary_id", self.secondary_id.as_deref());
            }
            Group::Get => {
                violations.not_blank("id", self.id.as_deref());
            }
            Group::Default => {
                violations
                    .not_null("action", self.action.as_ref())
                    .not_null("allocation", self.allocation.as_ref())
                    .not_null("amount", self.amount.as_ref())
                    .zulu_datetime("completed_at", self.completed_at.as_deref())
                    .zulu_datetime("created_at", self.created_at.as_deref())
                    .zulu_datetime("updated_at", self.updated_at.as_deref());
            }
            Group::List => {}
        }
        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{NOT_BLANK, NOT_PROVIDED};

    #[test]
    fn test_transaction_uris() {
        let transaction = Transaction::new("credit", "TX-1", "SEC-1");
        assert_eq!(
            transaction.uri(Action::Create),
            Some("/transactions/TX-1".to_string())
        );
        assert_eq!(
            transaction.uri(Action::Update),
            Some("/transactions/TX-1".to_string())
        );
        assert_eq!(transaction.uri(Action::List), None);
    }

    #[test]
    fn test_transaction_payload_groups() {
        let mut transaction = Transaction::new("credit", "TX-1", "SEC-1");
        transaction.amount = Some("10.00".to_string());
        transaction.status = Some("completed".to_string());
        transaction.name = Some("Remitter".to_string());

        let create = transaction.payload(Action::Create).unwrap();
        assert_eq!(create["amount"], "10.00");
        assert!(!create.contains_key("status"));

        let delete = transaction.payload(Action::Delete).unwrap();
        assert_eq!(delete["id"], "TX-1");
        assert!(!delete.contains_key("amount"));
        assert!(!delete.contains_key("name"));
    }

    #[test]
    fn test_transaction_create_validation() {
        let violations = Transaction::default().validate(Group::Create);
        assert_eq!(violations.get("action"), Some(&[NOT_BLANK.to_string()][..]));
        assert!(violations.contains("id"));
        assert!(violations.contains("secondary_id"));

        let mut transaction = Transaction::new("credit", "TX-1", "SEC-1");
        transaction.amount = Some("10.00".to_string());
        transaction.currency = Some("AUD".to_string());
        assert!(transaction.validate(Group::Create).is_empty());
    }

    #[test]
    fn test_transaction_default_group_requires_values() {
        let violations = Transaction::default().validate(Group::Default);

        assert_eq!(violations.len(), 3);
        for field in ["action", "allocation", "amount"] {
            assert_eq!(violations.get(field), Some(&[NOT_PROVIDED.to_string()][..]));
        }
    }

    #[test]
    fn test_allocation_records() {
        let json = serde_json::json!({
            "amount": "10.00",
            "records": [
                {"amount": "4.00", "ewallet": {"reference": "w1"}},
                {"amount": "6.00", "ewallet": {"reference": "w2"}}
            ]
        });
        let allocation: Allocation = serde_json::from_value(json).unwrap();
        let records = allocation.records.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(
            records[1].ewallet.as_ref().and_then(|e| e.reference.as_deref()),
            Some("w2")
        );
    }
}
