//! Ewallets

use super::User;
use crate::entity::{path_segment, Entity, FieldGroups, CREATE_GET_LIST_UPDATE};
use crate::repository::EntityRepository;
use crate::types::{Action, Group};
use crate::validation::Violations;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A stored-value wallet owned by a user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ewallet {
    /// Balance breakdown keyed by balance name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balances: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl Ewallet {
    pub fn new(currency: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            currency: Some(currency.into()),
            reference: Some(reference.into()),
            ..Self::default()
        }
    }
}

impl Entity for Ewallet {
    type Output = Ewallet;
    type Repository = EntityRepository<Ewallet>;

    const NAME: &'static str = "ewallet";
    const FIELDS: FieldGroups = &[
        ("balances", CREATE_GET_LIST_UPDATE),
        ("currency", CREATE_GET_LIST_UPDATE),
        ("id", CREATE_GET_LIST_UPDATE),
        ("pan", CREATE_GET_LIST_UPDATE),
        ("primary", CREATE_GET_LIST_UPDATE),
        ("reference", CREATE_GET_LIST_UPDATE),
        ("type", CREATE_GET_LIST_UPDATE),
        ("user", CREATE_GET_LIST_UPDATE),
    ];

    fn uri(&self, action: Action) -> Option<String> {
        match action {
            Action::Create | Action::List => Some("/ewallets".to_string()),
            Action::Get => Some(format!("/ewallets/{}", path_segment(self.id.as_deref()))),
            _ => None,
        }
    }

    fn validate(&self, group: Group) -> Violations {
        let mut violations = Violations::new();
        match group {
            Group::Create => {
                violations.currency("currency", self.currency.as_deref());
            }
            Group::Get => {
                violations.not_blank("id", self.id.as_deref());
            }
            _ => {}
        }
        violations
    }
}
