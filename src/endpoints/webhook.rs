//! Webhook subscriptions

use super::User;
use crate::entity::{path_segment, Entity, FieldGroups, CREATE_UPDATE};
use crate::repository::EntityRepository;
use crate::types::{Action, Group};
use crate::validation::Violations;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A URL the payments service calls back, with extra headers to send
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Webhook {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl Webhook {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Add a header sent with every callback
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl Entity for Webhook {
    type Output = Webhook;
    type Repository = EntityRepository<Webhook>;

    const NAME: &'static str = "webhook";
    const FIELDS: FieldGroups = &[("headers", CREATE_UPDATE), ("url", CREATE_UPDATE)];

    fn uri(&self, action: Action) -> Option<String> {
        match action {
            Action::Create | Action::List => Some("/webhooks".to_string()),
            Action::Update | Action::Delete => {
                Some(format!("/webhooks/{}", path_segment(self.id.as_deref())))
            }
            Action::Get => None,
        }
    }

    fn validate(&self, group: Group) -> Violations {
        let mut violations = Violations::new();
        match group {
            Group::Create => {
                violations
                    .not_blank("url", self.url.as_deref())
                    .url("url", self.url.as_deref());
            }
            Group::Update => {
                violations
                    .not_blank("id", self.id.as_deref())
                    .not_blank("url", self.url.as_deref())
                    .url("url", self.url.as_deref());
            }
            Group::Delete => {
                violations.not_blank("id", self.id.as_deref());
            }
            Group::Default => {
                violations
                    .zulu_datetime("created_at", self.created_at.as_deref())
                    .zulu_datetime("updated_at", self.updated_at.as_deref());
            }
            _ => {}
        }
        violations
    }
}
