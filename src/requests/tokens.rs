//! Endpoint token lookups

use crate::entity::{path_segment, Entity, FieldGroups};
use crate::repository::EntityRepository;
use crate::responses::EwalletToken;
use crate::types::{Action, Group};
use crate::validation::Violations;
use serde::{Deserialize, Serialize};

/// Resolve an ewallet endpoint token
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EwalletTokenRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl EwalletTokenRequest {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }
}

impl Entity for EwalletTokenRequest {
    type Output = EwalletToken;
    type Repository = EntityRepository<EwalletTokenRequest>;

    const NAME: &'static str = "ewallet_token_request";
    const FIELDS: FieldGroups = &[("token", &[Action::Get])];

    fn uri(&self, action: Action) -> Option<String> {
        match action {
            Action::Get => Some(format!("/token/{}", path_segment(self.token.as_deref()))),
            _ => None,
        }
    }

    fn validate(&self, group: Group) -> Violations {
        let mut violations = Violations::new();
        if group == Group::Get {
            violations.not_blank("token", self.token.as_deref());
        }
        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ewallet_token_request() {
        let request = EwalletTokenRequest::new("EWT-42");
        assert_eq!(request.uri(Action::Get), Some("/token/EWT-42".to_string()));
        assert_eq!(request.uri(Action::Create), None);
        assert!(request.validate(Group::Get).is_empty());
        assert!(EwalletTokenRequest::default()
            .validate(Group::Get)
            .contains("token"));
    }
}
