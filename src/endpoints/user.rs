//! Users

use crate::entity::{path_segment, Entity, FieldGroups};
use crate::repository::EntityRepository;
use crate::types::{Action, Group};
use crate::validation::Violations;
use serde::{Deserialize, Serialize};

/// A merchant user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl User {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Self::default()
        }
    }
}

impl Entity for User {
    type Output = User;
    type Repository = EntityRepository<User>;

    const NAME: &'static str = "user";
    const FIELDS: FieldGroups = &[];

    fn uri(&self, action: Action) -> Option<String> {
        match action {
            Action::Get => Some(format!("/users/{}", path_segment(self.id.as_deref()))),
            _ => None,
        }
    }

    fn validate(&self, group: Group) -> Violations {
        let mut violations = Violations::new();
        violations.email("email", self.email.as_deref());
        match group {
            Group::Get => {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_uri() {
        let user = User {
            id: Some("U1".to_string()),
            ..User::default()
        };
        assert_eq!(user.uri(Action::Get), Some("/users/U1".to_string()));
        assert_eq!(user.uri(Action::Create), None);
    }

    #[test]
    fn test_user_email_validation() {
        let user = User::new("not-an-email");
        assert!(user.validate(Group::Default).contains("email"));
        assert!(User::new("user@email.test").validate(Group::Default).is_empty());
    }
}
