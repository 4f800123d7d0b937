//! Request actions and validation groups

use reqwest::Method;
use serde::{Deserialize, Serialize};

/// The verbs an entity can take part in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Create,
    Delete,
    Get,
    List,
    Update,
}

impl Action {
    /// All actions, in declaration order
    pub const ALL: [Action; 5] = [
        Action::Create,
        Action::Delete,
        Action::Get,
        Action::List,
        Action::Update,
    ];

    /// HTTP method used for this action
    pub fn method(&self) -> Method {
        match self {
            Action::Create => Method::POST,
            Action::Delete => Method::DELETE,
            Action::Get | Action::List => Method::GET,
            Action::Update => Method::PUT,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Delete => "delete",
            Action::Get => "get",
            Action::List => "list",
            Action::Update => "update",
        }
    }

    /// Whether the action sends a JSON body
    pub fn has_body(&self) -> bool {
        matches!(self, Action::Create | Action::Update | Action::Delete)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation group
///
/// `Default` holds the constraints that apply to any received entity (webhook
/// payloads); the others are checked before the matching action is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    Default,
    Create,
    Delete,
    Get,
    List,
    Update,
}

impl From<Action> for Group {
    fn from(action: Action) -> Self {
        match action {
            Action::Create => Group::Create,
            Action::Delete => Group::Delete,
            Action::Get => Group::Get,
            Action::List => Group::List,
            Action::Update => Group::Update,
        }
    }
}
