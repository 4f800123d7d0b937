//! The [`Entity`] trait implemented by every resource and request object
//!
//! An entity is a declarative description of a REST resource: the JSON fields it
//! carries, which actions each field is sent for, the URI for each action and the
//! constraints checked before it goes out. The execution engine in [`crate::sdk`]
//! does the rest.

use crate::repository::Repository;
use crate::types::{Action, Group};
use crate::validation::Violations;
use crate::{Result, SdkError};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Serialization groups: JSON field name and the actions it is sent for
pub type FieldGroups = &'static [(&'static str, &'static [Action])];

/// All actions that send a body
pub const WRITE: &[Action] = &[Action::Create, Action::Update, Action::Delete];
/// Every action
pub const ALL: &[Action] = &Action::ALL;
/// Create only
pub const CREATE: &[Action] = &[Action::Create];
/// Create and update
pub const CREATE_UPDATE: &[Action] = &[Action::Create, Action::Update];
/// Everything but delete
pub const CREATE_GET_LIST_UPDATE: &[Action] =
    &[Action::Create, Action::Get, Action::List, Action::Update];

/// A typed record mapping to a REST resource
pub trait Entity: Serialize + DeserializeOwned + Default + Clone + Send + Sync + 'static {
    /// What the API answers with for this entity
    type Output: DeserializeOwned + Send + 'static;

    /// Repository returned by [`ApiManager::repository`](crate::manager::ApiManager::repository)
    type Repository: Repository<Entity = Self>;

    /// Resource name used in logs
    const NAME: &'static str;

    /// Serialization groups
    const FIELDS: FieldGroups;

    /// URI for an action, `None` when the resource does not support it
    fn uri(&self, action: Action) -> Option<String>;

    /// Constraints for a validation group
    fn validate(&self, _group: Group) -> Violations {
        Violations::new()
    }

    /// Build an entity from its JSON field names, e.g. `{"id": "..."}`
    fn from_attributes(attributes: Map<String, Value>) -> Result<Self> {
        Ok(serde_json::from_value(Value::Object(attributes))?)
    }

    /// Whether a field is sent for an action
    fn in_group(field: &str, action: Action) -> bool {
        Self::FIELDS
            .iter()
            .any(|(name, actions)| *name == field && actions.contains(&action))
    }

    /// Group-filtered JSON object for an action, without null fields
    fn payload(&self, action: Action) -> Result<Map<String, Value>> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map
                .into_iter()
                .filter(|(field, value)| !value.is_null() && Self::in_group(field, action))
                .collect()),
            _ => Err(SdkError::config(format!(
                "{} does not serialize to a JSON object",
                Self::NAME
            ))),
        }
    }
}

/// Percent-encode a path parameter; an unset parameter renders empty
pub fn path_segment(value: Option<&str>) -> String {
    utf8_percent_encode(value.unwrap_or_default(), PATH_SEGMENT).to_string()
}

/// Whether a URI contains a `.` or `..` segment, which URL parsing collapses
pub fn has_dot_segment(uri: &str) -> bool {
    uri.split('/').any(|segment| segment == "." || segment == "..")
}

/// Build an attribute map from `(field, value)` pairs
pub fn attributes<I, K, V>(pairs: I) -> Map<String, Value>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
