//! Field constraints and violation collection
//!
//! Entities describe their rules per [`Group`](crate::types::Group) by running the
//! constraint methods of [`Violations`] over their fields. An empty [`Violations`]
//! means the entity is valid for that group.
//!
//! ```
//! use eoneopay_sdk::validation::Violations;
//!
//! let mut violations = Violations::new();
//! violations
//!     .not_blank("id", None)
//!     .currency("currency", Some("AUDS"));
//!
//! assert_eq!(violations.get("id"), Some(&["This value should not be blank.".to_string()][..]));
//! assert!(violations.contains("currency"));
//! ```

pub mod currency;

#[cfg(test)]
mod tests;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use url::Url;
use validator::{ValidateEmail, ValidateUrl};

pub const NOT_BLANK: &str = "This value should not be blank.";
pub const NOT_PROVIDED: &str = "A value was not provided.";
pub const INVALID_CURRENCY: &str = "This value is not a valid currency.";
pub const INVALID_EMAIL: &str = "This value is not a valid email address.";
pub const INVALID_URL: &str = "This value is not a valid URL.";
pub const INVALID_AMOUNT: &str = "This value should be a positive amount.";
pub const INVALID_DATETIME: &str = "This value is not a valid datetime.";

/// Zulu datetime format used by the API, e.g. `2019-07-31T06:08:07Z`
pub const ZULU_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Field path to messages, e.g. `{"gateway.line_of_business": ["This value should not be blank."]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Violations(BTreeMap<String, Vec<String>>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against a field
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.0.entry(field.into()).or_default().push(message.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with at least one violation
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.0.iter()
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.0
    }

    /// Merge violations of a nested object under `prefix.`
    pub fn nested(&mut self, prefix: &str, nested: Violations) -> &mut Self {
        for (field, messages) in nested.0 {
            let path = format!("{}.{}", prefix, field);
            self.0.entry(path).or_default().extend(messages);
        }
        self
    }

    /// Fail on `None`, empty or whitespace-only strings
    pub fn not_blank(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        if value.map_or(true, |v| v.trim().is_empty()) {
            self.add(field, NOT_BLANK);
        }
        self
    }

    /// Fail on a missing value
    pub fn not_null<T>(&mut self, field: &str, value: Option<&T>) -> &mut Self {
        if value.is_none() {
            self.add(field, NOT_PROVIDED);
        }
        self
    }

    /// Check an ISO 4217 currency code, skipped when unset
    pub fn currency(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        if let Some(code) = value {
            if !currency::is_valid(code) {
                self.add(field, INVALID_CURRENCY);
            }
        }
        self
    }

    pub fn email(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        if let Some(email) = value {
            if !email.validate_email() {
                self.add(field, INVALID_EMAIL);
            }
        }
        self
    }

    /// Absolute http or https URL, skipped when unset
    pub fn url(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        if let Some(url) = value {
            let web = Url::parse(url)
                .map(|parsed| matches!(parsed.scheme(), "http" | "https"))
                .unwrap_or(false);
            if !web || !url.validate_url() {
                self.add(field, INVALID_URL);
            }
        }
        self
    }

    /// Amounts travel as decimal strings ("10.00") and must be greater than zero
    pub fn amount(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        if let Some(amount) = value {
            let valid = Decimal::from_str(amount.trim())
                .map(|d| d > Decimal::ZERO)
                .unwrap_or(false);
            if !valid {
                self.add(field, INVALID_AMOUNT);
            }
        }
        self
    }

    /// Check a [`ZULU_FORMAT`] datetime, skipped when unset
    pub fn zulu_datetime(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        if let Some(datetime) = value {
            if NaiveDateTime::parse_from_str(datetime, ZULU_FORMAT).is_err() {
                self.add(field, INVALID_DATETIME);
            }
        }
        self
    }
}

impl IntoIterator for Violations {
    type Item = (String, Vec<String>);
    type IntoIter = std::collections::btree_map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl std::fmt::Display for Violations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(field, messages)| format!("{}: {}", field, messages.join(" ")))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}
