//! Field validation rules

use crate::form::field::{FormField, FormState};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

/// `local@domain.tld`: at least one dot-separated label after the domain
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+$",
    )
    .expect("email pattern is a valid regex")
});

/// Tunable validation parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRules {
    /// Minimum number of characters for the first name
    pub first_name_min_len: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            first_name_min_len: 5,
        }
    }
}

/// Field-level validation failures, iterated in field display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSet {
    errors: BTreeMap<FormField, String>,
}

impl ErrorSet {
    /// Create an empty error set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for a field, replacing any previous one
    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Number of fields with an error
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Check if there are no errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Check if a field has an error
    pub fn contains(&self, field: FormField) -> bool {
        self.errors.contains_key(&field)
    }

    /// Get the error message for a field
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(|s| s.as_str())
    }

    /// Iterate over `(field, message)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    /// All messages in field order
    pub fn messages(&self) -> Vec<&str> {
        self.errors.values().map(|s| s.as_str()).collect()
    }

    /// Keep only errors for the given fields
    pub fn restricted_to(&self, fields: &HashSet<FormField>) -> Self {
        Self {
            errors: self
                .errors
                .iter()
                .filter(|(field, _)| fields.contains(field))
                .map(|(field, msg)| (*field, msg.clone()))
                .collect(),
        }
    }
}

/// Check whether a value looks like `local@domain.tld`
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Validate a form state
///
/// Pure: the same state and rules always produce the same error set.
pub fn validate(state: &FormState, rules: &ValidationRules) -> ErrorSet {
    let mut errors = ErrorSet::new();

    for field in FormField::all() {
        if let Some(message) = validate_field(field, state.get(field), rules) {
            errors.insert(field, message);
        }
    }

    errors
}

/// Validate a single field value
pub fn validate_field(field: FormField, value: &str, rules: &ValidationRules) -> Option<String> {
    if value.is_empty() {
        return field
            .is_required()
            .then(|| format!("{} is a required field", field.key()));
    }

    match field {
        FormField::FirstName if value.chars().count() < rules.first_name_min_len => Some(format!(
            "{} must have at least {} characters",
            field.key(),
            rules.first_name_min_len
        )),
        FormField::Email if !is_valid_email(value) => {
            Some(format!("{} must be a valid email address", field.key()))
        }
        _ => None,
    }
}
