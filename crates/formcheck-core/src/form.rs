//! Form assembly and serialized form payloads.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::field::Field;
use crate::registry::RuleSet;
use crate::report::ValidationReport;

/// A rule set bundled with the fields it validates.
///
/// Convenience wrapper for hosts that build the form once and validate
/// it on every submit with fresh values.
#[derive(Debug, Default)]
pub struct Form {
    rules: RuleSet,
    fields: Vec<Field>,
}

impl Form {
    /// Creates an empty form backed by the standard rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty form backed by a specific rule set.
    pub fn with_rules(rules: RuleSet) -> Self {
        Self {
            rules,
            fields: Vec::new(),
        }
    }

    /// Adds a field to the form.
    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Replaces the value of the named field, if present.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.name == name) {
            field.value = value.into();
        }
    }

    /// Returns the form's fields.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Validates the current field values.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownRule`](crate::FormError::UnknownRule)
    /// when a field declares an unregistered rule.
    pub fn validate(&self) -> Result<ValidationReport> {
        self.rules.validate(&self.fields)
    }
}

/// Serialized form snapshot, as submitted by hosts.
///
/// The wire shape is the natural JSON encoding of the fields:
///
/// ```json
/// { "fields": [ { "name": "email",
///                 "value": "a@b.com",
///                 "rules": ["required", "email"] } ] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormPayload {
    /// The submitted fields.
    pub fields: Vec<Field>,
}

impl FormPayload {
    /// Parses a payload from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Payload`](crate::FormError::Payload) when
    /// the input is not a valid payload document.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }
}
