//! Field descriptors.

use serde::{Deserialize, Serialize};

/// One form input together with its declared validation rules and
/// current value.
///
/// Rule identifiers are evaluated in declaration order. A field with no
/// declared rules is always valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field name, used to key the validation report.
    pub name: String,
    /// Current text value. Empty string means "no input".
    #[serde(default)]
    pub value: String,
    /// Declared rule identifiers, in order.
    #[serde(default)]
    pub rules: Vec<String>,
}

impl Field {
    /// Creates a new field with no value and no rules.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: String::new(),
            rules: Vec::new(),
        }
    }

    /// Sets the current value.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Appends one rule identifier.
    #[must_use]
    pub fn rule(mut self, rule: impl Into<String>) -> Self {
        self.rules.push(rule.into());
        self
    }

    /// Appends several rule identifiers.
    #[must_use]
    pub fn rules<I, S>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rules.extend(rules.into_iter().map(Into::into));
        self
    }

    /// Appends the rules declared in a space-separated attribute string,
    /// the encoding used by host markup (e.g. `"required email"`).
    #[must_use]
    pub fn rule_attr(mut self, attr: &str) -> Self {
        self.rules.extend(attr.split_whitespace().map(String::from));
        self
    }
}
