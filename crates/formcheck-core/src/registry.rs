//! Rule registry and the validation entry point.

use std::collections::HashMap;

use crate::error::{FormError, Result};
use crate::field::Field;
use crate::report::{FieldOutcome, ValidationReport};
use crate::rules::{
    Alphanum, CardNumber, Cvc, Email, ExpiryDate, Phone, Postal, Required, Rule,
};

/// Registry mapping rule identifiers to rule implementations.
///
/// Rules are registered once, up front; validation itself never
/// mutates the set. Identifiers are the strings hosts put in field
/// metadata, so the camel-cased `expDate` is kept as-is.
pub struct RuleSet {
    rules: HashMap<String, Box<dyn Rule>>,
}

impl RuleSet {
    /// Creates an empty rule set.
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Creates a rule set with the standard rules registered:
    /// `required`, `phone`, `email`, `postal`, `cc`, `cvc`, `expDate`,
    /// and `alphanum`.
    pub fn standard() -> Self {
        let mut set = Self::empty();
        set.register("required", Required::new());
        set.register("phone", Phone::new());
        set.register("email", Email::new());
        set.register("postal", Postal::new());
        set.register("cc", CardNumber::new());
        set.register("cvc", Cvc::new());
        set.register("expDate", ExpiryDate::new());
        set.register("alphanum", Alphanum::new());
        set
    }

    /// Registers a rule under an identifier, replacing any previous
    /// rule with the same name.
    pub fn register(&mut self, name: impl Into<String>, rule: impl Rule + 'static) {
        self.rules.insert(name.into(), Box::new(rule));
    }

    /// Builder-style [`register`](Self::register).
    #[must_use]
    pub fn with_rule(mut self, name: impl Into<String>, rule: impl Rule + 'static) -> Self {
        self.register(name, rule);
        self
    }

    /// Returns the rule registered under an identifier.
    pub fn get(&self, name: &str) -> Option<&dyn Rule> {
        self.rules.get(name).map(|rule| rule.as_ref())
    }

    /// Returns whether an identifier is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Returns the registered identifiers, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Validates a snapshot of fields against this rule set.
    ///
    /// Each field's declared rules are evaluated in declaration order
    /// and every failure is recorded, so the report carries full
    /// diagnostics; the boolean outcome is the same as short-circuit
    /// evaluation would produce. Failing fields are a normal result.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownRule`] as soon as a field declares
    /// an identifier with no registered rule. A typo in field metadata
    /// is a configuration bug, not a failed validation.
    pub fn validate(&self, fields: &[Field]) -> Result<ValidationReport> {
        let mut report = ValidationReport::new();

        for field in fields {
            let mut outcome = FieldOutcome::passing();
            for name in &field.rules {
                let rule = self.rules.get(name).ok_or_else(|| FormError::UnknownRule {
                    field: field.name.clone(),
                    rule: name.clone(),
                })?;
                if let Err(message) = rule.check(&field.value) {
                    outcome.fail(name, message);
                }
            }
            report.insert(field.name.clone(), outcome);
        }

        Ok(report)
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleSet")
            .field("rules", &self.names())
            .finish()
    }
}
