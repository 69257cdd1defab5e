//! Validation outcome types.

use std::collections::HashMap;

use serde::Serialize;

/// One failed rule on a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleFailure {
    /// The rule identifier that failed.
    pub rule: String,
    /// The failure message the rule produced.
    pub message: String,
}

/// Validation outcome for a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldOutcome {
    /// Whether every declared rule passed.
    pub valid: bool,
    /// The rules that failed, in declaration order.
    pub failures: Vec<RuleFailure>,
}

impl FieldOutcome {
    /// Creates a passing outcome with no failures.
    pub fn passing() -> Self {
        Self {
            valid: true,
            failures: Vec::new(),
        }
    }

    /// Records a failed rule.
    pub fn fail(&mut self, rule: impl Into<String>, message: impl Into<String>) {
        self.valid = false;
        self.failures.push(RuleFailure {
            rule: rule.into(),
            message: message.into(),
        });
    }
}

/// Result of validating a set of fields.
///
/// The overall flag is the conjunction of the per-field flags. The
/// report is a plain value: recomputed in full on every validation
/// call, comparable for equality, and serializable for hosts that
/// render it elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Whether every field passed.
    pub valid: bool,
    /// Per-field outcomes, keyed by field name.
    pub fields: HashMap<String, FieldOutcome>,
}

impl ValidationReport {
    /// Creates an empty report. A form with no fields is valid.
    pub fn new() -> Self {
        Self {
            valid: true,
            fields: HashMap::new(),
        }
    }

    /// Records a field outcome, folding it into the overall flag.
    pub fn insert(&mut self, field: impl Into<String>, outcome: FieldOutcome) {
        self.valid = self.valid && outcome.valid;
        self.fields.insert(field.into(), outcome);
    }

    /// Returns whether the whole form passed.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns the outcome for a field, if it was part of the snapshot.
    pub fn field(&self, name: &str) -> Option<&FieldOutcome> {
        self.fields.get(name)
    }

    /// Returns the names of failing fields, sorted for stable output.
    pub fn failed_fields(&self) -> Vec<&str> {
        let mut failed: Vec<&str> = self
            .fields
            .iter()
            .filter(|(_, outcome)| !outcome.valid)
            .map(|(name, _)| name.as_str())
            .collect();
        failed.sort_unstable();
        failed
    }

    /// Returns every failure as `(field, rule, message)` triples.
    pub fn all_failures(&self) -> Vec<(&str, &str, &str)> {
        self.fields
            .iter()
            .flat_map(|(name, outcome)| {
                outcome.failures.iter().map(move |failure| {
                    (name.as_str(), failure.rule.as_str(), failure.message.as_str())
                })
            })
            .collect()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for name in self.failed_fields() {
            if let Some(outcome) = self.fields.get(name) {
                for failure in &outcome.failures {
                    writeln!(f, "{name}: {}", failure.message)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_valid() {
        let report = ValidationReport::new();
        assert!(report.is_valid());
        assert!(report.failed_fields().is_empty());
    }

    #[test]
    fn test_one_failure_flips_overall() {
        let mut report = ValidationReport::new();
        report.insert("email", FieldOutcome::passing());

        let mut outcome = FieldOutcome::passing();
        outcome.fail("cc", "Enter a valid card number.");
        report.insert("card", outcome);

        assert!(!report.is_valid());
        assert_eq!(report.failed_fields(), vec!["card"]);
        assert!(report.field("email").is_some_and(|o| o.valid));
    }

    #[test]
    fn test_display_lists_failures() {
        let mut report = ValidationReport::new();
        let mut outcome = FieldOutcome::passing();
        outcome.fail("email", "Enter a valid email address.");
        report.insert("email", outcome);

        let rendered = report.to_string();
        assert!(rendered.contains("email: Enter a valid email address."));
    }

    #[test]
    fn test_serializes_to_json() {
        let mut report = ValidationReport::new();
        report.insert("email", FieldOutcome::passing());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["valid"], true);
        assert_eq!(json["fields"]["email"]["valid"], true);
    }
}
