//! Error types for form validation.

use thiserror::Error;

/// Errors surfaced by form validation.
///
/// An invalid field is never an error: failed rules are reported
/// through [`ValidationReport`](crate::ValidationReport). Errors are
/// reserved for misconfiguration and malformed input payloads.
#[derive(Debug, Error)]
pub enum FormError {
    /// A field declared a rule name that is not registered.
    #[error("unknown rule `{rule}` declared on field `{field}`")]
    UnknownRule {
        /// Name of the field carrying the declaration.
        field: String,
        /// The unregistered rule identifier.
        rule: String,
    },

    /// A serialized form payload could not be parsed.
    #[error("failed to parse form payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;
