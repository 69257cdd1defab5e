//! # formcheck-core
//!
//! Rule-tagged form field validation.
//!
//! This crate provides:
//! - A registry of named validation rules (`required`, `email`, `cc`, ...)
//! - Field descriptors carrying a value and declared rule names
//! - A pure validation pass producing per-field and overall results
//! - Serializable reports for hosts that render results elsewhere
//!
//! ## Quick Start
//!
//! ```rust
//! use formcheck_core::{Field, RuleSet};
//!
//! let fields = vec![
//!     Field::new("email")
//!         .rule_attr("required email")
//!         .value("user@example.com"),
//!     Field::new("card").rule("cc").value("4539148803436467"),
//! ];
//!
//! let report = RuleSet::standard().validate(&fields)?;
//! assert!(report.is_valid());
//! # Ok::<(), formcheck_core::FormError>(())
//! ```
//!
//! ## Reporting failures
//!
//! Validation never mutates anything and an invalid field is not an
//! error: the report says which fields failed and why, and the host
//! decides how to present that.
//!
//! ```rust
//! use formcheck_core::{Field, RuleSet};
//!
//! let fields = vec![Field::new("email").rule("email").value("not-an-email")];
//!
//! let report = RuleSet::standard().validate(&fields)?;
//! assert!(!report.is_valid());
//! assert_eq!(report.failed_fields(), vec!["email"]);
//! # Ok::<(), formcheck_core::FormError>(())
//! ```
//!
//! ## Custom rules
//!
//! The rule set is extensible by adding entries:
//!
//! ```rust
//! use formcheck_core::rules::Rule;
//! use formcheck_core::{Field, RuleSet};
//!
//! struct NoSpaces;
//!
//! impl Rule for NoSpaces {
//!     fn check(&self, value: &str) -> Result<(), String> {
//!         if value.contains(' ') {
//!             Err(self.message().to_string())
//!         } else {
//!             Ok(())
//!         }
//!     }
//!
//!     fn message(&self) -> &str {
//!         "Spaces are not allowed."
//!     }
//! }
//!
//! let rules = RuleSet::standard().with_rule("noSpaces", NoSpaces);
//! let fields = vec![Field::new("handle").rule("noSpaces").value("no spaces")];
//! assert!(!rules.validate(&fields)?.is_valid());
//! # Ok::<(), formcheck_core::FormError>(())
//! ```

mod error;
mod field;
pub mod fields;
mod form;
mod registry;
mod report;
pub mod rules;

pub use error::{FormError, Result};
pub use field::Field;
pub use form::{Form, FormPayload};
pub use registry::RuleSet;
pub use report::{FieldOutcome, RuleFailure, ValidationReport};
