//! Integration tests for checkout form validation.
//!
//! These tests drive the public API the way a submit handler would:
//! build a snapshot of fields with declared rules and current values,
//! validate, and inspect the report.

use formcheck_core::fields::{
    alphanum_field, card_number_field, cvc_field, email_field, expiry_field, phone_field,
    postal_code_field,
};
use formcheck_core::{Field, FormError, FormPayload, RuleSet};

// =============================================================================
// Empty input against optional rules
// =============================================================================

#[test]
fn test_empty_value_passes_every_optional_rule() {
    let set = RuleSet::standard();
    let fields = vec![
        Field::new("untouched").rules(["phone", "email", "postal", "cvc", "expDate", "alphanum"]),
    ];

    let report = set.validate(&fields).unwrap();
    assert!(report.is_valid());
    assert!(report.field("untouched").is_some_and(|o| o.valid));
}

#[test]
fn test_empty_value_fails_required_and_cc() {
    let set = RuleSet::standard();

    let report = set.validate(&[Field::new("name").rule("required")]).unwrap();
    assert!(!report.is_valid());

    let report = set.validate(&[Field::new("card").rule("cc")]).unwrap();
    assert!(!report.is_valid());
}

// =============================================================================
// Card numbers and the Luhn checksum
// =============================================================================

#[test]
fn test_card_number_luhn_vectors() {
    let set = RuleSet::standard();

    let valid = set
        .validate(&[card_number_field("card").value("4539148803436467")])
        .unwrap();
    assert!(valid.is_valid());

    let bad_checksum = set
        .validate(&[card_number_field("card").value("4539148803436468")])
        .unwrap();
    assert!(!bad_checksum.is_valid());
}

#[test]
fn test_card_number_must_be_exactly_sixteen_digits() {
    let set = RuleSet::standard();

    // Truncated, over-long, and separator-formatted values all fail
    // the shape gate before the checksum is even considered.
    for value in ["453914880343646", "45391488034364679", "4539 1488 0343 6467"] {
        let report = set
            .validate(&[card_number_field("card").value(value)])
            .unwrap();
        assert!(!report.is_valid(), "{value:?} should be rejected");
    }
}

// =============================================================================
// Required and whitespace
// =============================================================================

#[test]
fn test_required_treats_whitespace_as_input() {
    let set = RuleSet::standard();

    let report = set
        .validate(&[Field::new("name").rule("required").value(" ")])
        .unwrap();
    assert!(report.is_valid());

    let report = set.validate(&[Field::new("name").rule("required")]).unwrap();
    assert!(!report.is_valid());
}

// =============================================================================
// Overall validity and failure isolation
// =============================================================================

#[test]
fn test_single_failing_field_is_isolated() {
    let set = RuleSet::standard();
    let fields = vec![
        email_field("email", true).value("user@example.com"),
        phone_field("phone", false).value("555-867-5309"),
        postal_code_field("postal", false).value("90210"),
        card_number_field("card").value("4539148803436467"),
        cvc_field("cvc", true).value("123"),
        expiry_field("expiry", true).value("07/2027"),
        alphanum_field("promo", false).value("SAVE 20"),
    ];

    let report = set.validate(&fields).unwrap();
    assert!(!report.is_valid());
    assert_eq!(report.failed_fields(), vec!["promo"]);
    assert_eq!(
        report.field("promo").unwrap().failures[0].message,
        "Use letters and digits only."
    );
}

#[test]
fn test_fully_valid_checkout_form() {
    let set = RuleSet::standard();
    let fields = vec![
        email_field("email", true).value("user@example.com"),
        phone_field("phone", false),
        postal_code_field("postal", true).value("K1A-0B1"),
        card_number_field("card").value("4111111111111111"),
        cvc_field("cvc", true).value("9001"),
        expiry_field("expiry", true).value("12/29"),
    ];

    let report = set.validate(&fields).unwrap();
    assert!(report.is_valid());
    assert!(report.failed_fields().is_empty());
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_validation_is_idempotent() {
    let set = RuleSet::standard();
    let fields = vec![
        email_field("email", true).value("nope"),
        card_number_field("card").value("4539148803436467"),
        Field::new("note").value("free text, no rules"),
    ];

    let first = set.validate(&fields).unwrap();
    let second = set.validate(&fields).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_zero_rule_field_valid_for_any_value() {
    let set = RuleSet::standard();
    for value in ["", " ", "!!!", "anything goes"] {
        let report = set.validate(&[Field::new("note").value(value)]).unwrap();
        assert!(report.is_valid(), "{value:?} should be accepted");
    }
}

// =============================================================================
// Configuration errors
// =============================================================================

#[test]
fn test_unknown_rule_is_a_configuration_error() {
    let set = RuleSet::standard();
    let fields = vec![Field::new("email").rule_attr("required e-mail")];

    match set.validate(&fields) {
        Err(FormError::UnknownRule { field, rule }) => {
            assert_eq!(field, "email");
            assert_eq!(rule, "e-mail");
        }
        other => panic!("expected UnknownRule, got {other:?}"),
    }
}

// =============================================================================
// Payload round trip
// =============================================================================

#[test]
fn test_payload_drives_validation() {
    let payload = FormPayload::from_json(
        r#"{
            "fields": [
                { "name": "email", "value": "a@b.com", "rules": ["required", "email"] },
                { "name": "card", "value": "1234567890123456", "rules": ["cc"] }
            ]
        }"#,
    )
    .unwrap();

    let report = RuleSet::standard().validate(&payload.fields).unwrap();
    assert!(!report.is_valid());
    assert_eq!(report.failed_fields(), vec!["card"]);
}
