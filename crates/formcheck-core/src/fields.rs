//! Field helpers for checkout-style forms.
//!
//! Each helper returns a [`Field`] pre-tagged with the matching rule;
//! pass `required` to also reject empty input.

use crate::field::Field;

fn tagged(name: &str, rule: &str, required: bool) -> Field {
    let field = Field::new(name);
    if required {
        field.rule("required").rule(rule)
    } else {
        field.rule(rule)
    }
}

/// Creates an email field.
pub fn email_field(name: &str, required: bool) -> Field {
    tagged(name, "email", required)
}

/// Creates a phone number field.
pub fn phone_field(name: &str, required: bool) -> Field {
    tagged(name, "phone", required)
}

/// Creates a postal code field.
pub fn postal_code_field(name: &str, required: bool) -> Field {
    tagged(name, "postal", required)
}

/// Creates a card number field. The `cc` rule already rejects empty
/// input, so there is no `required` flag.
pub fn card_number_field(name: &str) -> Field {
    Field::new(name).rule("cc")
}

/// Creates a card security code field.
pub fn cvc_field(name: &str, required: bool) -> Field {
    tagged(name, "cvc", required)
}

/// Creates a card expiry date field.
pub fn expiry_field(name: &str, required: bool) -> Field {
    tagged(name, "expDate", required)
}

/// Creates an alphanumeric field.
pub fn alphanum_field(name: &str, required: bool) -> Field {
    tagged(name, "alphanum", required)
}
