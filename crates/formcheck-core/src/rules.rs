//! Built-in validation rules.

use regex::Regex;

/// Trait for named validation rules.
///
/// A rule is a stateless check over the raw text value of a field. The
/// empty string means "no input": every built-in rule except
/// [`Required`] and [`CardNumber`] passes on it, so optional fields
/// stay valid until the user types something.
pub trait Rule: Send + Sync {
    /// Checks a value and returns the failure message if it does not pass.
    fn check(&self, value: &str) -> Result<(), String>;

    /// Returns the failure message for this rule.
    fn message(&self) -> &str;
}

/// Rule that requires a non-empty value.
///
/// Whitespace counts as input: `" "` passes. Hosts that want trimmed
/// semantics should trim before building the field snapshot.
#[derive(Debug, Clone)]
pub struct Required {
    message: String,
}

impl Required {
    /// Creates a new Required rule with the default message.
    pub fn new() -> Self {
        Self {
            message: "This field is required.".to_string(),
        }
    }

    /// Creates a new Required rule with a custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for Required {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for Required {
    fn check(&self, value: &str) -> Result<(), String> {
        if value.is_empty() {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Rule for phone numbers.
///
/// Accepts digits with common separators (spaces, `+`, `-`, `(`, `)`,
/// `.`) as long as at least 7 digits are present.
#[derive(Debug, Clone)]
pub struct Phone {
    allowed: Regex,
    message: String,
}

impl Phone {
    /// Creates a new Phone rule with the default message.
    pub fn new() -> Self {
        Self {
            allowed: Regex::new(r"^[0-9()+.\s-]+$").unwrap(),
            message: "Enter a valid phone number.".to_string(),
        }
    }

    /// Creates a new Phone rule with a custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::new()
        }
    }
}

impl Default for Phone {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for Phone {
    fn check(&self, value: &str) -> Result<(), String> {
        if value.is_empty() {
            return Ok(());
        }

        let digits = value.chars().filter(char::is_ascii_digit).count();
        if self.allowed.is_match(value) && digits >= 7 {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Rule for email addresses.
#[derive(Debug, Clone)]
pub struct Email {
    pattern: Regex,
    message: String,
}

impl Email {
    /// Creates a new Email rule with the default message.
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap(),
            message: "Enter a valid email address.".to_string(),
        }
    }

    /// Creates a new Email rule with a custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::new()
        }
    }
}

impl Default for Email {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for Email {
    fn check(&self, value: &str) -> Result<(), String> {
        if value.is_empty() || self.pattern.is_match(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Rule for postal codes: letters, digits, and hyphens only.
#[derive(Debug, Clone)]
pub struct Postal {
    pattern: Regex,
    message: String,
}

impl Postal {
    /// Creates a new Postal rule with the default message.
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"^[a-zA-Z0-9-]+$").unwrap(),
            message: "Enter a valid postal code.".to_string(),
        }
    }

    /// Creates a new Postal rule with a custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::new()
        }
    }
}

impl Default for Postal {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for Postal {
    fn check(&self, value: &str) -> Result<(), String> {
        if value.is_empty() || self.pattern.is_match(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Rule for payment card numbers.
///
/// Requires exactly 16 digits and a passing Luhn checksum. Unlike the
/// other optional rules, an empty value fails: a card number field
/// never holds a partially valid state.
#[derive(Debug, Clone)]
pub struct CardNumber {
    message: String,
}

impl CardNumber {
    /// Creates a new CardNumber rule with the default message.
    pub fn new() -> Self {
        Self {
            message: "Enter a valid card number.".to_string(),
        }
    }

    /// Creates a new CardNumber rule with a custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for CardNumber {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for CardNumber {
    fn check(&self, value: &str) -> Result<(), String> {
        let shape_ok = value.len() == 16 && value.bytes().all(|b| b.is_ascii_digit());
        if shape_ok && luhn(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Rule for card security codes: 3 or 4 digits.
#[derive(Debug, Clone)]
pub struct Cvc {
    pattern: Regex,
    message: String,
}

impl Cvc {
    /// Creates a new Cvc rule with the default message.
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"^[0-9]{3,4}$").unwrap(),
            message: "Enter a valid security code.".to_string(),
        }
    }

    /// Creates a new Cvc rule with a custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::new()
        }
    }
}

impl Default for Cvc {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for Cvc {
    fn check(&self, value: &str) -> Result<(), String> {
        if value.is_empty() || self.pattern.is_match(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Rule for card expiry dates.
///
/// Accepts a 1 or 2 digit month, a slash, and a 2 or 4 digit year
/// (`7/25`, `07/25`, `7/2025`, `12/2025`). This is a format gate only;
/// month range and expiry-in-the-past are not checked here.
#[derive(Debug, Clone)]
pub struct ExpiryDate {
    pattern: Regex,
    message: String,
}

impl ExpiryDate {
    /// Creates a new ExpiryDate rule with the default message.
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"^[0-9]{1,2}/([0-9]{2}|[0-9]{4})$").unwrap(),
            message: "Enter a valid expiry date.".to_string(),
        }
    }

    /// Creates a new ExpiryDate rule with a custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::new()
        }
    }
}

impl Default for ExpiryDate {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for ExpiryDate {
    fn check(&self, value: &str) -> Result<(), String> {
        if value.is_empty() || self.pattern.is_match(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Rule for alphanumeric values: ASCII letters and digits, either case.
#[derive(Debug, Clone)]
pub struct Alphanum {
    pattern: Regex,
    message: String,
}

impl Alphanum {
    /// Creates a new Alphanum rule with the default message.
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"^[a-zA-Z0-9]+$").unwrap(),
            message: "Use letters and digits only.".to_string(),
        }
    }

    /// Creates a new Alphanum rule with a custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::new()
        }
    }
}

impl Default for Alphanum {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for Alphanum {
    fn check(&self, value: &str) -> Result<(), String> {
        if value.is_empty() || self.pattern.is_match(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Luhn checksum over a string of ASCII digits.
///
/// Doubles every second digit from the right, folding doubled values
/// above 9 back into a single digit; the sum must be divisible by 10.
fn luhn(digits: &str) -> bool {
    let sum: u32 = digits
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let digit = u32::from(b - b'0');
            if i % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                digit
            }
        })
        .sum();
    sum % 10 == 0
}
