//! Contact inquiry form data and validation.
//!
//! DESIGN
//! ======
//! Rules run in a fixed order and stop at the first failure: required fields,
//! email shape, phone shape. The email rule is deliberately loose
//! (`local@domain.tld`); the phone rule targets Indian mobile numbers.
//!
//! Accepted inquiries are not transmitted anywhere.

#[cfg(test)]
#[path = "inquiry_test.rs"]
mod inquiry_test;

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

pub const SUCCESS_MESSAGE: &str = "Thank you! Your inquiry has been sent. We will contact you soon.";

/// Form control names, in validation order.
pub const FIELD_NAMES: [&str; 4] = ["name", "email", "phone", "message"];

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

static PHONE_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\-+]").expect("phone separator pattern is valid"));

static MOBILE_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[6-9][0-9]{9}$").expect("mobile number pattern is valid"));

/// Values read from the inquiry form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl InquiryForm {
    /// Build from a field lookup such as a `FormData` getter. Missing fields
    /// become empty strings.
    pub fn from_fields<F>(mut field: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let [name, email, phone, message] = FIELD_NAMES.map(|key| field(key).unwrap_or_default());
        Self { name, email, phone, message }
    }

    fn has_all_fields(&self) -> bool {
        [&self.name, &self.email, &self.phone, &self.message].iter().all(|v| !v.is_empty())
    }
}

/// Why an inquiry was rejected. `Display` is the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a valid phone number.")]
    InvalidPhone,
}

/// Validate an inquiry, stopping at the first failing rule.
///
/// # Errors
///
/// Returns the first rule that fails.
pub fn validate(form: &InquiryForm) -> Result<(), ValidationError> {
    if !form.has_all_fields() {
        return Err(ValidationError::MissingFields);
    }
    if !is_valid_email(&form.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if !is_valid_phone(&form.phone) {
        return Err(ValidationError::InvalidPhone);
    }
    Ok(())
}

pub fn is_valid_email(raw: &str) -> bool {
    EMAIL_PATTERN.is_match(raw)
}

/// Strip whitespace, hyphens, and plus signs, then one leading `91`
/// country code.
pub fn normalize_phone(raw: &str) -> String {
    let digits = PHONE_SEPARATORS.replace_all(raw, "");
    digits.strip_prefix("91").unwrap_or(&digits[..]).to_owned()
}

pub fn is_valid_phone(raw: &str) -> bool {
    MOBILE_NUMBER_PATTERN.is_match(&normalize_phone(raw))
}
