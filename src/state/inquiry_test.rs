use super::*;

fn form(name: &str, email: &str, phone: &str, message: &str) -> InquiryForm {
    InquiryForm { name: name.to_owned(), email: email.to_owned(), phone: phone.to_owned(), message: message.to_owned() }
}

// =============================================================
// validate
// =============================================================

#[test]
fn missing_name_is_missing_fields() {
    assert_eq!(validate(&form("", "a@b.co", "9876543210", "hi")), Err(ValidationError::MissingFields));
}

#[test]
fn any_empty_field_is_missing_fields() {
    assert_eq!(validate(&form("A", "", "9876543210", "hi")), Err(ValidationError::MissingFields));
    assert_eq!(validate(&form("A", "a@b.co", "", "hi")), Err(ValidationError::MissingFields));
    assert_eq!(validate(&form("A", "a@b.co", "9876543210", "")), Err(ValidationError::MissingFields));
}

#[test]
fn missing_fields_reported_before_bad_email() {
    assert_eq!(validate(&form("", "nope", "1", "hi")), Err(ValidationError::MissingFields));
}

#[test]
fn malformed_email_is_invalid_email() {
    assert_eq!(validate(&form("A", "not-an-email", "9876543210", "hi")), Err(ValidationError::InvalidEmail));
}

#[test]
fn bad_email_reported_before_bad_phone() {
    assert_eq!(validate(&form("A", "a@b", "123", "hi")), Err(ValidationError::InvalidEmail));
}

#[test]
fn short_phone_is_invalid_phone() {
    assert_eq!(validate(&form("A", "a@b.co", "123", "hi")), Err(ValidationError::InvalidPhone));
}

#[test]
fn formatted_indian_number_is_accepted() {
    assert_eq!(validate(&form("A", "a@b.co", "+91 98765-43210", "hi")), Ok(()));
}

#[test]
fn whitespace_only_fields_count_as_present() {
    assert_eq!(validate(&form(" ", "a@b.co", "9876543210", " ")), Ok(()));
}

// =============================================================
// Email
// =============================================================

#[test]
fn email_accepts_loose_shapes() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("first.last@sub.example.in"));
    assert!(is_valid_email("a@b.c.d"));
}

#[test]
fn email_rejects_whitespace_and_missing_parts() {
    assert!(!is_valid_email("a b@c.de"));
    assert!(!is_valid_email("a@@b.co"));
    assert!(!is_valid_email("@b.co"));
    assert!(!is_valid_email("a@.co"));
    assert!(!is_valid_email("a@b."));
    assert!(!is_valid_email("ab.co"));
}

// =============================================================
// Phone
// =============================================================

#[test]
fn normalize_phone_strips_separators_and_country_code() {
    assert_eq!(normalize_phone("+91 98765-43210"), "9876543210");
    assert_eq!(normalize_phone("98765 43210"), "9876543210");
    assert_eq!(normalize_phone("919876543210"), "9876543210");
}

#[test]
fn normalize_phone_strips_country_code_once() {
    assert_eq!(normalize_phone("9191234567"), "91234567");
}

#[test]
fn ten_digit_number_starting_with_91_loses_prefix() {
    assert!(!is_valid_phone("9123456789"));
    assert!(is_valid_phone("919123456789"));
}

#[test]
fn phone_must_start_with_six_to_nine() {
    assert!(is_valid_phone("6123456789"));
    assert!(is_valid_phone("9812345678"));
    assert!(!is_valid_phone("5123456789"));
    assert!(!is_valid_phone("0123456789"));
}

#[test]
fn phone_rejects_wrong_length_and_letters() {
    assert!(!is_valid_phone("98765"));
    assert!(!is_valid_phone("98765432101"));
    assert!(!is_valid_phone("98765abcde"));
    assert!(!is_valid_phone("(987) 654-3210"));
}

// =============================================================
// Messages and construction
// =============================================================

#[test]
fn error_messages_are_user_facing() {
    assert_eq!(ValidationError::MissingFields.to_string(), "Please fill in all required fields.");
    assert_eq!(ValidationError::InvalidEmail.to_string(), "Please enter a valid email address.");
    assert_eq!(ValidationError::InvalidPhone.to_string(), "Please enter a valid phone number.");
}

#[test]
fn from_fields_defaults_missing_values_to_empty() {
    let form = InquiryForm::from_fields(|key| (key == "email").then(|| "a@b.co".to_owned()));
    assert_eq!(form.email, "a@b.co");
    assert!(form.name.is_empty());
    assert!(form.phone.is_empty());
    assert!(form.message.is_empty());
}

#[test]
fn form_serializes_for_diagnostics() {
    let json = serde_json::to_value(form("A", "a@b.co", "9876543210", "hi")).unwrap();
    assert_eq!(json["name"], "A");
    assert_eq!(json["phone"], "9876543210");
}
