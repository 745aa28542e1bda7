use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::model::ShippingDetails;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]{2,50}$").unwrap());
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+]?[(]?[\d\s\-()]{10,}$").unwrap());
static POSTAL_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9\s\-]{3,10}$").unwrap());

/// Removes HTML tags, keeping the text between them.
pub fn sanitize_input(input: &str) -> String {
    TAG_RE.replace_all(input, "").into_owned()
}

pub fn is_valid_name(name: &str) -> bool {
    NAME_RE.is_match(name)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

pub fn is_valid_address(address: &str) -> bool {
    address.len() >= 5 && address.len() <= 100
}

pub fn is_valid_postal_code(postal_code: &str) -> bool {
    POSTAL_CODE_RE.is_match(postal_code)
}

/// One failed field check. `field` matches the request field name;
/// `message` is a code-style identifier for i18n.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Synchronous, client-side-equivalent form validation. Runs before any
/// network call; an empty result means the form may be submitted.
pub fn validate_shipping(details: &ShippingDetails) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if !is_valid_name(&details.first_name) {
        errors.push(FieldError::new("first_name", "checkout.invalid_first_name"));
    }
    if !is_valid_name(&details.last_name) {
        errors.push(FieldError::new("last_name", "checkout.invalid_last_name"));
    }
    if !is_valid_email(&details.email) {
        errors.push(FieldError::new("email", "checkout.invalid_email"));
    }
    if !is_valid_phone(&details.phone) {
        errors.push(FieldError::new("phone", "checkout.invalid_phone"));
    }
    if !is_valid_address(&details.address) {
        errors.push(FieldError::new("address", "checkout.invalid_address"));
    }
    if !is_valid_name(&details.city) {
        errors.push(FieldError::new("city", "checkout.invalid_city"));
    }
    if !is_valid_name(&details.state) {
        errors.push(FieldError::new("state", "checkout.invalid_state"));
    }
    if !is_valid_postal_code(&details.postal_code) {
        errors.push(FieldError::new("postal_code", "checkout.invalid_postal_code"));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_details() -> ShippingDetails {
        ShippingDetails {
            first_name: "Asha".to_string(),
            last_name: "Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone: "+91 98765-43210".to_string(),
            address: "12 MG Road".to_string(),
            city: "Bengaluru".to_string(),
            state: "Karnataka".to_string(),
            postal_code: "560001".to_string(),
        }
    }

    #[test]
    fn should_accept_valid_form() {
        assert!(validate_shipping(&valid_details()).is_empty());
    }

    #[test]
    fn should_reject_invalid_email_with_field_error() {
        let mut details = valid_details();
        details.email = "not-an-email".to_string();

        let errors = validate_shipping(&details);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
        assert_eq!(errors[0].message, "checkout.invalid_email");
    }

    #[test]
    fn should_reject_too_short_postal_code() {
        let mut details = valid_details();
        details.postal_code = "a".to_string();

        let errors = validate_shipping(&details);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "postal_code");
    }

    #[test]
    fn should_reject_one_letter_name() {
        assert!(!is_valid_name("A"));
        assert!(is_valid_name("Al"));
        assert!(!is_valid_name("Asha42"));
    }

    #[test]
    fn should_allow_phone_separators() {
        assert!(is_valid_phone("+91 (987) 654-3210"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("not a phone"));
    }

    #[test]
    fn should_bound_address_length() {
        assert!(!is_valid_address("1234"));
        assert!(is_valid_address("12345"));
        assert!(!is_valid_address(&"x".repeat(101)));
    }

    #[test]
    fn should_strip_nested_tags() {
        assert_eq!(sanitize_input("<div><p>hi</p></div>"), "hi");
        assert_eq!(sanitize_input("plain"), "plain");
    }

    #[test]
    fn should_collect_multiple_field_errors() {
        let details = ShippingDetails {
            first_name: "".to_string(),
            last_name: "".to_string(),
            email: "nope".to_string(),
            phone: "1".to_string(),
            address: "x".to_string(),
            city: "".to_string(),
            state: "".to_string(),
            postal_code: "!".to_string(),
        };

        assert_eq!(validate_shipping(&details).len(), 8);
    }
}
