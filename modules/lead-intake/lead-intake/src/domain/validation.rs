//! Contact-form validation.
//!
//! Every rule runs against the raw payload and failures accumulate, so the
//! visitor sees every problem with the form in a single round trip.

use lead_intake_sdk::ServiceType;
use serde_json::Value;

use super::fields::ContactFields;
use super::normalize::normalize_phone;

pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_PHONE_DIGITS: usize = 10;
pub const MIN_MESSAGE_CHARS: usize = 10;

pub const FIRST_NAME_REQUIRED: &str = "First name is required (minimum 2 characters)";
pub const LAST_NAME_REQUIRED: &str = "Last name is required (minimum 2 characters)";
pub const EMAIL_REQUIRED: &str = "A valid email address is required";
pub const PHONE_REQUIRED: &str = "A valid phone number is required (minimum 10 digits)";
pub const SERVICE_TYPE_REQUIRED: &str = "Please select a valid service type";
pub const MESSAGE_REQUIRED: &str = "Message is required (minimum 10 characters)";

/// Result of [`validate`]: the failed rules, in reporting order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<String>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    #[must_use]
    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }

    fn check(&mut self, passed: bool, message: &str) {
        if !passed {
            self.errors.push(message.to_owned());
        }
    }
}

/// Trimmed string value of `key`; non-string values count as absent.
pub(crate) fn text<'a>(payload: &'a Value, key: &str) -> Option<&'a str> {
    payload.get(key).and_then(Value::as_str).map(str::trim)
}

fn has_min_chars(value: Option<&str>, min: usize) -> bool {
    value.is_some_and(|v| v.chars().count() >= min)
}

/// Check a raw contact-form payload against the intake rules.
///
/// Rules are reported in this order: first name, last name, email, phone,
/// service type, message.
#[must_use]
pub fn validate(payload: &Value) -> ValidationReport {
    let mut report = ValidationReport::default();

    report.check(
        has_min_chars(text(payload, ContactFields::FIRST_NAME), MIN_NAME_CHARS),
        FIRST_NAME_REQUIRED,
    );
    report.check(
        has_min_chars(text(payload, ContactFields::LAST_NAME), MIN_NAME_CHARS),
        LAST_NAME_REQUIRED,
    );
    // Deliberately loose: anything with an '@' is accepted.
    report.check(
        text(payload, ContactFields::EMAIL).is_some_and(|v| v.contains('@')),
        EMAIL_REQUIRED,
    );
    report.check(
        text(payload, ContactFields::PHONE)
            .is_some_and(|v| normalize_phone(v).len() >= MIN_PHONE_DIGITS),
        PHONE_REQUIRED,
    );
    report.check(
        text(payload, ContactFields::SERVICE_TYPE)
            .is_some_and(|v| v.parse::<ServiceType>().is_ok()),
        SERVICE_TYPE_REQUIRED,
    );
    report.check(
        has_min_chars(text(payload, ContactFields::MESSAGE), MIN_MESSAGE_CHARS),
        MESSAGE_REQUIRED,
    );

    report
}
