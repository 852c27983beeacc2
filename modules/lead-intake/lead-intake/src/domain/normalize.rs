//! Canonicalization of a validated payload into a [`ContactSubmission`].

use lead_intake_sdk::{Address, Attribution, ContactSubmission, ServiceType};
use serde_json::Value;

use super::error::DomainError;
use super::fields::{AddressFields, ContactFields};
use super::validation::{self, text};

pub const DEFAULT_PREFERRED_CONTACT: &str = "phone";

/// Provenance values applied when the form leaves them out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionDefaults {
    pub source: String,
    pub source_page: String,
}

/// Keep ASCII digits only. Idempotent.
#[must_use]
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Trim and lower-case. Idempotent.
#[must_use]
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Trimmed value of `key`, or `None` when absent, non-string or blank.
fn optional_text(payload: &Value, key: &str) -> Option<String> {
    text(payload, key)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

fn required_text<'a>(
    payload: &'a Value,
    key: &str,
    message: &str,
) -> Result<&'a str, DomainError> {
    text(payload, key).ok_or_else(|| DomainError::validation(vec![message.to_owned()]))
}

fn address(payload: &Value) -> Address {
    let Some(raw) = payload.get(ContactFields::ADDRESS) else {
        return Address::default();
    };
    Address {
        street: optional_text(raw, AddressFields::STREET),
        city: optional_text(raw, AddressFields::CITY),
        state: optional_text(raw, AddressFields::STATE),
        zip: optional_text(raw, AddressFields::ZIP),
    }
}

/// Build the canonical submission from a payload that passed
/// [`validate`](super::validation::validate).
///
/// # Errors
/// Returns [`DomainError::Validation`] if a required field is missing or the
/// service type is unknown, which only happens for unvalidated input.
pub fn normalize(
    payload: &Value,
    defaults: &SubmissionDefaults,
) -> Result<ContactSubmission, DomainError> {
    let service_type = required_text(
        payload,
        ContactFields::SERVICE_TYPE,
        validation::SERVICE_TYPE_REQUIRED,
    )?
    .parse::<ServiceType>()
    .map_err(|_| DomainError::validation(vec![validation::SERVICE_TYPE_REQUIRED.to_owned()]))?;

    Ok(ContactSubmission {
        first_name: required_text(
            payload,
            ContactFields::FIRST_NAME,
            validation::FIRST_NAME_REQUIRED,
        )?
        .to_owned(),
        last_name: required_text(
            payload,
            ContactFields::LAST_NAME,
            validation::LAST_NAME_REQUIRED,
        )?
        .to_owned(),
        email: normalize_email(required_text(
            payload,
            ContactFields::EMAIL,
            validation::EMAIL_REQUIRED,
        )?),
        phone: normalize_phone(required_text(
            payload,
            ContactFields::PHONE,
            validation::PHONE_REQUIRED,
        )?),
        address: address(payload),
        service_type,
        message: required_text(payload, ContactFields::MESSAGE, validation::MESSAGE_REQUIRED)?
            .to_owned(),
        preferred_contact: optional_text(payload, ContactFields::PREFERRED_CONTACT)
            .unwrap_or_else(|| DEFAULT_PREFERRED_CONTACT.to_owned()),
        source: optional_text(payload, ContactFields::SOURCE)
            .unwrap_or_else(|| defaults.source.clone()),
        source_page: optional_text(payload, ContactFields::SOURCE_PAGE)
            .unwrap_or_else(|| defaults.source_page.clone()),
        attribution: Attribution {
            utm_source: optional_text(payload, ContactFields::UTM_SOURCE),
            utm_medium: optional_text(payload, ContactFields::UTM_MEDIUM),
            utm_campaign: optional_text(payload, ContactFields::UTM_CAMPAIGN),
        },
    })
}
