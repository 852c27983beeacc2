use lead_intake_sdk::ServiceType;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Contact-form request body.
///
/// Documents the wire contract. The handler reads the raw body so that every
/// validation rule runs even when fields are missing or mistyped.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequestDto {
    #[schema(min_length = 2)]
    pub first_name: String,
    #[schema(min_length = 2)]
    pub last_name: String,
    pub email: String,
    /// Any formatting; at least 10 digits.
    pub phone: String,
    pub service_type: ServiceType,
    #[schema(min_length = 10)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressDto>,
    /// Defaults to `phone`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_medium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_campaign: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AddressDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

/// 200 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitSuccessDto {
    pub success: bool,
    pub message: String,
    /// Present only when the CRM accepted the lead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_id: Option<String>,
}

impl SubmitSuccessDto {
    pub fn new(message: impl Into<String>, lead_id: Option<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            lead_id,
        }
    }
}

/// 400 response listing every failed rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationFailureDto {
    pub success: bool,
    pub errors: Vec<String>,
}

impl ValidationFailureDto {
    #[must_use]
    pub fn new(errors: Vec<String>) -> Self {
        Self {
            success: false,
            errors,
        }
    }
}

/// 500 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FailureDto {
    pub success: bool,
    pub error: String,
}

impl FailureDto {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
