//! Public models for the lead-intake module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the lead-intake module and its consumers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Service lines a visitor can request through the contact form.
///
/// The wire representation is the human-readable label shown in the form's
/// select box, e.g. `"Drain Cleaning"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub enum ServiceType {
    #[serde(rename = "Plumbing Repair")]
    PlumbingRepair,
    #[serde(rename = "Drain Cleaning")]
    DrainCleaning,
    #[serde(rename = "Water Heater")]
    WaterHeater,
    #[serde(rename = "Sewer Line")]
    SewerLine,
    #[serde(rename = "Sump Pump")]
    SumpPump,
    #[serde(rename = "Waterproofing")]
    Waterproofing,
    #[serde(rename = "Emergency Service")]
    EmergencyService,
    #[serde(rename = "Other")]
    Other,
}

impl ServiceType {
    pub const ALL: [Self; 8] = [
        Self::PlumbingRepair,
        Self::DrainCleaning,
        Self::WaterHeater,
        Self::SewerLine,
        Self::SumpPump,
        Self::Waterproofing,
        Self::EmergencyService,
        Self::Other,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PlumbingRepair => "Plumbing Repair",
            Self::DrainCleaning => "Drain Cleaning",
            Self::WaterHeater => "Water Heater",
            Self::SewerLine => "Sewer Line",
            Self::SumpPump => "Sump Pump",
            Self::Waterproofing => "Waterproofing",
            Self::EmergencyService => "Emergency Service",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a label is not part of the [`ServiceType`] enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown service type: {0}")]
pub struct UnknownServiceType(pub String);

impl FromStr for ServiceType {
    type Err = UnknownServiceType;

    /// Exact, case-sensitive match against the form labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.label() == s)
            .ok_or_else(|| UnknownServiceType(s.to_owned()))
    }
}

/// Optional service address supplied with the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
}

impl Address {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.street.is_none() && self.city.is_none() && self.state.is_none() && self.zip.is_none()
    }
}

/// UTM campaign attribution captured by the landing page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribution {
    pub utm_source: Option<String>,
    pub utm_medium: Option<String>,
    pub utm_campaign: Option<String>,
}

/// A validated and normalized contact-form submission.
///
/// Instances are only produced by the module's normalization step, so the
/// field invariants (trimmed names, lower-cased email, digit-only phone)
/// always hold for consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
    pub service_type: ServiceType,
    pub message: String,
    pub preferred_contact: String,
    pub source: String,
    pub source_page: String,
    pub attribution: Attribution,
}

/// Which system ended up holding the lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServedBy {
    /// The CRM accepted the lead.
    Crm,
    /// The CRM was unavailable; only the backup row records the lead.
    Backup,
}

/// Outcome of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    /// CRM-issued lead identifier, present only when the CRM accepted the lead.
    pub lead_id: Option<String>,
    pub served_by: ServedBy,
}
