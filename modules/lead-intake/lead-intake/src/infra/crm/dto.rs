//! Wire types of the CRM lead-creation endpoint.

use std::fmt::Write as _;

use lead_intake_sdk::{Address, ContactSubmission};
use serde::{Deserialize, Serialize};

const WEBSITE_TAG: &str = "Website";
const SERVICE_ADDRESS_TYPE: &str = "service";

#[derive(Debug, Serialize)]
pub struct CreateLeadRequest {
    pub customer: CustomerPayload,
    pub job_description: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CustomerPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile_number: String,
    pub lead_source: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<AddressPayload>,
}

#[derive(Debug, Serialize)]
pub struct AddressPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl From<&Address> for AddressPayload {
    fn from(address: &Address) -> Self {
        Self {
            street: address.street.clone(),
            city: address.city.clone(),
            state: address.state.clone(),
            zip: address.zip.clone(),
            kind: SERVICE_ADDRESS_TYPE,
        }
    }
}

impl From<&ContactSubmission> for CreateLeadRequest {
    fn from(s: &ContactSubmission) -> Self {
        let addresses = if s.address.is_empty() {
            Vec::new()
        } else {
            vec![AddressPayload::from(&s.address)]
        };

        Self {
            customer: CustomerPayload {
                first_name: s.first_name.clone(),
                last_name: s.last_name.clone(),
                email: s.email.clone(),
                mobile_number: s.phone.clone(),
                lead_source: s.source.clone(),
                addresses,
            },
            job_description: job_description(s),
            tags: vec![WEBSITE_TAG.to_owned(), s.service_type.label().to_owned()],
        }
    }
}

/// Header lines for the office, a blank line, then the visitor's message.
fn job_description(s: &ContactSubmission) -> String {
    let mut out = format!(
        "Service requested: {}\nPreferred contact: {}\nSource page: {}",
        s.service_type, s.preferred_contact, s.source_page
    );
    if let Some(campaign) = &s.attribution.utm_campaign {
        let _ = write!(out, "\nCampaign: {campaign}");
    }
    out.push_str("\n\n");
    out.push_str(&s.message);
    out
}

/// Only the lead id is read back; other fields are ignored.
#[derive(Debug, Deserialize)]
pub struct CreateLeadResponse {
    pub id: String,
}
