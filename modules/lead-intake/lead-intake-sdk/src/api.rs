//! `LeadIntakeClientV1` trait definition.

use async_trait::async_trait;

use crate::errors::LeadIntakeError;
use crate::models::SubmissionReceipt;

/// Public API trait for the lead-intake module.
///
/// The payload is the raw, untyped form body; validation and normalization
/// happen behind this boundary so every consumer gets identical rules.
#[async_trait]
pub trait LeadIntakeClientV1: Send + Sync {
    /// Validate, normalize and record a contact-form submission.
    async fn submit_contact(
        &self,
        payload: serde_json::Value,
    ) -> Result<SubmissionReceipt, LeadIntakeError>;
}
