//! Output ports (interfaces) for the intake pipeline.

use async_trait::async_trait;
use lead_intake_sdk::ContactSubmission;

/// Lead resource created in the CRM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrmLead {
    pub id: String,
}

/// Outcome of a lead-creation attempt. Every failure mode of the CRM
/// collaborator is folded into `Failed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrmLeadResult {
    Created(CrmLead),
    Failed { error: String },
}

impl CrmLeadResult {
    pub fn failed(error: impl Into<String>) -> Self {
        Self::Failed {
            error: error.into(),
        }
    }

    #[must_use]
    pub fn lead_id(&self) -> Option<&str> {
        match self {
            Self::Created(lead) => Some(&lead.id),
            Self::Failed { .. } => None,
        }
    }
}

/// Port for the field-service CRM, the system of record for leads.
#[async_trait]
pub trait CrmPort: Send + Sync {
    /// Create a lead from a normalized contact-form submission.
    ///
    /// Infallible by contract: implementations report missing credentials,
    /// transport errors, non-success statuses and unreadable bodies as
    /// [`CrmLeadResult::Failed`].
    async fn create_lead_from_contact_form(&self, submission: &ContactSubmission)
    -> CrmLeadResult;
}
