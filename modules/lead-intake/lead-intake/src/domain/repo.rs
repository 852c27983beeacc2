use async_trait::async_trait;
use lead_intake_sdk::ContactSubmission;
use uuid::Uuid;

/// Backup store for submissions, written on every accepted request.
#[async_trait]
pub trait BackupRepository: Send + Sync {
    /// Insert a `contact` form-submission row and return its id.
    async fn insert_contact(
        &self,
        submission: &ContactSubmission,
        crm_lead_id: Option<&str>,
    ) -> anyhow::Result<Uuid>;
}

/// Outcome of the backup write. Failures are kept as values so the
/// pipeline can continue and callers can inspect what happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackupOutcome {
    Recorded { id: Uuid },
    Failed { error: String },
}

impl BackupOutcome {
    #[must_use]
    pub fn is_recorded(&self) -> bool {
        matches!(self, Self::Recorded { .. })
    }
}
