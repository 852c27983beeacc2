use lead_intake_sdk::LeadIntakeError;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Validation failed: {}", .errors.join("; "))]
    Validation { errors: Vec<String> },

    #[error("Malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("CRM and backup store both failed (crm: {crm_error}; backup: {backup_error})")]
    AllWritesFailed {
        crm_error: String,
        backup_error: String,
    },
}

impl DomainError {
    #[must_use]
    pub fn validation(errors: Vec<String>) -> Self {
        Self::Validation { errors }
    }
}

impl From<DomainError> for LeadIntakeError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation { errors } => Self::validation(errors),
            DomainError::AllWritesFailed { .. } => {
                Self::unavailable("lead could not be recorded in the CRM or the backup store")
            }
            DomainError::MalformedPayload(_) => Self::internal(),
        }
    }
}
