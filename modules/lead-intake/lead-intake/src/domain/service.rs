use std::sync::Arc;

use lead_intake_sdk::{ContactSubmission, ServedBy, SubmissionReceipt};
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::config::LeadIntakeConfig;

use super::error::DomainError;
use super::normalize::{SubmissionDefaults, normalize};
use super::ports::{CrmLeadResult, CrmPort};
use super::repo::{BackupOutcome, BackupRepository};
use super::validation::validate;

pub struct ServiceConfig {
    pub defaults: SubmissionDefaults,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::from(&LeadIntakeConfig::default())
    }
}

impl From<&LeadIntakeConfig> for ServiceConfig {
    fn from(cfg: &LeadIntakeConfig) -> Self {
        Self {
            defaults: SubmissionDefaults {
                source: cfg.default_source.clone(),
                source_page: cfg.default_source_page.clone(),
            },
        }
    }
}

/// Everything the pipeline learned while handling one accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReport {
    pub receipt: SubmissionReceipt,
    pub crm: CrmLeadResult,
    pub backup: BackupOutcome,
}

/// The lead-intake pipeline: validate, normalize, forward to the CRM, then
/// write the backup row. Each downstream call happens at most once.
pub struct Service {
    crm: Arc<dyn CrmPort>,
    repo: Arc<dyn BackupRepository>,
    config: ServiceConfig,
}

impl Service {
    pub fn new(
        crm: Arc<dyn CrmPort>,
        repo: Arc<dyn BackupRepository>,
        config: ServiceConfig,
    ) -> Self {
        Self { crm, repo, config }
    }

    /// Parse a raw request body and run [`submit`](Self::submit).
    ///
    /// # Errors
    /// [`DomainError::MalformedPayload`] if the body is not JSON, otherwise as
    /// for [`submit`](Self::submit).
    pub async fn submit_raw(&self, body: &[u8]) -> Result<SubmissionReport, DomainError> {
        let payload: Value = serde_json::from_slice(body)?;
        self.submit(&payload).await
    }

    /// Run the intake pipeline for one contact-form payload.
    ///
    /// # Errors
    /// - [`DomainError::Validation`] with every failed rule; nothing is sent downstream.
    /// - [`DomainError::AllWritesFailed`] when neither the CRM nor the backup
    ///   store recorded the lead.
    pub async fn submit(&self, payload: &Value) -> Result<SubmissionReport, DomainError> {
        let report = validate(payload);
        if !report.is_valid() {
            debug!(
                error_count = report.errors().len(),
                "Contact submission rejected by validation"
            );
            return Err(DomainError::validation(report.into_errors()));
        }

        let submission = normalize(payload, &self.config.defaults)?;

        let crm = self.crm.create_lead_from_contact_form(&submission).await;
        match &crm {
            CrmLeadResult::Created(lead) => {
                info!(crm_lead_id = %lead.id, service_type = %submission.service_type, "CRM lead created");
            }
            CrmLeadResult::Failed { error } => {
                warn!(%error, service_type = %submission.service_type, "CRM lead creation failed, relying on backup store");
            }
        }

        let backup = self.record_backup(&submission, crm.lead_id()).await;

        let receipt = match (&crm, &backup) {
            (CrmLeadResult::Created(lead), _) => SubmissionReceipt {
                lead_id: Some(lead.id.clone()),
                served_by: ServedBy::Crm,
            },
            (CrmLeadResult::Failed { .. }, BackupOutcome::Recorded { id }) => {
                info!(backup_id = %id, served_by = "backup", "Contact submission recorded in backup store only");
                SubmissionReceipt {
                    lead_id: None,
                    served_by: ServedBy::Backup,
                }
            }
            (
                CrmLeadResult::Failed { error: crm_error },
                BackupOutcome::Failed {
                    error: backup_error,
                },
            ) => {
                error!(%crm_error, %backup_error, "Contact submission lost: CRM and backup store both failed");
                return Err(DomainError::AllWritesFailed {
                    crm_error: crm_error.clone(),
                    backup_error: backup_error.clone(),
                });
            }
        };

        Ok(SubmissionReport {
            receipt,
            crm,
            backup,
        })
    }

    async fn record_backup(
        &self,
        submission: &ContactSubmission,
        crm_lead_id: Option<&str>,
    ) -> BackupOutcome {
        match self.repo.insert_contact(submission, crm_lead_id).await {
            Ok(id) => {
                debug!(backup_id = %id, "Backup form submission recorded");
                BackupOutcome::Recorded { id }
            }
            Err(e) => {
                let error = format!("{e:#}");
                error!(%error, "Backup form submission insert failed");
                BackupOutcome::Failed { error }
            }
        }
    }
}
