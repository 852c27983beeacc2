use std::sync::Arc;

use async_trait::async_trait;
use lead_intake_sdk::{LeadIntakeClientV1, LeadIntakeError, SubmissionReceipt};
use serde_json::Value;

use crate::domain::service::Service;

/// In-process adapter exposing the pipeline through the SDK trait.
pub struct LeadIntakeLocalClient {
    service: Arc<Service>,
}

impl LeadIntakeLocalClient {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl LeadIntakeClientV1 for LeadIntakeLocalClient {
    async fn submit_contact(&self, payload: Value) -> Result<SubmissionReceipt, LeadIntakeError> {
        self.service
            .submit(&payload)
            .await
            .map(|report| report.receipt)
            .map_err(Into::into)
    }
}
