use anyhow::Context;
use async_trait::async_trait;
use chrono::Utc;
use lead_intake_sdk::ContactSubmission;
use sea_orm::{DatabaseConnection, EntityTrait};
use uuid::Uuid;

use crate::domain::repo::BackupRepository;

use super::entity::Entity as FormSubmissionEntity;
use super::mapper;

pub struct SeaOrmBackupRepository {
    db: DatabaseConnection,
}

impl SeaOrmBackupRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BackupRepository for SeaOrmBackupRepository {
    async fn insert_contact(
        &self,
        submission: &ContactSubmission,
        crm_lead_id: Option<&str>,
    ) -> anyhow::Result<Uuid> {
        let id = Uuid::new_v4();
        let model = mapper::to_active_model(id, submission, crm_lead_id, Utc::now());

        FormSubmissionEntity::insert(model)
            .exec_without_returning(&self.db)
            .await
            .context("failed to insert form submission")?;

        Ok(id)
    }
}
