//! Lead-intake module wiring.

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use lead_intake_sdk::LeadIntakeClientV1;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::{info, warn};

use crate::api::rest::messages::ContactMessages;
use crate::api::rest::routes;
use crate::config::LeadIntakeConfig;
use crate::domain::ports::CrmPort;
use crate::domain::repo::BackupRepository;
use crate::domain::service::{Service, ServiceConfig};
use crate::infra::crm::HttpCrmClient;
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::sea_orm_repo::SeaOrmBackupRepository;
use crate::local_client::LeadIntakeLocalClient;

/// Lead-intake module.
///
/// Owns the backup-table schema, the CRM client and the intake service, and
/// exposes them as REST routes and as an in-process [`LeadIntakeClientV1`].
pub struct LeadIntakeModule {
    service: Arc<Service>,
    messages: Arc<ContactMessages>,
}

impl LeadIntakeModule {
    /// Run migrations and wire the service.
    ///
    /// # Errors
    /// Fails if migrations cannot be applied or the CRM client configuration
    /// is invalid.
    pub async fn init(cfg: &LeadIntakeConfig, db: DatabaseConnection) -> anyhow::Result<Self> {
        info!("Initializing lead-intake module");

        Migrator::up(&db, None)
            .await
            .context("failed to apply lead-intake migrations")?;

        if cfg.crm.api_key.is_none() {
            warn!("CRM API key is not configured; leads will only reach the backup store");
        }

        let crm: Arc<dyn CrmPort> = Arc::new(HttpCrmClient::new(&cfg.crm)?);
        let repo: Arc<dyn BackupRepository> = Arc::new(SeaOrmBackupRepository::new(db));
        let service = Arc::new(Service::new(crm, repo, ServiceConfig::from(cfg)));
        let messages = Arc::new(ContactMessages::for_business_phone(&cfg.business_phone));

        info!(crm_base_url = %cfg.crm.api_base_url, "Lead-intake module initialized");
        Ok(Self { service, messages })
    }

    /// Mount the contact routes on `router`.
    pub fn register_routes(&self, router: Router) -> Router {
        routes::register_routes(router, Arc::clone(&self.service), Arc::clone(&self.messages))
    }

    #[must_use]
    pub fn client(&self) -> Arc<dyn LeadIntakeClientV1> {
        Arc::new(LeadIntakeLocalClient::new(Arc::clone(&self.service)))
    }
}
