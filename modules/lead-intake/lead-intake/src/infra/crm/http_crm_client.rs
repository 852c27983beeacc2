use std::time::Duration;

use anyhow::{Context, bail};
use async_trait::async_trait;
use lead_intake_sdk::ContactSubmission;
use reqwest::header::ACCEPT;
use tracing::{debug, instrument};
use url::Url;

use crate::config::{ApiToken, CrmConfig};
use crate::domain::ports::{CrmLead, CrmLeadResult, CrmPort};

use super::dto::{CreateLeadRequest, CreateLeadResponse};

const LEADS_SEGMENT: &str = "leads";

/// Reasons a lead-creation call did not produce a lead.
#[derive(Debug, thiserror::Error)]
pub enum CrmClientError {
    #[error("CRM API key is not configured")]
    MissingApiKey,

    #[error("CRM request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Rejection bodies often echo the submitted contact details, so only
    /// the status is kept.
    #[error("CRM responded with HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("unparsable CRM response: {0}")]
    UnparsableResponse(String),
}

/// Bearer-authenticated CRM client with a fixed base URL.
///
/// Cheap to share: the inner `reqwest::Client` owns the connection pool.
pub struct HttpCrmClient {
    client: reqwest::Client,
    leads_url: Url,
    api_key: Option<ApiToken>,
}

impl HttpCrmClient {
    /// Build the client from configuration.
    ///
    /// A missing API key is not an error here: every call then reports
    /// [`CrmClientError::MissingApiKey`] so submissions fall back to the
    /// backup store.
    ///
    /// # Errors
    /// Fails if the base URL is not an absolute http(s) URL or the HTTP client
    /// cannot be created.
    pub fn new(config: &CrmConfig) -> anyhow::Result<Self> {
        let leads_url = leads_url(&config.api_base_url)?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .context("failed to build CRM HTTP client")?;

        Ok(Self {
            client,
            leads_url,
            api_key: config.api_key.clone(),
        })
    }

    /// Create a lead, returning the CRM-assigned id.
    ///
    /// # Errors
    /// See [`CrmClientError`].
    pub async fn create_lead(&self, submission: &ContactSubmission) -> Result<CrmLead, CrmClientError> {
        let api_key = self.api_key.as_ref().ok_or(CrmClientError::MissingApiKey)?;

        let response = self
            .client
            .post(self.leads_url.clone())
            .bearer_auth(api_key.expose())
            .header(ACCEPT, "application/json")
            .json(&CreateLeadRequest::from(submission))
            .send()
            .await
            .map_err(CrmClientError::Transport)?;

        let status = response.status();
        debug!(
            status = status.as_u16(),
            content_length = response.content_length(),
            "CRM response received"
        );
        if !status.is_success() {
            return Err(CrmClientError::Status(status));
        }

        let body = response.text().await.map_err(CrmClientError::Transport)?;

        let parsed: CreateLeadResponse = serde_json::from_str(&body)
            .map_err(|e| CrmClientError::UnparsableResponse(e.to_string()))?;
        if parsed.id.trim().is_empty() {
            return Err(CrmClientError::UnparsableResponse("empty lead id".to_owned()));
        }

        Ok(CrmLead { id: parsed.id })
    }
}

#[async_trait]
impl CrmPort for HttpCrmClient {
    #[instrument(skip_all, fields(service_type = %submission.service_type))]
    async fn create_lead_from_contact_form(&self, submission: &ContactSubmission) -> CrmLeadResult {
        match self.create_lead(submission).await {
            Ok(lead) => CrmLeadResult::Created(lead),
            Err(e) => CrmLeadResult::failed(e.to_string()),
        }
    }
}

fn leads_url(base: &str) -> anyhow::Result<Url> {
    let mut url = Url::parse(base).with_context(|| format!("invalid CRM base URL '{base}'"))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!("CRM base URL must use http or https, got '{}'", url.scheme());
    }
    url.path_segments_mut()
        .map_err(|()| anyhow::anyhow!("CRM base URL cannot be a base: '{base}'"))?
        .pop_if_empty()
        .push(LEADS_SEGMENT);
    Ok(url)
}
