use chrono::{DateTime, Utc};
use lead_intake_sdk::ContactSubmission;
use sea_orm::ActiveValue;
use uuid::Uuid;

use super::entity;

/// `form_type` discriminator for rows written by this pipeline.
pub const FORM_TYPE_CONTACT: &str = "contact";

/// Build the insert model for a normalized submission.
pub fn to_active_model(
    id: Uuid,
    submission: &ContactSubmission,
    crm_lead_id: Option<&str>,
    created_at: DateTime<Utc>,
) -> entity::ActiveModel {
    entity::ActiveModel {
        id: ActiveValue::Set(id),
        form_type: ActiveValue::Set(FORM_TYPE_CONTACT.to_owned()),
        first_name: ActiveValue::Set(submission.first_name.clone()),
        last_name: ActiveValue::Set(submission.last_name.clone()),
        email: ActiveValue::Set(submission.email.clone()),
        phone: ActiveValue::Set(submission.phone.clone()),
        message: ActiveValue::Set(submission.message.clone()),
        service_interest: ActiveValue::Set(submission.service_type.label().to_owned()),
        preferred_contact: ActiveValue::Set(submission.preferred_contact.clone()),
        source_page: ActiveValue::Set(Some(submission.source_page.clone())),
        utm_source: ActiveValue::Set(submission.attribution.utm_source.clone()),
        utm_medium: ActiveValue::Set(submission.attribution.utm_medium.clone()),
        utm_campaign: ActiveValue::Set(submission.attribution.utm_campaign.clone()),
        crm_lead_id: ActiveValue::Set(crm_lead_id.map(str::to_owned)),
        created_at: ActiveValue::Set(created_at),
    }
}
