use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::Extension;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use utoipa::OpenApi;

use crate::domain::service::Service;

use super::dto::{ContactRequestDto, FailureDto, SubmitSuccessDto, ValidationFailureDto};
use super::error::domain_error_to_response;
use super::messages::ContactMessages;
use super::openapi::ContactApiDoc;

/// Accept a contact-form submission.
///
/// The body is read as raw bytes; a body that is not JSON gets the generic
/// server-error response rather than an extractor rejection.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactRequestDto,
    responses(
        (status = 200, description = "Lead recorded", body = SubmitSuccessDto),
        (status = 400, description = "Validation failed", body = ValidationFailureDto),
        (status = 405, description = "Method not allowed"),
        (status = 500, description = "Lead could not be recorded", body = FailureDto)
    )
)]
pub async fn submit_contact(
    Extension(svc): Extension<Arc<Service>>,
    Extension(messages): Extension<Arc<ContactMessages>>,
    body: Bytes,
) -> Response {
    match svc.submit_raw(&body).await {
        Ok(report) => (
            StatusCode::OK,
            Json(SubmitSuccessDto::new(
                messages.success.clone(),
                report.receipt.lead_id,
            )),
        )
            .into_response(),
        Err(e) => domain_error_to_response(&e, &messages),
    }
}

pub async fn openapi_document() -> Json<utoipa::openapi::OpenApi> {
    Json(ContactApiDoc::openapi())
}
