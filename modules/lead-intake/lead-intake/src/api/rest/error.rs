use std::any::Any;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::error::DomainError;

use super::dto::{FailureDto, ValidationFailureDto};
use super::messages::ContactMessages;

/// Map a pipeline error to its HTTP response. Server-side detail is logged,
/// never returned.
pub fn domain_error_to_response(e: &DomainError, messages: &ContactMessages) -> Response {
    match e {
        DomainError::Validation { errors } => (
            StatusCode::BAD_REQUEST,
            Json(ValidationFailureDto::new(errors.clone())),
        )
            .into_response(),
        DomainError::AllWritesFailed { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(FailureDto::new(messages.total_failure.clone())),
        )
            .into_response(),
        DomainError::MalformedPayload(err) => {
            tracing::warn!(error = %err, "Contact request body is not valid JSON");
            unexpected_error_response(messages)
        }
    }
}

#[must_use]
pub fn unexpected_error_response(messages: &ContactMessages) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(FailureDto::new(messages.unexpected.clone())),
    )
        .into_response()
}

/// Response for a panic caught below the contact routes.
pub fn panic_response(messages: &ContactMessages, panic: &(dyn Any + Send)) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");
    tracing::error!(panic = detail, "Contact handler panicked");
    unexpected_error_response(messages)
}
