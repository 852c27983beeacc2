use std::any::Any;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Extension, Router};
use tower_http::catch_panic::CatchPanicLayer;

use crate::domain::service::Service;

use super::error;
use super::handlers;
use super::messages::ContactMessages;

pub const CONTACT_PATH: &str = "/api/contact";
pub const OPENAPI_PATH: &str = "/api/contact/openapi.json";

/// Mount the contact routes on `router`.
///
/// Panics inside the contact handlers are rendered as the generic
/// unexpected-error response.
pub fn register_routes(
    router: Router,
    service: Arc<Service>,
    messages: Arc<ContactMessages>,
) -> Router {
    let panic_messages = Arc::clone(&messages);

    let contact = Router::new()
        .route(CONTACT_PATH, post(handlers::submit_contact))
        .route(OPENAPI_PATH, get(handlers::openapi_document))
        .layer(Extension(service))
        .layer(Extension(messages))
        .layer(CatchPanicLayer::custom(
            move |panic: Box<dyn Any + Send + 'static>| {
                error::panic_response(&panic_messages, panic.as_ref())
            },
        ));

    router.merge(contact)
}
