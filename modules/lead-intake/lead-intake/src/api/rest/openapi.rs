use utoipa::OpenApi;

use super::dto::{
    AddressDto, ContactRequestDto, FailureDto, SubmitSuccessDto, ValidationFailureDto,
};
use super::handlers;

#[derive(OpenApi)]
#[openapi(
    info(title = "Lead Intake API", description = "Website contact-form intake"),
    paths(handlers::submit_contact),
    components(schemas(
        ContactRequestDto,
        AddressDto,
        SubmitSuccessDto,
        ValidationFailureDto,
        FailureDto,
        lead_intake_sdk::ServiceType
    )),
    tags((name = "contact", description = "Contact-form submissions"))
)]
pub struct ContactApiDoc;
