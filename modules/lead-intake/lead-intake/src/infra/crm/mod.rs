//! Outbound adapter for the field-service CRM.

mod dto;
mod http_crm_client;

pub use http_crm_client::{CrmClientError, HttpCrmClient};
