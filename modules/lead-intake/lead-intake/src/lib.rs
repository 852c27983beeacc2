//! Lead intake module.
//!
//! Accepts website contact-form submissions, validates and normalizes them,
//! forwards each one to the field-service CRM and records a backup row in
//! the `form_submissions` table. The public API is defined in
//! `lead-intake-sdk` and re-exported here.

pub use lead_intake_sdk::{
    ContactSubmission, LeadIntakeClientV1, LeadIntakeError, ServedBy, ServiceType,
    SubmissionReceipt,
};

pub mod module;
pub use module::LeadIntakeModule;

pub mod local_client;

#[doc(hidden)]
pub mod api;
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
