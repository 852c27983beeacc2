//! Lead Intake SDK
//!
//! This crate provides the public API for the lead-intake module:
//! - `LeadIntakeClientV1` trait for in-process consumers
//! - Model types (`ContactSubmission`, `ServiceType`, `SubmissionReceipt`)
//! - Error type (`LeadIntakeError`)

#![forbid(unsafe_code)]

pub mod api;
pub mod errors;
pub mod models;

pub use api::LeadIntakeClientV1;
pub use errors::LeadIntakeError;
pub use models::{
    Address, Attribution, ContactSubmission, ServedBy, ServiceType, SubmissionReceipt,
    UnknownServiceType,
};
