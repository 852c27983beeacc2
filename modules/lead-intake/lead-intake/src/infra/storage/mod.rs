//! Backup store for contact-form submissions.

pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod sea_orm_repo;
