pub mod dto;
pub mod error;
pub mod handlers;
pub mod messages;
pub mod openapi;
pub mod routes;
