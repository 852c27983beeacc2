pub mod error;
pub mod fields;
pub mod normalize;
pub mod ports;
pub mod repo;
pub mod service;
pub mod validation;

#[cfg(test)]
mod service_test;
