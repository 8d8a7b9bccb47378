//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::attribute_service::AttributeService`] - Metadata attributes for domain names

pub mod services;
