//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod attributes;
pub mod health;
pub mod metadata;

pub use attributes::{classify_handler, domain_attributes_list_handler};
pub use health::health_handler;
pub use metadata::metadata_handler;
