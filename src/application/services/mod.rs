//! Business logic services for the application layer.

pub mod attribute_service;

pub use attribute_service::AttributeService;
