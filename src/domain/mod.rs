//! Domain layer containing entities, repository contracts and the attribute
//! classifiers.
//!
//! # Architecture
//!
//! - [`attributes`] - Pure classification of domain names
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers.

pub mod attributes;
pub mod entities;
pub mod repositories;
