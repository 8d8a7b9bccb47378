//! Core domain entities.
//!
//! - [`Domain`] - A registered name read from the naming service's store

pub mod domain;

pub use domain::Domain;
