//! Repository trait definitions for the domain layer.
//!
//! Traits define the data access contract; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.

pub mod domain_repository;

pub use domain_repository::DomainRepository;

#[cfg(test)]
pub use domain_repository::MockDomainRepository;
