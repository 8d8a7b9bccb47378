//! PostgreSQL repository implementations.
//!
//! # Repositories
//!
//! - [`PgDomainRepository`] - Read access to registered domains

pub mod pg_domain_repository;

pub use pg_domain_repository::PgDomainRepository;
