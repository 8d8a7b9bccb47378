//! # Domain Attributes
//!
//! Metadata attribute service for domain names managed by a naming service.
//! Each name is classified by the leftmost label into a number club rarity
//! tier and a character set category, and rendered as NFT metadata.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Classifiers, entities and repository traits
//! - **Application Layer** ([`application`]) - Attribute service
//! - **Infrastructure Layer** ([`infrastructure`]) - PostgreSQL access
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Classification
//!
//! ```
//! use domain_attributes::domain::attributes::{
//!     CharacterSet, NumberClub, classify_character_set, classify_number_club,
//! };
//!
//! assert_eq!(classify_number_club("9999.x"), Some(NumberClub::TenK));
//! assert_eq!(classify_number_club("0202.nft"), None);
//! assert_eq!(classify_character_set("0202.nft"), CharacterSet::Digit);
//! assert_eq!(classify_character_set("9294-2.x"), CharacterSet::None);
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::AttributeService;
    pub use crate::domain::attributes::{
        CharacterSet, DomainAttributes, NumberClub, classify_character_set, classify_number_club,
    };
    pub use crate::domain::entities::Domain;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
