//! DTOs for attribute classification and listing.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::attributes::{CharacterSet, DomainAttributes, NumberClub};

/// Longest name accepted by the classify endpoint, matching the DNS limit.
pub const MAX_NAME_LENGTH: usize = 253;

/// Request to classify one or more names.
#[derive(Debug, Deserialize, Validate)]
pub struct ClassifyRequest {
    #[validate(length(min = 1, max = 100))]
    #[validate(custom(function = "validate_names"))]
    pub names: Vec<String>,
}

#[allow(clippy::ptr_arg)]
fn validate_names(names: &Vec<String>) -> Result<(), ValidationError> {
    if names
        .iter()
        .any(|n| n.is_empty() || n.len() > MAX_NAME_LENGTH)
    {
        let mut err = ValidationError::new("name_length");
        err.message = Some(format!("Each name must be 1-{MAX_NAME_LENGTH} bytes long").into());
        return Err(err);
    }

    Ok(())
}

/// Classification result for a single name.
///
/// `number_club` is `null` for labels outside every club.
#[derive(Debug, Serialize)]
pub struct AttributesItem {
    pub name: String,
    pub label: String,
    pub suffix: Option<String>,
    pub length: usize,
    pub number_club: Option<NumberClub>,
    pub character_set: CharacterSet,
}

impl From<DomainAttributes> for AttributesItem {
    fn from(a: DomainAttributes) -> Self {
        Self {
            name: a.name,
            label: a.label,
            suffix: a.suffix,
            length: a.length,
            number_club: a.number_club,
            character_set: a.character_set,
        }
    }
}

/// Response for `POST /api/classify`.
#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub items: Vec<AttributesItem>,
}

/// Response for `GET /api/domains`.
#[derive(Debug, Serialize)]
pub struct DomainAttributesListResponse {
    pub pagination: PaginationMeta,
    pub items: Vec<AttributesItem>,
}

/// Pagination metadata for list responses.
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub limit: i64,
    pub offset: i64,
    pub total_items: i64,
}
