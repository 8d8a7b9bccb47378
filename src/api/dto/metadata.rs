//! DTOs for the public metadata endpoint.

use serde::Serialize;

use crate::domain::attributes::{DomainAttributes, NftAttribute};

/// ERC-721 style metadata document for a registered domain.
#[derive(Debug, Serialize)]
pub struct MetadataResponse {
    pub name: String,
    pub attributes: Vec<NftAttribute>,
}

impl From<DomainAttributes> for MetadataResponse {
    fn from(attributes: DomainAttributes) -> Self {
        Self {
            attributes: attributes.to_nft_attributes(),
            name: attributes.name,
        }
    }
}
