//! Metadata attributes derived from a domain name.
//!
//! Classification works on the leftmost label only; the suffix is stripped
//! and never influences a category.
//!
//! # Classifiers
//!
//! - [`classify_number_club`] - rarity tier of round decimal labels
//! - [`classify_character_set`] - character composition of the label
//!
//! Both are pure functions over `&str` and can be called from any thread.
//! [`DomainAttributes`] bundles their results with the label length and
//! suffix for metadata rendering.

pub mod character_set;
pub mod label;
pub mod number_club;

pub use character_set::{CharacterSet, classify_character_set};
pub use label::{label, split};
pub use number_club::{NumberClub, classify_number_club};

use serde::Serialize;
use serde_json::Value;

/// All attributes computed for one domain name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainAttributes {
    pub name: String,
    pub label: String,
    pub suffix: Option<String>,
    /// Number of characters in the label.
    pub length: usize,
    pub number_club: Option<NumberClub>,
    pub character_set: CharacterSet,
}

impl DomainAttributes {
    /// Extracts the label once and runs both classifiers on it.
    pub fn from_name(name: &str) -> Self {
        let (label, suffix) = split(name);

        Self {
            name: name.to_string(),
            label: label.to_string(),
            suffix: suffix.map(str::to_string),
            length: label.chars().count(),
            number_club: NumberClub::from_label(label),
            character_set: CharacterSet::from_label(label),
        }
    }

    /// Renders the attributes as ERC-721 metadata entries.
    ///
    /// `Ending` is omitted for dotless names and `Number Club` for labels
    /// outside every club.
    pub fn to_nft_attributes(&self) -> Vec<NftAttribute> {
        let mut attributes = Vec::with_capacity(4);

        if let Some(suffix) = &self.suffix {
            attributes.push(NftAttribute::new("Ending", suffix.as_str()));
        }

        attributes.push(NftAttribute {
            trait_type: "Length".to_string(),
            value: Value::from(self.length),
            display_type: Some("number".to_string()),
        });

        attributes.push(NftAttribute::new(
            "Character Set",
            self.character_set.as_str(),
        ));

        if let Some(club) = self.number_club {
            attributes.push(NftAttribute::new("Number Club", club.as_str()));
        }

        attributes
    }
}

/// Single `{"trait_type", "value"}` entry of an NFT metadata document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NftAttribute {
    pub trait_type: String,
    pub value: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_type: Option<String>,
}

impl NftAttribute {
    fn new(trait_type: &str, value: &str) -> Self {
        Self {
            trait_type: trait_type.to_string(),
            value: Value::from(value),
            display_type: None,
        }
    }
}
