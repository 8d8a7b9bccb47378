//! Number club rarity tiers for numeric labels.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::label::label;

/// Rarity tier of a label that is a round decimal numeral.
///
/// Labels that do not qualify are represented by `Option::None` at the call
/// site rather than by a dedicated variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumberClub {
    /// `1..=999`
    #[serde(rename = "999 Club")]
    NinetyNineNine,
    /// `1000..=10000`
    #[serde(rename = "10k Club")]
    TenK,
    /// `10001..=100000`
    #[serde(rename = "100k Club")]
    HundredK,
}

impl NumberClub {
    /// Classifies a bare label.
    ///
    /// Returns `None` when the label contains a non-digit, starts with `'0'`
    /// (which also rules out `"0"` itself) or falls outside `1..=100000`.
    pub fn from_label(label: &str) -> Option<Self> {
        if label.is_empty() || !label.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        if label.starts_with('0') {
            return None;
        }

        // Overflow only happens far beyond the last tier.
        let value: u64 = label.parse().ok()?;

        match value {
            1..=999 => Some(Self::NinetyNineNine),
            1_000..=10_000 => Some(Self::TenK),
            10_001..=100_000 => Some(Self::HundredK),
            _ => None,
        }
    }

    /// Human-readable club name, as exposed in metadata.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NinetyNineNine => "999 Club",
            Self::TenK => "10k Club",
            Self::HundredK => "100k Club",
        }
    }
}

impl fmt::Display for NumberClub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies the leftmost label of `domain` into a number club.
pub fn classify_number_club(domain: &str) -> Option<NumberClub> {
    NumberClub::from_label(label(domain))
}
