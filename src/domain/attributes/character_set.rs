//! Character composition categories for labels.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::label::label;

/// Character composition of a label.
///
/// Every label maps to exactly one variant. `CharacterSet::None` is the
/// catch-all for labels containing anything outside `[A-Za-z0-9]`; it is not
/// related to `Option::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterSet {
    Digit,
    Alphanumeric,
    Letter,
    None,
}

impl CharacterSet {
    /// Classifies a bare label. First match wins:
    ///
    /// 1. only ASCII digits → [`CharacterSet::Digit`]
    /// 2. only ASCII letters → [`CharacterSet::Letter`]
    /// 3. ASCII letters and digits, at least one of each → [`CharacterSet::Alphanumeric`]
    /// 4. anything else, including the empty label → [`CharacterSet::None`]
    pub fn from_label(label: &str) -> Self {
        if label.is_empty() {
            return Self::None;
        }

        let mut has_digit = false;
        let mut has_letter = false;

        for byte in label.bytes() {
            if byte.is_ascii_digit() {
                has_digit = true;
            } else if byte.is_ascii_alphabetic() {
                has_letter = true;
            } else {
                return Self::None;
            }
        }

        match (has_digit, has_letter) {
            (true, false) => Self::Digit,
            (false, true) => Self::Letter,
            _ => Self::Alphanumeric,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Digit => "digit",
            Self::Alphanumeric => "alphanumeric",
            Self::Letter => "letter",
            Self::None => "none",
        }
    }
}

impl fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies the leftmost label of `domain` by character composition.
pub fn classify_character_set(domain: &str) -> CharacterSet {
    CharacterSet::from_label(label(domain))
}
