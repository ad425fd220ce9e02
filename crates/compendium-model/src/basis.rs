//! Type-safe basis enumeration.
//!
//! Every claim in the content model is tagged with the evidentiary source it
//! came from. The enumeration, its marker vocabulary, and its display labels
//! form one fixed configuration table: a future basis extends all three here
//! and nowhere else.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CompendiumError;

/// Evidentiary source of a claim.
///
/// `All` is the merged view with no basis distinction; the other three tag a
/// span of text to research literature, a book/traditional reference, or
/// general knowledge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Basis {
    /// Merged view, no basis distinction.
    All,

    /// Research literature (papers, trials).
    Research,

    /// Book or traditional reference.
    Book,

    /// General knowledge.
    Gen,
}

impl Basis {
    /// The three bases that can appear as markers inside concatenated text.
    pub const NON_ALL: [Basis; 3] = [Basis::Research, Basis::Book, Basis::Gen];

    /// Returns the canonical name used as a field-value key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Basis::All => "All",
            Basis::Research => "Research",
            Basis::Book => "Book",
            Basis::Gen => "Gen",
        }
    }

    /// Marker phrases recognized as opening a span for this basis inside
    /// concatenated text, in recognition order. Empty for `All`, which never
    /// appears as an embedded marker.
    pub fn marker_phrases(&self) -> &'static [&'static str] {
        match self {
            Basis::All => &[],
            Basis::Research => &["research basis", "research:", "r:", "r -"],
            Basis::Book => &["book basis", "book:", "b:", "b -"],
            Basis::Gen => &["gen basis", "gen:", "g:", "g -"],
        }
    }

    /// Single-character display label used when values from several bases are
    /// joined into one view. `All` entries are never labeled.
    pub fn display_label(&self) -> Option<char> {
        match self {
            Basis::All => None,
            Basis::Research => Some('R'),
            Basis::Book => Some('B'),
            Basis::Gen => Some('G'),
        }
    }
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Basis {
    type Err = CompendiumError;

    /// Parse a basis name. Accepts the canonical names case-insensitively
    /// plus the single-letter short forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "a" => Ok(Basis::All),
            "research" | "r" => Ok(Basis::Research),
            "book" | "b" => Ok(Basis::Book),
            "gen" | "g" => Ok(Basis::Gen),
            _ => Err(CompendiumError::UnknownBasis(s.trim().to_string())),
        }
    }
}
