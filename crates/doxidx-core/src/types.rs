//! Core types for doxidx.
//!
//! This module defines the data model shared across all layers: the
//! [`IndexEntry`] record with its [`Target`] anchors, and the
//! [`SymbolCategory`] discriminant encoded in fragment file names.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// One search-index record: a lookup key plus the documentation anchors it
/// resolves to.
///
/// `key` is the normalised lowercase form with Doxygen's numeric
/// disambiguation suffix (`"capture_13"`); `name` is the display name shown
/// in the search widget (`"capture"`). `targets` preserves the order of
/// appearance in the generated table; no other ordering is meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub key: String,
    pub name: String,
    pub targets: Vec<Target>,
}

/// A single documentation anchor: a relative URL into the generated HTML
/// tree plus the qualified-scope text displayed next to it.
///
/// `label` is empty for targets that are pages rather than members
/// (`['../md_README.html',1,'']` in the generated data).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub url: String,
    pub label: String,
}

impl Target {
    pub fn new(url: impl Into<String>, label: impl Into<String>) -> Self {
        Self { url: url.into(), label: label.into() }
    }
}

// ---------------------------------------------------------------------------
// Symbol categories
// ---------------------------------------------------------------------------

/// The fragment family a search-index file belongs to, encoded in its file
/// name stem: `all_3.js` → `All`, `functions_3.js` → `Functions`, …
///
/// `All` fragments subsume the per-category families but number their keys
/// independently, so the two should not be merged into one index.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SymbolCategory {
    All,
    Classes,
    Namespaces,
    Files,
    Functions,
    Variables,
    Typedefs,
    Enums,
    EnumValues,
    Properties,
    Events,
    Related,
    Defines,
    Groups,
    Pages,
    Concepts,
}

/// File-name stem → category. Stems are the exact strings Doxygen uses when
/// naming fragment files.
static CATEGORY_BY_STEM: phf::Map<&'static str, SymbolCategory> = phf::phf_map! {
    "all" => SymbolCategory::All,
    "classes" => SymbolCategory::Classes,
    "namespaces" => SymbolCategory::Namespaces,
    "files" => SymbolCategory::Files,
    "functions" => SymbolCategory::Functions,
    "variables" => SymbolCategory::Variables,
    "typedefs" => SymbolCategory::Typedefs,
    "enums" => SymbolCategory::Enums,
    "enumvalues" => SymbolCategory::EnumValues,
    "properties" => SymbolCategory::Properties,
    "events" => SymbolCategory::Events,
    "related" => SymbolCategory::Related,
    "defines" => SymbolCategory::Defines,
    "groups" => SymbolCategory::Groups,
    "pages" => SymbolCategory::Pages,
    "concepts" => SymbolCategory::Concepts,
};

impl SymbolCategory {
    /// Look up a category from a fragment file-name stem (`"functions"`).
    pub fn from_stem(stem: &str) -> Option<Self> {
        CATEGORY_BY_STEM.get(stem).copied()
    }

    /// The file-name stem for this category.
    pub fn stem(self) -> &'static str {
        match self {
            SymbolCategory::All => "all",
            SymbolCategory::Classes => "classes",
            SymbolCategory::Namespaces => "namespaces",
            SymbolCategory::Files => "files",
            SymbolCategory::Functions => "functions",
            SymbolCategory::Variables => "variables",
            SymbolCategory::Typedefs => "typedefs",
            SymbolCategory::Enums => "enums",
            SymbolCategory::EnumValues => "enumvalues",
            SymbolCategory::Properties => "properties",
            SymbolCategory::Events => "events",
            SymbolCategory::Related => "related",
            SymbolCategory::Defines => "defines",
            SymbolCategory::Groups => "groups",
            SymbolCategory::Pages => "pages",
            SymbolCategory::Concepts => "concepts",
        }
    }
}

impl std::fmt::Display for SymbolCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.stem())
    }
}

/// Error returned when parsing an unrecognised category name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown symbol category {0:?}")]
pub struct UnknownCategory(pub String);

impl FromStr for SymbolCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SymbolCategory::from_stem(&s.to_ascii_lowercase())
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_round_trips_through_lookup() {
        for cat in [
            SymbolCategory::All,
            SymbolCategory::Functions,
            SymbolCategory::EnumValues,
            SymbolCategory::Concepts,
        ] {
            assert_eq!(SymbolCategory::from_stem(cat.stem()), Some(cat));
        }
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!("Functions".parse::<SymbolCategory>().unwrap(), SymbolCategory::Functions);
        assert_eq!("ALL".parse::<SymbolCategory>().unwrap(), SymbolCategory::All);
        assert!("widgets".parse::<SymbolCategory>().is_err());
    }
}
