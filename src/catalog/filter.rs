//! Name filter for catalog listings.

use serde::{Deserialize, Serialize};

/// Case-insensitive substring filter applied to item names.
///
/// A name matches when its lowercased form contains the lowercased
/// pattern. The empty pattern matches every name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameFilter {
    pattern: String,
}

impl NameFilter {
    /// Create a filter from a pattern.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    /// A filter that matches every name.
    pub fn match_all() -> Self {
        Self::new("")
    }

    /// The pattern this filter was built from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Check whether a name matches.
    pub fn matches(&self, name: &str) -> bool {
        name.to_lowercase().contains(&self.pattern.to_lowercase())
    }
}

impl Default for NameFilter {
    fn default() -> Self {
        Self::match_all()
    }
}
