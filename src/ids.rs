//! Newtype identifier for catalog items.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique item identifier.
///
/// Identity throughout this crate is strict equality on the inner string;
/// see [`id_matches`]. An id is assigned when the item is created and
/// never reassigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(String);

impl ItemId {
    /// Create an id from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Identity comparison used by every find-by-id operation in the crate.
///
/// The catalog and basket never compare whole records: a candidate matches
/// exactly when its id equals the target id.
pub fn id_matches(candidate: &ItemId, target: &ItemId) -> bool {
    candidate == target
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ItemId::new("sku-123");
        assert_eq!(id.as_str(), "sku-123");
    }

    #[test]
    fn test_id_display() {
        let id = ItemId::new("sku-789");
        assert_eq!(format!("{}", id), "sku-789");
    }

    #[test]
    fn test_id_equality() {
        let id1 = ItemId::new("same");
        let id2 = ItemId::new("same");
        let id3 = ItemId::new("different");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_id_matches() {
        let target = ItemId::new("sku-1");
        assert!(id_matches(&ItemId::new("sku-1"), &target));
        assert!(!id_matches(&ItemId::new("sku-2"), &target));
    }
}
