//! Sellable item record.

use crate::ids::ItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A sellable product.
///
/// Fields are stored exactly as given; callers are trusted to pass
/// sensible values. The id is assigned at creation and by convention
/// never reassigned. Only availability is meant to change over an
/// item's lifetime, via [`Item::set_available`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    /// Unique item identifier.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Long-form description.
    pub description: String,
    /// Available sizes, in listing order.
    pub sizes: Vec<u32>,
    /// Unit price.
    pub price: Money,
    /// Whether the item is currently sellable.
    pub available: bool,
}

impl Item {
    /// Create a new item with exactly the given field values.
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        description: impl Into<String>,
        sizes: Vec<u32>,
        price: Money,
        available: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            sizes,
            price,
            available,
        }
    }

    /// Set the availability flag. No other field is touched.
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    /// Check if the item is available for purchase.
    pub fn is_available(&self) -> bool {
        self.available
    }
}
