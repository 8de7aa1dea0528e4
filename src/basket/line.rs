//! Basket line: an item snapshot plus a quantity.

use crate::catalog::Item;
use crate::ids::ItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A basket's copy of an item at the moment it was added, plus the
/// chosen quantity.
///
/// Fields are denormalized from the source [`Item`]; later mutations of
/// the item or of any catalog holding it do not reach lines already in
/// a basket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BasketLine {
    /// Id of the snapshotted item.
    pub item_id: ItemId,
    /// Name at the moment of addition.
    pub name: String,
    /// Description at the moment of addition.
    pub description: String,
    /// Sizes at the moment of addition.
    pub sizes: Vec<u32>,
    /// Unit price at the moment of addition.
    pub price: Money,
    /// Availability at the moment of addition.
    pub available: bool,
    /// Number of units of this item in the basket.
    pub amount: i64,
}

impl BasketLine {
    /// Snapshot an item into a new line with the given amount.
    pub fn new(item: &Item, amount: i64) -> Self {
        Self {
            item_id: item.id.clone(),
            name: item.name.clone(),
            description: item.description.clone(),
            sizes: item.sizes.clone(),
            price: item.price,
            available: item.available,
            amount,
        }
    }

    /// Monetary total of this line: unit price times amount.
    pub fn line_total(&self) -> Money {
        self.price.multiply(self.amount)
    }
}
