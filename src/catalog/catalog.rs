//! Catalog collection and its derived listing.

use crate::catalog::{Item, NameFilter};
use crate::ids::{id_matches, ItemId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// An insertion-ordered collection of items, unique by id, with public
/// presentation configuration for the derived [`Catalog::list`].
///
/// The backing storage is never exposed; `list` hands out owned clones
/// so readers cannot perturb stored order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
    /// Name filter applied by `list`.
    pub filter: NameFilter,
    /// Whether `list` sorts by price.
    pub sort_by_price: bool,
    /// Sort direction for `list`: ascending when true.
    pub sort_ascending: bool,
}

impl Catalog {
    /// Create an empty catalog with the given presentation configuration.
    pub fn new(filter: NameFilter, sort_by_price: bool, sort_ascending: bool) -> Self {
        Self {
            items: Vec::new(),
            filter,
            sort_by_price,
            sort_ascending,
        }
    }

    /// Add an item to the end of the catalog.
    ///
    /// An item whose id is already present is dropped silently; the
    /// catalog never holds two items with the same id. Returns whether
    /// the item was inserted.
    pub fn add(&mut self, item: Item) -> bool {
        if self
            .items
            .iter()
            .any(|existing| id_matches(&existing.id, &item.id))
        {
            debug!(id = %item.id, "add of duplicate item id ignored");
            return false;
        }
        self.items.push(item);
        true
    }

    /// Remove the item with the given id.
    ///
    /// A missing id is a silent no-op. Returns whether an item was
    /// removed.
    pub fn remove(&mut self, id: &ItemId) -> bool {
        match self.items.iter().position(|item| id_matches(&item.id, id)) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => {
                debug!(id = %id, "remove of unknown item id ignored");
                false
            }
        }
    }

    /// Look up an item by id.
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| id_matches(&item.id, id))
    }

    /// Set the availability flag of a stored item.
    ///
    /// Returns whether an item with that id was found.
    pub fn set_available(&mut self, id: &ItemId, available: bool) -> bool {
        match self.items.iter_mut().find(|item| id_matches(&item.id, id)) {
            Some(item) => {
                item.set_available(available);
                true
            }
            None => false,
        }
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the catalog holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The derived listing: available items whose name matches the
    /// filter, sorted by price when configured.
    ///
    /// Computed freshly on every call; stored insertion order is never
    /// touched. The sort is stable, so equal prices keep their relative
    /// insertion order.
    pub fn list(&self) -> Vec<Item> {
        let mut listing: Vec<Item> = self
            .items
            .iter()
            .filter(|item| self.filter.matches(&item.name) && item.available)
            .cloned()
            .collect();
        if self.sort_by_price {
            if self.sort_ascending {
                listing.sort_by_key(|item| item.price.amount_cents);
            } else {
                listing.sort_by(|a, b| b.price.amount_cents.cmp(&a.price.amount_cents));
            }
        }
        listing
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(NameFilter::match_all(), false, true)
    }
}
