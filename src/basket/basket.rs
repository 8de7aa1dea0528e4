//! Basket collection.

use crate::basket::BasketLine;
use crate::catalog::Item;
use crate::ids::{id_matches, ItemId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// An insertion-ordered collection of basket lines, unique by item id.
///
/// The basket holds independent snapshots; it shares no state with any
/// catalog the items came from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Basket {
    lines: Vec<BasketLine>,
    /// Currency totals are reported in.
    pub currency: Currency,
}

impl Basket {
    /// Create an empty basket totalling in USD.
    pub fn new() -> Self {
        Self::with_currency(Currency::USD)
    }

    /// Create an empty basket totalling in the given currency.
    pub fn with_currency(currency: Currency) -> Self {
        Self {
            lines: Vec::new(),
            currency,
        }
    }

    /// Add `amount` units of an item.
    ///
    /// An existing line for the same id has its amount increased by
    /// `amount` as given, with no bounds and no floor. Otherwise a fresh
    /// snapshot line is appended with that amount.
    pub fn add(&mut self, item: &Item, amount: i64) {
        match self
            .lines
            .iter_mut()
            .find(|line| id_matches(&line.item_id, &item.id))
        {
            Some(line) => line.amount += amount,
            None => self.lines.push(BasketLine::new(item, amount)),
        }
    }

    /// Remove `amount` units of an item.
    ///
    /// A line whose amount would drop below 1 is deleted entirely,
    /// never kept at zero. An item with no line in the basket is a
    /// silent no-op. Returns whether a line was changed or deleted.
    pub fn remove(&mut self, item: &Item, amount: i64) -> bool {
        let Some(index) = self
            .lines
            .iter()
            .position(|line| id_matches(&line.item_id, &item.id))
        else {
            debug!(id = %item.id, "remove of item not in basket ignored");
            return false;
        };

        let line = &mut self.lines[index];
        line.amount -= amount;
        if line.amount < 1 {
            self.lines.remove(index);
        }
        true
    }

    /// The lines currently in the basket, in insertion order.
    ///
    /// Unfiltered and unsorted; a read-only view of the live sequence.
    pub fn list(&self) -> &[BasketLine] {
        &self.lines
    }

    /// Look up a line by item id.
    pub fn get(&self, id: &ItemId) -> Option<&BasketLine> {
        self.lines.iter().find(|line| id_matches(&line.item_id, id))
    }

    /// Remove all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Drop every line whose snapshotted availability is false.
    ///
    /// Surviving lines keep their relative order. Returns the number of
    /// lines dropped.
    pub fn remove_unavailable(&mut self) -> usize {
        let before = self.lines.len();
        self.lines.retain(|line| line.available);
        let dropped = before - self.lines.len();
        if dropped > 0 {
            debug!(dropped, "pruned unavailable lines from basket");
        }
        dropped
    }

    /// Monetary total of the basket: the sum of unit price times amount
    /// over all lines. Zero for an empty basket.
    ///
    /// Note: despite the name, this returns the money;
    /// [`Basket::total_sum`] returns the unit count. Lines priced in a
    /// currency other than the basket's are skipped.
    pub fn total_amount(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(self.currency), |acc, line| {
                match acc.try_add(&line.line_total()) {
                    Some(total) => total,
                    None => {
                        debug!(id = %line.item_id, "line in foreign currency skipped in total");
                        acc
                    }
                }
            })
    }

    /// Total number of units across all lines. Zero for an empty basket.
    ///
    /// Note: despite the name, this returns the unit count;
    /// [`Basket::total_amount`] returns the money.
    pub fn total_sum(&self) -> i64 {
        self.lines.iter().map(|line| line.amount).sum()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check whether the basket holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Fold another basket into this one.
    ///
    /// Lines sharing an id have their amounts summed, with the same
    /// unchecked arithmetic as [`Basket::add`]; the rest are appended,
    /// keeping their order.
    pub fn merge(&mut self, other: Basket) {
        for line in other.lines {
            match self
                .lines
                .iter_mut()
                .find(|mine| id_matches(&mine.item_id, &line.item_id))
            {
                Some(mine) => mine.amount += line.amount,
                None => self.lines.push(line),
            }
        }
    }
}

impl Default for Basket {
    fn default() -> Self {
        Self::new()
    }
}
