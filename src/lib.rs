//! In-memory catalog and basket domain types for storefront applications.
//!
//! This crate provides the two collection types a storefront needs before
//! any persistence or transport layer enters the picture:
//!
//! - **Catalog**: an insertion-ordered set of sellable [`Item`]s, unique by
//!   id, with a filtered and optionally price-sorted listing derived on
//!   every read.
//! - **Basket**: the items a buyer intends to purchase, held as independent
//!   snapshots ([`BasketLine`]) so catalog edits never reach a basket
//!   retroactively.
//!
//! All state lives in memory for the lifetime of the owning value. Invalid
//! input (a duplicate id, a remove for an id that is not there) is dropped
//! silently rather than reported as an error; the operations return
//! whether they had an effect.
//!
//! # Example
//!
//! ```
//! use storefront_core::prelude::*;
//!
//! let mut catalog = Catalog::new(NameFilter::new("boot"), true, true);
//! catalog.add(Item::new(
//!     "sku-1",
//!     "Trail Boot",
//!     "Waterproof hiking boot",
//!     vec![41, 42, 43],
//!     Money::new(4999, Currency::USD),
//!     true,
//! ));
//!
//! let mut basket = Basket::new();
//! for item in catalog.list() {
//!     basket.add(&item, 2);
//! }
//!
//! assert_eq!(basket.total_amount(), Money::new(9998, Currency::USD));
//! assert_eq!(basket.total_sum(), 2);
//! ```
//!
//! [`Item`]: catalog::Item
//! [`BasketLine`]: basket::BasketLine

pub mod error;
pub mod ids;
pub mod money;

pub mod basket;
pub mod catalog;

pub use error::StoreError;
pub use ids::ItemId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::basket::{Basket, BasketLine};
    pub use crate::catalog::{Catalog, Item, NameFilter};
    pub use crate::error::StoreError;
    pub use crate::ids::ItemId;
    pub use crate::money::{Currency, Money};
}
