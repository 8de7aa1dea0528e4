//! Storefront error types.

use thiserror::Error;

/// Errors surfaced by storefront-core.
///
/// The catalog and basket operations themselves never fail: invalid input
/// is dropped silently and the operation reports whether it had an effect.
/// What remains fallible is parsing at the crate boundary.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Unrecognized currency code.
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),
}
