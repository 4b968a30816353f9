//! Domain error model.

use thiserror::Error;

use crate::money::Money;

/// Result type used across the domain layer.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Domain-level error.
///
/// Every variant is recoverable at the call site: the driving loop reports it
/// and re-prompts. None is fatal to the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// A coin or price amount was zero, unparseable, or overflowed.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// An item selection referenced no catalog entry.
    #[error("invalid item number: {index} (catalog has {catalog_len} items)")]
    InvalidIndex { index: usize, catalog_len: usize },

    /// A requested quantity was below one.
    #[error("invalid quantity: {0} (must be at least 1)")]
    InvalidQuantity(u32),

    /// Parallel item/quantity sequences differ in length.
    #[error("mismatched number of items and quantities ({items} vs {quantities})")]
    MismatchedLengths { items: usize, quantities: usize },

    /// The fulfillable total exceeds the inserted balance.
    #[error("insufficient funds: total {required} exceeds inserted {available}")]
    InsufficientFunds { required: Money, available: Money },

    /// A value failed validation (e.g. malformed input, duplicate item name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    Invariant(String),
}

impl LedgerError {
    pub fn invalid_amount(msg: impl Into<String>) -> Self {
        Self::InvalidAmount(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::Invariant(msg.into())
    }
}
