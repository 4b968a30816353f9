//! Receipt types returned by a completed purchase.

use serde::{Deserialize, Serialize};

use vendo_core::{Money, TransactionId};

/// Why a requested line was dropped from the receipt.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The item had no stock left when the line was considered.
    OutOfStock,
    /// The item had some stock, but less than requested.
    InsufficientStock { requested: u32, available: u32 },
}

impl core::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SkipReason::OutOfStock => write!(f, "out of stock"),
            SkipReason::InsufficientStock {
                requested,
                available,
            } => write!(f, "insufficient stock ({requested} requested, {available} left)"),
        }
    }
}

/// A fulfilled line on the receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub item_index: usize,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub line_total: Money,
}

/// A requested line that could not be fulfilled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedLine {
    pub item_index: usize,
    pub name: String,
    pub reason: SkipReason,
}

/// Summary of a settled purchase: fulfilled lines, skipped lines, total cost
/// and change due.
///
/// Skipped lines are informational; they never fail the transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub transaction_id: TransactionId,
    pub lines: Vec<ReceiptLine>,
    pub skipped: Vec<SkippedLine>,
    pub total: Money,
    pub change: Money,
}

impl Receipt {
    /// True when no line could be fulfilled.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
