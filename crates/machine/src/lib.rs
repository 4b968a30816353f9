//! Vending-machine domain module.
//!
//! This crate contains the inventory and transaction ledger for a single
//! machine instance, implemented purely as deterministic domain logic
//! (no IO, no terminal, no storage).

pub mod catalog;
pub mod ledger;
pub mod receipt;
pub mod report;

pub use catalog::{Catalog, Item, PurchaseRequest, RequestLine};
pub use ledger::{
    CoinInserted, InsertCoin, LedgerCommand, LedgerEvent, Purchase, PurchaseSettled, VendingLedger,
};
pub use receipt::{Receipt, ReceiptLine, SkipReason, SkippedLine};
pub use report::SalesSummary;
