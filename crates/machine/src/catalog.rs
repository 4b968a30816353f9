//! Catalog of purchasable items and the purchase request shape.

use serde::{Deserialize, Serialize};

use vendo_core::{LedgerError, LedgerResult, Money};

/// A purchasable item: unique name, unit price, stock on hand.
///
/// Stock is mutated only through purchase settlement on the owning ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    unit_price: Money,
    stock: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, unit_price: Money, stock: u32) -> LedgerResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(LedgerError::validation("item name cannot be empty"));
        }
        Ok(Self {
            name,
            unit_price,
            stock,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub(crate) fn deduct(&mut self, quantity: u32) {
        self.stock = self.stock.saturating_sub(quantity);
    }
}

/// Ordered collection of items.
///
/// Insertion order is significant: it defines the 1-based display indices
/// shoppers select by. No two items may share a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> LedgerResult<Self> {
        for (i, item) in items.iter().enumerate() {
            if items[..i].iter().any(|other| other.name == item.name) {
                return Err(LedgerError::validation(format!(
                    "duplicate item name: {}",
                    item.name
                )));
            }
        }
        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate items with their 1-based display indices.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &Item)> {
        self.items.iter().enumerate().map(|(i, item)| (i + 1, item))
    }

    /// Look up an item by its 1-based display index.
    pub fn get(&self, display_index: usize) -> Option<&Item> {
        display_index
            .checked_sub(1)
            .and_then(|i| self.items.get(i))
    }

    pub(crate) fn get_mut(&mut self, display_index: usize) -> Option<&mut Item> {
        display_index
            .checked_sub(1)
            .and_then(|i| self.items.get_mut(i))
    }
}

/// One requested line: 1-based catalog index and desired quantity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestLine {
    pub item_index: usize,
    pub quantity: u32,
}

/// An ephemeral purchase request, constructed per transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    lines: Vec<RequestLine>,
}

impl PurchaseRequest {
    /// Build a request from already-paired lines.
    ///
    /// Pairing by construction means `MismatchedLengths` cannot occur here.
    pub fn new(lines: Vec<RequestLine>) -> Self {
        Self { lines }
    }

    /// Build a request from two separately parsed parallel sequences, as the
    /// console interface produces them.
    pub fn from_parallel(indices: &[usize], quantities: &[u32]) -> LedgerResult<Self> {
        if indices.len() != quantities.len() {
            return Err(LedgerError::MismatchedLengths {
                items: indices.len(),
                quantities: quantities.len(),
            });
        }
        let lines = indices
            .iter()
            .zip(quantities)
            .map(|(&item_index, &quantity)| RequestLine {
                item_index,
                quantity,
            })
            .collect();
        Ok(Self { lines })
    }

    pub fn lines(&self) -> &[RequestLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
