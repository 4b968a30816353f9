//! The vending ledger aggregate: single source of truth for stock levels and
//! the inserted balance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vendo_core::{
    Aggregate, AggregateRoot, LedgerError, LedgerResult, MachineId, Money, TransactionId,
};
use vendo_events::{Event, execute};

use crate::catalog::{Catalog, Item, PurchaseRequest};
use crate::receipt::{Receipt, ReceiptLine, SkipReason, SkippedLine};

/// Aggregate root: VendingLedger.
///
/// Owns the catalog and the balance of coins inserted since the last settled
/// transaction. Not safe for concurrent mutation; exactly one driver owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendingLedger {
    id: MachineId,
    catalog: Catalog,
    balance: Money,
    version: u64,
}

impl VendingLedger {
    /// Create a ledger over a catalog populated once at startup.
    pub fn new(id: MachineId, catalog: Catalog) -> Self {
        Self {
            id,
            catalog,
            balance: Money::ZERO,
            version: 0,
        }
    }

    pub fn id_typed(&self) -> MachineId {
        self.id
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Snapshot of the catalog for display: 1-based index per item, insertion
    /// order. No side effects.
    pub fn list_items(&self) -> impl Iterator<Item = (usize, &Item)> {
        self.catalog.entries()
    }

    /// Check that every line references an existing catalog entry with a
    /// quantity of at least one.
    pub fn validate_request(&self, request: &PurchaseRequest) -> LedgerResult<()> {
        for line in request.lines() {
            if self.catalog.get(line.item_index).is_none() {
                return Err(LedgerError::InvalidIndex {
                    index: line.item_index,
                    catalog_len: self.catalog.len(),
                });
            }
            if line.quantity < 1 {
                return Err(LedgerError::InvalidQuantity(line.quantity));
            }
        }
        Ok(())
    }

    /// Add a coin to the balance and return the new total.
    pub fn insert_coin(&mut self, amount: Money) -> LedgerResult<Money> {
        let cmd = LedgerCommand::InsertCoin(InsertCoin {
            machine_id: self.id,
            amount,
            occurred_at: Utc::now(),
        });
        let mut events = execute(self, &cmd)?;
        match events.pop() {
            Some(LedgerEvent::CoinInserted(e)) => Ok(e.new_balance),
            _ => Err(LedgerError::invariant("coin insert emitted no event")),
        }
    }

    /// Settle a purchase against stock and balance.
    ///
    /// Unfulfillable lines are skipped, not fatal; `InsufficientFunds` is
    /// checked before any mutation, so a rejected purchase leaves stock and
    /// balance untouched.
    pub fn purchase(&mut self, request: PurchaseRequest) -> LedgerResult<Receipt> {
        let cmd = LedgerCommand::Purchase(Purchase {
            machine_id: self.id,
            transaction_id: TransactionId::new(),
            request,
            occurred_at: Utc::now(),
        });
        let mut events = execute(self, &cmd)?;
        match events.pop() {
            Some(LedgerEvent::PurchaseSettled(e)) => Ok(e.receipt),
            _ => Err(LedgerError::invariant("purchase emitted no event")),
        }
    }
}

impl AggregateRoot for VendingLedger {
    type Id = MachineId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: InsertCoin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertCoin {
    pub machine_id: MachineId,
    pub amount: Money,
    pub occurred_at: DateTime<Utc>,
}

/// Command: Purchase.
///
/// Carries its `TransactionId` so `handle` stays deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    pub machine_id: MachineId,
    pub transaction_id: TransactionId,
    pub request: PurchaseRequest,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerCommand {
    InsertCoin(InsertCoin),
    Purchase(Purchase),
}

/// Event: CoinInserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinInserted {
    pub machine_id: MachineId,
    pub amount: Money,
    pub new_balance: Money,
    pub occurred_at: DateTime<Utc>,
}

/// Event: PurchaseSettled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseSettled {
    pub machine_id: MachineId,
    pub receipt: Receipt,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerEvent {
    CoinInserted(CoinInserted),
    PurchaseSettled(PurchaseSettled),
}

impl Event for LedgerEvent {
    fn event_type(&self) -> &'static str {
        match self {
            LedgerEvent::CoinInserted(_) => "vending.coin_inserted",
            LedgerEvent::PurchaseSettled(_) => "vending.purchase_settled",
        }
    }

    fn schema_version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            LedgerEvent::CoinInserted(e) => e.occurred_at,
            LedgerEvent::PurchaseSettled(e) => e.occurred_at,
        }
    }
}

impl Aggregate for VendingLedger {
    type Command = LedgerCommand;
    type Event = LedgerEvent;
    type Error = LedgerError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            LedgerEvent::CoinInserted(e) => {
                self.balance = e.new_balance;
            }
            LedgerEvent::PurchaseSettled(e) => {
                for line in &e.receipt.lines {
                    if let Some(item) = self.catalog.get_mut(line.item_index) {
                        item.deduct(line.quantity);
                    }
                }
                // Balance resets unconditionally, change owed or not.
                self.balance = Money::ZERO;
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            LedgerCommand::InsertCoin(cmd) => self.handle_insert_coin(cmd),
            LedgerCommand::Purchase(cmd) => self.handle_purchase(cmd),
        }
    }
}

impl VendingLedger {
    fn ensure_machine_id(&self, machine_id: MachineId) -> LedgerResult<()> {
        if self.id != machine_id {
            return Err(LedgerError::invariant("machine_id mismatch"));
        }
        Ok(())
    }

    fn handle_insert_coin(&self, cmd: &InsertCoin) -> LedgerResult<Vec<LedgerEvent>> {
        self.ensure_machine_id(cmd.machine_id)?;

        if cmd.amount.is_zero() {
            return Err(LedgerError::invalid_amount("coin value must be positive"));
        }

        let new_balance = self
            .balance
            .checked_add(cmd.amount)
            .ok_or_else(|| LedgerError::invalid_amount("balance overflow"))?;

        Ok(vec![LedgerEvent::CoinInserted(CoinInserted {
            machine_id: cmd.machine_id,
            amount: cmd.amount,
            new_balance,
            occurred_at: cmd.occurred_at,
        })])
    }

    /// Two-pass settlement: first decide which lines are fulfillable and what
    /// they cost, then check the total against the balance. Mutation only
    /// happens later in `apply`, so a funds rejection touches nothing.
    fn handle_purchase(&self, cmd: &Purchase) -> LedgerResult<Vec<LedgerEvent>> {
        self.ensure_machine_id(cmd.machine_id)?;
        self.validate_request(&cmd.request)?;

        let mut lines = Vec::new();
        let mut skipped = Vec::new();
        let mut total = Money::ZERO;
        // Planned decrement per catalog slot, so a later duplicate line sees
        // remaining stock rather than the original count.
        let mut planned = vec![0u32; self.catalog.len()];

        for line in cmd.request.lines() {
            let Some(item) = self.catalog.get(line.item_index) else {
                return Err(LedgerError::InvalidIndex {
                    index: line.item_index,
                    catalog_len: self.catalog.len(),
                });
            };

            let slot = line.item_index - 1;
            let available = item.stock() - planned[slot];
            if available == 0 {
                skipped.push(SkippedLine {
                    item_index: line.item_index,
                    name: item.name().to_owned(),
                    reason: SkipReason::OutOfStock,
                });
                continue;
            }
            if line.quantity > available {
                skipped.push(SkippedLine {
                    item_index: line.item_index,
                    name: item.name().to_owned(),
                    reason: SkipReason::InsufficientStock {
                        requested: line.quantity,
                        available,
                    },
                });
                continue;
            }

            let line_total = item
                .unit_price()
                .checked_mul(line.quantity)
                .ok_or_else(|| LedgerError::invalid_amount("line total overflow"))?;
            total = total
                .checked_add(line_total)
                .ok_or_else(|| LedgerError::invalid_amount("purchase total overflow"))?;

            planned[slot] += line.quantity;
            lines.push(ReceiptLine {
                item_index: line.item_index,
                name: item.name().to_owned(),
                quantity: line.quantity,
                unit_price: item.unit_price(),
                line_total,
            });
        }

        if total > self.balance {
            return Err(LedgerError::InsufficientFunds {
                required: total,
                available: self.balance,
            });
        }

        let receipt = Receipt {
            transaction_id: cmd.transaction_id,
            lines,
            skipped,
            total,
            change: self.balance.saturating_sub(total),
        };

        Ok(vec![LedgerEvent::PurchaseSettled(PurchaseSettled {
            machine_id: cmd.machine_id,
            receipt,
            occurred_at: cmd.occurred_at,
        })])
    }
}
