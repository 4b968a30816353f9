//! Sales read model built from ledger events.

use std::collections::BTreeMap;

use vendo_core::Money;
use vendo_events::Projection;

use crate::ledger::LedgerEvent;

/// Read model: units sold per item and gross revenue for this process run.
///
/// Rebuildable at any time by replaying the ledger's events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalesSummary {
    units_sold: BTreeMap<String, u32>,
    revenue: Money,
    settlements: u64,
}

impl SalesSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn units_sold(&self, name: &str) -> u32 {
        self.units_sold.get(name).copied().unwrap_or(0)
    }

    /// Per-item units sold, ordered by item name.
    pub fn per_item(&self) -> impl Iterator<Item = (&str, u32)> {
        self.units_sold.iter().map(|(name, &units)| (name.as_str(), units))
    }

    pub fn revenue(&self) -> Money {
        self.revenue
    }

    pub fn settlements(&self) -> u64 {
        self.settlements
    }
}

impl Projection for SalesSummary {
    type Ev = LedgerEvent;

    fn project(&mut self, event: &Self::Ev) {
        match event {
            LedgerEvent::PurchaseSettled(e) => {
                for line in &e.receipt.lines {
                    *self.units_sold.entry(line.name.clone()).or_default() += line.quantity;
                }
                self.revenue = self.revenue.saturating_add(e.receipt.total);
                self.settlements += 1;
            }
            LedgerEvent::CoinInserted(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Item, PurchaseRequest, RequestLine};
    use crate::ledger::{LedgerCommand, Purchase, VendingLedger};
    use chrono::Utc;
    use vendo_core::{MachineId, TransactionId};
    use vendo_events::execute;

    fn sample_ledger() -> VendingLedger {
        let catalog = Catalog::new(vec![
            Item::new("Coke", Money::from_cents(150), 3).unwrap(),
            Item::new("Chips", Money::from_cents(120), 5).unwrap(),
        ])
        .unwrap();
        VendingLedger::new(MachineId::new(), catalog)
    }

    #[test]
    fn summary_accumulates_settled_purchases() {
        let mut ledger = sample_ledger();
        let mut summary = SalesSummary::new();

        ledger.insert_coin(Money::from_cents(1000)).unwrap();
        let cmd = LedgerCommand::Purchase(Purchase {
            machine_id: ledger.id_typed(),
            transaction_id: TransactionId::new(),
            request: PurchaseRequest::new(vec![
                RequestLine {
                    item_index: 1,
                    quantity: 2,
                },
                RequestLine {
                    item_index: 2,
                    quantity: 1,
                },
            ]),
            occurred_at: Utc::now(),
        });
        for event in execute(&mut ledger, &cmd).unwrap() {
            summary.project(&event);
        }

        assert_eq!(summary.units_sold("Coke"), 2);
        assert_eq!(summary.units_sold("Chips"), 1);
        assert_eq!(summary.units_sold("Water"), 0);
        assert_eq!(summary.revenue(), Money::from_cents(420));
        assert_eq!(summary.settlements(), 1);
    }

    #[test]
    fn coin_events_do_not_touch_the_summary() {
        let mut summary = SalesSummary::new();
        let mut ledger = sample_ledger();

        let cmd = LedgerCommand::InsertCoin(crate::ledger::InsertCoin {
            machine_id: ledger.id_typed(),
            amount: Money::from_cents(100),
            occurred_at: Utc::now(),
        });
        for event in execute(&mut ledger, &cmd).unwrap() {
            summary.project(&event);
        }

        assert_eq!(summary, SalesSummary::new());
    }
}
