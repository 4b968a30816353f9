//! Rendering of catalog, receipts and session summaries for the terminal.

use vendo_machine::{Receipt, SalesSummary, SkipReason, VendingLedger};

pub fn catalog(ledger: &VendingLedger) -> String {
    let mut out = String::from("Available Items:\n");
    for (index, item) in ledger.list_items() {
        out.push_str(&format!(
            "{index}. {} - {} (Stock: {})\n",
            item.name(),
            item.unit_price(),
            item.stock()
        ));
    }
    out
}

pub fn receipt(receipt: &Receipt) -> String {
    let mut out = String::new();

    for skip in &receipt.skipped {
        match skip.reason {
            SkipReason::OutOfStock => {
                out.push_str(&format!("Item '{}' is out of stock. Skipping...\n", skip.name));
            }
            SkipReason::InsufficientStock { .. } => {
                out.push_str(&format!(
                    "Insufficient stock for '{}'. Skipping...\n",
                    skip.name
                ));
            }
        }
    }

    if !receipt.is_empty() {
        out.push_str("You have purchased the following items:\n");
        for line in &receipt.lines {
            out.push_str(&format!(
                "- {} {} for {}\n",
                line.quantity, line.name, line.line_total
            ));
        }
    }

    if !receipt.change.is_zero() {
        out.push_str(&format!("Please collect your change: {}\n", receipt.change));
    }

    out
}

pub fn summary(summary: &SalesSummary) -> String {
    let mut out = format!(
        "Session summary: {} purchase(s), revenue {}\n",
        summary.settlements(),
        summary.revenue()
    );
    for (name, units) in summary.per_item() {
        out.push_str(&format!("- {name}: {units} sold\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use vendo_core::{MachineId, Money, TransactionId};
    use vendo_machine::{Catalog, Item, ReceiptLine, SkippedLine};

    fn sample_ledger() -> VendingLedger {
        let catalog = Catalog::new(vec![
            Item::new("Coke", Money::from_cents(150), 3).unwrap(),
            Item::new("Chips", Money::from_cents(120), 5).unwrap(),
        ])
        .unwrap();
        VendingLedger::new(MachineId::new(), catalog)
    }

    #[test]
    fn catalog_lists_items_with_display_indices() {
        let rendered = catalog(&sample_ledger());
        assert_eq!(
            rendered,
            "Available Items:\n\
             1. Coke - $1.50 (Stock: 3)\n\
             2. Chips - $1.20 (Stock: 5)\n"
        );
    }

    #[test]
    fn receipt_shows_lines_skips_and_change() {
        let receipt = Receipt {
            transaction_id: TransactionId::new(),
            lines: vec![ReceiptLine {
                item_index: 1,
                name: "Coke".into(),
                quantity: 2,
                unit_price: Money::from_cents(150),
                line_total: Money::from_cents(300),
            }],
            skipped: vec![SkippedLine {
                item_index: 3,
                name: "Water".into(),
                reason: SkipReason::OutOfStock,
            }],
            total: Money::from_cents(300),
            change: Money::from_cents(200),
        };

        let rendered = super::receipt(&receipt);
        assert_eq!(
            rendered,
            "Item 'Water' is out of stock. Skipping...\n\
             You have purchased the following items:\n\
             - 2 Coke for $3.00\n\
             Please collect your change: $2.00\n"
        );
    }

    #[test]
    fn receipt_with_no_change_omits_the_change_line() {
        let receipt = Receipt {
            transaction_id: TransactionId::new(),
            lines: vec![ReceiptLine {
                item_index: 2,
                name: "Chips".into(),
                quantity: 1,
                unit_price: Money::from_cents(120),
                line_total: Money::from_cents(120),
            }],
            skipped: vec![],
            total: Money::from_cents(120),
            change: Money::ZERO,
        };

        let rendered = super::receipt(&receipt);
        assert!(!rendered.contains("change"));
    }
}
