//! Terminal driver for the vending ledger.
//!
//! The per-transaction cycle is strictly sequential: show the catalog, read a
//! selection, read a coin, settle, repeat. Every error is recoverable; the
//! loop reports it and starts the next cycle with the balance preserved.

mod parse;
mod render;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use chrono::Utc;
use vendo_core::{LedgerResult, MachineId, Money, TransactionId};
use vendo_events::{Projection, execute};
use vendo_machine::{
    Catalog, Item, LedgerCommand, LedgerEvent, Purchase, PurchaseRequest, SalesSummary,
    VendingLedger,
};

fn seed_catalog() -> Result<Catalog> {
    let items = vec![
        Item::new("Coke", Money::from_cents(150), 3)?,
        Item::new("Chips", Money::from_cents(120), 5)?,
        Item::new("Water", Money::from_cents(80), 2)?,
    ];
    Ok(Catalog::new(items)?)
}

fn main() -> Result<()> {
    vendo_observability::init();

    let machine_id = MachineId::new();
    let mut ledger = VendingLedger::new(machine_id, seed_catalog()?);
    let mut summary = SalesSummary::new();
    tracing::info!(%machine_id, items = ledger.catalog().len(), "vending machine ready");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!("{}", render::catalog(&ledger));

        let Some(selection) = prompt(
            &mut input,
            "Enter item numbers separated by commas (q quits, e exports the catalog): ",
        )?
        else {
            break;
        };
        match selection.as_str() {
            "q" | "quit" => break,
            "e" | "export" => {
                println!("{}", serde_json::to_string_pretty(ledger.catalog())?);
                continue;
            }
            _ => {}
        }

        let Some(quantities) = prompt(&mut input, "Enter quantities separated by commas: ")?
        else {
            break;
        };

        let request = match build_request(&selection, &quantities) {
            Ok(request) => request,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        if let Err(err) = ledger.validate_request(&request) {
            println!("{err}");
            continue;
        }

        let Some(coin) = prompt(&mut input, "Insert a coin (in dollars): ")? else {
            break;
        };
        match parse::coin(&coin).and_then(|amount| ledger.insert_coin(amount)) {
            Ok(balance) => println!("Coin accepted. Balance: {balance}"),
            Err(err) => {
                println!("{err}");
                continue;
            }
        }

        let cmd = LedgerCommand::Purchase(Purchase {
            machine_id,
            transaction_id: TransactionId::new(),
            request,
            occurred_at: Utc::now(),
        });
        match execute(&mut ledger, &cmd) {
            Ok(events) => {
                for event in &events {
                    if let LedgerEvent::PurchaseSettled(e) = event {
                        tracing::info!(
                            transaction_id = %e.receipt.transaction_id,
                            total = %e.receipt.total,
                            change = %e.receipt.change,
                            "purchase settled"
                        );
                        print!("{}", render::receipt(&e.receipt));
                    }
                    summary.project(event);
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "purchase rejected");
                println!("{err}");
            }
        }
        println!();
    }

    print!("{}", render::summary(&summary));
    Ok(())
}

fn build_request(selection: &str, quantities: &str) -> LedgerResult<PurchaseRequest> {
    let indices = parse::index_list(selection)?;
    let quantities = parse::quantity_list(quantities)?;
    PurchaseRequest::from_parallel(&indices, &quantities)
}

/// Print a prompt and read one trimmed line; `None` on end of input.
fn prompt(input: &mut impl BufRead, label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}
