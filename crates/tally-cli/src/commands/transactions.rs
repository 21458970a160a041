//! Transaction command implementations

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use tally_core::db::Database;
use tally_core::models::{
    new_transaction_id, Transaction, TransactionItem, TransactionStatus, TransactionType,
    EXPENSE_CATEGORIES, INCOME_CATEGORIES,
};

use super::truncate;

/// Parse a line-item spec of the form `NAME:AMOUNT` or `NAME:AMOUNT:NOTE`
pub fn parse_item_spec(spec: &str) -> Result<TransactionItem> {
    let mut parts = spec.splitn(3, ':');
    let name = parts.next().unwrap_or("").trim();
    let amount_str = parts.next().unwrap_or("").trim();
    let note = parts.next().unwrap_or("").trim();

    if name.is_empty() {
        bail!("Item {:?} has no name (use NAME:AMOUNT or NAME:AMOUNT:NOTE)", spec);
    }
    let amount: f64 = amount_str
        .parse()
        .with_context(|| format!("Item {:?} has an invalid amount {:?}", spec, amount_str))?;
    if !amount.is_finite() {
        bail!("Item {:?} has a non-finite amount", spec);
    }

    Ok(TransactionItem {
        id: None,
        name: name.to_string(),
        amount,
        note: note.to_string(),
    })
}

pub fn cmd_add(
    db: &Database,
    date: &str,
    kind: &str,
    category: &str,
    description: &str,
    payee: &str,
    item_specs: &[String],
) -> Result<()> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .context("Invalid --date format (use YYYY-MM-DD)")?;
    let kind: TransactionType = kind.parse().map_err(anyhow::Error::msg)?;
    let items = item_specs
        .iter()
        .map(|spec| parse_item_spec(spec))
        .collect::<Result<Vec<_>>>()?;

    // Ids are short, so collisions are rare but possible
    let mut id = new_transaction_id();
    while db.transaction_exists(&id)? {
        id = new_transaction_id();
    }

    let tx = Transaction {
        id: id.clone(),
        date: date.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        payee: payee.to_string(),
        kind,
        status: TransactionStatus::Active,
        items,
    };
    db.insert_transaction(&tx)?;

    println!(
        "✅ Recorded {} {}: ${:.2} in {}",
        kind,
        id,
        tx.total(),
        tx.category
    );

    let known = match kind {
        TransactionType::Expense => EXPENSE_CATEGORIES,
        TransactionType::Income => INCOME_CATEGORIES,
    };
    if !known.contains(&tx.category.as_str()) {
        println!("   (new category; builtin: {})", known.join(", "));
    }

    Ok(())
}

pub fn cmd_list(db: &Database, kind: Option<&str>, all: bool, limit: usize) -> Result<()> {
    let transactions = match kind {
        Some(kind) => {
            let kind: TransactionType = kind.parse().map_err(anyhow::Error::msg)?;
            db.list_transactions_by_kind(kind)?
        }
        None => db.list_transactions()?,
    };

    let shown: Vec<Transaction> = transactions
        .into_iter()
        .filter(|tx| all || tx.status == TransactionStatus::Active)
        .take(limit)
        .collect();

    if shown.is_empty() {
        println!("No transactions found. Record one with:");
        println!("  tally add --date 2025-07-01 --item \"Lunch:12.50\"");
        return Ok(());
    }

    println!();
    println!("📝 Transactions");
    println!("   ─────────────────────────────────────────────────────────────");

    for tx in &shown {
        let amount_str = match tx.kind {
            TransactionType::Expense => format!("\x1b[31m${:.2}\x1b[0m", tx.total()), // Red for expenses
            TransactionType::Income => format!("\x1b[32m+${:.2}\x1b[0m", tx.total()), // Green for income
        };
        let marker = if tx.status == TransactionStatus::Archived {
            " [archived]"
        } else {
            ""
        };

        println!(
            "   {} │ {} │ {:>14} │ {:12} │ {}{}",
            tx.id,
            tx.date,
            amount_str,
            truncate(&tx.category, 12),
            truncate(&tx.description, 30),
            marker
        );
    }

    Ok(())
}

pub fn cmd_show(db: &Database, id: &str) -> Result<()> {
    let tx = db
        .get_transaction(id)?
        .ok_or_else(|| anyhow::anyhow!("Transaction {} not found", id))?;

    println!();
    println!("📝 Transaction {}", tx.id);
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Date: {}", tx.date);
    println!("   Type: {}", tx.kind);
    println!("   Category: {}", tx.category);
    if !tx.payee.is_empty() {
        println!("   Payee: {}", tx.payee);
    }
    if !tx.description.is_empty() {
        println!("   Description: {}", tx.description);
    }
    if tx.status == TransactionStatus::Archived {
        println!("   Status: archived");
    }
    println!();

    for item in &tx.items {
        let note = if item.note.is_empty() {
            String::new()
        } else {
            format!(" ({})", item.note)
        };
        println!(
            "   {:30} │ {:>10}{}",
            truncate(&item.name, 30),
            format!("${:.2}", item.amount),
            note
        );
    }
    println!("   ───────────────────────────────┼────────────");
    println!("   {:30} │ {:>10}", "Total", format!("${:.2}", tx.total()));

    Ok(())
}

pub fn cmd_archive(db: &Database, id: &str, archive: bool) -> Result<()> {
    let status = if archive {
        TransactionStatus::Archived
    } else {
        TransactionStatus::Active
    };

    if !db.set_transaction_status(id, status)? {
        bail!("Transaction {} not found", id);
    }

    if archive {
        println!("📦 Archived {}. It is now hidden from reports and forecasts.", id);
        println!("   Use 'tally unarchive {}' to restore it.", id);
    } else {
        println!("✅ Restored {}.", id);
    }

    Ok(())
}

pub fn cmd_delete(db: &Database, id: &str) -> Result<()> {
    if !db.delete_transaction(id)? {
        bail!("Transaction {} not found", id);
    }
    println!("🗑️  Deleted {} and its line items.", id);
    Ok(())
}
