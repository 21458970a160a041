//! Report command implementations

use anyhow::Result;
use tally_core::db::Database;
use tally_core::models::TransactionType;

use super::truncate;

pub fn cmd_report(db: &Database, flat: bool, json: bool) -> Result<()> {
    if flat {
        let totals = db.category_totals()?;
        if json {
            println!("{}", serde_json::to_string_pretty(&totals)?);
            return Ok(());
        }

        if totals.is_empty() {
            println!("No active transactions to report on.");
            return Ok(());
        }

        println!();
        println!("📊 Category Totals");
        println!("   ─────────────────────────────────────────");
        for total in &totals {
            println!(
                "   {:25} │ {:>12}",
                truncate(&total.category, 25),
                format!("${:.2}", total.total)
            );
        }
        return Ok(());
    }

    let totals = db.category_totals_by_type()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&totals)?);
        return Ok(());
    }

    if totals.is_empty() {
        println!("No active transactions to report on.");
        return Ok(());
    }

    println!();
    println!("📊 Category Totals by Type");
    println!("   ─────────────────────────────────────────");

    for kind in [TransactionType::Income, TransactionType::Expense] {
        let rows: Vec<_> = totals.iter().filter(|t| t.kind == kind).collect();
        if rows.is_empty() {
            continue;
        }

        let heading = match kind {
            TransactionType::Income => "💰 Income",
            TransactionType::Expense => "📉 Expenses",
        };
        println!("   {}", heading);

        let mut section_total = 0.0;
        for row in &rows {
            println!(
                "     {:23} │ {:>12}",
                truncate(&row.category, 23),
                format!("${:.2}", row.total)
            );
            section_total += row.total;
        }
        println!("     {:23} │ {:>12}", "Total", format!("${:.2}", section_total));
        println!();
    }

    Ok(())
}
