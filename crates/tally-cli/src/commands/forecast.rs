//! Forecast command implementation

use anyhow::Result;
use tally_core::db::Database;
use tally_core::forecast::{forecast_monthly_expenses, monthly_expense_aggregates};
use tally_core::predictor::ExpensePredictor;

pub fn cmd_forecast(db: &Database, months: i32, include_current: bool, json: bool) -> Result<()> {
    if months <= 0 {
        anyhow::bail!("--months must be positive");
    }

    let points = forecast_monthly_expenses(db, months, !include_current)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&points)?);
        return Ok(());
    }

    if points.is_empty() {
        println!("No expense history to forecast from. Record one with:");
        println!("  tally add --date 2025-07-01 --item \"Lunch:12.50\"");
        return Ok(());
    }

    // Re-derive the fitted trend for the header line
    let aggregates = monthly_expense_aggregates(&db.list_transactions()?);
    let model = ExpensePredictor::new().train(&aggregates);
    let trend_sign = if model.slope >= 0.0 { "+" } else { "-" };

    println!();
    println!("🔮 Expense Forecast");
    println!(
        "   {} month(s) of history, trend {}${:.2}/month",
        aggregates.len(),
        trend_sign,
        model.slope.abs()
    );
    println!("   ─────────────────────────");
    for point in &points {
        println!(
            "   {} │ {:>12}",
            point.month,
            format!("${:.2}", point.predicted_total)
        );
    }

    Ok(())
}
