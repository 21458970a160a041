//! Monthly expense aggregation and forecasting
//!
//! The upstream feed for the predictor: group active expense transactions
//! by calendar month, sum their line-item amounts, then project the trend
//! forward from the end of the history.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::db::Database;
use crate::error::Result;
use crate::models::{Transaction, TransactionStatus, TransactionType};
use crate::month::YearMonth;
use crate::predictor::{ExpensePredictor, ForecastPoint, MonthlyAggregate};

/// Group active expense transactions by calendar month, summing item
/// amounts.
///
/// Transaction dates are parsed as `"YYYY-MM-DD"`; rows that do not parse
/// are skipped. The result is sorted by month ascending with exactly one
/// entry per distinct month, which is the input contract of
/// [`ExpensePredictor`].
pub fn monthly_expense_aggregates(transactions: &[Transaction]) -> Vec<MonthlyAggregate> {
    let mut by_month: BTreeMap<YearMonth, f64> = BTreeMap::new();

    for tx in transactions {
        if tx.kind != TransactionType::Expense || tx.status != TransactionStatus::Active {
            continue;
        }
        let date = match NaiveDate::parse_from_str(&tx.date, "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => {
                debug!(
                    "Skipping transaction {} with unparseable date {:?}",
                    tx.id, tx.date
                );
                continue;
            }
        };
        *by_month.entry(YearMonth::from_date(date)).or_insert(0.0) += tx.total();
    }

    by_month
        .into_iter()
        .map(|(month, total)| MonthlyAggregate { month, total })
        .collect()
}

/// Forecast monthly expense totals from the store's full history.
///
/// `start_from_next_month` picks the first forecast month: the month after
/// the last historical month (the usual case) or the last historical month
/// itself. Returns an empty vec when there is no usable history.
pub fn forecast_monthly_expenses(
    db: &Database,
    months_ahead: i32,
    start_from_next_month: bool,
) -> Result<Vec<ForecastPoint>> {
    let transactions = db.list_transactions()?;
    let aggregates = monthly_expense_aggregates(&transactions);

    let last = match aggregates.last() {
        Some(last) => last.month,
        None => return Ok(Vec::new()),
    };
    let start = if start_from_next_month {
        last.plus_months(1)
    } else {
        last
    };

    Ok(ExpensePredictor::new().predict_future_months(&aggregates, start, months_ahead))
}
