//! Integration tests for tally-core
//!
//! These tests exercise the full record → aggregate → forecast workflow.

use tally_core::{
    db::Database,
    forecast::{forecast_monthly_expenses, monthly_expense_aggregates},
    models::{Transaction, TransactionItem, TransactionStatus, TransactionType},
};

fn expense(id: &str, date: &str, amounts: &[f64]) -> Transaction {
    Transaction {
        id: id.to_string(),
        date: date.to_string(),
        description: "test expense".to_string(),
        category: "Dining".to_string(),
        payee: "Cafe".to_string(),
        kind: TransactionType::Expense,
        status: TransactionStatus::Active,
        items: amounts
            .iter()
            .map(|&amount| TransactionItem {
                id: None,
                name: "Item".to_string(),
                amount,
                note: String::new(),
            })
            .collect(),
    }
}

/// Six months of history (2025-01 .. 2025-06) whose expense totals grow by
/// 10 per month (100, 110, ..., 150), with income, archived, and
/// undateable noise that aggregation must ignore.
fn seed_trending_history(db: &Database) {
    for i in 0..6 {
        let date = format!("2025-{:02}-10", i + 1);
        // Split each month's total across two line items
        let total = 100.0 + 10.0 * i as f64;
        db.insert_transaction(&expense(
            &format!("EX{:04}", i),
            &date,
            &[total - 30.0, 30.0],
        ))
        .unwrap();

        let mut income = expense(&format!("IN{:04}", i), &date, &[3000.0]);
        income.kind = TransactionType::Income;
        income.category = "Salary".to_string();
        db.insert_transaction(&income).unwrap();
    }

    let mut archived = expense("AR0001", "2025-03-15", &[999.0]);
    archived.status = TransactionStatus::Archived;
    db.insert_transaction(&archived).unwrap();

    db.insert_transaction(&expense("BD0001", "not-a-date", &[999.0]))
        .unwrap();
}

#[test]
fn aggregates_come_out_monthly_sorted_and_filtered() {
    let db = Database::in_memory().unwrap();
    seed_trending_history(&db);

    let transactions = db.list_transactions().unwrap();
    let aggregates = monthly_expense_aggregates(&transactions);

    assert_eq!(aggregates.len(), 6);
    for (i, aggregate) in aggregates.iter().enumerate() {
        assert_eq!(aggregate.month.to_string(), format!("2025-{:02}", i + 1));
        assert!((aggregate.total - (100.0 + 10.0 * i as f64)).abs() < 1e-9);
    }
}

#[test]
fn forecast_continues_the_monthly_trend() {
    let db = Database::in_memory().unwrap();
    seed_trending_history(&db);

    let points = forecast_monthly_expenses(&db, 3, true).unwrap();

    assert_eq!(points.len(), 3);
    assert_eq!(points[0].month.to_string(), "2025-07");
    assert_eq!(points[1].month.to_string(), "2025-08");
    assert_eq!(points[2].month.to_string(), "2025-09");
    assert!((points[0].predicted_total - 160.0).abs() < 1e-6);
    assert!((points[1].predicted_total - 170.0).abs() < 1e-6);
    assert!((points[2].predicted_total - 180.0).abs() < 1e-6);
}

#[test]
fn forecast_can_start_at_the_last_historical_month() {
    let db = Database::in_memory().unwrap();
    seed_trending_history(&db);

    let points = forecast_monthly_expenses(&db, 2, false).unwrap();

    assert_eq!(points.len(), 2);
    assert_eq!(points[0].month.to_string(), "2025-06");
    assert!((points[0].predicted_total - 150.0).abs() < 1e-6);
}

#[test]
fn forecast_respects_calendar_gaps() {
    let db = Database::in_memory().unwrap();
    // 2025-02 has no expenses: the trend is 10 per calendar month, so the
    // first forecast month (2025-04) sits at x = 3.
    db.insert_transaction(&expense("EX0001", "2025-01-10", &[100.0])).unwrap();
    db.insert_transaction(&expense("EX0002", "2025-03-10", &[120.0])).unwrap();

    let points = forecast_monthly_expenses(&db, 1, true).unwrap();

    assert_eq!(points[0].month.to_string(), "2025-04");
    assert!((points[0].predicted_total - 130.0).abs() < 1e-6);
}

#[test]
fn forecast_of_empty_ledger_is_empty() {
    let db = Database::in_memory().unwrap();
    assert!(forecast_monthly_expenses(&db, 3, true).unwrap().is_empty());

    // Income alone leaves no expense history either
    let mut income = expense("IN0001", "2025-01-10", &[3000.0]);
    income.kind = TransactionType::Income;
    db.insert_transaction(&income).unwrap();
    assert!(forecast_monthly_expenses(&db, 3, true).unwrap().is_empty());
}

#[test]
fn forecast_with_nonpositive_horizon_is_empty() {
    let db = Database::in_memory().unwrap();
    seed_trending_history(&db);

    assert!(forecast_monthly_expenses(&db, 0, true).unwrap().is_empty());
    assert!(forecast_monthly_expenses(&db, -1, true).unwrap().is_empty());
}

#[test]
fn flat_history_forecasts_the_constant() {
    let db = Database::in_memory().unwrap();
    for i in 0..6 {
        let date = format!("2025-{:02}-05", i + 1);
        db.insert_transaction(&expense(&format!("EX{:04}", i), &date, &[200.0]))
            .unwrap();
    }

    let points = forecast_monthly_expenses(&db, 3, true).unwrap();

    assert_eq!(points.len(), 3);
    for point in &points {
        assert!((point.predicted_total - 200.0).abs() < 1e-6);
    }
}
