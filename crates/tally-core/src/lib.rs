//! Tally Core Library
//!
//! Shared functionality for the tally expense ledger:
//! - Domain models (transactions with line items, income/expense types)
//! - SQLite storage with connection pooling and migrations
//! - Grouped category totals for analysis
//! - Monthly aggregation and OLS expense forecasting

pub mod db;
pub mod error;
pub mod forecast;
pub mod models;
pub mod month;
pub mod predictor;

pub use db::Database;
pub use error::{Error, Result};
pub use forecast::{forecast_monthly_expenses, monthly_expense_aggregates};
pub use models::{
    new_transaction_id, CategoryTotal, CategoryTypeTotal, Transaction, TransactionItem,
    TransactionStatus, TransactionType, EXPENSE_CATEGORIES, INCOME_CATEGORIES,
};
pub use month::YearMonth;
pub use predictor::{ExpensePredictor, ForecastPoint, LinearModel, MonthlyAggregate};
