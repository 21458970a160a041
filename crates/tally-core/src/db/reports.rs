//! Grouped category totals
//!
//! Amounts live on line items, so every total here joins items through
//! their parent transaction. Archived transactions are excluded.

use super::Database;
use crate::error::Result;
use crate::models::{CategoryTotal, CategoryTypeTotal, TransactionType};

impl Database {
    /// Total item amount per category, largest first
    pub fn category_totals(&self) -> Result<Vec<CategoryTotal>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT t.category, SUM(i.amount) AS total
            FROM transactions t
            JOIN transaction_items i ON t.id = i.transaction_id
            WHERE t.status = 'active'
            GROUP BY t.category
            ORDER BY total DESC
            "#,
        )?;

        let totals = stmt
            .query_map([], |row| {
                Ok(CategoryTotal {
                    category: row.get(0)?,
                    total: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(totals)
    }

    /// Total item amount per (transaction type, category) pair.
    ///
    /// Income rows sort before expense rows; within a type, largest total
    /// first.
    pub fn category_totals_by_type(&self) -> Result<Vec<CategoryTypeTotal>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT t.kind, t.category, SUM(i.amount) AS total
            FROM transactions t
            JOIN transaction_items i ON t.id = i.transaction_id
            WHERE t.status = 'active'
            GROUP BY t.kind, t.category
            ORDER BY t.kind DESC, total DESC
            "#,
        )?;

        let totals = stmt
            .query_map([], |row| {
                let kind_str: String = row.get(0)?;
                Ok(CategoryTypeTotal {
                    kind: kind_str.parse().unwrap_or(TransactionType::Expense),
                    category: row.get(1)?,
                    total: row.get(2)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(totals)
    }
}
