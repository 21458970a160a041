//! Transaction and line-item operations

use std::collections::HashMap;

use rusqlite::{params, OptionalExtension, Row};

use super::Database;
use crate::error::Result;
use crate::models::{Transaction, TransactionItem, TransactionStatus, TransactionType};

fn transaction_from_row(row: &Row<'_>) -> rusqlite::Result<Transaction> {
    let kind_str: String = row.get(5)?;
    let status_str: String = row.get(6)?;

    Ok(Transaction {
        id: row.get(0)?,
        date: row.get(1)?,
        description: row.get(2)?,
        category: row.get(3)?,
        payee: row.get(4)?,
        kind: kind_str.parse().unwrap_or(TransactionType::Expense),
        status: status_str.parse().unwrap_or_default(),
        items: Vec::new(),
    })
}

const TRANSACTION_COLUMNS: &str = "id, date, description, category, payee, kind, status";

impl Database {
    /// Append a transaction and its line items atomically.
    ///
    /// A transaction whose id already exists is skipped (nothing is
    /// written) and `false` is returned.
    pub fn insert_transaction(&self, tx: &Transaction) -> Result<bool> {
        let mut conn = self.conn()?;
        let db_tx = conn.transaction()?;

        let inserted = db_tx.execute(
            r#"
            INSERT OR IGNORE INTO transactions (id, date, description, category, payee, kind, status)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
            params![
                tx.id,
                tx.date,
                tx.description,
                tx.category,
                tx.payee,
                tx.kind.as_str(),
                tx.status.as_str(),
            ],
        )?;

        if inserted == 0 {
            return Ok(false); // Duplicate id, skip
        }

        for item in &tx.items {
            db_tx.execute(
                "INSERT INTO transaction_items (transaction_id, name, amount, note) VALUES (?, ?, ?, ?)",
                params![tx.id, item.name, item.amount, item.note],
            )?;
        }

        db_tx.commit()?;
        Ok(true)
    }

    /// Check whether a transaction id is already taken
    pub fn transaction_exists(&self, id: &str) -> Result<bool> {
        let conn = self.conn()?;
        let exists: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM transactions WHERE id = ?)",
            params![id],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    /// List all transactions with their line items, newest date first
    pub fn list_transactions(&self) -> Result<Vec<Transaction>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM transactions ORDER BY date DESC, id",
            TRANSACTION_COLUMNS
        ))?;

        let mut transactions = stmt
            .query_map([], transaction_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        self.attach_items(&conn, &mut transactions)?;
        Ok(transactions)
    }

    /// List transactions of one type (income or expense)
    pub fn list_transactions_by_kind(&self, kind: TransactionType) -> Result<Vec<Transaction>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM transactions WHERE kind = ? ORDER BY date DESC, id",
            TRANSACTION_COLUMNS
        ))?;

        let mut transactions = stmt
            .query_map(params![kind.as_str()], transaction_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        self.attach_items(&conn, &mut transactions)?;
        Ok(transactions)
    }

    /// Get a single transaction with its line items
    pub fn get_transaction(&self, id: &str) -> Result<Option<Transaction>> {
        let conn = self.conn()?;
        let tx = conn
            .query_row(
                &format!("SELECT {} FROM transactions WHERE id = ?", TRANSACTION_COLUMNS),
                params![id],
                transaction_from_row,
            )
            .optional()?;

        let Some(mut tx) = tx else {
            return Ok(None);
        };

        let mut stmt = conn.prepare(
            "SELECT id, name, amount, note FROM transaction_items WHERE transaction_id = ? ORDER BY id",
        )?;
        tx.items = stmt
            .query_map(params![id], |row| {
                Ok(TransactionItem {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    amount: row.get(2)?,
                    note: row.get(3)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(Some(tx))
    }

    /// Update a transaction row and replace its line items.
    ///
    /// Returns `false` if no transaction with that id exists.
    pub fn update_transaction(&self, tx: &Transaction) -> Result<bool> {
        let mut conn = self.conn()?;
        let db_tx = conn.transaction()?;

        let updated = db_tx.execute(
            r#"
            UPDATE transactions
            SET date = ?, description = ?, category = ?, payee = ?, kind = ?, status = ?
            WHERE id = ?
            "#,
            params![
                tx.date,
                tx.description,
                tx.category,
                tx.payee,
                tx.kind.as_str(),
                tx.status.as_str(),
                tx.id,
            ],
        )?;

        if updated == 0 {
            return Ok(false);
        }

        db_tx.execute(
            "DELETE FROM transaction_items WHERE transaction_id = ?",
            params![tx.id],
        )?;
        for item in &tx.items {
            db_tx.execute(
                "INSERT INTO transaction_items (transaction_id, name, amount, note) VALUES (?, ?, ?, ?)",
                params![tx.id, item.name, item.amount, item.note],
            )?;
        }

        db_tx.commit()?;
        Ok(true)
    }

    /// Archive or unarchive a transaction
    pub fn set_transaction_status(&self, id: &str, status: TransactionStatus) -> Result<bool> {
        let conn = self.conn()?;
        let updated = conn.execute(
            "UPDATE transactions SET status = ? WHERE id = ?",
            params![status.as_str(), id],
        )?;
        Ok(updated > 0)
    }

    /// Delete a transaction; its line items cascade
    pub fn delete_transaction(&self, id: &str) -> Result<bool> {
        let conn = self.conn()?;
        let deleted = conn.execute("DELETE FROM transactions WHERE id = ?", params![id])?;
        Ok(deleted > 0)
    }

    pub fn count_transactions(&self) -> Result<i64> {
        let conn = self.conn()?;
        Ok(conn.query_row("SELECT COUNT(*) FROM transactions", [], |row| row.get(0))?)
    }

    pub fn count_transaction_items(&self) -> Result<i64> {
        let conn = self.conn()?;
        Ok(conn.query_row("SELECT COUNT(*) FROM transaction_items", [], |row| row.get(0))?)
    }

    /// Load line items for a batch of transactions in one query
    fn attach_items(
        &self,
        conn: &super::DbConn,
        transactions: &mut [Transaction],
    ) -> Result<()> {
        if transactions.is_empty() {
            return Ok(());
        }

        let mut stmt = conn.prepare(
            "SELECT transaction_id, id, name, amount, note FROM transaction_items ORDER BY id",
        )?;
        let mut by_transaction: HashMap<String, Vec<TransactionItem>> = HashMap::new();
        let rows = stmt.query_map([], |row| {
            let transaction_id: String = row.get(0)?;
            Ok((
                transaction_id,
                TransactionItem {
                    id: row.get(1)?,
                    name: row.get(2)?,
                    amount: row.get(3)?,
                    note: row.get(4)?,
                },
            ))
        })?;
        for row in rows {
            let (transaction_id, item) = row?;
            by_transaction.entry(transaction_id).or_default().push(item);
        }

        for tx in transactions.iter_mut() {
            if let Some(items) = by_transaction.remove(&tx.id) {
                tx.items = items;
            }
        }
        Ok(())
    }
}
