//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_db` - Shared utility to open the ledger database
//! - `cmd_init` - Initialize the database
//! - `cmd_status` - Show database status

use std::path::Path;

use anyhow::{Context, Result};
use tally_core::db::Database;

/// Open (creating if needed) the ledger database
pub fn open_db(db_path: &Path) -> Result<Database> {
    let path_str = db_path.to_string_lossy();
    Database::open(&path_str).context("Failed to open database")
}

pub fn cmd_init(db_path: &Path) -> Result<()> {
    println!("🔧 Initializing database at {}...", db_path.display());

    open_db(db_path)?;

    println!("✅ Database initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Record a transaction: tally add --date 2025-07-01 --item \"Lunch:12.50\"");
    println!("  2. See category totals:  tally report");
    println!("  3. Forecast spending:    tally forecast --months 3");

    Ok(())
}

pub fn cmd_status(db_path: &Path) -> Result<()> {
    use std::fs;

    println!();
    println!("📊 Tally Status");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Database: {}", db_path.display());

    if db_path.exists() {
        if let Ok(metadata) = fs::metadata(db_path) {
            let size_kb = metadata.len() as f64 / 1024.0;
            if size_kb < 1024.0 {
                println!("   Size: {:.1} KB", size_kb);
            } else {
                println!("   Size: {:.1} MB", size_kb / 1024.0);
            }
        }
    } else {
        println!("   Size: (database not initialized)");
    }

    if db_path.exists() {
        let db = open_db(db_path)?;
        println!();
        println!("   Transactions: {}", db.count_transactions()?);
        println!("   Line items: {}", db.count_transaction_items()?);
    } else {
        println!();
        println!("   Run 'tally init' to create the database.");
    }

    Ok(())
}
