//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tally - Record transactions and forecast monthly spending
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Personal expense ledger with monthly spending forecasts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "tally.db", global = true)]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Show database status (path, size, row counts)
    Status,

    /// Record a transaction with one or more line items
    Add {
        /// Transaction date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Transaction type: income or expense
        #[arg(long, default_value = "expense")]
        kind: String,

        /// Category, e.g. Dining, Transport, Salary
        #[arg(long, default_value = "Other")]
        category: String,

        /// Free-form description
        #[arg(long, default_value = "")]
        description: String,

        /// Who was paid (or who paid you)
        #[arg(long, default_value = "")]
        payee: String,

        /// Line item as NAME:AMOUNT or NAME:AMOUNT:NOTE (repeatable)
        #[arg(long, required = true)]
        item: Vec<String>,
    },

    /// List transactions
    List {
        /// Only show one type: income or expense
        #[arg(long)]
        kind: Option<String>,

        /// Include archived transactions
        #[arg(long)]
        all: bool,

        /// Maximum number of transactions to show
        #[arg(long, default_value = "50")]
        limit: usize,
    },

    /// Show one transaction with its line items
    Show {
        /// Transaction id, e.g. QT4821
        id: String,
    },

    /// Archive a transaction (hidden from reports and forecasts)
    Archive { id: String },

    /// Restore an archived transaction
    Unarchive { id: String },

    /// Delete a transaction and its line items
    Delete { id: String },

    /// Category totals for active transactions
    Report {
        /// Single flat list instead of income/expense sections
        #[arg(long)]
        flat: bool,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Forecast monthly expense totals
    Forecast {
        /// How many months ahead to forecast
        #[arg(long, default_value = "3")]
        months: i32,

        /// Start at the last recorded month instead of the month after it
        #[arg(long)]
        include_current: bool,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}
