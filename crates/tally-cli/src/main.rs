//! Tally CLI - Personal expense ledger
//!
//! Usage:
//!   tally init                              Initialize the database
//!   tally add --date 2025-07-01 --item "Lunch:12.50"
//!   tally list                              List transactions
//!   tally report                            Category totals by type
//!   tally forecast --months 3               Forecast monthly spending

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db),
        Commands::Status => commands::cmd_status(&cli.db),
        Commands::Add {
            date,
            kind,
            category,
            description,
            payee,
            item,
        } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_add(&db, &date, &kind, &category, &description, &payee, &item)
        }
        Commands::List { kind, all, limit } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_list(&db, kind.as_deref(), all, limit)
        }
        Commands::Show { id } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_show(&db, &id)
        }
        Commands::Archive { id } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_archive(&db, &id, true)
        }
        Commands::Unarchive { id } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_archive(&db, &id, false)
        }
        Commands::Delete { id } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_delete(&db, &id)
        }
        Commands::Report { flat, json } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_report(&db, flat, json)
        }
        Commands::Forecast {
            months,
            include_current,
            json,
        } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_forecast(&db, months, include_current, json)
        }
    }
}
