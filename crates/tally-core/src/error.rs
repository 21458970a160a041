//! Error types for tally

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Database pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Invalid year-month (expected YYYY-MM): {0}")]
    InvalidMonth(String),
}

pub type Result<T> = std::result::Result<T, Error>;
