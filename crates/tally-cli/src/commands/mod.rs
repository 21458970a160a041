//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - init/status and the shared open_db utility
//! - `transactions` - add, list, show, archive/unarchive, delete
//! - `reports` - grouped category totals
//! - `forecast` - monthly expense forecast

pub mod core;
pub mod forecast;
pub mod reports;
pub mod transactions;

// Re-export command functions for main.rs
pub use core::*;
pub use forecast::*;
pub use reports::*;
pub use transactions::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        format!("{}...", &s[..max.saturating_sub(3)])
    }
}
