//! Domain models for tally

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Expense categories offered when recording a transaction.
pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Dining",
    "Transport",
    "Shopping",
    "Entertainment",
    "Medical",
    "Education",
    "Housing",
    "Other",
];

/// Income categories offered when recording a transaction.
pub const INCOME_CATEGORIES: &[&str] = &[
    "Salary",
    "Bonus",
    "Investment",
    "Side job",
    "Gift",
    "Other",
];

/// A recorded transaction with its line items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Short human-readable id, e.g. `"QT4821"`. See [`new_transaction_id`].
    pub id: String,
    /// Transaction date as entered, expected in `"YYYY-MM-DD"` form.
    ///
    /// Stored verbatim; rows whose date does not parse are silently skipped
    /// by monthly aggregation rather than rejected at ingest.
    pub date: String,
    pub description: String,
    pub category: String,
    pub payee: String,
    pub kind: TransactionType,
    pub status: TransactionStatus,
    pub items: Vec<TransactionItem>,
}

impl Transaction {
    /// Total amount: the sum of line-item amounts.
    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.amount).sum()
    }
}

/// One line item of a transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionItem {
    /// Database rowid; `None` until the item has been stored.
    pub id: Option<i64>,
    pub name: String,
    pub amount: f64,
    pub note: String,
}

/// Whether a transaction records money coming in or going out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(format!("Unknown transaction type: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Transaction lifecycle state. Archived transactions are kept but hidden
/// from reports and forecasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    #[default]
    Active,
    Archived,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Archived => "archived",
        }
    }
}

impl std::str::FromStr for TransactionStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "archived" => Ok(Self::Archived),
            _ => Err(format!("Unknown transaction status: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Total item amount per category (active transactions only).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Total item amount per (transaction type, category) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryTypeTotal {
    pub kind: TransactionType,
    pub category: String,
    pub total: f64,
}

/// Generate a short transaction id: two random uppercase letters followed
/// by four digits, e.g. `"QT4821"`.
pub fn new_transaction_id() -> String {
    let mut rng = rand::thread_rng();
    let mut id = String::with_capacity(6);
    for _ in 0..2 {
        id.push(rng.gen_range(b'A'..=b'Z') as char);
    }
    for _ in 0..4 {
        id.push(rng.gen_range(b'0'..=b'9') as char);
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_total_sums_items() {
        let tx = Transaction {
            id: "AB1234".to_string(),
            date: "2025-07-01".to_string(),
            description: "Groceries".to_string(),
            category: "Shopping".to_string(),
            payee: "Market".to_string(),
            kind: TransactionType::Expense,
            status: TransactionStatus::Active,
            items: vec![
                TransactionItem {
                    id: None,
                    name: "Vegetables".to_string(),
                    amount: 12.5,
                    note: String::new(),
                },
                TransactionItem {
                    id: None,
                    name: "Bread".to_string(),
                    amount: 3.25,
                    note: String::new(),
                },
            ],
        };
        assert!((tx.total() - 15.75).abs() < 1e-9);
    }

    #[test]
    fn transaction_type_round_trips() {
        assert_eq!("income".parse::<TransactionType>().unwrap(), TransactionType::Income);
        assert_eq!("Expense".parse::<TransactionType>().unwrap(), TransactionType::Expense);
        assert_eq!(TransactionType::Expense.to_string(), "expense");
        assert!("transfer".parse::<TransactionType>().is_err());
    }

    #[test]
    fn status_defaults_to_active() {
        assert_eq!(TransactionStatus::default(), TransactionStatus::Active);
        assert_eq!("archived".parse::<TransactionStatus>().unwrap(), TransactionStatus::Archived);
    }

    #[test]
    fn id_shape_is_two_letters_four_digits() {
        for _ in 0..50 {
            let id = new_transaction_id();
            assert_eq!(id.len(), 6);
            assert!(id[..2].chars().all(|c| c.is_ascii_uppercase()));
            assert!(id[2..].chars().all(|c| c.is_ascii_digit()));
        }
    }
}
