use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::token_id;

/// A single income or expense record. Direction is carried by `kind`;
/// `amount` is always a non-negative magnitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
    /// Synthetic projected entry, excluded from real-money aggregates.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_forecast: bool,
    /// Provenance marker for classifier-assigned categories. Not behavior
    /// affecting.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_ai_categorized: bool,
}

impl Transaction {
    pub fn new(
        kind: TransactionKind,
        category: impl Into<String>,
        amount: f64,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: token_id(),
            kind,
            category: category.into(),
            amount,
            date,
            is_forecast: false,
            is_ai_categorized: false,
        }
    }

    pub fn is_in_month(&self, reference: NaiveDate) -> bool {
        self.date.year() == reference.year() && self.date.month() == reference.month()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
    Transfer,
    Withdrawal,
}

/// Restricts a full history to the calendar month of `reference`, the read
/// window the dashboard summaries operate on.
pub fn current_month(transactions: &[Transaction], reference: NaiveDate) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| t.is_in_month(reference))
        .cloned()
        .collect()
}
