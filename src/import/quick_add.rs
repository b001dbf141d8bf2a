//! Free-text quick-add parsing.
//!
//! Extracts type, amount, category, and date from a short phrase such as
//! "Spent $45 on groceries yesterday". The result is a draft: callers must
//! surface it for explicit confirm/edit before persisting it, never commit
//! it directly.

use chrono::{Duration, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::domain::TransactionKind;

static AMOUNT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+(\.\d{1,2})?").unwrap());

const INCOME_WORDS: &[&str] = &["income", "earned", "salary", "deposit"];
const TRANSFER_WORDS: &[&str] = &["transfer", "move", "savings"];
const WITHDRAWAL_WORDS: &[&str] = &["withdrawal", "cash out", "atm"];

/// Category keyword map, checked in order; the first category with any
/// keyword present wins.
const QUICK_ADD_CATEGORIES: &[(&str, &[&str])] = &[
    ("Salary", &["salary", "paycheck", "wage"]),
    ("Rent", &["rent", "lease", "housing"]),
    ("Groceries", &["groceries", "food", "supermarket", "market"]),
    (
        "Transportation",
        &["transport", "uber", "lyft", "gas", "fuel", "bus", "train"],
    ),
    (
        "Entertainment",
        &["movie", "game", "fun", "netflix", "spotify", "concert"],
    ),
    ("Utilities", &["electric", "water", "internet", "phone", "bill"]),
    ("Health", &["doctor", "medicine", "pharmacy", "gym", "health"]),
    ("Other", &["misc", "stuff"]),
];

/// A parsed quick-add phrase awaiting user confirmation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuickAddDraft {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
}

/// Parses a short free-text phrase into a transaction draft.
///
/// Each field is detected independently, first match wins. The only relative
/// date recognized is the literal word "yesterday"; everything else resolves
/// to `today`.
pub fn parse_quick_add(input: &str, today: NaiveDate) -> QuickAddDraft {
    let text = input.to_lowercase();

    let kind = if INCOME_WORDS.iter().any(|w| text.contains(w)) {
        TransactionKind::Income
    } else if TRANSFER_WORDS.iter().any(|w| text.contains(w)) {
        TransactionKind::Transfer
    } else if WITHDRAWAL_WORDS.iter().any(|w| text.contains(w)) {
        TransactionKind::Withdrawal
    } else {
        TransactionKind::Expense
    };

    let amount = AMOUNT_RE
        .find(&text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0);

    let category = QUICK_ADD_CATEGORIES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(category, _)| (*category).to_string())
        .unwrap_or_else(|| "Other".to_string());

    let date = if text.contains("yesterday") {
        today - Duration::days(1)
    } else {
        today
    };

    QuickAddDraft {
        kind,
        category,
        amount,
        date,
    }
}
