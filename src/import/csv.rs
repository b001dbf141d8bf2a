//! Naive CSV import with keyword-based column sniffing.
//!
//! No fixed schema is required of the uploaded file: column roles are
//! located by substring search over the header row, falling back to fixed
//! positions. Bad rows are skipped rather than failing the whole parse;
//! partial success is the default policy.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::classify::classify;
use crate::domain::{token_id, Transaction, TransactionKind};
use crate::errors::FinanceError;

const DATE_KEYWORDS: &[&str] = &["date", "time"];
const DESC_KEYWORDS: &[&str] = &[
    "description",
    "desc",
    "payee",
    "merchant",
    "name",
    "transaction",
];
const AMOUNT_KEYWORDS: &[&str] = &["amount", "value", "debit", "credit"];
const TYPE_KEYWORDS: &[&str] = &["type", "transaction type", "debit/credit"];
const CATEGORY_KEYWORDS: &[&str] = &["category", "cat", "class"];

/// Accepted date layouts, tried in order. Anything else falls back to the
/// import date.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%m-%d-%Y", "%d %b %Y"];

/// A candidate transaction recovered from one CSV row. Not yet persisted;
/// `into_transaction` assigns the identifier.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedTransaction {
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub is_ai_categorized: bool,
}

impl ParsedTransaction {
    pub fn into_transaction(self) -> Transaction {
        Transaction {
            id: token_id(),
            kind: self.kind,
            category: self.category,
            amount: self.amount,
            date: self.date,
            is_forecast: false,
            is_ai_categorized: self.is_ai_categorized,
        }
    }
}

/// Parses delimited text into candidate transactions, preserving row order.
///
/// `today` is the fallback for missing or unparseable dates. Fails only when
/// the input has no data rows at all.
pub fn parse_csv(csv_text: &str, today: NaiveDate) -> Result<Vec<ParsedTransaction>, FinanceError> {
    let lines: Vec<&str> = csv_text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .collect();

    if lines.len() < 2 {
        return Err(FinanceError::Import(
            "CSV file is empty or has no data rows.".into(),
        ));
    }

    let headers: Vec<String> = lines[0]
        .split(',')
        .map(|h| h.trim().to_lowercase())
        .collect();

    let find_col = |keywords: &[&str]| {
        headers
            .iter()
            .position(|h| keywords.iter().any(|k| h.contains(k)))
    };

    let date_idx = find_col(DATE_KEYWORDS).unwrap_or(0);
    let desc_idx = find_col(DESC_KEYWORDS).unwrap_or(1);
    let amount_idx = find_col(AMOUNT_KEYWORDS).unwrap_or(2);
    let type_idx = find_col(TYPE_KEYWORDS).unwrap_or(3);
    let cat_idx = find_col(CATEGORY_KEYWORDS).unwrap_or(4);

    let mut data = Vec::new();

    for (row, line) in lines.iter().enumerate().skip(1) {
        let values = split_quoted_row(line);

        if values.len() < 3 {
            debug!(row, "skipping malformed CSV row");
            continue;
        }

        let cell = |idx: usize| values.get(idx).map(String::as_str).unwrap_or("");

        let raw_date = cell(date_idx);
        let raw_amount = cell(amount_idx);
        let raw_type = cell(type_idx);
        let raw_category = cell(cat_idx);
        let description = match cell(desc_idx) {
            "" => "Unknown Transaction".to_string(),
            value => value.to_string(),
        };

        let date = parse_date(raw_date).unwrap_or(today);

        let cleaned: String = raw_amount
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
            .collect();
        let mut amount: f64 = match cleaned.parse() {
            Ok(value) => value,
            Err(_) => {
                debug!(row, raw = raw_amount, "skipping row with unparseable amount");
                continue;
            }
        };

        let kind = if raw_type.is_empty() {
            // No type column: direction comes from the sign, magnitude is kept.
            let inferred = if amount >= 0.0 {
                TransactionKind::Income
            } else {
                TransactionKind::Expense
            };
            amount = amount.abs();
            inferred
        } else {
            let type_str = raw_type.to_lowercase();
            if type_str.contains("income")
                || type_str.contains("credit")
                || type_str.contains("deposit")
            {
                TransactionKind::Income
            } else {
                TransactionKind::Expense
            }
        };

        let (category, is_ai_categorized) = if !raw_category.is_empty() && raw_category != "Other" {
            (raw_category.to_string(), false)
        } else {
            (classify(&description, amount, kind).category, true)
        };

        data.push(ParsedTransaction {
            date,
            description,
            amount,
            kind,
            category,
            is_ai_categorized,
        });
    }

    Ok(data)
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// Splits on commas that are not inside double-quote pairs, then strips the
/// surrounding quotes from each field.
fn split_quoted_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                current.push(c);
            }
            ',' if !in_quotes => {
                fields.push(current.clone());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current);

    fields
        .into_iter()
        .map(|field| {
            let trimmed = field.trim();
            let unquoted = trimmed.strip_prefix('"').unwrap_or(trimmed);
            let unquoted = unquoted.strip_suffix('"').unwrap_or(unquoted);
            unquoted.to_string()
        })
        .collect()
}
