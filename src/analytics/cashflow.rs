//! Daily and weekly cash flow series for charting.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::domain::{Transaction, TransactionKind};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CashFlowDay {
    pub date: NaiveDate,
    pub income: f64,
    pub expenses: f64,
    pub net: f64,
}

/// Builds the trailing seven-day series ending at `today`, oldest first.
/// Days with no activity still appear, zeroed.
pub fn daily_cash_flow(transactions: &[Transaction], today: NaiveDate) -> Vec<CashFlowDay> {
    (0..7)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            let income: f64 = transactions
                .iter()
                .filter(|t| t.date == date && t.kind == TransactionKind::Income)
                .map(|t| t.amount)
                .sum();
            let expenses: f64 = transactions
                .iter()
                .filter(|t| t.date == date && t.kind == TransactionKind::Expense)
                .map(|t| t.amount)
                .sum();
            CashFlowDay {
                date,
                income,
                expenses,
                net: income - expenses,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyCashFlow {
    /// Sunday that starts the week.
    pub week_start: NaiveDate,
    pub income: f64,
    pub expenses: f64,
    pub net: f64,
}

/// Buckets all transactions into Sunday-start weeks, most recent week first.
/// Income counts toward income; every other kind counts toward expenses.
/// Weeks with no activity are absent, and empty input yields an empty series.
pub fn weekly_cash_flow(transactions: &[Transaction]) -> Vec<WeeklyCashFlow> {
    let mut buckets: HashMap<NaiveDate, (f64, f64)> = HashMap::new();

    for txn in transactions {
        let start = week_start(txn.date);
        let entry = buckets.entry(start).or_insert((0.0, 0.0));
        match txn.kind {
            TransactionKind::Income => entry.0 += txn.amount,
            _ => entry.1 += txn.amount,
        }
    }

    let mut weeks: Vec<WeeklyCashFlow> = buckets
        .into_iter()
        .map(|(week_start, (income, expenses))| WeeklyCashFlow {
            week_start,
            income,
            expenses,
            net: income - expenses,
        })
        .collect();
    weeks.sort_by(|a, b| b.week_start.cmp(&a.week_start));
    weeks
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(kind: TransactionKind, amount: f64, date: NaiveDate) -> Transaction {
        Transaction::new(kind, "Groceries", amount, date)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn daily_series_covers_exactly_seven_days_oldest_first() {
        let today = date(2024, 6, 10);
        let series = daily_cash_flow(&[], today);
        assert_eq!(series.len(), 7);
        assert_eq!(series[0].date, date(2024, 6, 4));
        assert_eq!(series[6].date, today);
        assert!(series.iter().all(|d| d.net == 0.0));
    }

    #[test]
    fn daily_series_matches_on_exact_date() {
        let today = date(2024, 6, 10);
        let records = vec![
            txn(TransactionKind::Income, 500.0, date(2024, 6, 8)),
            txn(TransactionKind::Expense, 120.0, date(2024, 6, 8)),
            // Outside the window, ignored.
            txn(TransactionKind::Expense, 99.0, date(2024, 6, 1)),
        ];
        let series = daily_cash_flow(&records, today);
        let day = series.iter().find(|d| d.date == date(2024, 6, 8)).unwrap();
        assert_eq!(day.income, 500.0);
        assert_eq!(day.expenses, 120.0);
        assert_eq!(day.net, 380.0);
    }

    #[test]
    fn weeks_start_on_sunday_and_sort_most_recent_first() {
        // 2024-06-09 is a Sunday; 2024-06-05 is the Wednesday before it.
        let records = vec![
            txn(TransactionKind::Income, 1000.0, date(2024, 6, 10)),
            txn(TransactionKind::Expense, 200.0, date(2024, 6, 5)),
        ];
        let weeks = weekly_cash_flow(&records);
        assert_eq!(weeks.len(), 2);
        assert_eq!(weeks[0].week_start, date(2024, 6, 9));
        assert_eq!(weeks[0].income, 1000.0);
        assert_eq!(weeks[1].week_start, date(2024, 6, 2));
        assert_eq!(weeks[1].expenses, 200.0);
    }

    #[test]
    fn non_income_kinds_count_as_outflow() {
        let records = vec![
            txn(TransactionKind::Transfer, 50.0, date(2024, 6, 10)),
            txn(TransactionKind::Withdrawal, 30.0, date(2024, 6, 10)),
        ];
        let weeks = weekly_cash_flow(&records);
        assert_eq!(weeks[0].expenses, 80.0);
        assert_eq!(weeks[0].net, -80.0);
    }

    #[test]
    fn empty_input_yields_empty_weekly_series() {
        assert!(weekly_cash_flow(&[]).is_empty());
    }
}
