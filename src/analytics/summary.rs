//! Budget totals, per-category spending, and financial health ratios.

use std::cmp::Ordering;

use serde::Serialize;

use crate::domain::{Transaction, TransactionKind};

/// Categories treated as "needs" for ratio purposes. Not a stored attribute.
pub(crate) const ESSENTIAL_CATEGORIES: &[&str] = &[
    "Rent",
    "Housing",
    "Utilities",
    "Groceries",
    "Health",
    "Transportation",
];

/// Categories treated as "wants" for ratio purposes.
pub(crate) const DISCRETIONARY_CATEGORIES: &[&str] = &["Entertainment", "Dining", "Shopping"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,
    /// Expenses as a share of income, 0 when there is no income.
    pub percentage: f64,
    pub status: BudgetHealth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetHealth {
    Good,
    Warning,
    Danger,
}

/// Sums income against expenses for the supplied window of transactions.
pub fn budget_summary(transactions: &[Transaction]) -> BudgetSummary {
    let income = sum_of(transactions, TransactionKind::Income);
    let expenses = sum_of(transactions, TransactionKind::Expense);
    let balance = income - expenses;
    let percentage = if income > 0.0 {
        expenses / income * 100.0
    } else {
        0.0
    };

    let status = if percentage >= 90.0 {
        BudgetHealth::Danger
    } else if percentage >= 80.0 {
        BudgetHealth::Warning
    } else {
        BudgetHealth::Good
    };

    BudgetSummary {
        total_income: income,
        total_expenses: expenses,
        balance,
        percentage,
        status,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySpending {
    pub category: String,
    pub amount: f64,
    /// Share of total expense spend, 0 when nothing was spent.
    pub percentage: f64,
}

/// Groups expense amounts by category, sorted by amount descending.
pub fn category_spending(transactions: &[Transaction]) -> Vec<CategorySpending> {
    let grouped = group_expense_amounts(transactions);
    let total: f64 = grouped.iter().map(|(_, amounts)| sum(amounts)).sum();

    let mut spending: Vec<CategorySpending> = grouped
        .into_iter()
        .map(|(category, amounts)| {
            let amount = sum(&amounts);
            CategorySpending {
                category,
                amount,
                percentage: if total > 0.0 {
                    amount / total * 100.0
                } else {
                    0.0
                },
            }
        })
        .collect();

    spending.sort_by(|a, b| b.amount.partial_cmp(&a.amount).unwrap_or(Ordering::Equal));
    spending
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialRatio {
    pub name: String,
    /// Percentage value of the ratio.
    pub value: f64,
    /// Rule-of-thumb target percentage.
    pub target: f64,
    pub status: RatioStatus,
    pub description: String,
    pub tip: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RatioStatus {
    Good,
    Warning,
    Bad,
}

/// Computes the three health ratios (savings, essential, discretionary)
/// against their 20/50/30 rule-of-thumb targets. Forecast entries are
/// excluded; with no real income the list is empty.
pub fn financial_ratios(transactions: &[Transaction]) -> Vec<FinancialRatio> {
    let income: f64 = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Income && !t.is_forecast)
        .map(|t| t.amount)
        .sum();
    if income <= 0.0 {
        return Vec::new();
    }

    let expenses: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense && !t.is_forecast)
        .collect();
    let total_expenses: f64 = expenses.iter().map(|t| t.amount).sum();

    let savings_rate = (income - total_expenses) / income * 100.0;
    let essential: f64 = expenses
        .iter()
        .filter(|t| ESSENTIAL_CATEGORIES.contains(&t.category.as_str()))
        .map(|t| t.amount)
        .sum();
    let discretionary: f64 = expenses
        .iter()
        .filter(|t| DISCRETIONARY_CATEGORIES.contains(&t.category.as_str()))
        .map(|t| t.amount)
        .sum();
    let essential_ratio = essential / income * 100.0;
    let discretionary_ratio = discretionary / income * 100.0;

    vec![
        FinancialRatio {
            name: "Savings Rate".into(),
            value: savings_rate,
            target: 20.0,
            status: if savings_rate >= 20.0 {
                RatioStatus::Good
            } else if savings_rate > 0.0 {
                RatioStatus::Warning
            } else {
                RatioStatus::Bad
            },
            description: "Share of income left after expenses".into(),
            tip: "Aim to keep at least 20% of income unspent each month.".into(),
        },
        FinancialRatio {
            name: "Essential Expenses".into(),
            value: essential_ratio,
            target: 50.0,
            status: if essential_ratio > 60.0 {
                RatioStatus::Bad
            } else if essential_ratio > 50.0 {
                RatioStatus::Warning
            } else {
                RatioStatus::Good
            },
            description: "Needs (housing, utilities, groceries, health, transport) vs income"
                .into(),
            tip: "Keep essential costs under half of what you earn.".into(),
        },
        FinancialRatio {
            name: "Discretionary Spending".into(),
            value: discretionary_ratio,
            target: 30.0,
            status: if discretionary_ratio > 40.0 {
                RatioStatus::Bad
            } else if discretionary_ratio > 30.0 {
                RatioStatus::Warning
            } else {
                RatioStatus::Good
            },
            description: "Wants (entertainment, dining, shopping) vs income".into(),
            tip: "Keep lifestyle spending under 30% of income.".into(),
        },
    ]
}

fn sum_of(transactions: &[Transaction], kind: TransactionKind) -> f64 {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

fn sum(amounts: &[f64]) -> f64 {
    amounts.iter().sum()
}

/// Groups expense amounts by category, preserving first-seen order.
pub(crate) fn group_expense_amounts(transactions: &[Transaction]) -> Vec<(String, Vec<f64>)> {
    let mut grouped: Vec<(String, Vec<f64>)> = Vec::new();
    for txn in transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense)
    {
        match grouped.iter_mut().find(|(cat, _)| *cat == txn.category) {
            Some((_, amounts)) => amounts.push(txn.amount),
            None => grouped.push((txn.category.clone(), vec![txn.amount])),
        }
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn txn(kind: TransactionKind, category: &str, amount: f64) -> Transaction {
        Transaction::new(kind, category, amount, NaiveDate::from_ymd_opt(2024, 5, 10).unwrap())
    }

    #[test]
    fn balance_is_income_minus_expenses() {
        let records = vec![
            txn(TransactionKind::Income, "Salary", 3000.0),
            txn(TransactionKind::Expense, "Groceries", 450.0),
            txn(TransactionKind::Expense, "Dining", 150.0),
        ];
        let summary = budget_summary(&records);
        assert_eq!(summary.total_income, 3000.0);
        assert_eq!(summary.total_expenses, 600.0);
        assert_eq!(summary.balance, 2400.0);
        assert_eq!(summary.status, BudgetHealth::Good);
    }

    #[test]
    fn zero_income_gives_zero_percentage() {
        let records = vec![txn(TransactionKind::Expense, "Dining", 40.0)];
        let summary = budget_summary(&records);
        assert_eq!(summary.percentage, 0.0);
    }

    #[test]
    fn status_thresholds_at_eighty_and_ninety_percent() {
        let mut records = vec![
            txn(TransactionKind::Income, "Salary", 100.0),
            txn(TransactionKind::Expense, "Dining", 85.0),
        ];
        assert_eq!(budget_summary(&records).status, BudgetHealth::Warning);
        records.push(txn(TransactionKind::Expense, "Dining", 5.0));
        assert_eq!(budget_summary(&records).status, BudgetHealth::Danger);
    }

    #[test]
    fn category_percentages_sum_to_one_hundred() {
        let records = vec![
            txn(TransactionKind::Expense, "Groceries", 300.0),
            txn(TransactionKind::Expense, "Dining", 100.0),
            txn(TransactionKind::Expense, "Shopping", 100.0),
        ];
        let spending = category_spending(&records);
        assert_eq!(spending[0].category, "Groceries");
        let total: f64 = spending.iter().map(|s| s.percentage).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn empty_input_yields_zeroed_results() {
        let summary = budget_summary(&[]);
        assert_eq!(summary.balance, 0.0);
        assert_eq!(summary.percentage, 0.0);
        assert!(category_spending(&[]).is_empty());
        assert!(financial_ratios(&[]).is_empty());
    }

    #[test]
    fn ratios_use_rule_of_thumb_targets() {
        let records = vec![
            txn(TransactionKind::Income, "Salary", 1000.0),
            txn(TransactionKind::Expense, "Rent", 550.0),
            txn(TransactionKind::Expense, "Dining", 350.0),
        ];
        let ratios = financial_ratios(&records);
        assert_eq!(ratios.len(), 3);
        assert_eq!(ratios[0].status, RatioStatus::Warning); // 10% savings
        assert_eq!(ratios[1].status, RatioStatus::Warning); // 55% essential
        assert_eq!(ratios[2].status, RatioStatus::Warning); // 35% discretionary
    }
}
