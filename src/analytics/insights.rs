//! Rule-based monthly insight generation.
//!
//! Rules run in a fixed order and the output keeps only the first four, so
//! earlier rules are the more urgent ones. Forecast entries never count.

use serde::Serialize;

use crate::analytics::summary::group_expense_amounts;
use crate::currency::format_currency;
use crate::domain::{Transaction, TransactionKind};

const MAX_INSIGHTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Danger,
    Warning,
    Success,
    Tip,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: String,
    pub message: String,
    /// Icon key for the presentation layer.
    pub icon: String,
    pub actionable: bool,
}

impl Insight {
    fn new(
        id: &str,
        kind: InsightKind,
        title: &str,
        message: String,
        icon: &str,
        actionable: bool,
    ) -> Self {
        Self {
            id: id.to_string(),
            kind,
            title: title.to_string(),
            message,
            icon: icon.to_string(),
            actionable,
        }
    }
}

/// Derives up to four insights for the given window of transactions.
pub fn generate_insights(transactions: &[Transaction], currency: &str) -> Vec<Insight> {
    let real: Vec<Transaction> = transactions
        .iter()
        .filter(|t| !t.is_forecast)
        .cloned()
        .collect();

    let total_expenses: f64 = real
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense)
        .map(|t| t.amount)
        .sum();
    let total_income: f64 = real
        .iter()
        .filter(|t| t.kind == TransactionKind::Income)
        .map(|t| t.amount)
        .sum();
    let balance = total_income - total_expenses;

    let mut by_category: Vec<(String, f64)> = group_expense_amounts(&real)
        .into_iter()
        .map(|(category, amounts)| (category, amounts.iter().sum()))
        .collect();
    by_category.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let spent_on = |category: &str| {
        by_category
            .iter()
            .find(|(cat, _)| cat == category)
            .map(|(_, amount)| *amount)
            .unwrap_or(0.0)
    };

    let mut insights = Vec::new();

    // Budget health check.
    if balance < 0.0 {
        insights.push(Insight::new(
            "1",
            InsightKind::Danger,
            "Over Budget Alert",
            format!(
                "You've spent {} more than you earned this month. Review your largest expenses immediately.",
                format_currency(balance.abs(), currency)
            ),
            "AlertTriangle",
            true,
        ));
    } else if total_expenses > total_income * 0.9 {
        insights.push(Insight::new(
            "2",
            InsightKind::Warning,
            "Budget Nearly Exhausted",
            format!(
                "You've used {:.0}% of your income. Consider pausing non-essential spending.",
                total_expenses / total_income * 100.0
            ),
            "TrendingDown",
            true,
        ));
    } else {
        insights.push(Insight::new(
            "3",
            InsightKind::Success,
            "Healthy Budget",
            format!(
                "Great job! You have {} remaining. Consider saving or investing this surplus.",
                format_currency(balance, currency)
            ),
            "CheckCircle",
            false,
        ));
    }

    // Top spending concentration.
    if let Some((top_category, top_amount)) = by_category.first().cloned() {
        let percentage = top_amount / total_expenses * 100.0;
        if percentage > 40.0 {
            insights.push(Insight::new(
                "4",
                InsightKind::Warning,
                "High Spending Concentration",
                format!(
                    "{} accounts for {:.0}% of your expenses ({}). Try to reduce this by 10% to save {}.",
                    top_category,
                    percentage,
                    format_currency(top_amount, currency),
                    format_currency(top_amount * 0.1, currency)
                ),
                "PieChart",
                true,
            ));
        } else if percentage > 25.0 {
            insights.push(Insight::new(
                "5",
                InsightKind::Tip,
                "Top Spending Category",
                format!(
                    "{} is your biggest expense at {}. Look for discounts or alternatives in this category.",
                    top_category,
                    format_currency(top_amount, currency)
                ),
                "Tag",
                true,
            ));
        }
    }

    // Dining and entertainment check.
    let leisure_total = spent_on("Dining") + spent_on("Entertainment");
    if leisure_total > total_income * 0.15 {
        insights.push(Insight::new(
            "6",
            InsightKind::Warning,
            "Leisure Spending Alert",
            format!(
                "You've spent {} on dining and entertainment. Cooking at home and free activities could save you {}.",
                format_currency(leisure_total, currency),
                format_currency(leisure_total * 0.3, currency)
            ),
            "Utensils",
            true,
        ));
    }

    // Savings rate.
    let savings_rate = if total_income > 0.0 {
        balance / total_income * 100.0
    } else {
        0.0
    };
    if savings_rate < 10.0 && total_income > 0.0 {
        insights.push(Insight::new(
            "7",
            InsightKind::Tip,
            "Boost Your Savings",
            format!(
                "Your savings rate is {savings_rate:.1}%. Aim for at least 20%. Set up automatic transfers to save first."
            ),
            "PiggyBank",
            true,
        ));
    } else if savings_rate >= 20.0 {
        insights.push(Insight::new(
            "8",
            InsightKind::Success,
            "Excellent Savings Rate",
            format!(
                "You're saving {savings_rate:.1}% of your income! This puts you ahead of most people."
            ),
            "Star",
            false,
        ));
    }

    // Small purchases.
    let small_expenses = real
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense && t.amount < 20.0)
        .count();
    if small_expenses > 5 {
        insights.push(Insight::new(
            "9",
            InsightKind::Tip,
            "Watch Small Purchases",
            format!(
                "You made {small_expenses} small purchases under $20. These add up quickly. Track them for a week to see the impact."
            ),
            "Coffee",
            true,
        ));
    }

    // Subscription hint.
    if spent_on("Utilities") > 100.0 || spent_on("Shopping") > 100.0 {
        insights.push(Insight::new(
            "10",
            InsightKind::Tip,
            "Review Subscriptions",
            "Check for unused subscriptions or recurring charges. Canceling just one can save $10-30/month."
                .to_string(),
            "RefreshCw",
            true,
        ));
    }

    insights.truncate(MAX_INSIGHTS);
    insights
}
