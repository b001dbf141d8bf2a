//! The deeper advisor pass: ratio health, anomaly detection, day-of-month
//! patterns, month-end projection, and a cut suggestion.
//!
//! Like the coarse generator, rules emit in a fixed order and only the first
//! five survive, so the three ratio checks dominate whenever income exists.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::analytics::summary::{DISCRETIONARY_CATEGORIES, ESSENTIAL_CATEGORIES};
use crate::currency::format_currency;
use crate::domain::{Transaction, TransactionKind};

const MAX_INSIGHTS: usize = 5;

/// Spending within a month must run past this day before projections fire.
const MIN_DAYS_FOR_PROJECTION: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvisorKind {
    Health,
    Optimization,
    Pattern,
    Anomaly,
    Prediction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvisorInsight {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AdvisorKind,
    pub title: String,
    pub message: String,
    pub icon: String,
    pub severity: Severity,
    pub actionable: bool,
}

#[derive(PartialEq, Clone, Copy)]
enum RatioGrade {
    Success,
    Warning,
    Danger,
}

impl RatioGrade {
    fn severity(self) -> Severity {
        match self {
            RatioGrade::Danger => Severity::High,
            RatioGrade::Warning => Severity::Medium,
            RatioGrade::Success => Severity::Low,
        }
    }
}

/// Derives up to five advisor insights. `today` anchors the month-end
/// projection; forecast entries are ignored throughout.
pub fn generate_advisor_insights(
    transactions: &[Transaction],
    currency: &str,
    today: NaiveDate,
) -> Vec<AdvisorInsight> {
    let expenses: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense && !t.is_forecast)
        .collect();
    let total_income: f64 = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Income && !t.is_forecast)
        .map(|t| t.amount)
        .sum();
    let total_expenses: f64 = expenses.iter().map(|t| t.amount).sum();

    let mut insights = Vec::new();

    // Savings rate, against the 20% rule of thumb.
    if total_income > 0.0 {
        let savings_rate = (total_income - total_expenses) / total_income * 100.0;
        let (message, grade) = if savings_rate >= 20.0 {
            (
                format!(
                    "Excellent! Your savings rate is {savings_rate:.1}%. You are building wealth efficiently."
                ),
                RatioGrade::Success,
            )
        } else if savings_rate >= 10.0 {
            (
                format!(
                    "Your savings rate is {savings_rate:.1}%. Good progress, but aim for 20% to accelerate goals."
                ),
                RatioGrade::Warning,
            )
        } else if savings_rate > 0.0 {
            (
                format!(
                    "Your savings rate is low ({savings_rate:.1}%). Try to reduce non-essential spending to boost this."
                ),
                RatioGrade::Warning,
            )
        } else {
            (
                "You are spending more than you earn. Immediate budget correction is required."
                    .to_string(),
                RatioGrade::Danger,
            )
        };
        insights.push(AdvisorInsight {
            id: "ratio-savings".into(),
            kind: AdvisorKind::Health,
            title: "Savings Rate Ratio".into(),
            message,
            icon: "TrendingUp".into(),
            severity: grade.severity(),
            actionable: grade != RatioGrade::Success,
        });
    }

    // Essential expenses, the "needs" half of 50/30/20.
    if total_income > 0.0 {
        let essential: f64 = expenses
            .iter()
            .filter(|t| ESSENTIAL_CATEGORIES.contains(&t.category.as_str()))
            .map(|t| t.amount)
            .sum();
        let ratio = essential / total_income * 100.0;
        let (message, grade) = if ratio > 60.0 {
            (
                format!(
                    "Essential costs consume {ratio:.1}% of income. This is high; consider housing or utility adjustments."
                ),
                RatioGrade::Danger,
            )
        } else if ratio > 50.0 {
            (
                format!(
                    "Essential costs are {ratio:.1}% of income. You are slightly over the recommended 50% limit."
                ),
                RatioGrade::Warning,
            )
        } else {
            (
                format!(
                    "Essential costs are {ratio:.1}% of income. You are well within the healthy 50% range."
                ),
                RatioGrade::Success,
            )
        };
        insights.push(AdvisorInsight {
            id: "ratio-essential".into(),
            kind: AdvisorKind::Optimization,
            title: "Essential Expenses Ratio".into(),
            message,
            icon: "Target".into(),
            severity: grade.severity(),
            actionable: grade != RatioGrade::Success,
        });
    }

    // Discretionary spending, the "wants" share.
    if total_income > 0.0 {
        let discretionary: f64 = expenses
            .iter()
            .filter(|t| DISCRETIONARY_CATEGORIES.contains(&t.category.as_str()))
            .map(|t| t.amount)
            .sum();
        let ratio = discretionary / total_income * 100.0;
        let (message, grade) = if ratio > 40.0 {
            (
                format!(
                    "Lifestyle inflation detected. {ratio:.1}% of income goes to wants. Cut back to hit 30%."
                ),
                RatioGrade::Warning,
            )
        } else if ratio > 30.0 {
            (
                format!(
                    "Discretionary spending is {ratio:.1}%. You are slightly over the 30% guideline."
                ),
                RatioGrade::Warning,
            )
        } else {
            (
                format!(
                    "Discretionary spending is {ratio:.1}%. You have good control over your \"wants\"."
                ),
                RatioGrade::Success,
            )
        };
        insights.push(AdvisorInsight {
            id: "ratio-discretionary".into(),
            kind: AdvisorKind::Pattern,
            title: "Discretionary Spending".into(),
            message,
            icon: "Zap".into(),
            severity: grade.severity(),
            actionable: grade == RatioGrade::Warning,
        });
    }

    // Anomalies: a single charge more than double the category average.
    let grouped = group_amounts(&expenses);
    for (category, amounts) in &grouped {
        if amounts.len() < 2 {
            continue;
        }
        let avg = amounts.iter().sum::<f64>() / amounts.len() as f64;
        let max = amounts.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        if max > avg * 2.0 {
            insights.push(AdvisorInsight {
                id: format!("anomaly-{category}"),
                kind: AdvisorKind::Anomaly,
                title: format!("Unusual Spending in {category}"),
                message: format!(
                    "You spent {} on {}, which is significantly higher than your average of {}.",
                    format_currency(max, currency),
                    category,
                    format_currency(avg, currency)
                ),
                icon: "AlertTriangle".into(),
                severity: Severity::High,
                actionable: true,
            });
        }
    }

    // Same category, same day of the month, more than once.
    let mut day_counts: Vec<((String, u32), u32)> = Vec::new();
    for txn in &expenses {
        let key = (txn.category.clone(), txn.date.day());
        match day_counts.iter_mut().find(|(k, _)| *k == key) {
            Some((_, count)) => *count += 1,
            None => day_counts.push((key, 1)),
        }
    }
    for ((category, day), count) in &day_counts {
        if *count >= 2 {
            insights.push(AdvisorInsight {
                id: format!("pattern-{category}-{day}"),
                kind: AdvisorKind::Pattern,
                title: "Recurring Pattern Detected".into(),
                message: format!(
                    "You have transactions in \"{category}\" on the same day of the month multiple times. Consider setting this up as a recurring bill."
                ),
                icon: "Repeat".into(),
                severity: Severity::Low,
                actionable: true,
            });
        }
    }

    // Month-end projection at the current burn rate.
    let days_in_month = days_in_month(today);
    let days_passed = today.day();
    let days_left = days_in_month - days_passed;
    let burn_rate = if days_passed > 0 {
        total_expenses / days_passed as f64
    } else {
        0.0
    };
    let projected = total_expenses + burn_rate * days_left as f64;

    if days_passed > MIN_DAYS_FOR_PROJECTION {
        if projected > total_income && total_income > 0.0 {
            insights.push(AdvisorInsight {
                id: "prediction-overspend".into(),
                kind: AdvisorKind::Prediction,
                title: "Month-End Projection".into(),
                message: format!(
                    "At your current burn rate, you're projected to spend {} by month-end, exceeding your income.",
                    format_currency(projected, currency)
                ),
                icon: "TrendingDown".into(),
                severity: Severity::High,
                actionable: true,
            });
        } else if projected < total_income * 0.8 && total_income > 0.0 {
            insights.push(AdvisorInsight {
                id: "prediction-underspend".into(),
                kind: AdvisorKind::Prediction,
                title: "On Track for Savings".into(),
                message: format!(
                    "Projected month-end spend is {}. You are in a safe position.",
                    format_currency(projected, currency)
                ),
                icon: "TrendingUp".into(),
                severity: Severity::Low,
                actionable: false,
            });
        }
    }

    // Cut suggestion for the biggest category.
    let top = grouped
        .iter()
        .map(|(category, amounts)| (category, amounts.iter().sum::<f64>()))
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    if let Some((category, total)) = top {
        insights.push(AdvisorInsight {
            id: "optimization-cut".into(),
            kind: AdvisorKind::Optimization,
            title: format!("Optimize {category}"),
            message: format!(
                "Reducing your {} spending by 20% could save you {}.",
                category,
                format_currency(total * 0.2, currency)
            ),
            icon: "Target".into(),
            severity: Severity::Medium,
            actionable: true,
        });
    }

    insights.truncate(MAX_INSIGHTS);
    insights
}

fn group_amounts(expenses: &[&Transaction]) -> Vec<(String, Vec<f64>)> {
    let mut grouped: Vec<(String, Vec<f64>)> = Vec::new();
    for txn in expenses {
        match grouped.iter_mut().find(|(cat, _)| *cat == txn.category) {
            Some((_, amounts)) => amounts.push(txn.amount),
            None => grouped.push((txn.category.clone(), vec![txn.amount])),
        }
    }
    grouped
}

fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    let first_of_next = NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap_or(date);
    first_of_next.pred_opt().map(|d| d.day()).unwrap_or(28)
}
