//! Per-category spending predictions.

use serde::Serialize;

use crate::analytics::summary::group_expense_amounts;
use crate::domain::Transaction;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastPrediction {
    pub category: String,
    pub predicted_amount: f64,
}

/// Predicts next-period spending per category as the mean of all recorded
/// expense amounts, rounded to cents. Categories with no history are absent;
/// prior forecast entries count as history.
pub fn forecast_predictions(transactions: &[Transaction]) -> Vec<ForecastPrediction> {
    group_expense_amounts(transactions)
        .into_iter()
        .map(|(category, amounts)| {
            let avg = amounts.iter().sum::<f64>() / amounts.len() as f64;
            ForecastPrediction {
                category,
                predicted_amount: (avg * 100.0).round() / 100.0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransactionKind;
    use chrono::NaiveDate;

    fn expense(category: &str, amount: f64) -> Transaction {
        Transaction::new(
            TransactionKind::Expense,
            category,
            amount,
            NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
        )
    }

    #[test]
    fn predicts_the_mean_of_recorded_amounts() {
        let records = vec![
            expense("Groceries", 10.0),
            expense("Groceries", 20.0),
            expense("Groceries", 30.0),
        ];
        let predictions = forecast_predictions(&records);
        assert_eq!(predictions.len(), 1);
        assert_eq!(predictions[0].category, "Groceries");
        assert_eq!(predictions[0].predicted_amount, 20.0);
    }

    #[test]
    fn rounds_to_cents() {
        let records = vec![
            expense("Dining", 10.0),
            expense("Dining", 10.0),
            expense("Dining", 10.01),
        ];
        let predictions = forecast_predictions(&records);
        assert_eq!(predictions[0].predicted_amount, 10.0);
    }

    #[test]
    fn income_never_contributes() {
        let records = vec![Transaction::new(
            TransactionKind::Income,
            "Salary",
            3000.0,
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
        )];
        assert!(forecast_predictions(&records).is_empty());
    }
}
