use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::token_id;

/// A bill to pay. `status` is the persisted tri-state value and may be stale
/// relative to today; the engines in `analytics::bills` re-derive the
/// effective bucket on every read. `paid` is the terminal user action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub id: String,
    pub name: String,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub category: String,
    #[serde(default)]
    pub status: BillStatus,
    #[serde(default)]
    pub paid: bool,
    #[serde(default)]
    pub is_recurring: bool,
    /// Declarative metadata only: nothing advances `due_date` to the next
    /// occurrence. Recurring bills are re-entered manually.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_period: Option<RecurringPeriod>,
}

impl Bill {
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        due_date: NaiveDate,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: token_id(),
            name: name.into(),
            amount,
            due_date,
            category: category.into(),
            status: BillStatus::Pending,
            paid: false,
            is_recurring: false,
            recurring_period: None,
        }
    }

    pub fn with_recurrence(mut self, period: RecurringPeriod) -> Self {
        self.is_recurring = true;
        self.recurring_period = Some(period);
        self
    }

    /// Marks the bill paid. Terminal for this instance.
    pub fn mark_paid(&mut self) {
        self.paid = true;
        self.status = BillStatus::Paid;
    }
}

/// Persisted bill state. `Pending` is what forms write; `Overdue` and
/// `Upcoming` appear once a revalidation pass has been stored back.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    #[default]
    Pending,
    Paid,
    Overdue,
    Upcoming,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecurringPeriod {
    Monthly,
    Weekly,
    Yearly,
}
