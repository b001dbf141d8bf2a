//! Bill due-status derivation.
//!
//! Two classifiers coexist on purpose. `bill_status` derives a four-way
//! urgency (`DueStatus`) from the paid flag and proximity to `today`, used
//! for the aggregate report. `revalidate_status` refreshes the stored
//! three-way `BillStatus` from the due date alone. Callers should not mix
//! the two vocabularies.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{Bill, BillStatus};

/// Days before the due date at which an unpaid bill becomes urgent.
const DUE_SOON_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DueStatus {
    Paid,
    Unpaid,
    Overdue,
    Upcoming,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorizedBill {
    #[serde(flatten)]
    pub bill: Bill,
    pub due_status: DueStatus,
    /// Whole days from `today` to the due date; negative when past due.
    pub days_until_due: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillStatusReport {
    pub total: f64,
    pub paid: f64,
    pub unpaid: f64,
    pub overdue: f64,
    pub upcoming: f64,
    pub categorized: Vec<CategorizedBill>,
}

/// Classifies every bill against `today` and totals the amounts per bucket.
///
/// `paid` and `unpaid` partition the full total by the paid flag; `overdue`
/// and `upcoming` are subsets of the unpaid amount. The categorized list is
/// sorted by due date ascending.
pub fn bill_status(bills: &[Bill], today: NaiveDate) -> BillStatusReport {
    let mut categorized: Vec<CategorizedBill> = bills
        .iter()
        .map(|bill| {
            let days_until_due = (bill.due_date - today).num_days();
            let due_status = if bill.paid {
                DueStatus::Paid
            } else if days_until_due < 0 {
                DueStatus::Overdue
            } else if days_until_due <= DUE_SOON_DAYS {
                DueStatus::Unpaid
            } else {
                DueStatus::Upcoming
            };
            CategorizedBill {
                bill: bill.clone(),
                due_status,
                days_until_due,
            }
        })
        .collect();
    categorized.sort_by(|a, b| a.bill.due_date.cmp(&b.bill.due_date));

    let sum_where = |pred: &dyn Fn(&CategorizedBill) -> bool| -> f64 {
        categorized
            .iter()
            .filter(|c| pred(c))
            .map(|c| c.bill.amount)
            .sum()
    };

    BillStatusReport {
        total: categorized.iter().map(|c| c.bill.amount).sum(),
        paid: sum_where(&|c| c.bill.paid),
        unpaid: sum_where(&|c| !c.bill.paid),
        overdue: sum_where(&|c| c.due_status == DueStatus::Overdue),
        upcoming: sum_where(&|c| c.due_status == DueStatus::Upcoming),
        categorized,
    }
}

/// Refreshes a stored status from the due date. Paid is sticky; anything
/// else resolves to overdue or upcoming by comparing against `today`.
pub fn revalidate_status(due_date: NaiveDate, stored: BillStatus, today: NaiveDate) -> BillStatus {
    if stored == BillStatus::Paid {
        return BillStatus::Paid;
    }
    if due_date < today {
        BillStatus::Overdue
    } else {
        BillStatus::Upcoming
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BillBuckets {
    pub overdue: Vec<Bill>,
    /// Sorted by due date ascending.
    pub upcoming: Vec<Bill>,
    pub paid: Vec<Bill>,
}

/// Buckets bills by their refreshed stored status.
pub fn bills_by_status(bills: &[Bill], today: NaiveDate) -> BillBuckets {
    let mut buckets = BillBuckets::default();
    for bill in bills {
        match revalidate_status(bill.due_date, bill.status, today) {
            BillStatus::Overdue => buckets.overdue.push(bill.clone()),
            BillStatus::Paid => buckets.paid.push(bill.clone()),
            _ => buckets.upcoming.push(bill.clone()),
        }
    }
    buckets.upcoming.sort_by(|a, b| a.due_date.cmp(&b.due_date));
    buckets
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UpcomingAlert {
    pub count: usize,
    pub total: f64,
}

/// Counts unpaid bills due within the next week, today inclusive.
pub fn upcoming_alert(bills: &[Bill], today: NaiveDate) -> UpcomingAlert {
    let horizon = today + chrono::Duration::days(DUE_SOON_DAYS);
    let due_soon: Vec<&Bill> = bills
        .iter()
        .filter(|b| !b.paid && b.due_date >= today && b.due_date <= horizon)
        .collect();
    UpcomingAlert {
        count: due_soon.len(),
        total: due_soon.iter().map(|b| b.amount).sum(),
    }
}
