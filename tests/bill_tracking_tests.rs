use chrono::NaiveDate;
use fintrack_core::analytics::{
    bill_status, bills_by_status, revalidate_status, upcoming_alert, DueStatus,
};
use fintrack_core::domain::{Bill, BillStatus, RecurringPeriod};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn household_bills(today: NaiveDate) -> Vec<Bill> {
    let mut rent = Bill::new("Rent", 1200.0, date(2024, 6, 1), "Housing")
        .with_recurrence(RecurringPeriod::Monthly);
    rent.mark_paid();
    vec![
        rent,
        Bill::new("Electricity", 85.0, today - chrono::Duration::days(3), "Utilities"),
        Bill::new("Internet", 50.0, today + chrono::Duration::days(4), "Utilities"),
        Bill::new("Insurance", 220.0, today + chrono::Duration::days(20), "Health"),
    ]
}

#[test]
fn report_partitions_amounts_two_ways() {
    let today = date(2024, 6, 15);
    let report = bill_status(&household_bills(today), today);

    assert_eq!(report.total, 1555.0);
    // paid/unpaid partition the whole total.
    assert_eq!(report.paid, 1200.0);
    assert_eq!(report.unpaid, 355.0);
    // overdue/upcoming are subsets of unpaid; due-soon sits between them.
    assert_eq!(report.overdue, 85.0);
    assert_eq!(report.upcoming, 220.0);
}

#[test]
fn categorized_bills_carry_day_counts_in_due_order() {
    let today = date(2024, 6, 15);
    let report = bill_status(&household_bills(today), today);
    let names: Vec<&str> = report
        .categorized
        .iter()
        .map(|c| c.bill.name.as_str())
        .collect();
    assert_eq!(names, ["Rent", "Electricity", "Internet", "Insurance"]);

    let internet = &report.categorized[2];
    assert_eq!(internet.due_status, DueStatus::Unpaid);
    assert_eq!(internet.days_until_due, 4);
}

#[test]
fn stored_status_revalidation_tracks_the_calendar() {
    let today = date(2024, 6, 15);
    // A bill saved as pending last month reads as overdue now.
    assert_eq!(
        revalidate_status(date(2024, 5, 20), BillStatus::Pending, today),
        BillStatus::Overdue
    );
    // A stale "upcoming" flips once the date passes.
    assert_eq!(
        revalidate_status(date(2024, 6, 14), BillStatus::Upcoming, today),
        BillStatus::Overdue
    );
    assert_eq!(
        revalidate_status(date(2024, 5, 20), BillStatus::Paid, today),
        BillStatus::Paid
    );
}

#[test]
fn buckets_split_by_refreshed_status() {
    let today = date(2024, 6, 15);
    let buckets = bills_by_status(&household_bills(today), today);
    assert_eq!(buckets.paid.len(), 1);
    assert_eq!(buckets.overdue.len(), 1);
    assert_eq!(buckets.upcoming.len(), 2);
    assert_eq!(buckets.upcoming[0].name, "Internet");
}

#[test]
fn alert_counts_only_the_next_week() {
    let today = date(2024, 6, 15);
    let alert = upcoming_alert(&household_bills(today), today);
    assert_eq!(alert.count, 1);
    assert_eq!(alert.total, 50.0);
}

#[test]
fn no_bills_means_a_zeroed_report() {
    let today = date(2024, 6, 15);
    let report = bill_status(&[], today);
    assert_eq!(report.total, 0.0);
    assert!(report.categorized.is_empty());
    assert_eq!(upcoming_alert(&[], today).count, 0);
}
