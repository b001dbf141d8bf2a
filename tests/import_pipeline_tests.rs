use chrono::NaiveDate;
use fintrack_core::classify::{classify, Confidence, Method};
use fintrack_core::domain::TransactionKind;
use fintrack_core::import::{parse_csv, parse_quick_add};

fn import_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()
}

#[test]
fn bank_export_row_becomes_a_classified_expense() {
    let csv = "date,description,amount\n2024-01-05,Whole Foods Market,-42.10\n";
    let rows = parse_csv(csv, import_day()).unwrap();
    assert_eq!(rows.len(), 1);

    let row = &rows[0];
    assert_eq!(row.date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    assert_eq!(row.kind, TransactionKind::Expense);
    assert_eq!(row.amount, 42.10);
    assert_eq!(row.category, "Groceries");
    assert!(row.is_ai_categorized);

    let txn = row.clone().into_transaction();
    assert!(!txn.id.is_empty());
    assert!(!txn.is_forecast);
    assert!(txn.is_ai_categorized);
}

#[test]
fn type_column_overrides_sign_inference() {
    let csv = "date,description,amount,type\n\
               2024-01-10,Paycheck,2500.00,Direct Deposit\n\
               2024-01-11,Refund reversal,15.00,debit\n";
    let rows = parse_csv(csv, import_day()).unwrap();
    assert_eq!(rows[0].kind, TransactionKind::Income);
    assert_eq!(rows[1].kind, TransactionKind::Expense);
}

#[test]
fn explicit_categories_are_kept_verbatim() {
    let csv = "date,description,amount,type,category\n\
               2024-01-12,Corner shop,9.99,debit,Snacks\n\
               2024-01-13,Mystery charge,30.00,debit,Other\n";
    let rows = parse_csv(csv, import_day()).unwrap();

    assert_eq!(rows[0].category, "Snacks");
    assert!(!rows[0].is_ai_categorized);

    // "Other" is treated as unset and re-classified.
    assert_eq!(rows[1].category, "Dining");
    assert!(rows[1].is_ai_categorized);
}

#[test]
fn header_only_uploads_are_rejected() {
    assert!(parse_csv("date,description,amount", import_day()).is_err());
    assert!(parse_csv("", import_day()).is_err());
}

#[test]
fn keyword_classification_beats_amount_heuristics() {
    let hit = classify("Whole Foods Market", 42.10, TransactionKind::Expense);
    assert_eq!(hit.category, "Groceries");
    assert_eq!(hit.confidence, Confidence::High);
    assert_eq!(hit.method, Method::Keyword);

    let range = classify("xyz123", 30.0, TransactionKind::Expense);
    assert_eq!(range.category, "Dining");
    assert_eq!(range.confidence, Confidence::Medium);
    assert_eq!(range.method, Method::Amount);
}

#[test]
fn quick_add_drafts_are_complete_but_unpersisted() {
    let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    let draft = parse_quick_add("Spent $45 on groceries yesterday", today);
    assert_eq!(draft.kind, TransactionKind::Expense);
    assert_eq!(draft.category, "Groceries");
    assert_eq!(draft.amount, 45.0);
    assert_eq!(draft.date, NaiveDate::from_ymd_opt(2024, 6, 9).unwrap());
}
