//! Persisted entity types and identifier helpers.

pub mod bill;
pub mod budget;
pub mod settings;
pub mod transaction;

pub use bill::{Bill, BillStatus, RecurringPeriod};
pub use budget::Budget;
pub use settings::Settings;
pub use transaction::{current_month, Transaction, TransactionKind};

use chrono::Utc;

/// Produces a fresh record identifier from the current wall clock, as a
/// decimal millisecond string. Monotonic enough for human-paced entry;
/// collision handling is explicitly out of scope.
pub fn token_id() -> String {
    Utc::now().timestamp_millis().to_string()
}
