//! Parsers that turn raw user input into candidate transactions.

pub mod csv;
pub mod quick_add;

pub use csv::{parse_csv, ParsedTransaction};
pub use quick_add::{parse_quick_add, QuickAddDraft};
