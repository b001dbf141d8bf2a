pub mod json_backend;
pub mod memory;

use crate::domain::{Bill, Budget, Settings, Transaction};
use crate::errors::FinanceError;

pub type Result<T> = std::result::Result<T, FinanceError>;

/// Abstraction over persistence backends. Each record kind is a single
/// slot read and written whole; a missing slot reads as its default.
pub trait StorageBackend: Send + Sync {
    fn load_transactions(&self) -> Result<Vec<Transaction>>;
    fn save_transactions(&self, transactions: &[Transaction]) -> Result<()>;

    fn load_bills(&self) -> Result<Vec<Bill>>;
    fn save_bills(&self, bills: &[Bill]) -> Result<()>;

    fn load_budgets(&self) -> Result<Vec<Budget>>;
    fn save_budgets(&self, budgets: &[Budget]) -> Result<()>;

    fn load_settings(&self) -> Result<Settings>;
    fn save_settings(&self, settings: &Settings) -> Result<()>;

    /// Appends one transaction to the stored list and returns it.
    fn append_transaction(&self, transaction: Transaction) -> Result<Transaction> {
        let mut transactions = self.load_transactions()?;
        transactions.push(transaction.clone());
        self.save_transactions(&transactions)?;
        Ok(transaction)
    }

    /// Removes a transaction by id. Unknown ids are a no-op.
    fn delete_transaction(&self, id: &str) -> Result<()> {
        let mut transactions = self.load_transactions()?;
        transactions.retain(|t| t.id != id);
        self.save_transactions(&transactions)
    }
}

pub use json_backend::JsonStore;
pub use memory::MemoryStore;
