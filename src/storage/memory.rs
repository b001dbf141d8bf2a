//! In-memory backend for tests and ephemeral sessions.

use std::sync::RwLock;

use crate::domain::{Bill, Budget, Settings, Transaction};

use super::{Result, StorageBackend};

#[derive(Debug, Default)]
pub struct MemoryStore {
    transactions: RwLock<Vec<Transaction>>,
    bills: RwLock<Vec<Bill>>,
    budgets: RwLock<Vec<Budget>>,
    settings: RwLock<Settings>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStore {
    fn load_transactions(&self) -> Result<Vec<Transaction>> {
        Ok(self.transactions.read().unwrap_or_else(|e| e.into_inner()).clone())
    }

    fn save_transactions(&self, transactions: &[Transaction]) -> Result<()> {
        *self.transactions.write().unwrap_or_else(|e| e.into_inner()) = transactions.to_vec();
        Ok(())
    }

    fn load_bills(&self) -> Result<Vec<Bill>> {
        Ok(self.bills.read().unwrap_or_else(|e| e.into_inner()).clone())
    }

    fn save_bills(&self, bills: &[Bill]) -> Result<()> {
        *self.bills.write().unwrap_or_else(|e| e.into_inner()) = bills.to_vec();
        Ok(())
    }

    fn load_budgets(&self) -> Result<Vec<Budget>> {
        Ok(self.budgets.read().unwrap_or_else(|e| e.into_inner()).clone())
    }

    fn save_budgets(&self, budgets: &[Budget]) -> Result<()> {
        *self.budgets.write().unwrap_or_else(|e| e.into_inner()) = budgets.to_vec();
        Ok(())
    }

    fn load_settings(&self) -> Result<Settings> {
        Ok(self.settings.read().unwrap_or_else(|e| e.into_inner()).clone())
    }

    fn save_settings(&self, settings: &Settings) -> Result<()> {
        *self.settings.write().unwrap_or_else(|e| e.into_inner()) = settings.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransactionKind;
    use chrono::NaiveDate;

    #[test]
    fn behaves_like_an_empty_store_until_written() {
        let store = MemoryStore::new();
        assert!(store.load_transactions().unwrap().is_empty());

        let txn = Transaction::new(
            TransactionKind::Income,
            "Salary",
            1000.0,
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        );
        store.append_transaction(txn).unwrap();
        assert_eq!(store.load_transactions().unwrap().len(), 1);
    }
}
