//! File-per-slot JSON persistence under a single data directory.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::domain::{Bill, Budget, Settings, Transaction};

use super::{Result, StorageBackend};

const TRANSACTIONS_FILE: &str = "transactions.json";
const BILLS_FILE: &str = "bills.json";
const BUDGETS_FILE: &str = "budgets.json";
const SETTINGS_FILE: &str = "settings.json";
const TMP_SUFFIX: &str = "tmp";

/// Environment override for the data directory; defaults to `~/.fintrack`.
pub const DATA_DIR_ENV: &str = "FINTRACK_HOME";

#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(default_root);
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    fn slot_path(&self, file: &str) -> PathBuf {
        self.root.join(file)
    }

    fn load_slot<T: DeserializeOwned + Default>(&self, file: &str) -> Result<T> {
        let path = self.slot_path(file);
        if !path.exists() {
            debug!(slot = file, "slot missing, returning default");
            return Ok(T::default());
        }
        let data = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn save_slot<T: Serialize>(&self, file: &str, value: &T) -> Result<()> {
        let path = self.slot_path(file);
        let json = serde_json::to_string_pretty(value)?;
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

impl StorageBackend for JsonStore {
    fn load_transactions(&self) -> Result<Vec<Transaction>> {
        self.load_slot(TRANSACTIONS_FILE)
    }

    fn save_transactions(&self, transactions: &[Transaction]) -> Result<()> {
        self.save_slot(TRANSACTIONS_FILE, &transactions)
    }

    fn load_bills(&self) -> Result<Vec<Bill>> {
        self.load_slot(BILLS_FILE)
    }

    fn save_bills(&self, bills: &[Bill]) -> Result<()> {
        self.save_slot(BILLS_FILE, &bills)
    }

    fn load_budgets(&self) -> Result<Vec<Budget>> {
        self.load_slot(BUDGETS_FILE)
    }

    fn save_budgets(&self, budgets: &[Budget]) -> Result<()> {
        self.save_slot(BUDGETS_FILE, &budgets)
    }

    fn load_settings(&self) -> Result<Settings> {
        self.load_slot(SETTINGS_FILE)
    }

    fn save_settings(&self, settings: &Settings) -> Result<()> {
        self.save_slot(SETTINGS_FILE, settings)
    }
}

fn default_root() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".fintrack")
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransactionKind;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn store_with_temp_dir() -> (JsonStore, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let store = JsonStore::new(Some(temp.path().to_path_buf())).expect("json store");
        (store, temp)
    }

    fn sample_transaction() -> Transaction {
        Transaction::new(
            TransactionKind::Expense,
            "Groceries",
            42.10,
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        )
    }

    #[test]
    fn save_and_load_roundtrip() {
        let (store, _guard) = store_with_temp_dir();
        store
            .save_transactions(&[sample_transaction()])
            .expect("save transactions");
        let loaded = store.load_transactions().expect("load transactions");
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].category, "Groceries");
        assert_eq!(loaded[0].amount, 42.10);
    }

    #[test]
    fn missing_slots_read_as_defaults() {
        let (store, _guard) = store_with_temp_dir();
        assert!(store.load_transactions().expect("load").is_empty());
        assert!(store.load_bills().expect("load").is_empty());
        assert!(store.load_budgets().expect("load").is_empty());
        assert_eq!(store.load_settings().expect("load").currency, "USD");
    }

    #[test]
    fn append_assigns_and_returns_the_new_record() {
        let (store, _guard) = store_with_temp_dir();
        store
            .append_transaction(sample_transaction())
            .expect("append");
        store
            .append_transaction(sample_transaction())
            .expect("append");
        assert_eq!(store.load_transactions().expect("load").len(), 2);
    }

    #[test]
    fn delete_by_id_is_a_noop_for_unknown_ids() {
        let (store, _guard) = store_with_temp_dir();
        let saved = store
            .append_transaction(sample_transaction())
            .expect("append");
        store.delete_transaction("not-an-id").expect("delete");
        assert_eq!(store.load_transactions().expect("load").len(), 1);
        store.delete_transaction(&saved.id).expect("delete");
        assert!(store.load_transactions().expect("load").is_empty());
    }

    #[test]
    fn settings_merge_over_defaults_on_partial_blobs() {
        let (store, _guard) = store_with_temp_dir();
        fs::write(store.slot_path(SETTINGS_FILE), "{}").expect("write raw settings");
        let settings = store.load_settings().expect("load");
        assert_eq!(settings.currency, "USD");
    }
}
