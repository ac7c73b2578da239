//! Local persistent state using redb.
//!
//! The widget keeps a handful of boolean flags on the user's device; today
//! only the "has visited" flag that gates the welcome overlay.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};

use crate::error::ChesedError;

/// File name of the local database inside the data directory.
pub const DB_FILE_NAME: &str = "chesed.redb";

const FLAGS_TABLE: TableDefinition<&str, bool> = TableDefinition::new("flags");

/// Local storage handle
#[derive(Clone)]
pub struct Storage {
    db: Arc<RwLock<Database>>,
}

impl Storage {
    /// Open (or create) the database at `path`, creating parent directories.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, ChesedError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(FLAGS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    /// Open the database in a data directory.
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Result<Self, ChesedError> {
        Self::new(data_dir.as_ref().join(DB_FILE_NAME))
    }

    /// Read a flag. Unset flags read as `false`.
    pub fn flag(&self, key: &str) -> Result<bool, ChesedError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(FLAGS_TABLE)?;
        Ok(table.get(key)?.map(|v| v.value()).unwrap_or(false))
    }

    /// Write a flag.
    pub fn set_flag(&self, key: &str, value: bool) -> Result<(), ChesedError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(FLAGS_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_storage() -> (Storage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::in_dir(temp_dir.path()).unwrap();
        (storage, temp_dir)
    }

    #[test]
    fn test_unset_flag_is_false() {
        let (storage, _temp) = create_test_storage();
        assert!(!storage.flag("anything").unwrap());
    }

    #[test]
    fn test_flag_can_be_overwritten() {
        let (storage, _temp) = create_test_storage();

        storage.set_flag("seen", true).unwrap();
        assert!(storage.flag("seen").unwrap());

        storage.set_flag("seen", false).unwrap();
        assert!(!storage.flag("seen").unwrap());
    }

    #[test]
    fn test_flag_persists_across_instances() {
        let temp_dir = TempDir::new().unwrap();

        {
            let storage = Storage::in_dir(temp_dir.path()).unwrap();
            storage.set_flag("seen", true).unwrap();
        }

        {
            let storage = Storage::in_dir(temp_dir.path()).unwrap();
            assert!(storage.flag("seen").unwrap());
        }
    }
}
