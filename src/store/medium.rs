use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use crate::error::StoreError;

/// A key-value medium holding serialized snapshots under fixed logical keys.
///
/// Flat string keys, opaque byte values, no schema, no partial writes.
/// Operations are synchronous; every mutation happens within one
/// single-threaded unit of work.
pub trait StorageMedium: Send + Sync {
    /// Retrieve the value stored under `key`, if any
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Overwrite the value stored under `key`
    fn write(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Remove `key` and its value; absent keys are not an error
    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Check whether `key` holds a value
    fn contains(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.read(key)?.is_some())
    }
}

/// Durable medium backed by an embedded sled database.
///
/// Every write is flushed before returning, so a completed mutation survives
/// a process exit.
#[derive(Debug)]
pub struct SledMedium {
    db: sled::Db,
}

impl SledMedium {
    /// Open (or create) the database at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let db = sled::open(path)?;
        Ok(Self { db })
    }

    /// Open a temporary database that is deleted on drop
    pub fn temporary() -> Result<Self, StoreError> {
        let db = sled::Config::new().temporary(true).open()?;
        Ok(Self { db })
    }
}

impl StorageMedium for SledMedium {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.db.get(key)?.map(|ivec| ivec.to_vec()))
    }

    fn write(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.db.insert(key, value)?;
        self.db.flush()?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.db.remove(key)?;
        self.db.flush()?;
        Ok(())
    }

    fn contains(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.db.contains_key(key)?)
    }
}

/// Ephemeral medium over a locked map, for tests and throwaway stores.
#[derive(Debug, Default)]
pub struct MemoryMedium {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryMedium {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageMedium for MemoryMedium {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let entries = self.entries.lock().expect("medium lock poisoned");
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().expect("medium lock poisoned");
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().expect("medium lock poisoned");
        entries.remove(key);
        Ok(())
    }
}
