use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

use crate::error::StoreError;
use crate::store::config::StoreConfig;
use crate::store::medium::{StorageMedium, SledMedium};

/// Logical key of the credential collection
pub const USERS_KEY: &str = "dentalUsers";
/// Logical key of the patient collection
pub const PATIENTS_KEY: &str = "dentalPatients";
/// Logical key of the appointment collection
pub const INCIDENTS_KEY: &str = "dentalIncidents";
/// Logical key of the persisted session record
pub const CURRENT_USER_KEY: &str = "dentalCurrentUser";

/// Whole-snapshot persistence of the domain collections over a key-value
/// medium.
///
/// Every collection is stored as one JSON array under its logical key; a
/// mutation reads the snapshot, transforms it in memory and writes it back.
/// Writes are atomic from the caller's perspective only: the medium offers
/// no crash-atomicity, and concurrent writers are not reconciled (last
/// writer wins).
#[derive(Clone)]
pub struct RecordStore {
    medium: Arc<dyn StorageMedium>,
}

impl RecordStore {
    /// Create a store over the given medium
    pub fn new(medium: impl StorageMedium + 'static) -> Self {
        Self {
            medium: Arc::new(medium),
        }
    }

    /// Open a durable store from configuration
    pub fn open(config: &StoreConfig) -> Result<Self, StoreError> {
        let medium: SledMedium = config.open()?;
        Ok(Self::new(medium))
    }

    /// Load a full collection snapshot.
    ///
    /// An absent key is an empty collection. A present but undecodable
    /// snapshot fails with [`StoreError::Parse`]; callers wanting the
    /// treat-as-empty policy use [`RecordStore::load_collection_or_empty`].
    pub fn load_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StoreError> {
        match self.medium.read(key)? {
            Some(bytes) => {
                serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
                    key: key.to_string(),
                    source,
                })
            }
            None => Ok(Vec::new()),
        }
    }

    /// Load a collection, degrading any failure to an empty collection.
    ///
    /// The failure is logged and the caller proceeds with nothing; use
    /// [`RecordStore::load_collection`] to escalate instead.
    pub fn load_collection_or_empty<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        match self.load_collection(key) {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!("failed to load collection `{}`: {}", key, err);
                Vec::new()
            }
        }
    }

    /// Overwrite a full collection snapshot
    pub fn save_collection<T: Serialize>(&self, key: &str, records: &[T]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(records).map_err(|source| StoreError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.medium.write(key, &bytes)
    }

    /// Read a single record stored under its own key, if present
    pub fn read_record<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.medium.read(key)? {
            Some(bytes) => serde_json::from_slice(&bytes)
                .map(Some)
                .map_err(|source| StoreError::Parse {
                    key: key.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    /// Overwrite a single record stored under its own key
    pub fn write_record<T: Serialize>(&self, key: &str, record: &T) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(record).map_err(|source| StoreError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.medium.write(key, &bytes)
    }

    /// Remove a single record; absent keys are not an error
    pub fn delete_record(&self, key: &str) -> Result<(), StoreError> {
        self.medium.remove(key)
    }

    /// Seed the demo data on first run.
    ///
    /// Each collection is seeded only if its key is absent, so a populated
    /// store is never overwritten. Login depends on the seeded credentials,
    /// so their values are part of the store's contract.
    pub fn initialize_defaults(&self) -> Result<(), StoreError> {
        if !self.medium.contains(USERS_KEY)? {
            let users = json!([
                { "id": "1", "role": "Admin", "email": "admin@entnt.in", "password": "admin123" },
                { "id": "2", "role": "Patient", "email": "john@entnt.in", "password": "patient123", "patientId": "p1" }
            ]);
            self.write_record(USERS_KEY, &users)?;
            tracing::info!("seeded default credentials");
        }

        if !self.medium.contains(PATIENTS_KEY)? {
            let patients = json!([
                {
                    "id": "p1",
                    "name": "John Doe",
                    "dob": "1990-05-10",
                    "contact": "1234567890",
                    "email": "john@entnt.in",
                    "address": "123 Main St, City",
                    "healthInfo": "No known allergies"
                }
            ]);
            self.write_record(PATIENTS_KEY, &patients)?;
            tracing::info!("seeded default patients");
        }

        if !self.medium.contains(INCIDENTS_KEY)? {
            let incidents = json!([
                {
                    "id": "i1",
                    "patientId": "p1",
                    "title": "Routine Checkup",
                    "description": "Regular dental examination",
                    "comments": "Good oral health",
                    "appointmentDate": "2025-01-15T10:00:00",
                    "cost": 80,
                    "treatment": "Cleaning and examination",
                    "status": "Scheduled",
                    "nextDate": "2025-07-15T10:00:00",
                    "files": []
                },
                {
                    "id": "i2",
                    "patientId": "p1",
                    "title": "Tooth Filling",
                    "description": "Cavity in upper molar",
                    "comments": "Small cavity, requires filling",
                    "appointmentDate": "2024-12-20T14:00:00",
                    "cost": 120,
                    "treatment": "Composite filling",
                    "status": "Completed",
                    "nextDate": "2025-06-20T14:00:00",
                    "files": []
                }
            ]);
            self.write_record(INCIDENTS_KEY, &incidents)?;
            tracing::info!("seeded default appointments");
        }

        Ok(())
    }
}
