pub mod config;
pub mod medium;
pub mod records;

pub use config::StoreConfig;
pub use medium::{MemoryMedium, SledMedium, StorageMedium};
pub use records::{
    RecordStore, CURRENT_USER_KEY, INCIDENTS_KEY, PATIENTS_KEY, USERS_KEY,
};
