use std::path::PathBuf;

use crate::error::StoreError;
use crate::store::medium::SledMedium;

/// Store configuration: where the embedded database lives.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
    pub temporary: bool,
}

impl StoreConfig {
    /// Create a configuration rooted at `data_dir`
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            temporary: false,
        }
    }

    /// Use a temporary database that is deleted on drop
    pub fn temporary() -> Self {
        Self {
            data_dir: PathBuf::new(),
            temporary: true,
        }
    }

    /// Read the data directory from environment variables with a fallback
    pub fn from_env() -> Self {
        let data_dir = std::env::var("DENTAL_DATA_DIR")
            .unwrap_or_else(|_| "dental-data".to_string());
        Self::new(data_dir)
    }

    /// Open the configured sled medium
    pub fn open(&self) -> Result<SledMedium, StoreError> {
        if self.temporary {
            SledMedium::temporary()
        } else {
            SledMedium::open(&self.data_dir)
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new("dental-data")
    }
}
