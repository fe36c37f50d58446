use crate::{IdentityRecord, KeyValueStorage, LoadResult, Result as SessionResult, SessionError};

use std::sync::Arc;

use log::{debug, info, warn};

pub const DEFAULT_STORAGE_KEY: &str = "user_data";

/// The single durable slot holding the current identity.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn KeyValueStorage>,
    key: String,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn with_default_key(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self::new(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Replace whatever is stored with `record`.
    ///
    /// Write failures are returned to the caller; nothing here retries them.
    pub fn persist(&self, record: &IdentityRecord) -> SessionResult<()> {
        let json = serde_json::to_string(record)?;
        self.storage.set(&self.key, &json)?;
        info!("Persisted session for {}", record.uid);
        Ok(())
    }

    /// Load the stored record, reporting corruption separately from absence.
    ///
    /// Returns:
    /// - `LoadResult { record: Some(..), corruption_error: None }` - loaded
    /// - `LoadResult { record: None, corruption_error: None }` - nothing stored
    /// - `LoadResult { record: None, corruption_error: Some(..) }` - stored but unusable
    pub fn load(&self) -> LoadResult {
        let contents = match self.storage.get(&self.key) {
            Ok(Some(contents)) => contents,
            Ok(None) => {
                debug!("No stored session under '{}'", self.key);
                return LoadResult::empty();
            }
            Err(e) => return LoadResult::corrupt(e),
        };

        match serde_json::from_str::<IdentityRecord>(&contents) {
            Ok(record) if record.is_valid() => LoadResult::loaded(record),
            Ok(_) => LoadResult::corrupt(SessionError::storage_corrupt(
                &self.key,
                "record is missing uid or email",
            )),
            Err(e) => {
                LoadResult::corrupt(SessionError::storage_corrupt(&self.key, e.to_string()))
            }
        }
    }

    /// Stored record, or `None` when absent or unusable.
    pub fn read(&self) -> Option<IdentityRecord> {
        let LoadResult {
            record,
            corruption_error,
        } = self.load();

        if let Some(e) = corruption_error {
            warn!("Ignoring stored session [{}]: {e}", e.error_code());
        }

        record
    }

    /// Remove the stored record. Idempotent.
    pub fn clear(&self) -> SessionResult<()> {
        self.storage.remove(&self.key)?;
        info!("Cleared stored session under '{}'", self.key);
        Ok(())
    }
}
