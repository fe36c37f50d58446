use crate::{IdentityRecord, SessionError};

/// Result of loading the stored session - distinguishes "nothing stored" from "stored but unusable".
#[derive(Debug, Default)]
pub struct LoadResult {
    pub record: Option<IdentityRecord>,
    /// Present if a value exists but could not be used
    pub corruption_error: Option<SessionError>,
}

impl LoadResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn loaded(record: IdentityRecord) -> Self {
        Self {
            record: Some(record),
            corruption_error: None,
        }
    }

    pub fn corrupt(error: SessionError) -> Self {
        Self {
            record: None,
            corruption_error: Some(error),
        }
    }
}
