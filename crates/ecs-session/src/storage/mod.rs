//! Durable key-value slots standing in for browser-profile storage.

pub(crate) mod file_storage;
pub(crate) mod memory_storage;

use crate::Result as SessionResult;

/// String key-value persistence scoped to one browser profile.
pub trait KeyValueStorage: Send + Sync {
    /// Value under `key`, or `None` when nothing is stored.
    fn get(&self, key: &str) -> SessionResult<Option<String>>;

    /// Store `value`, replacing whatever was there.
    fn set(&self, key: &str, value: &str) -> SessionResult<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> SessionResult<()>;
}

/// Whether `key` can name a storage slot on any backend: non-empty, ASCII
/// letters, digits, `_`, `.` and `-` only, and no leading `.`.
pub fn is_safe_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}
