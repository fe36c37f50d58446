use crate::{KeyValueStorage, Result as SessionResult, SessionError, storage::is_safe_key};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::debug;

/// Directory-backed storage: one `<key>.json` file per key.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[track_caller]
    fn path_for(&self, key: &str) -> SessionResult<PathBuf> {
        if !is_safe_key(key) {
            return Err(SessionError::storage_write(key, "key is not a safe file name"));
        }

        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        let path = self
            .path_for(key)
            .map_err(|e| SessionError::storage_read(key, e.to_string()))?;

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SessionError::storage_read(
                key,
                format!("{}: {e}", path.display()),
            )),
        }
    }

    /// Atomic write: temp file, fsync, rename over the final path.
    fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        let final_path = self.path_for(key)?;
        let write_err = |path: &Path, e: std::io::Error| {
            SessionError::storage_write(key, format!("{}: {e}", path.display()))
        };

        fs::create_dir_all(&self.dir).map_err(|e| write_err(&self.dir, e))?;

        let temp_path = self
            .dir
            .join(format!("{key}.json.tmp.{}", std::process::id()));

        {
            let mut file = fs::File::create(&temp_path).map_err(|e| write_err(&temp_path, e))?;
            file.write_all(value.as_bytes())
                .map_err(|e| write_err(&temp_path, e))?;
            file.sync_all().map_err(|e| write_err(&temp_path, e))?;
        }

        if let Err(e) = fs::rename(&temp_path, &final_path) {
            let _ = fs::remove_file(&temp_path);
            return Err(write_err(&final_path, e));
        }

        debug!("Stored '{key}' at {}", final_path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        let path = self.path_for(key)?;

        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Removed '{key}' from {}", self.dir.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::storage_write(
                key,
                format!("{}: {e}", path.display()),
            )),
        }
    }
}
