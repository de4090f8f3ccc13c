use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::{KeyValueStorage, StorageError};

const APP_DIR: &str = "ubermonitor";

/// Location of the on-device storage directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    directory: PathBuf,
}

impl StorageConfig {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl Default for StorageConfig {
    /// Per-user config directory, or a temp directory when `HOME` is unset.
    fn default() -> Self {
        if let Ok(home) = std::env::var("HOME") {
            return Self::new(Path::new(&home).join(".config").join(APP_DIR));
        }

        Self::new(std::env::temp_dir().join(APP_DIR))
    }
}

/// Key-value storage keeping one `<key>.json` file per key.
#[derive(Debug, Clone)]
pub struct FileStorage {
    config: StorageConfig,
}

impl FileStorage {
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    fn entry_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key.chars().all(|ch| {
                ch.is_ascii_alphanumeric() || ch == '_' || ch == '-'
            });
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }

        Ok(self.config.directory.join(format!("{key}.json")))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.entry_path(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.entry_path(key)?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        write_atomic(&path, value.as_bytes())?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.entry_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

fn write_atomic(path: &Path, payload: &[u8]) -> Result<(), io::Error> {
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, payload)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}
