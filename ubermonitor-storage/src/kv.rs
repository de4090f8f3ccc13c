use crate::StorageError;

/// Durable string slots addressed by key.
///
/// `SettingsStore` is the only caller; it owns the capability and never
/// shares the raw slot with other components.
pub trait KeyValueStorage {
    /// Read the value stored under `key`, or `None` when nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value stored under `key`. Removing a missing key succeeds.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
