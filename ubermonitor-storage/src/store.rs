use crate::{KeyValueStorage, SettingsRecord, StorageError};

/// Storage key holding the settings record. The suffix versions the schema.
pub const SETTINGS_KEY: &str = "user_settings_v2";

/// Status describing where a loaded record came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsLoadStatus {
    /// A stored value was read and parsed.
    Loaded,
    /// Nothing was stored; the record is the default one.
    Missing,
    /// A stored value exists but could not be parsed; it is left in place
    /// and the record is the default one.
    Invalid(String),
    /// Storage could not be read; the record is the default one.
    Unavailable(String),
}

/// Result of loading the settings record.
#[derive(Debug, Clone)]
pub struct SettingsLoad {
    record: SettingsRecord,
    status: SettingsLoadStatus,
}

impl SettingsLoad {
    /// Build a load result from explicit parts.
    pub fn new(record: SettingsRecord, status: SettingsLoadStatus) -> Self {
        Self { record, status }
    }

    pub fn record(&self) -> &SettingsRecord {
        &self.record
    }

    pub fn status(&self) -> &SettingsLoadStatus {
        &self.status
    }

    /// Return whether the record fell back to defaults after a failure.
    pub fn is_degraded(&self) -> bool {
        matches!(
            self.status,
            SettingsLoadStatus::Invalid(_) | SettingsLoadStatus::Unavailable(_)
        )
    }

    pub fn into_record(self) -> SettingsRecord {
        self.record
    }

    /// Consume the value and return both payload and status.
    pub fn into_parts(self) -> (SettingsRecord, SettingsLoadStatus) {
        (self.record, self.status)
    }
}

/// Outcome of a write to the settings slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Failed(String),
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved)
    }
}

/// Sole owner of the settings slot in the injected storage.
#[derive(Debug)]
pub struct SettingsStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> SettingsStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Load the stored record, falling back to defaults on any failure.
    pub fn load(&self) -> SettingsLoad {
        let raw = match self.storage.get(SETTINGS_KEY) {
            Ok(Some(raw)) if !raw.is_empty() => raw,
            Ok(_) => {
                return SettingsLoad::new(
                    SettingsRecord::default(),
                    SettingsLoadStatus::Missing,
                );
            },
            Err(err) => {
                log::warn!("settings read failed, using defaults: {err}");
                return SettingsLoad::new(
                    SettingsRecord::default(),
                    SettingsLoadStatus::Unavailable(format!("{err}")),
                );
            },
        };

        match parse_record(&raw) {
            Ok(record) => {
                SettingsLoad::new(record, SettingsLoadStatus::Loaded)
            },
            Err(err) => {
                log::warn!("stored settings invalid, using defaults: {err}");
                SettingsLoad::new(
                    SettingsRecord::default(),
                    SettingsLoadStatus::Invalid(format!("{err}")),
                )
            },
        }
    }

    /// Overwrite the stored record with `record`.
    pub fn save(&mut self, record: &SettingsRecord) -> SaveOutcome {
        match self.write_record(record) {
            Ok(()) => SaveOutcome::Saved,
            Err(err) => {
                log::warn!("settings save failed: {err}");
                SaveOutcome::Failed(format!("{err}"))
            },
        }
    }

    /// Remove the stored record so the next load yields defaults.
    pub fn reset(&mut self) -> SaveOutcome {
        match self.storage.remove(SETTINGS_KEY) {
            Ok(()) => SaveOutcome::Saved,
            Err(err) => {
                log::warn!("settings reset failed: {err}");
                SaveOutcome::Failed(format!("{err}"))
            },
        }
    }

    fn write_record(
        &mut self,
        record: &SettingsRecord,
    ) -> Result<(), StorageError> {
        let payload = serde_json::to_string_pretty(record)?;
        self.storage.set(SETTINGS_KEY, &payload)
    }

    /// Return the underlying storage for inspection in tests.
    #[cfg(test)]
    pub(crate) fn storage(&self) -> &S {
        &self.storage
    }
}

fn parse_record(raw: &str) -> Result<SettingsRecord, StorageError> {
    let value = serde_json::from_str::<serde_json::Value>(raw)?;
    SettingsRecord::from_json(&value)
}
