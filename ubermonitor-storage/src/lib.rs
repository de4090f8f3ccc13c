//! Filter settings record and its persistence in local key-value storage.
//!
//! The record is kept as a single JSON value under [`SETTINGS_KEY`].
//! [`SettingsStore`] never propagates storage failures: a missing or
//! unreadable value degrades to [`SettingsRecord::default`] and the cause is
//! reported through [`SettingsLoadStatus`] and the log.

mod errors;
mod file;
mod ids;
mod kv;
mod list;
mod memory;
mod model;
mod store;

pub use crate::errors::StorageError;
pub use crate::file::{FileStorage, StorageConfig};
pub use crate::kv::KeyValueStorage;
pub use crate::list::{join_comma_list, split_comma_list};
pub use crate::memory::MemoryStorage;
pub use crate::model::{CityExclude, ScalarField, SettingsRecord};
pub use crate::store::{
    SETTINGS_KEY, SaveOutcome, SettingsLoad, SettingsLoadStatus, SettingsStore,
};
