use thiserror::Error;

/// Errors surfaced to the user by settings edits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("City name must not be empty.")]
    CityRequired,
}
