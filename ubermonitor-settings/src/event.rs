use ubermonitor_storage::SettingsRecord;

/// Effects produced by the settings reducer, routed to the presentation
/// layer as user-facing acknowledgements.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsEffect {
    /// Stored settings were unreadable; defaults are shown.
    LoadDegraded(String),
    /// An edit was rejected; nothing changed.
    ValidationFailed(String),
    /// Save completed; carries the record that was written.
    SaveCompleted(SettingsRecord),
    /// The write did not reach storage.
    SaveFailed(String),
    /// The stored record was removed and defaults are shown.
    DefaultsRestored,
    /// The stored record could not be removed; the editor is unchanged.
    ResetFailed(String),
}
