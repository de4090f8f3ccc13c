use ubermonitor_storage::ScalarField;

/// Commands dispatched to the settings reducer by the presentation layer.
#[derive(Debug, Clone)]
pub enum SettingsCommand {
    /// Load the stored record into the editor.
    Reload,
    /// A numeric threshold input changed.
    ScalarChanged { field: ScalarField, value: String },
    /// The comma-separated blocked cities input changed.
    BlockedCitiesChanged(String),
    /// The city name input of the exclude form changed.
    ExcludeCityChanged(String),
    /// The comma-separated streets input of the exclude form changed.
    ExcludeStreetsChanged(String),
    /// Submit the exclude form.
    AddCityExclude,
    /// Remove the exclude rule with the given id.
    RemoveCityExclude { id: String },
    /// Persist the draft.
    Save,
    /// Discard draft edits and restore the last saved record.
    Reset,
    /// Wipe the stored record and reload the defaults.
    RestoreDefaults,
}
