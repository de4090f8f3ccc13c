use ubermonitor_storage::{CityExclude, ScalarField, SettingsRecord};

/// Read-only view of the editor consumed by the settings form.
#[derive(Debug, Clone, Copy)]
pub struct SettingsViewModel<'a> {
    pub draft: &'a SettingsRecord,
    pub blocked_cities_input: &'a str,
    pub exclude_city_input: &'a str,
    pub exclude_streets_input: &'a str,
    pub is_dirty: bool,
}

impl<'a> SettingsViewModel<'a> {
    pub fn scalar(&self, field: ScalarField) -> &'a str {
        self.draft.scalar(field)
    }

    /// Exclude rules in display order, newest first.
    pub fn city_excludes(&self) -> &'a [CityExclude] {
        self.draft.city_excludes()
    }

    /// Return whether the form should show the empty-list placeholder.
    pub fn is_exclude_list_empty(&self) -> bool {
        self.draft.city_excludes().is_empty()
    }
}
