use ubermonitor_storage::{
    CityExclude, ScalarField, SettingsRecord, join_comma_list,
    split_comma_list,
};

use super::errors::SettingsError;

/// Saved baseline, editable draft, and raw form inputs of the editor.
#[derive(Debug)]
pub struct SettingsState {
    baseline: SettingsRecord,
    draft: SettingsRecord,
    blocked_cities_input: String,
    exclude_city_input: String,
    exclude_streets_input: String,
    dirty: bool,
}

impl SettingsState {
    /// Return the last loaded or saved record.
    pub fn baseline(&self) -> &SettingsRecord {
        &self.baseline
    }

    /// Return the editable draft.
    pub fn draft(&self) -> &SettingsRecord {
        &self.draft
    }

    /// Return the free-text blocked cities input.
    pub fn blocked_cities_input(&self) -> &str {
        &self.blocked_cities_input
    }

    pub fn exclude_city_input(&self) -> &str {
        &self.exclude_city_input
    }

    pub fn exclude_streets_input(&self) -> &str {
        &self.exclude_streets_input
    }

    /// Return whether the draft differs from the baseline.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Create state from a loaded record.
    pub fn from_record(record: SettingsRecord) -> Self {
        let blocked_cities_input = join_comma_list(record.blocked_cities());

        Self {
            baseline: record.clone(),
            draft: record,
            blocked_cities_input,
            exclude_city_input: String::new(),
            exclude_streets_input: String::new(),
            dirty: false,
        }
    }

    /// Replace baseline, draft, and inputs using a freshly loaded record.
    pub fn replace_with_record(&mut self, record: SettingsRecord) {
        *self = Self::from_record(record);
    }

    /// Replace a numeric threshold with raw text.
    pub fn set_scalar(&mut self, field: ScalarField, value: String) {
        self.draft.set_scalar(field, value);
        self.update_dirty();
    }

    /// Replace the blocked cities input. The draft list is untouched until
    /// the next commit.
    pub fn set_blocked_cities_input(&mut self, value: String) {
        self.blocked_cities_input = value;
        self.update_dirty();
    }

    pub fn set_exclude_city_input(&mut self, value: String) {
        self.exclude_city_input = value;
    }

    pub fn set_exclude_streets_input(&mut self, value: String) {
        self.exclude_streets_input = value;
    }

    /// Add an exclude rule for `city` with comma-separated `streets_text`.
    ///
    /// A blank city is rejected without touching the draft. On success the
    /// rule goes to the front of the list and the exclude form is cleared.
    pub fn add_city_exclude(
        &mut self,
        city: &str,
        streets_text: &str,
    ) -> Result<&CityExclude, SettingsError> {
        let streets = split_comma_list(streets_text);
        if self.draft.prepend_city_exclude(city, streets).is_none() {
            return Err(SettingsError::CityRequired);
        }

        self.exclude_city_input.clear();
        self.exclude_streets_input.clear();
        self.update_dirty();

        Ok(&self.draft.city_excludes()[0])
    }

    /// Submit the exclude form inputs.
    pub fn add_city_exclude_from_inputs(
        &mut self,
    ) -> Result<&CityExclude, SettingsError> {
        let city = std::mem::take(&mut self.exclude_city_input);
        let streets_text = std::mem::take(&mut self.exclude_streets_input);

        if city.trim().is_empty() {
            self.exclude_city_input = city;
            self.exclude_streets_input = streets_text;
            return Err(SettingsError::CityRequired);
        }

        self.add_city_exclude(&city, &streets_text)
    }

    /// Remove the exclude rule with `id`. Unknown ids are ignored.
    pub fn remove_city_exclude(&mut self, id: &str) -> bool {
        let removed = self.draft.remove_city_exclude(id);
        if removed {
            self.update_dirty();
        }
        removed
    }

    /// Merge the blocked cities input into the draft and return the record
    /// to persist.
    pub fn prepare_commit(&mut self) -> SettingsRecord {
        self.draft
            .set_blocked_cities(split_comma_list(&self.blocked_cities_input));
        self.update_dirty();
        self.draft.clone()
    }

    /// Mark `record` as the saved baseline. The blocked cities input keeps
    /// the text the user typed.
    pub fn mark_saved(&mut self, record: SettingsRecord) {
        self.baseline = record.clone();
        self.draft = record;
        self.update_dirty();
    }

    /// Discard draft edits and restore the baseline.
    pub fn reset(&mut self) {
        let baseline = self.baseline.clone();
        self.replace_with_record(baseline);
    }

    fn update_dirty(&mut self) {
        self.dirty = self.draft != self.baseline
            || split_comma_list(&self.blocked_cities_input)
                != self.baseline.blocked_cities();
    }
}

impl Default for SettingsState {
    fn default() -> Self {
        Self::from_record(SettingsRecord::default())
    }
}
