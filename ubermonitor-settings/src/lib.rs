//! Headless editor behind the filter settings screen.
//!
//! The presentation layer sends [`SettingsCommand`]s, renders the
//! [`SettingsViewModel`], and shows each returned [`SettingsEffect`] as a
//! transient acknowledgement. All persistence goes through the
//! [`SettingsStore`] the editor owns.

mod command;
mod errors;
mod event;
mod model;
mod reducer;
mod state;

pub use command::SettingsCommand;
pub use errors::SettingsError;
pub use event::SettingsEffect;
pub use model::SettingsViewModel;
pub use state::SettingsState;
pub use ubermonitor_storage::{
    CityExclude, KeyValueStorage, ScalarField, SettingsRecord, SettingsStore,
};

/// Settings editor: draft/baseline editing of the filter settings record.
#[derive(Debug)]
pub struct SettingsEditor<S> {
    state: SettingsState,
    store: SettingsStore<S>,
}

impl<S: KeyValueStorage> SettingsEditor<S> {
    /// Create an editor showing the default record without touching storage.
    pub fn new(store: SettingsStore<S>) -> Self {
        Self {
            state: SettingsState::default(),
            store,
        }
    }

    /// Create an editor and load the stored record into it.
    ///
    /// The effect is `Some` when the stored value could not be read.
    pub fn mount(store: SettingsStore<S>) -> (Self, Option<SettingsEffect>) {
        let mut editor = Self::new(store);
        let effect = editor.reduce(SettingsCommand::Reload);
        (editor, effect)
    }

    /// Reduce a command into state updates and an optional effect.
    pub fn reduce(
        &mut self,
        command: SettingsCommand,
    ) -> Option<SettingsEffect> {
        reducer::reduce(&mut self.state, &mut self.store, command)
    }

    /// Add an exclude rule directly, bypassing the exclude form inputs.
    pub fn add_city_exclude(
        &mut self,
        city: &str,
        streets_text: &str,
    ) -> Result<&CityExclude, SettingsError> {
        self.state.add_city_exclude(city, streets_text)
    }

    /// Return a read-only view model for the settings form.
    pub fn vm(&self) -> SettingsViewModel<'_> {
        SettingsViewModel {
            draft: self.state.draft(),
            blocked_cities_input: self.state.blocked_cities_input(),
            exclude_city_input: self.state.exclude_city_input(),
            exclude_streets_input: self.state.exclude_streets_input(),
            is_dirty: self.state.is_dirty(),
        }
    }

    /// Return the editable draft.
    pub fn draft(&self) -> &SettingsRecord {
        self.state.draft()
    }

    /// Return the last loaded or saved record.
    pub fn saved(&self) -> &SettingsRecord {
        self.state.baseline()
    }

    /// Return whether there are unsaved edits.
    pub fn is_dirty(&self) -> bool {
        self.state.is_dirty()
    }

    /// Return read-only access to state for tests.
    #[cfg(test)]
    pub(crate) fn state(&self) -> &SettingsState {
        &self.state
    }
}
