use ubermonitor_storage::{
    KeyValueStorage, SaveOutcome, SettingsLoadStatus, SettingsStore,
};

use super::command::SettingsCommand;
use super::event::SettingsEffect;
use super::state::SettingsState;

/// Reduce a settings command into state updates, store calls, and an
/// optional effect for the presentation layer.
pub(crate) fn reduce<S>(
    state: &mut SettingsState,
    store: &mut SettingsStore<S>,
    command: SettingsCommand,
) -> Option<SettingsEffect>
where
    S: KeyValueStorage,
{
    match command {
        SettingsCommand::Reload => reload_settings(state, store),
        SettingsCommand::ScalarChanged { field, value } => {
            state.set_scalar(field, value);
            None
        },
        SettingsCommand::BlockedCitiesChanged(value) => {
            state.set_blocked_cities_input(value);
            None
        },
        SettingsCommand::ExcludeCityChanged(value) => {
            state.set_exclude_city_input(value);
            None
        },
        SettingsCommand::ExcludeStreetsChanged(value) => {
            state.set_exclude_streets_input(value);
            None
        },
        SettingsCommand::AddCityExclude => {
            match state.add_city_exclude_from_inputs() {
                Ok(_) => None,
                Err(err) => Some(SettingsEffect::ValidationFailed(format!(
                    "{err}"
                ))),
            }
        },
        SettingsCommand::RemoveCityExclude { id } => {
            if !state.remove_city_exclude(&id) {
                log::debug!("no city exclude with id {id}");
            }
            None
        },
        SettingsCommand::Save => persist_settings(state, store),
        SettingsCommand::Reset => {
            state.reset();
            None
        },
        SettingsCommand::RestoreDefaults => restore_defaults(state, store),
    }
}

fn reload_settings<S: KeyValueStorage>(
    state: &mut SettingsState,
    store: &SettingsStore<S>,
) -> Option<SettingsEffect> {
    let (record, status) = store.load().into_parts();
    state.replace_with_record(record);

    match status {
        SettingsLoadStatus::Invalid(message)
        | SettingsLoadStatus::Unavailable(message) => {
            Some(SettingsEffect::LoadDegraded(message))
        },
        SettingsLoadStatus::Loaded | SettingsLoadStatus::Missing => None,
    }
}

fn persist_settings<S: KeyValueStorage>(
    state: &mut SettingsState,
    store: &mut SettingsStore<S>,
) -> Option<SettingsEffect> {
    let record = state.prepare_commit();
    match store.save(&record) {
        SaveOutcome::Saved => {
            state.mark_saved(record.clone());
            Some(SettingsEffect::SaveCompleted(record))
        },
        SaveOutcome::Failed(message) => {
            Some(SettingsEffect::SaveFailed(message))
        },
    }
}

fn restore_defaults<S: KeyValueStorage>(
    state: &mut SettingsState,
    store: &mut SettingsStore<S>,
) -> Option<SettingsEffect> {
    match store.reset() {
        SaveOutcome::Saved => {
            reload_settings(state, store)
                .or(Some(SettingsEffect::DefaultsRestored))
        },
        SaveOutcome::Failed(message) => {
            Some(SettingsEffect::ResetFailed(message))
        },
    }
}
