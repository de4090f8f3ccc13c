use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use ubermonitor_settings::{
    ScalarField, SettingsCommand, SettingsEditor, SettingsEffect,
    SettingsRecord, SettingsStore,
};
use ubermonitor_storage::{FileStorage, StorageConfig};

#[test]
fn given_fresh_install_when_edited_and_saved_then_next_mount_sees_record() {
    let root = test_temp_dir("full_flow");
    let (mut editor, effect) = mount(&root);
    assert_eq!(effect, None);
    assert_eq!(editor.draft(), &SettingsRecord::default());

    editor.reduce(SettingsCommand::ScalarChanged {
        field: ScalarField::MinPrice,
        value: String::from("10"),
    });
    editor.reduce(SettingsCommand::ScalarChanged {
        field: ScalarField::MinClientRating,
        value: String::from("4.7"),
    });
    editor.reduce(SettingsCommand::BlockedCitiesChanged(String::from(
        "Warszawa,  , Krakow ,Krakow",
    )));
    editor.reduce(SettingsCommand::ExcludeCityChanged(String::from("Krakow")));
    editor.reduce(SettingsCommand::ExcludeStreetsChanged(String::from(
        "Main St, , Second St ,",
    )));
    assert_eq!(editor.reduce(SettingsCommand::AddCityExclude), None);

    let saved = match editor.reduce(SettingsCommand::Save) {
        Some(SettingsEffect::SaveCompleted(saved)) => saved,
        other => panic!("expected save completed, got {other:?}"),
    };
    assert!(!editor.is_dirty());
    assert_eq!(editor.saved(), &saved);
    assert_eq!(saved.blocked_cities(), ["Warszawa", "Krakow", "Krakow"]);

    let (remounted, effect) = mount(&root);
    assert_eq!(effect, None);
    assert_eq!(remounted.draft(), &saved);
    assert_eq!(remounted.vm().blocked_cities_input, "Warszawa, Krakow, Krakow");
    let rule = &remounted.vm().city_excludes()[0];
    assert_eq!(rule.city(), "Krakow");
    assert_eq!(rule.streets(), ["Main St", "Second St"]);

    fs::remove_dir_all(&root).expect("temporary directory should be removed");
}

#[test]
fn given_corrupted_file_when_mounted_then_defaults_until_next_save() {
    let root = test_temp_dir("corrupted");
    let path = root.join("user_settings_v2.json");
    fs::write(&path, "{ this is not valid json")
        .expect("invalid test payload should be written");

    let (mut editor, effect) = mount(&root);

    assert!(matches!(effect, Some(SettingsEffect::LoadDegraded(_))));
    assert_eq!(editor.draft(), &SettingsRecord::default());
    assert_eq!(
        fs::read_to_string(&path).expect("payload should still exist"),
        "{ this is not valid json"
    );

    editor.reduce(SettingsCommand::ScalarChanged {
        field: ScalarField::MinPricePerKm,
        value: String::from("2.5"),
    });
    assert!(matches!(
        editor.reduce(SettingsCommand::Save),
        Some(SettingsEffect::SaveCompleted(_))
    ));
    let (remounted, effect) = mount(&root);
    assert_eq!(effect, None);
    assert_eq!(remounted.draft().scalar(ScalarField::MinPricePerKm), "2.5");

    fs::remove_dir_all(&root).expect("temporary directory should be removed");
}

#[test]
fn given_rapid_additions_when_saved_then_all_ids_are_distinct() {
    let root = test_temp_dir("rapid_ids");
    let (mut editor, _) = mount(&root);

    for index in 0..500 {
        editor
            .add_city_exclude(&format!("City {index}"), "Street")
            .expect("rule should be added");
    }
    editor.reduce(SettingsCommand::Save);

    let (remounted, _) = mount(&root);
    let ids: HashSet<&str> = remounted
        .draft()
        .city_excludes()
        .iter()
        .map(|rule| rule.id())
        .collect();
    assert_eq!(ids.len(), 500);

    fs::remove_dir_all(&root).expect("temporary directory should be removed");
}

#[test]
fn given_saved_settings_when_defaults_restored_then_file_is_removed() {
    let root = test_temp_dir("restore_defaults");
    let (mut editor, _) = mount(&root);
    editor.reduce(SettingsCommand::BlockedCitiesChanged(String::from("Lodz")));
    editor.reduce(SettingsCommand::Save);
    assert!(root.join("user_settings_v2.json").exists());

    let effect = editor.reduce(SettingsCommand::RestoreDefaults);

    assert_eq!(effect, Some(SettingsEffect::DefaultsRestored));
    assert!(!root.join("user_settings_v2.json").exists());
    assert_eq!(editor.draft(), &SettingsRecord::default());
    assert!(editor.vm().blocked_cities_input.is_empty());

    fs::remove_dir_all(&root).expect("temporary directory should be removed");
}

#[test]
fn given_unsaved_edits_when_remounted_then_edits_are_lost() {
    let root = test_temp_dir("unsaved");
    let (mut editor, _) = mount(&root);
    editor.reduce(SettingsCommand::ScalarChanged {
        field: ScalarField::MinPrice,
        value: String::from("40"),
    });
    assert!(editor.is_dirty());
    drop(editor);

    let (remounted, _) = mount(&root);

    assert_eq!(remounted.draft(), &SettingsRecord::default());

    fs::remove_dir_all(&root).expect("temporary directory should be removed");
}

fn mount(
    root: &std::path::Path,
) -> (SettingsEditor<FileStorage>, Option<SettingsEffect>) {
    let storage = FileStorage::new(StorageConfig::new(root));
    SettingsEditor::mount(SettingsStore::new(storage))
}

fn test_temp_dir(test_name: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be monotonic")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "ubermonitor-editor-{test_name}-{stamp}-{}",
        std::process::id()
    ));

    fs::create_dir_all(&dir).expect("temporary directory should be created");
    dir
}
