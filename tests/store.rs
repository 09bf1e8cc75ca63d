use std::fs;

use astroprofile::config::AppPaths;
use astroprofile::error::AppError;
use astroprofile::profile::{EquipmentProfile, ObservatoryProfile, ProfileKind, SettingsProfile};
use astroprofile::store::{FileProfileStore, ProfileStore};
use tempfile::TempDir;

fn store() -> (TempDir, FileProfileStore) {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileProfileStore::new(AppPaths::with_config_dir(dir.path()));
    (dir, store)
}

#[test]
fn saves_and_loads_equipment() {
    let (_dir, store) = store();

    let mut equipment = EquipmentProfile::default();
    equipment.camera.driver = "CCD Simulator".to_string();
    equipment.focuser.minpos = 5000;
    equipment.focuser.maxpos = 12000;
    equipment.filterwheel.names = ["L", "R", "G", "B", "Ha", "OIII", "SII", "Dark"]
        .map(String::from)
        .to_vec();
    store.save("test-equipment", &equipment).expect("save");

    let loaded: EquipmentProfile = store.load("test-equipment.yaml").expect("load");
    assert_eq!(loaded, equipment);
    assert_eq!(loaded.filterwheel.num_filters(), 8);

    let path = store.paths().profile_file(ProfileKind::Equipment, "test-equipment");
    let raw = fs::read_to_string(path).expect("read file");
    assert!(raw.contains("driver: CCD Simulator"));
}

#[test]
fn lists_profiles_sorted_per_kind() {
    let (_dir, store) = store();
    store.save("zeta", &SettingsProfile::default()).expect("save");
    store.save("alpha", &SettingsProfile::default()).expect("save");
    store.save("middle", &EquipmentProfile::default()).expect("save");

    assert_eq!(
        store.list(ProfileKind::Settings).expect("list"),
        vec!["alpha".to_string(), "zeta".to_string()]
    );
    assert_eq!(
        store.list(ProfileKind::Equipment).expect("list"),
        vec!["middle".to_string()]
    );
    assert!(store.list(ProfileKind::Observatory).expect("list").is_empty());
}

#[test]
fn missing_profile_is_not_found() {
    let (_dir, store) = store();
    let result = store.load::<ObservatoryProfile>("nowhere");
    assert!(matches!(result, Err(AppError::NotFound { .. })));
}

#[test]
fn file_in_place_of_category_dir_fails_write() {
    let (_dir, store) = store();
    let category = store.paths().category_dir(ProfileKind::Settings);
    fs::create_dir_all(store.paths().root_dir()).expect("mkdir");
    fs::write(&category, "not a directory").expect("write");

    let result = store.save("blocked", &SettingsProfile::default());
    assert!(matches!(result, Err(AppError::Config(_))));
}

#[test]
fn empty_document_loads_as_defaults() {
    let (_dir, store) = store();
    let category = store.paths().category_dir(ProfileKind::Settings);
    fs::create_dir_all(&category).expect("mkdir");
    fs::write(category.join("blank.yaml"), "").expect("write");

    let loaded: SettingsProfile = store.load("blank").expect("load");
    assert_eq!(loaded, SettingsProfile::default());
}

#[test]
fn default_marker_round_trip() {
    let (_dir, store) = store();
    assert_eq!(store.get_default(ProfileKind::Equipment).expect("get"), None);
    assert!(matches!(
        store.resolve(ProfileKind::Equipment, None),
        Err(AppError::NoDefaultProfile("equipment"))
    ));

    store.save("c8", &EquipmentProfile::default()).expect("save");
    store.set_default(ProfileKind::Equipment, "c8").expect("set default");

    let marker = store.paths().default_marker(ProfileKind::Equipment);
    assert_eq!(fs::read_to_string(&marker).expect("marker"), "default=c8\n");
    assert_eq!(
        store.get_default(ProfileKind::Equipment).expect("get"),
        Some("c8".to_string())
    );
    assert_eq!(store.resolve(ProfileKind::Equipment, Some("default")).expect("resolve"), "c8");
    assert_eq!(
        store.resolve(ProfileKind::Equipment, Some("other.yaml")).expect("resolve"),
        "other"
    );

    store.reset_default(ProfileKind::Equipment).expect("reset");
    assert_eq!(fs::read_to_string(&marker).expect("marker"), "default=\n");
    assert_eq!(store.get_default(ProfileKind::Equipment).expect("get"), None);
}

#[test]
fn blank_name_is_rejected_even_with_a_default() {
    let (_dir, store) = store();
    store.save("c8", &EquipmentProfile::default()).expect("save");
    store.set_default(ProfileKind::Equipment, "c8").expect("set default");

    let result = store.resolve(ProfileKind::Equipment, Some(""));
    assert!(matches!(result, Err(AppError::InvalidInput(_))));
    let result = store.resolve(ProfileKind::Equipment, Some("  "));
    assert!(matches!(result, Err(AppError::InvalidInput(_))));
    assert_eq!(store.resolve(ProfileKind::Equipment, None).expect("resolve"), "c8");
}

#[test]
fn default_must_name_an_existing_profile() {
    let (_dir, store) = store();
    let result = store.set_default(ProfileKind::Observatory, "ghost");
    assert!(matches!(result, Err(AppError::NotFound { .. })));

    let category = store.paths().category_dir(ProfileKind::Observatory);
    fs::create_dir_all(&category).expect("mkdir");
    fs::write(category.join("DEFAULT_PROFILE"), "default=ghost\n").expect("write");
    assert_eq!(store.get_default(ProfileKind::Observatory).expect("get"), None);
}

#[test]
fn malformed_marker_means_no_default() {
    let (_dir, store) = store();
    store.save("c8", &EquipmentProfile::default()).expect("save");
    fs::write(store.paths().default_marker(ProfileKind::Equipment), "c8\n").expect("write");
    assert_eq!(store.get_default(ProfileKind::Equipment).expect("get"), None);
}

#[test]
fn removing_the_default_clears_it() {
    let (_dir, store) = store();
    store.save("c8", &EquipmentProfile::default()).expect("save");
    store.set_default(ProfileKind::Equipment, "c8").expect("set default");

    store.remove(ProfileKind::Equipment, "c8").expect("remove");
    assert!(!store.exists(ProfileKind::Equipment, "c8").expect("exists"));
    assert_eq!(store.get_default(ProfileKind::Equipment).expect("get"), None);
    assert!(store.remove(ProfileKind::Equipment, "c8").is_err());
}
