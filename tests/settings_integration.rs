mod support;

use mapreview::config::{self, CONFIG_FILE_NAME, ReviewSettings};
use mapreview::storage::{FileStore, KeyValueStore, STORAGE_FILE_NAME, StorageKey};
use support::mapreview_env::MapreviewEnvGuard;
use tempfile::tempdir;

#[test]
fn missing_config_yields_defaults() {
    let temp = tempdir().unwrap();
    let _guard = MapreviewEnvGuard::set_config_home(temp.path().to_path_buf());
    let settings = config::load_or_default().unwrap();
    assert_eq!(settings, ReviewSettings::default());
    assert_eq!(settings.review.accept_limit, 50);
    assert_eq!(settings.review.notice_ms, 4_000);
    assert_eq!(settings.background.refresh_debounce_ms, 1_000);
    assert_eq!(settings.layers.refresh_debounce_ms, 500);
}

#[test]
fn out_of_range_values_are_clamped_on_load() {
    let temp = tempdir().unwrap();
    let _guard = MapreviewEnvGuard::set_config_home(temp.path().to_path_buf());
    let path = config::config_path().unwrap();
    assert!(path.ends_with(CONFIG_FILE_NAME));
    std::fs::write(
        &path,
        "[review]\naccept_limit = 0\n\n[background]\nrefresh_debounce_ms = 1\n\n[layers]\nbuilding_providers = []\n",
    )
    .unwrap();
    let settings = config::load_or_default().unwrap();
    assert_eq!(settings.review.accept_limit, 1);
    assert_eq!(settings.background.refresh_debounce_ms, 50);
    assert_eq!(
        settings.layers.building_providers,
        vec!["Facebook".to_string(), "Microsoft".to_string()]
    );
}

#[test]
fn invalid_toml_is_reported() {
    let temp = tempdir().unwrap();
    let _guard = MapreviewEnvGuard::set_config_home(temp.path().to_path_buf());
    std::fs::write(config::config_path().unwrap(), "review = [").unwrap();
    assert!(matches!(
        config::load_or_default(),
        Err(config::ConfigError::ParseToml { .. })
    ));
}

#[test]
fn file_store_lives_next_to_config() {
    let temp = tempdir().unwrap();
    let _guard = MapreviewEnvGuard::set_config_home(temp.path().to_path_buf());
    let mut store = FileStore::open_default().unwrap();
    store
        .set(StorageKey::BackgroundFavorites, r#"{"Bing":true}"#.to_string())
        .unwrap();
    let config_dir = config::config_path().unwrap().parent().unwrap().to_path_buf();
    assert_eq!(store.path(), config_dir.join(STORAGE_FILE_NAME));
    let reopened = FileStore::open_default().unwrap();
    assert_eq!(
        reopened.get(StorageKey::BackgroundFavorites).as_deref(),
        Some(r#"{"Bing":true}"#)
    );
}
