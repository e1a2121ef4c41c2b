use std::sync::Arc;
use std::thread;

use inkbro::config::{
    ConfigError, ConfigStore, ConfigValue, SettingsDocument, StringListConfig, ValueConfig,
    ValueKind, ADBLOCK, COOKIES, JAVASCRIPT,
};
use tempfile::TempDir;

#[test]
fn values_survive_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("inkbro").join("settings.toml");

    let store = ConfigStore::from_file(path.clone()).unwrap();
    ADBLOCK.set(&store, false).unwrap();
    ValueConfig::new("page_timeout", 30_i64).set(&store, 45).unwrap();
    StringListConfig::new("search_engine", "0")
        .set_index(&store, 2)
        .unwrap();

    let reopened = ConfigStore::from_file(path.clone()).unwrap();
    assert!(!ADBLOCK.get(&reopened));
    assert_eq!(reopened.get("page_timeout"), Some(ConfigValue::Int(45)));
    assert_eq!(
        reopened.get("search_engine"),
        Some(ConfigValue::Text("2".into()))
    );
    assert!(!path.with_extension("toml.tmp").exists());
}

#[test]
fn file_uses_settings_table() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.toml");
    let store = ConfigStore::from_file(path.clone()).unwrap();

    COOKIES.set(&store, false).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("[settings]"));
    assert!(content.contains("cookies = false"));
}

#[test]
fn unknown_keys_of_any_shape_survive_a_save() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.toml");
    std::fs::write(
        &path,
        "[settings]\nadblock = true\nzoom = 1.5\n\n[settings.sub]\nlevel = 3\n",
    )
    .unwrap();

    let store = ConfigStore::from_file(path.clone()).unwrap();
    ADBLOCK.set(&store, false).unwrap();

    let reopened = ConfigStore::from_file(path).unwrap();
    assert!(!ADBLOCK.get(&reopened));
    assert_eq!(reopened.get("zoom"), Some(ConfigValue::Other(toml::Value::Float(1.5))));
    let sub = reopened.get("sub").expect("nested table kept");
    assert_eq!(sub.kind(), ValueKind::Other);
    let ConfigValue::Other(toml::Value::Table(table)) = sub else {
        panic!("expected a table, got {sub:?}");
    };
    assert_eq!(table.get("level"), Some(&toml::Value::Integer(3)));
}

#[test]
fn missing_file_reads_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let store = ConfigStore::from_file(temp_dir.path().join("absent.toml")).unwrap();

    assert!(JAVASCRIPT.get(&store));
    assert_eq!(store.snapshot(), SettingsDocument::default());
}

#[test]
fn wrong_type_for_known_key_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.toml");
    std::fs::write(&path, "[settings]\nadblock = \"yes\"\n").unwrap();

    let err = ConfigStore::from_file(path).err().expect("load should fail");
    assert!(matches!(err, ConfigError::TypeMismatch { ref key, .. } if key == "adblock"));
}

#[test]
fn malformed_file_reports_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.toml");
    std::fs::write(&path, "[settings\nadblock = ").unwrap();

    let err = ConfigStore::from_file(path.clone()).err().expect("load should fail");
    assert!(matches!(err, ConfigError::ParseError { path: ref p, .. } if *p == path));
}

#[test]
fn concurrent_toggles_on_two_keys_do_not_interfere() {
    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(ConfigStore::from_file(temp_dir.path().join("settings.toml")).unwrap());

    let handles: Vec<_> = [ADBLOCK, COOKIES]
        .into_iter()
        .map(|config| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..10 {
                    config.toggle(&store).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    // An even number of flips lands back on the defaults.
    assert!(ADBLOCK.get(&store));
    assert!(COOKIES.get(&store));
    let reopened = ConfigStore::from_file(temp_dir.path().join("settings.toml")).unwrap();
    assert_eq!(reopened.snapshot(), store.snapshot());
}
