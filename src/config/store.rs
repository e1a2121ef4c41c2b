//! Process-wide settings storage.
//!
//! One `ConfigStore` is created at startup, before any screen renders, and
//! cloned into every component that reads or writes settings.

use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::loader::ConfigError;
use crate::config::types::{ConfigValue, SettingsDocument, ValueKind};

/// Where the settings document lives between runs.
pub trait SettingsPersistence: Send + Sync {
    fn load(&self) -> Result<SettingsDocument, ConfigError>;

    fn save(&self, document: &SettingsDocument) -> Result<(), ConfigError>;
}

/// TOML file on disk.
pub struct TomlFile {
    path: PathBuf,
}

impl TomlFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SettingsPersistence for TomlFile {
    fn load(&self) -> Result<SettingsDocument, ConfigError> {
        SettingsDocument::load_from(&self.path)
    }

    fn save(&self, document: &SettingsDocument) -> Result<(), ConfigError> {
        document.save_to(&self.path)
    }
}

/// Nothing survives the process.
pub struct InMemory;

impl SettingsPersistence for InMemory {
    fn load(&self) -> Result<SettingsDocument, ConfigError> {
        Ok(SettingsDocument::default())
    }

    fn save(&self, _document: &SettingsDocument) -> Result<(), ConfigError> {
        Ok(())
    }
}

/// Thread-safe key/value settings container.
///
/// Every write goes through persistence while the write lock is held: a
/// failed save restores the previous in-memory value, so readers never see
/// a value that is not on disk.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<SettingsDocument>>,
    persistence: Arc<dyn SettingsPersistence>,
}

impl ConfigStore {
    /// Load the document from `persistence` and wrap it.
    pub fn open(persistence: Arc<dyn SettingsPersistence>) -> Result<Self, ConfigError> {
        let document = persistence.load()?;
        Ok(Self::with_document(document, persistence))
    }

    pub fn with_document(
        document: SettingsDocument,
        persistence: Arc<dyn SettingsPersistence>,
    ) -> Self {
        Self {
            inner: Arc::new(RwLock::new(document)),
            persistence,
        }
    }

    /// Open the TOML file at `path`.
    pub fn from_file(path: PathBuf) -> Result<Self, ConfigError> {
        Self::open(Arc::new(TomlFile::new(path)))
    }

    pub fn in_memory() -> Self {
        Self::with_document(SettingsDocument::default(), Arc::new(InMemory))
    }

    pub fn get(&self, key: &str) -> Option<ConfigValue> {
        self.inner.read().get(key).cloned()
    }

    /// Store `value` under `key` and persist.
    pub fn set(&self, key: &str, value: ConfigValue) -> Result<(), ConfigError> {
        let mut guard = self.inner.write();
        let previous = guard.insert(key, value);
        if let Err(err) = self.persistence.save(&guard) {
            guard.restore(key, previous);
            tracing::error!(key, error = %err, "failed to persist setting");
            return Err(err);
        }
        tracing::debug!(key, "setting persisted");
        Ok(())
    }

    /// Flip a boolean key and persist, returning the new value.
    ///
    /// A missing key starts from `default`. Read and write happen under one
    /// lock, so concurrent toggles never lose an update.
    pub fn toggle(&self, key: &str, default: bool) -> Result<bool, ConfigError> {
        let mut guard = self.inner.write();
        let current = match guard.get(key) {
            None => default,
            Some(ConfigValue::Bool(value)) => *value,
            Some(other) => {
                return Err(ConfigError::TypeMismatch {
                    key: key.to_string(),
                    expected: ValueKind::Bool,
                    found: other.kind(),
                })
            }
        };
        let next = !current;
        let previous = guard.insert(key, ConfigValue::Bool(next));
        if let Err(err) = self.persistence.save(&guard) {
            guard.restore(key, previous);
            tracing::error!(key, error = %err, "failed to persist toggle");
            return Err(err);
        }
        tracing::debug!(key, value = next, "toggle persisted");
        Ok(next)
    }

    /// Clone of the whole document.
    pub fn snapshot(&self) -> SettingsDocument {
        self.inner.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    struct Flaky {
        fail: AtomicBool,
    }

    impl SettingsPersistence for Flaky {
        fn load(&self) -> Result<SettingsDocument, ConfigError> {
            Ok(SettingsDocument::default())
        }

        fn save(&self, _document: &SettingsDocument) -> Result<(), ConfigError> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(ConfigError::Unavailable {
                    message: "disk full".into(),
                });
            }
            Ok(())
        }
    }

    #[test]
    fn toggle_missing_key_starts_from_default() {
        let store = ConfigStore::in_memory();
        assert_eq!(store.toggle("adblock", true).unwrap(), false);
        assert_eq!(store.get("adblock"), Some(ConfigValue::Bool(false)));
    }

    #[test]
    fn failed_save_restores_previous_value() {
        let flaky = Arc::new(Flaky {
            fail: AtomicBool::new(false),
        });
        let store = ConfigStore::open(flaky.clone()).unwrap();
        store.set("page_timeout", ConfigValue::Int(30)).unwrap();

        flaky.fail.store(true, Ordering::SeqCst);
        assert!(store.set("page_timeout", ConfigValue::Int(45)).is_err());
        assert_eq!(store.get("page_timeout"), Some(ConfigValue::Int(30)));

        assert!(store.toggle("cookies", false).is_err());
        assert_eq!(store.get("cookies"), None);
    }

    #[test]
    fn toggle_rejects_non_boolean() {
        let store = ConfigStore::in_memory();
        store.set("page_timeout", ConfigValue::Int(30)).unwrap();
        let err = store.toggle("page_timeout", false).unwrap_err();
        assert!(matches!(err, ConfigError::TypeMismatch { .. }));
    }

    #[test]
    fn concurrent_toggles_on_distinct_keys_do_not_interfere() {
        let store = ConfigStore::in_memory();
        let handles: Vec<_> = ["adblock", "cookies"]
            .into_iter()
            .map(|key| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        store.toggle(key, false).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(store.get("adblock"), Some(ConfigValue::Bool(false)));
        assert_eq!(store.get("cookies"), Some(ConfigValue::Bool(false)));
    }
}
