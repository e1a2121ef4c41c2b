use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use thiserror::Error;

use crate::config::keys::well_known_kind;
use crate::config::types::{SettingsDocument, ValueKind};

/// Errors that can occur when loading or persisting settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read settings file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write settings file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize settings: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Setting '{key}' holds a {found} value, expected {expected}")]
    TypeMismatch {
        key: String,
        expected: ValueKind,
        found: ValueKind,
    },

    #[error("Settings storage unavailable: {message}")]
    Unavailable { message: String },
}

impl SettingsDocument {
    /// Returns the default settings file path.
    ///
    /// `~/.config/inkbro/settings.toml` on Unix, `dirs::config_dir()`
    /// elsewhere, current directory as last resort.
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("inkbro").join("settings.toml")
    }

    /// Loads settings from `path`.
    ///
    /// A missing file yields an empty document; every key then reads as its
    /// handle's default.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let document: SettingsDocument =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        document.validate()?;
        Ok(document)
    }

    /// Writes settings to `path`.
    ///
    /// Holds an exclusive lock on `<path>.lock` for the duration, writes a
    /// sibling temp file and renames it over the target.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::WriteError {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }

        let content = toml::to_string(self)?;

        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(path.with_extension("toml.lock"))
            .map_err(write_err)?;
        lock_file.lock_exclusive().map_err(write_err)?;

        let tmp = scopeguard::guard(path.with_extension("toml.tmp"), |tmp| {
            let _ = fs::remove_file(tmp);
        });
        fs::write(&*tmp, content).map_err(write_err)?;
        fs::rename(&*tmp, path).map_err(write_err)?;
        scopeguard::ScopeGuard::into_inner(tmp);

        let _ = FileExt::unlock(&lock_file);
        Ok(())
    }

    /// Checks that well-known keys carry the representation the browser
    /// expects. Unknown keys are not checked.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in &self.settings {
            if let Some(expected) = well_known_kind(key) {
                if value.kind() != expected {
                    return Err(ConfigError::TypeMismatch {
                        key: key.clone(),
                        expected,
                        found: value.kind(),
                    });
                }
            }
        }
        Ok(())
    }
}
