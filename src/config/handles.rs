//! Typed views onto single keys of the [`ConfigStore`].
//!
//! A handle names one key and knows its default and representation. Reads
//! of a missing key, or of a key holding an unexpected representation,
//! fall back to the default.

use std::fmt;

use thiserror::Error;

use crate::config::loader::ConfigError;
use crate::config::store::ConfigStore;
use crate::config::types::{ConfigValue, ValueKind};

/// Edited text could not be turned into the setting's type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{input}' is not a valid {expected} value")]
pub struct CoercionError {
    pub input: String,
    pub expected: ValueKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BooleanConfig {
    key: &'static str,
    default: bool,
}

impl BooleanConfig {
    pub const fn new(key: &'static str, default: bool) -> Self {
        Self { key, default }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn default_value(&self) -> bool {
        self.default
    }

    pub fn get(&self, store: &ConfigStore) -> bool {
        store
            .get(self.key)
            .and_then(|value| value.as_bool())
            .unwrap_or(self.default)
    }

    pub fn set(&self, store: &ConfigStore, value: bool) -> Result<(), ConfigError> {
        store.set(self.key, ConfigValue::Bool(value))
    }

    /// Flip and persist. Returns the new value.
    pub fn toggle(&self, store: &ConfigStore) -> Result<bool, ConfigError> {
        store.toggle(self.key, self.default)
    }
}

/// Scalar types a free-value setting can hold.
pub trait SettingValue: Clone + fmt::Display + Send + Sync + 'static {
    const KIND: ValueKind;

    fn from_config(value: &ConfigValue) -> Option<Self>;

    fn into_config(self) -> ConfigValue;

    /// Turn text typed by the user into a value.
    fn parse_edit(text: &str) -> Result<Self, CoercionError>;
}

impl SettingValue for i64 {
    const KIND: ValueKind = ValueKind::Int;

    fn from_config(value: &ConfigValue) -> Option<Self> {
        value.as_int()
    }

    fn into_config(self) -> ConfigValue {
        ConfigValue::Int(self)
    }

    fn parse_edit(text: &str) -> Result<Self, CoercionError> {
        text.trim().parse().map_err(|_| CoercionError {
            input: text.to_string(),
            expected: Self::KIND,
        })
    }
}

impl SettingValue for String {
    const KIND: ValueKind = ValueKind::Text;

    fn from_config(value: &ConfigValue) -> Option<Self> {
        value.as_text().map(str::to_string)
    }

    fn into_config(self) -> ConfigValue {
        ConfigValue::Text(self)
    }

    fn parse_edit(text: &str) -> Result<Self, CoercionError> {
        Ok(text.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValueConfig<T> {
    key: &'static str,
    default: T,
}

impl<T: SettingValue> ValueConfig<T> {
    pub fn new(key: &'static str, default: T) -> Self {
        Self { key, default }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn get(&self, store: &ConfigStore) -> T {
        match store.get(self.key) {
            None => self.default.clone(),
            Some(value) => T::from_config(&value).unwrap_or_else(|| {
                tracing::warn!(
                    key = self.key,
                    expected = %T::KIND,
                    found = %value.kind(),
                    "stored value has unexpected type, using default"
                );
                self.default.clone()
            }),
        }
    }

    pub fn set(&self, store: &ConfigStore, value: T) -> Result<(), ConfigError> {
        store.set(self.key, value.into_config())
    }
}

/// Enumerations stored by a stable string key.
///
/// `variants()` order is the ordinal order: it must line up index-for-index
/// with the option labels shown for the setting.
pub trait SettingEnum: Copy + PartialEq + Send + Sync + 'static {
    fn variants() -> &'static [Self];

    fn key(self) -> &'static str;

    fn ordinal(self) -> usize {
        Self::variants()
            .iter()
            .position(|variant| *variant == self)
            .unwrap_or(0)
    }

    fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::variants().get(ordinal).copied()
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::variants()
            .iter()
            .copied()
            .find(|variant| variant.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnumConfig<T> {
    key: &'static str,
    default: T,
}

impl<T: SettingEnum> EnumConfig<T> {
    pub const fn new(key: &'static str, default: T) -> Self {
        Self { key, default }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn get(&self, store: &ConfigStore) -> T {
        store
            .get(self.key)
            .and_then(|value| value.as_text().and_then(T::from_key))
            .unwrap_or(self.default)
    }

    pub fn set(&self, store: &ConfigStore, value: T) -> Result<(), ConfigError> {
        store.set(self.key, ConfigValue::Text(value.key().to_string()))
    }
}

/// Type-erased access to an [`EnumConfig`] by ordinal.
pub trait EnumSetting: Send + Sync {
    fn key(&self) -> &'static str;

    /// Number of enum constants.
    fn domain_len(&self) -> usize;

    fn selected_ordinal(&self, store: &ConfigStore) -> usize;

    /// Persist the constant at `ordinal`. Out-of-range ordinals are the
    /// caller's bug and are not written.
    fn select(&self, store: &ConfigStore, ordinal: usize) -> Result<(), SelectError>;
}

#[derive(Debug, Error)]
pub enum SelectError {
    #[error("option {index} is outside 0..{len}")]
    OutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Store(#[from] ConfigError),
}

impl<T: SettingEnum> EnumSetting for EnumConfig<T> {
    fn key(&self) -> &'static str {
        self.key
    }

    fn domain_len(&self) -> usize {
        T::variants().len()
    }

    fn selected_ordinal(&self, store: &ConfigStore) -> usize {
        self.get(store).ordinal()
    }

    fn select(&self, store: &ConfigStore, ordinal: usize) -> Result<(), SelectError> {
        let value = T::from_ordinal(ordinal).ok_or(SelectError::OutOfRange {
            index: ordinal,
            len: T::variants().len(),
        })?;
        self.set(store, value)?;
        Ok(())
    }
}

/// A text setting that encodes a selection index, e.g. `"2"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringListConfig {
    key: &'static str,
    default: &'static str,
}

impl StringListConfig {
    pub const fn new(key: &'static str, default: &'static str) -> Self {
        Self { key, default }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn get(&self, store: &ConfigStore) -> String {
        store
            .get(self.key)
            .and_then(|value| value.as_text().map(str::to_string))
            .unwrap_or_else(|| self.default.to_string())
    }

    /// Current value parsed as an index; `None` if it is not a number.
    pub fn selected_index(&self, store: &ConfigStore) -> Option<usize> {
        self.get(store).trim().parse().ok()
    }

    pub fn set_index(&self, store: &ConfigStore, index: usize) -> Result<(), ConfigError> {
        store.set(self.key, ConfigValue::Text(index.to_string()))
    }
}
