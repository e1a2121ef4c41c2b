use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single persisted setting value.
///
/// Serialized untagged so the TOML file reads naturally:
/// `adblock = true`, `page_timeout = 30`, `font_size = "2"`.
/// Anything else (floats, arrays, dates, tables) is carried through as
/// [`ConfigValue::Other`] and written back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Int(i64),
    Text(String),
    Other(toml::Value),
}

/// Runtime representation of a [`ConfigValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    Int,
    Text,
    Other,
}

impl ValueKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Bool => "boolean",
            Self::Int => "integer",
            Self::Text => "text",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl ConfigValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Text(_) => ValueKind::Text,
            Self::Other(_) => ValueKind::Other,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
            Self::Other(value) => write!(f, "{value}"),
        }
    }
}

/// Root of the settings file.
///
/// Unknown keys are kept as-is so that older builds never drop settings
/// written by newer ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsDocument {
    #[serde(default)]
    pub settings: BTreeMap<String, ConfigValue>,
}

impl SettingsDocument {
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.settings.get(key)
    }

    /// Insert a value, returning the one it replaced.
    pub fn insert(&mut self, key: &str, value: ConfigValue) -> Option<ConfigValue> {
        self.settings.insert(key.to_string(), value)
    }

    /// Put back a previous value (or remove the key if there was none).
    pub fn restore(&mut self, key: &str, previous: Option<ConfigValue>) {
        match previous {
            Some(value) => {
                self.settings.insert(key.to_string(), value);
            }
            None => {
                self.settings.remove(key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_values_roundtrip_through_toml() {
        let raw = r#"
[settings]
adblock = true
page_timeout = 30
font_size = "2"
"#;
        let doc: SettingsDocument = toml::from_str(raw).unwrap();
        assert_eq!(doc.get("adblock"), Some(&ConfigValue::Bool(true)));
        assert_eq!(doc.get("page_timeout"), Some(&ConfigValue::Int(30)));
        assert_eq!(doc.get("font_size"), Some(&ConfigValue::Text("2".into())));
    }

    #[test]
    fn unrecognized_values_are_kept() {
        let raw = r#"
[settings]
zoom = 1.5
fonts = ["serif", "mono"]
"#;
        let doc: SettingsDocument = toml::from_str(raw).unwrap();
        assert_eq!(doc.get("zoom").map(ConfigValue::kind), Some(ValueKind::Other));
        assert_eq!(doc.get("zoom"), Some(&ConfigValue::Other(toml::Value::Float(1.5))));
        assert_eq!(doc.get("fonts").map(ConfigValue::kind), Some(ValueKind::Other));
    }

    #[test]
    fn restore_removes_key_without_previous() {
        let mut doc = SettingsDocument::default();
        let previous = doc.insert("cookies", ConfigValue::Bool(true));
        doc.restore("cookies", previous);
        assert!(doc.get("cookies").is_none());
    }

    #[test]
    fn missing_settings_table_is_empty() {
        let doc: SettingsDocument = toml::from_str("").unwrap();
        assert!(doc.settings.is_empty());
    }
}
