//! The catalog's vocabulary: every kind of row a settings screen can show.

use std::fmt;
use std::sync::Arc;

use crate::config::{
    BooleanConfig, EnumConfig, EnumSetting, SettingEnum, StringListConfig, ValueConfig,
};

/// Callback run when an action item is activated.
pub type ActionFn = Arc<dyn Fn() + Send + Sync>;

/// Identifier of a settings screen the host can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Route(pub &'static str);

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Presentation fields shared by every item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemHeader {
    pub title: &'static str,
    pub summary: Option<&'static str>,
    pub icon: &'static str,
    /// Grid cells the item occupies.
    pub span: u16,
}

impl ItemHeader {
    pub fn new(title: &'static str, icon: &'static str) -> Self {
        Self {
            title,
            summary: None,
            icon,
            span: 1,
        }
    }

    /// An empty summary is the same as none.
    pub fn summary(mut self, summary: &'static str) -> Self {
        self.summary = (!summary.is_empty()).then_some(summary);
        self
    }

    pub fn span(mut self, span: u16) -> Self {
        self.span = span;
        self
    }
}

/// Free-value settings: the text typed in the prompt is coerced to the
/// handle's type before it is stored.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueSetting {
    Int(ValueConfig<i64>),
    Text(ValueConfig<String>),
}

impl ValueSetting {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Int(config) => config.key(),
            Self::Text(config) => config.key(),
        }
    }
}

/// What a version row does when activated.
#[derive(Clone)]
pub enum VersionTarget {
    Action(ActionFn),
    Navigate(Route),
}

#[derive(Clone)]
pub enum SettingItem {
    Action {
        header: ItemHeader,
        action: ActionFn,
    },
    Boolean {
        header: ItemHeader,
        config: BooleanConfig,
    },
    Value {
        header: ItemHeader,
        config: ValueSetting,
    },
    ListEnum {
        header: ItemHeader,
        config: Arc<dyn EnumSetting>,
        /// Labels indexed by enum ordinal.
        options: &'static [&'static str],
    },
    ListString {
        header: ItemHeader,
        config: StringListConfig,
        /// Labels indexed by the number stored in the setting.
        options: &'static [&'static str],
    },
    Link {
        header: ItemHeader,
        url: String,
    },
    Navigate {
        header: ItemHeader,
        destination: Route,
    },
    Version {
        header: ItemHeader,
        target: VersionTarget,
    },
}

/// Variant tag of a [`SettingItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Action,
    Boolean,
    Value,
    ListEnum,
    ListString,
    Link,
    Navigate,
    Version,
}

impl SettingItem {
    pub fn action(header: ItemHeader, action: impl Fn() + Send + Sync + 'static) -> Self {
        Self::Action {
            header,
            action: Arc::new(action),
        }
    }

    pub fn boolean(header: ItemHeader, config: BooleanConfig) -> Self {
        Self::Boolean { header, config }
    }

    pub fn int_value(header: ItemHeader, config: ValueConfig<i64>) -> Self {
        Self::Value {
            header,
            config: ValueSetting::Int(config),
        }
    }

    pub fn text_value(header: ItemHeader, config: ValueConfig<String>) -> Self {
        Self::Value {
            header,
            config: ValueSetting::Text(config),
        }
    }

    pub fn list_enum<T: SettingEnum>(
        header: ItemHeader,
        config: EnumConfig<T>,
        options: &'static [&'static str],
    ) -> Self {
        Self::ListEnum {
            header,
            config: Arc::new(config),
            options,
        }
    }

    pub fn list_string(
        header: ItemHeader,
        config: StringListConfig,
        options: &'static [&'static str],
    ) -> Self {
        Self::ListString {
            header,
            config,
            options,
        }
    }

    pub fn link(header: ItemHeader, url: impl Into<String>) -> Self {
        Self::Link {
            header,
            url: url.into(),
        }
    }

    pub fn navigate(header: ItemHeader, destination: Route) -> Self {
        Self::Navigate {
            header,
            destination,
        }
    }

    pub fn version(header: ItemHeader, target: VersionTarget) -> Self {
        Self::Version { header, target }
    }

    pub fn header(&self) -> &ItemHeader {
        match self {
            Self::Action { header, .. }
            | Self::Boolean { header, .. }
            | Self::Value { header, .. }
            | Self::ListEnum { header, .. }
            | Self::ListString { header, .. }
            | Self::Link { header, .. }
            | Self::Navigate { header, .. }
            | Self::Version { header, .. } => header,
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Action { .. } => ItemKind::Action,
            Self::Boolean { .. } => ItemKind::Boolean,
            Self::Value { .. } => ItemKind::Value,
            Self::ListEnum { .. } => ItemKind::ListEnum,
            Self::ListString { .. } => ItemKind::ListString,
            Self::Link { .. } => ItemKind::Link,
            Self::Navigate { .. } => ItemKind::Navigate,
            Self::Version { .. } => ItemKind::Version,
        }
    }
}

impl fmt::Debug for SettingItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("SettingItem");
        out.field("kind", &self.kind())
            .field("title", &self.header().title);
        match self {
            Self::Boolean { config, .. } => out.field("key", &config.key()),
            Self::Value { config, .. } => out.field("key", &config.key()),
            Self::ListEnum { config, .. } => out.field("key", &config.key()),
            Self::ListString { config, .. } => out.field("key", &config.key()),
            Self::Link { url, .. } => out.field("url", url),
            Self::Navigate { destination, .. } => out.field("destination", destination),
            Self::Version {
                target: VersionTarget::Navigate(route),
                ..
            } => out.field("destination", route),
            Self::Action { .. }
            | Self::Version {
                target: VersionTarget::Action(_),
                ..
            } => &mut out,
        };
        out.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_summary_is_suppressed() {
        let header = ItemHeader::new("Cookies", "🍪").summary("");
        assert_eq!(header.summary, None);
        let header = header.summary("Accept third-party cookies");
        assert_eq!(header.summary, Some("Accept third-party cookies"));
    }

    #[test]
    fn debug_names_key_not_closures() {
        let item = SettingItem::boolean(
            ItemHeader::new("Ad block", "⛔"),
            crate::config::ADBLOCK,
        );
        let text = format!("{item:?}");
        assert!(text.contains("Boolean"));
        assert!(text.contains("adblock"));
    }
}
