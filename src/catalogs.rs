//! Built-in screens shown by the binary.

use crate::config::{
    ConfigStore, EnumConfig, SettingEnum, StringListConfig, ValueConfig, ADBLOCK,
    CONTINUE_MEDIA, COOKIES, DESKTOP_MODE, INCOGNITO_MODE, JAVASCRIPT, SAVE_HISTORY,
    SHARE_LOCATION, TOOLBAR_ON_TOP, VOLUME_PAGE_TURN,
};
use crate::ui::catalog::{ItemHeader, Route, SettingItem, VersionTarget};
use crate::ui::selection::{ExternalAction, MenuInfo};
use crate::ui::toggles::browser_toggles;

pub const SETTINGS: Route = Route("settings");
pub const BEHAVIOR: Route = Route("behavior");
pub const PRIVACY: Route = Route("privacy");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DarkMode {
    System,
    ForceOn,
    Disabled,
}

impl SettingEnum for DarkMode {
    fn variants() -> &'static [Self] {
        &[Self::System, Self::ForceOn, Self::Disabled]
    }

    fn key(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::ForceOn => "force_on",
            Self::Disabled => "disabled",
        }
    }
}

pub const DARK_MODE: EnumConfig<DarkMode> = EnumConfig::new("dark_mode", DarkMode::System);
pub const SEARCH_ENGINE: StringListConfig = StringListConfig::new("search_engine", "1");

const SEARCH_ENGINES: &[&str] = &["Google", "DuckDuckGo", "Bing", "Startpage", "Ecosia"];

/// Title and items of the screen at `route`.
pub fn catalog(route: Route, store: &ConfigStore) -> Option<(&'static str, Vec<SettingItem>)> {
    match route {
        SETTINGS => Some(("Settings", settings(store))),
        BEHAVIOR => Some(("Behavior", behavior())),
        PRIVACY => Some(("Privacy", privacy())),
        _ => None,
    }
}

fn settings(store: &ConfigStore) -> Vec<SettingItem> {
    let reset_store = store.clone();
    vec![
        SettingItem::navigate(
            ItemHeader::new("Behavior", "⚙").summary("Pages, search and media"),
            BEHAVIOR,
        ),
        SettingItem::navigate(
            ItemHeader::new("Privacy", "🔒").summary("Blocking and tracking"),
            PRIVACY,
        ),
        SettingItem::boolean(
            ItemHeader::new("Toolbar on top", "⬆").summary("Anchor panels to the top edge"),
            TOOLBAR_ON_TOP,
        ),
        SettingItem::action(
            ItemHeader::new("Reset quick toggles", "↺").summary("Restore default switches"),
            move || {
                for toggle in browser_toggles() {
                    let config = toggle.config;
                    if let Err(err) = config.set(&reset_store, config.default_value()) {
                        tracing::warn!(key = config.key(), error = %err, "reset failed");
                    }
                }
                tracing::info!("quick toggles reset to defaults");
            },
        ),
        SettingItem::link(
            ItemHeader::new("Project page", "🌐").span(2),
            "https://github.com/plateaukao/einkbro",
        ),
        SettingItem::version(
            ItemHeader::new("About", "ℹ").span(2),
            VersionTarget::Action(std::sync::Arc::new(|| {
                tracing::info!(version = env!("CARGO_PKG_VERSION"), "about requested");
            })),
        ),
    ]
}

fn behavior() -> Vec<SettingItem> {
    vec![
        SettingItem::int_value(
            ItemHeader::new("Page timeout", "⏱").summary("Seconds before a load gives up"),
            ValueConfig::new("page_timeout", 30),
        ),
        SettingItem::text_value(
            ItemHeader::new("Home page", "🏠"),
            ValueConfig::new("home_page", "about:blank".to_string()),
        ),
        SettingItem::list_enum(
            ItemHeader::new("Dark mode", "🌓"),
            DARK_MODE,
            &["Follow system", "Always dark", "Never"],
        ),
        SettingItem::list_string(
            ItemHeader::new("Search engine", "🔍"),
            SEARCH_ENGINE,
            SEARCH_ENGINES,
        ),
        SettingItem::boolean(
            ItemHeader::new("Volume keys turn pages", "🔊"),
            VOLUME_PAGE_TURN,
        ),
        SettingItem::boolean(
            ItemHeader::new("Keep media playing", "🎵")
                .summary("Continue audio in the background"),
            CONTINUE_MEDIA,
        ),
        SettingItem::boolean(ItemHeader::new("Desktop mode", "🖥").span(2), DESKTOP_MODE),
    ]
}

fn privacy() -> Vec<SettingItem> {
    vec![
        SettingItem::boolean(ItemHeader::new("Ad block", "⛔"), ADBLOCK),
        SettingItem::boolean(ItemHeader::new("JavaScript", "📜"), JAVASCRIPT),
        SettingItem::boolean(ItemHeader::new("Cookies", "🍪"), COOKIES),
        SettingItem::boolean(ItemHeader::new("Save history", "🕘"), SAVE_HISTORY),
        SettingItem::boolean(ItemHeader::new("Share location", "📍"), SHARE_LOCATION),
        SettingItem::boolean(
            ItemHeader::new("Incognito", "🕶").summary("Nothing is kept after closing"),
            INCOGNITO_MODE,
        ),
    ]
}

/// Menu shown over a text selection.
pub fn selection_menu() -> Vec<MenuInfo> {
    vec![
        MenuInfo::new("Copy")
            .icon("📋")
            .action(|| tracing::info!("selection copied"))
            .close_menu(true),
        MenuInfo::new("Highlight")
            .icon("🖍")
            .action(|| tracing::info!("selection highlighted")),
        MenuInfo::new("Search").icon("🔍").intent(ExternalAction::new("web-search")),
        MenuInfo::new("Translate").icon("🌐").intent(ExternalAction::new("translate")),
        MenuInfo::new("Share").icon("📤").intent(ExternalAction::new("share")),
        MenuInfo::new("Read aloud")
            .icon("🗣")
            .action(|| tracing::info!("reading selection aloud"))
            .close_menu(true),
        MenuInfo::new("Dismiss").icon("✕").close_menu(true),
    ]
}
