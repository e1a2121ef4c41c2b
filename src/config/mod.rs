mod handles;
mod keys;
mod loader;
mod store;
mod types;

pub use handles::{
    BooleanConfig, CoercionError, EnumConfig, EnumSetting, SelectError, SettingEnum,
    SettingValue, StringListConfig, ValueConfig,
};
pub use keys::{
    well_known_kind, ADBLOCK, CONTINUE_MEDIA, COOKIES, DESKTOP_MODE, INCOGNITO_MODE, JAVASCRIPT,
    SAVE_HISTORY, SHARE_LOCATION, TOOLBAR_ON_TOP, VOLUME_PAGE_TURN,
};
pub use loader::ConfigError;
pub use store::{ConfigStore, InMemory, SettingsPersistence, TomlFile};
pub use types::{ConfigValue, SettingsDocument, ValueKind};
