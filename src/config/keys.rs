//! Well-known browser settings.
//!
//! The `key()` of each handle is the TOML key in the settings file. Once
//! shipped, do not rename.

use crate::config::handles::BooleanConfig;
use crate::config::types::ValueKind;

pub const INCOGNITO_MODE: BooleanConfig = BooleanConfig::new("incognito_mode", false);
pub const ADBLOCK: BooleanConfig = BooleanConfig::new("adblock", true);
pub const JAVASCRIPT: BooleanConfig = BooleanConfig::new("javascript", true);
pub const COOKIES: BooleanConfig = BooleanConfig::new("cookies", true);
pub const SAVE_HISTORY: BooleanConfig = BooleanConfig::new("save_history", true);
pub const SHARE_LOCATION: BooleanConfig = BooleanConfig::new("share_location", false);
pub const VOLUME_PAGE_TURN: BooleanConfig = BooleanConfig::new("volume_page_turn", true);
pub const CONTINUE_MEDIA: BooleanConfig = BooleanConfig::new("continue_media", false);
pub const DESKTOP_MODE: BooleanConfig = BooleanConfig::new("desktop_mode", false);
/// Toolbar placement; also decides where the quick-toggle panel is anchored.
pub const TOOLBAR_ON_TOP: BooleanConfig = BooleanConfig::new("toolbar_on_top", false);

const WELL_KNOWN_BOOLEANS: &[BooleanConfig] = &[
    INCOGNITO_MODE,
    ADBLOCK,
    JAVASCRIPT,
    COOKIES,
    SAVE_HISTORY,
    SHARE_LOCATION,
    VOLUME_PAGE_TURN,
    CONTINUE_MEDIA,
    DESKTOP_MODE,
    TOOLBAR_ON_TOP,
];

/// Expected representation for a well-known key, `None` for anything else.
pub fn well_known_kind(key: &str) -> Option<ValueKind> {
    WELL_KNOWN_BOOLEANS
        .iter()
        .any(|config| config.key() == key)
        .then_some(ValueKind::Bool)
}
