use crate::config::{
    BooleanConfig, ADBLOCK, CONTINUE_MEDIA, COOKIES, DESKTOP_MODE, INCOGNITO_MODE, JAVASCRIPT,
    SAVE_HISTORY, SHARE_LOCATION, VOLUME_PAGE_TURN,
};

/// Which side of the separator a toggle is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleGroup {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleItem {
    pub config: BooleanConfig,
    pub title: &'static str,
    pub icon: &'static str,
    /// Reported to the host after the flip; `true` asks it to apply the
    /// change to the live page and close the panel.
    pub needs_extra_action: bool,
    pub group: ToggleGroup,
}

impl ToggleItem {
    const fn new(
        config: BooleanConfig,
        title: &'static str,
        icon: &'static str,
        needs_extra_action: bool,
        group: ToggleGroup,
    ) -> Self {
        Self {
            config,
            title,
            icon,
            needs_extra_action,
            group,
        }
    }
}

/// The quick-toggle panel's fixed contents, in display order.
pub fn browser_toggles() -> Vec<ToggleItem> {
    use ToggleGroup::{Primary, Secondary};
    vec![
        ToggleItem::new(INCOGNITO_MODE, "Incognito", "🕶", true, Primary),
        ToggleItem::new(ADBLOCK, "Ad block", "⛔", true, Primary),
        ToggleItem::new(JAVASCRIPT, "JavaScript", "📜", true, Primary),
        ToggleItem::new(COOKIES, "Cookies", "🍪", true, Primary),
        // Takes effect on the next visit; nothing to reload.
        ToggleItem::new(SAVE_HISTORY, "History", "🕘", false, Primary),
        ToggleItem::new(SHARE_LOCATION, "Location", "📍", false, Secondary),
        ToggleItem::new(VOLUME_PAGE_TURN, "Volume page turn", "🔊", false, Secondary),
        ToggleItem::new(CONTINUE_MEDIA, "Continue media", "🎵", false, Secondary),
        ToggleItem::new(DESKTOP_MODE, "Desktop mode", "🖥", false, Secondary),
    ]
}

/// Index before which the group separator is drawn, if the list changes
/// group anywhere.
pub fn separator_before(toggles: &[ToggleItem]) -> Option<usize> {
    toggles
        .windows(2)
        .position(|pair| pair[0].group != pair[1].group)
        .map(|index| index + 1)
}
