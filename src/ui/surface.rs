//! What the panels need to know about the surface they are drawn on.

use crate::config::{ConfigStore, TOOLBAR_ON_TOP};

/// Terminal width from which the layout counts as "wide".
pub const WIDE_LAYOUT_MIN_COLUMNS: u16 = 100;

/// Edge a floating panel is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelGravity {
    Top,
    #[default]
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HostSurface {
    pub width: u16,
    pub wide: bool,
    pub gravity: PanelGravity,
}

impl HostSurface {
    /// Derive layout facts from the terminal width and the toolbar setting.
    pub fn from_terminal(width: u16, store: &ConfigStore) -> Self {
        let gravity = if TOOLBAR_ON_TOP.get(store) {
            PanelGravity::Top
        } else {
            PanelGravity::Bottom
        };
        Self {
            width,
            wide: width >= WIDE_LAYOUT_MIN_COLUMNS,
            gravity,
        }
    }
}
