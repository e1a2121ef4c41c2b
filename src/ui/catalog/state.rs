use crate::ui::mvi::UiState;
use crate::ui::notice::Notice;

/// What an item shows next to its title.
///
/// Seeded from the settings store when the catalog mounts and afterwards
/// changed only by the catalog's own event handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemDisplay {
    /// Title only (actions, links, navigation).
    Plain,
    Checked(bool),
    /// Rendered as `Title: value`.
    Value(String),
    /// Rendered as `Title vX.Y.Z`.
    Version(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSlot {
    pub display: ItemDisplay,
    /// A prompt for this item is open or queued.
    pub pending: bool,
}

impl ItemSlot {
    pub fn new(display: ItemDisplay) -> Self {
        Self {
            display,
            pending: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogState {
    pub slots: Vec<ItemSlot>,
    pub focused: usize,
    pub columns: u16,
    pub notice: Option<Notice>,
}

impl UiState for CatalogState {}

impl CatalogState {
    pub fn display(&self, index: usize) -> Option<&ItemDisplay> {
        self.slots.get(index).map(|slot| &slot.display)
    }

    pub fn is_pending(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(|slot| slot.pending)
    }
}
