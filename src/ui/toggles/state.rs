use crate::ui::mvi::UiState;
use crate::ui::notice::Notice;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FastToggleState {
    #[default]
    Hidden,
    Visible {
        /// Checked state per toggle, seeded once when the panel opens.
        checked: Vec<bool>,
        focused: usize,
        notice: Option<Notice>,
    },
}

impl UiState for FastToggleState {}

impl FastToggleState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn is_checked(&self, index: usize) -> Option<bool> {
        match self {
            Self::Visible { checked, .. } => checked.get(index).copied(),
            Self::Hidden => None,
        }
    }
}
