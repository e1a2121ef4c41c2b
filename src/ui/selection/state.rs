use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionMenuState {
    #[default]
    Hidden,
    Visible {
        selected_text: String,
        focused: usize,
        len: usize,
    },
}

impl UiState for SelectionMenuState {}

impl SelectionMenuState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}
