use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Hidden,
    TextInput {
        title: String,
        help: Option<String>,
        buffer: String,
    },
    Choice {
        title: String,
        options: Vec<String>,
        selected: usize,
    },
}

impl UiState for ModalState {}

impl ModalState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}
