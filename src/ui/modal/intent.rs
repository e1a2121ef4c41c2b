use crate::ui::modal::service::{ChoiceRequest, TextInputRequest};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ModalIntent {
    OpenText(TextInputRequest),
    OpenChoice(ChoiceRequest),
    Insert(char),
    Backspace,
    /// Ctrl+U: wipe the text buffer.
    ClearInput,
    MoveUp,
    MoveDown,
    Close,
}

impl Intent for ModalIntent {}
