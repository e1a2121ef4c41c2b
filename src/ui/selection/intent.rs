use crate::ui::catalog::FocusMove;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SelectionMenuIntent {
    Open { selected_text: String, len: usize },
    Close,
    Move(FocusMove),
}

impl Intent for SelectionMenuIntent {}
