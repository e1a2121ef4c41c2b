use crate::ui::mvi::Intent;
use crate::ui::notice::Notice;

#[derive(Debug, Clone)]
pub enum FastToggleIntent {
    Open { checked: Vec<bool> },
    Close,
    MoveUp,
    MoveDown,
    /// The store accepted the flip; mirror it.
    Flipped { index: usize, checked: bool },
    Failed(Notice),
}

impl Intent for FastToggleIntent {}
