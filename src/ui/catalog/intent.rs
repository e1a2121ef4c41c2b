use crate::ui::catalog::state::ItemSlot;
use crate::ui::mvi::Intent;
use crate::ui::notice::Notice;

#[derive(Debug, Clone)]
pub enum CatalogIntent {
    Mount { slots: Vec<ItemSlot>, columns: u16 },
    Resize { columns: u16 },
    Focus { index: usize },
    /// The boolean at `index` was persisted as `checked`.
    Toggled { index: usize, checked: bool },
    EditStarted { index: usize },
    EditCancelled { index: usize },
    /// The edit at `index` was persisted; show `value` from now on.
    ValueCommitted { index: usize, value: String },
    EditRejected { index: usize, notice: Notice },
    ShowNotice(Notice),
    DismissNotice,
}

impl Intent for CatalogIntent {}
