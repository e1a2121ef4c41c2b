use crate::ui::catalog::intent::CatalogIntent;
use crate::ui::catalog::state::{CatalogState, ItemDisplay};
use crate::ui::mvi::Reducer;

pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Intent = CatalogIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CatalogIntent::Mount { slots, columns } => CatalogState {
                slots,
                focused: 0,
                columns,
                notice: None,
            },
            CatalogIntent::Resize { columns } => CatalogState { columns, ..state },
            CatalogIntent::Focus { index } => {
                if index < state.slots.len() {
                    state.focused = index;
                }
                state
            }
            CatalogIntent::Toggled { index, checked } => {
                if let Some(slot) = state.slots.get_mut(index) {
                    slot.display = ItemDisplay::Checked(checked);
                }
                state
            }
            CatalogIntent::EditStarted { index } => {
                if let Some(slot) = state.slots.get_mut(index) {
                    slot.pending = true;
                }
                state
            }
            CatalogIntent::EditCancelled { index } => {
                if let Some(slot) = state.slots.get_mut(index) {
                    slot.pending = false;
                }
                state
            }
            CatalogIntent::ValueCommitted { index, value } => {
                if let Some(slot) = state.slots.get_mut(index) {
                    slot.pending = false;
                    slot.display = ItemDisplay::Value(value);
                }
                state
            }
            CatalogIntent::EditRejected { index, notice } => {
                if let Some(slot) = state.slots.get_mut(index) {
                    slot.pending = false;
                }
                state.notice = Some(notice);
                state
            }
            CatalogIntent::ShowNotice(notice) => CatalogState {
                notice: Some(notice),
                ..state
            },
            CatalogIntent::DismissNotice => CatalogState {
                notice: None,
                ..state
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::catalog::state::ItemSlot;
    use crate::ui::notice::Notice;

    fn mounted() -> CatalogState {
        CatalogReducer::reduce(
            CatalogState::default(),
            CatalogIntent::Mount {
                slots: vec![
                    ItemSlot::new(ItemDisplay::Checked(false)),
                    ItemSlot::new(ItemDisplay::Value("30".into())),
                ],
                columns: 1,
            },
        )
    }

    #[test]
    fn mount_resets_focus_and_notice() {
        let state = mounted();
        assert_eq!(state.focused, 0);
        assert_eq!(state.columns, 1);
        assert!(state.notice.is_none());
    }

    #[test]
    fn focus_out_of_range_is_ignored() {
        let state = CatalogReducer::reduce(mounted(), CatalogIntent::Focus { index: 5 });
        assert_eq!(state.focused, 0);
        let state = CatalogReducer::reduce(state, CatalogIntent::Focus { index: 1 });
        assert_eq!(state.focused, 1);
    }

    #[test]
    fn cancel_keeps_value() {
        let state = CatalogReducer::reduce(mounted(), CatalogIntent::EditStarted { index: 1 });
        assert!(state.is_pending(1));
        let state = CatalogReducer::reduce(state, CatalogIntent::EditCancelled { index: 1 });
        assert!(!state.is_pending(1));
        assert_eq!(state.display(1), Some(&ItemDisplay::Value("30".into())));
    }

    #[test]
    fn rejection_keeps_value_and_shows_notice() {
        let state = CatalogReducer::reduce(mounted(), CatalogIntent::EditStarted { index: 1 });
        let state = CatalogReducer::reduce(
            state,
            CatalogIntent::EditRejected {
                index: 1,
                notice: Notice::error("'abc' is not a valid integer value"),
            },
        );
        assert_eq!(state.display(1), Some(&ItemDisplay::Value("30".into())));
        assert!(state.notice.is_some());
        let state = CatalogReducer::reduce(state, CatalogIntent::DismissNotice);
        assert!(state.notice.is_none());
    }

    #[test]
    fn commit_replaces_value() {
        let state = CatalogReducer::reduce(
            mounted(),
            CatalogIntent::ValueCommitted {
                index: 1,
                value: "45".into(),
            },
        );
        assert_eq!(state.display(1), Some(&ItemDisplay::Value("45".into())));
    }
}
