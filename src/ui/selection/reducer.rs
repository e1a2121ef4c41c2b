use crate::ui::catalog::FocusMove;
use crate::ui::mvi::Reducer;
use crate::ui::selection::intent::SelectionMenuIntent;
use crate::ui::selection::metrics::MENU_COLUMNS;
use crate::ui::selection::state::SelectionMenuState;

pub struct SelectionMenuReducer;

impl Reducer for SelectionMenuReducer {
    type State = SelectionMenuState;
    type Intent = SelectionMenuIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SelectionMenuIntent::Open { selected_text, len } => SelectionMenuState::Visible {
                selected_text,
                focused: 0,
                len,
            },
            SelectionMenuIntent::Close => SelectionMenuState::Hidden,
            SelectionMenuIntent::Move(direction) => match state {
                SelectionMenuState::Visible {
                    selected_text,
                    focused,
                    len,
                } => {
                    // Left/Right stay within the current row.
                    let column = focused % MENU_COLUMNS;
                    let target = match direction {
                        FocusMove::Left => (column > 0).then(|| focused - 1),
                        FocusMove::Right => (column + 1 < MENU_COLUMNS).then_some(focused + 1),
                        FocusMove::Up => focused.checked_sub(MENU_COLUMNS),
                        FocusMove::Down => Some(focused + MENU_COLUMNS),
                    };
                    SelectionMenuState::Visible {
                        selected_text,
                        focused: target.filter(|&index| index < len).unwrap_or(focused),
                        len,
                    }
                }
                other => other,
            },
        }
    }
}
