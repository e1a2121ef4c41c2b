use crate::ui::mvi::Reducer;
use crate::ui::toggles::intent::FastToggleIntent;
use crate::ui::toggles::state::FastToggleState;

pub struct FastToggleReducer;

impl Reducer for FastToggleReducer {
    type State = FastToggleState;
    type Intent = FastToggleIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FastToggleIntent::Open { checked } => FastToggleState::Visible {
                checked,
                focused: 0,
                notice: None,
            },
            FastToggleIntent::Close => FastToggleState::Hidden,
            FastToggleIntent::MoveUp => match state {
                FastToggleState::Visible {
                    checked, focused, ..
                } => {
                    let focused = if focused == 0 {
                        checked.len().saturating_sub(1)
                    } else {
                        focused - 1
                    };
                    FastToggleState::Visible {
                        checked,
                        focused,
                        notice: None,
                    }
                }
                other => other,
            },
            FastToggleIntent::MoveDown => match state {
                FastToggleState::Visible {
                    checked, focused, ..
                } => {
                    let focused = if focused + 1 >= checked.len() {
                        0
                    } else {
                        focused + 1
                    };
                    FastToggleState::Visible {
                        checked,
                        focused,
                        notice: None,
                    }
                }
                other => other,
            },
            FastToggleIntent::Flipped { index, checked: value } => match state {
                FastToggleState::Visible {
                    mut checked,
                    focused,
                    ..
                } => {
                    if let Some(slot) = checked.get_mut(index) {
                        *slot = value;
                    }
                    FastToggleState::Visible {
                        checked,
                        focused,
                        notice: None,
                    }
                }
                other => other,
            },
            FastToggleIntent::Failed(notice) => match state {
                FastToggleState::Visible {
                    checked, focused, ..
                } => FastToggleState::Visible {
                    checked,
                    focused,
                    notice: Some(notice),
                },
                other => other,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notice::Notice;

    fn open() -> FastToggleState {
        FastToggleReducer::reduce(
            FastToggleState::Hidden,
            FastToggleIntent::Open {
                checked: vec![false, true, false],
            },
        )
    }

    #[test]
    fn focus_wraps_both_ways() {
        let state = FastToggleReducer::reduce(open(), FastToggleIntent::MoveUp);
        assert!(matches!(state, FastToggleState::Visible { focused: 2, .. }));
        let state = FastToggleReducer::reduce(state, FastToggleIntent::MoveDown);
        assert!(matches!(state, FastToggleState::Visible { focused: 0, .. }));
    }

    #[test]
    fn flip_mirrors_value_and_clears_notice() {
        let state = FastToggleReducer::reduce(
            open(),
            FastToggleIntent::Failed(Notice::error("disk full")),
        );
        let state = FastToggleReducer::reduce(
            state,
            FastToggleIntent::Flipped {
                index: 0,
                checked: true,
            },
        );
        assert_eq!(state.is_checked(0), Some(true));
        assert!(matches!(state, FastToggleState::Visible { notice: None, .. }));
    }

    #[test]
    fn hidden_ignores_everything_but_open() {
        let state = FastToggleReducer::reduce(
            FastToggleState::Hidden,
            FastToggleIntent::Flipped {
                index: 0,
                checked: true,
            },
        );
        assert_eq!(state, FastToggleState::Hidden);
    }
}
