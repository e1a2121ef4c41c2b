use crate::ui::modal::intent::ModalIntent;
use crate::ui::modal::state::ModalState;
use crate::ui::mvi::Reducer;

pub struct ModalReducer;

impl Reducer for ModalReducer {
    type State = ModalState;
    type Intent = ModalIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ModalIntent::OpenText(request) => ModalState::TextInput {
                title: request.title,
                help: request.help,
                buffer: request.initial,
            },
            ModalIntent::OpenChoice(request) => {
                let selected = request.initial.min(request.options.len().saturating_sub(1));
                ModalState::Choice {
                    title: request.title,
                    options: request.options,
                    selected,
                }
            }
            ModalIntent::Close => ModalState::Hidden,
            ModalIntent::Insert(ch) => match state {
                ModalState::TextInput {
                    title,
                    help,
                    mut buffer,
                } => {
                    buffer.push(ch);
                    ModalState::TextInput {
                        title,
                        help,
                        buffer,
                    }
                }
                other => other,
            },
            ModalIntent::Backspace => match state {
                ModalState::TextInput {
                    title,
                    help,
                    mut buffer,
                } => {
                    buffer.pop();
                    ModalState::TextInput {
                        title,
                        help,
                        buffer,
                    }
                }
                other => other,
            },
            ModalIntent::ClearInput => match state {
                ModalState::TextInput { title, help, .. } => ModalState::TextInput {
                    title,
                    help,
                    buffer: String::new(),
                },
                other => other,
            },
            ModalIntent::MoveUp => match state {
                ModalState::Choice {
                    title,
                    options,
                    selected,
                } => {
                    let selected = if selected == 0 {
                        options.len().saturating_sub(1)
                    } else {
                        selected - 1
                    };
                    ModalState::Choice {
                        title,
                        options,
                        selected,
                    }
                }
                other => other,
            },
            ModalIntent::MoveDown => match state {
                ModalState::Choice {
                    title,
                    options,
                    selected,
                } => {
                    let selected = if selected + 1 >= options.len() {
                        0
                    } else {
                        selected + 1
                    };
                    ModalState::Choice {
                        title,
                        options,
                        selected,
                    }
                }
                other => other,
            },
        }
    }
}
