use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, Screen};
use crate::ui::catalog::FocusMove;
use crate::ui::selection::MenuOutcome;
use crate::ui::toggles::PanelDisposition;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }
    if app.modal_mut().handle_key(key) {
        return;
    }
    if key.code == KeyCode::Esc && app.dismiss_status() {
        return;
    }

    match app.top_mut() {
        None => app.request_quit(),
        Some(Screen::Catalog { controller, .. }) => {
            if let Some(direction) = focus_move(key.code) {
                controller.move_focus(direction);
                return;
            }
            match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    let activation = controller.activate_focused();
                    app.on_activation(activation);
                }
                KeyCode::Esc if controller.state().notice.is_some() => {
                    controller.dismiss_notice();
                }
                KeyCode::Esc => app.pop_screen(),
                KeyCode::Char('t') => app.open_toggles(),
                KeyCode::Char('q') => app.request_quit(),
                _ => {}
            }
        }
        Some(Screen::Toggles(panel)) => match key.code {
            KeyCode::Up => panel.move_up(),
            KeyCode::Down => panel.move_down(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if panel.activate_focused() == Some(PanelDisposition::Dismiss) {
                    app.pop_screen();
                }
            }
            KeyCode::Esc | KeyCode::Char('q') => {
                panel.dismiss();
                app.pop_screen();
            }
            _ => {}
        },
        Some(Screen::Selection(menu)) => {
            if let Some(direction) = focus_move(key.code) {
                menu.move_focus(direction);
                return;
            }
            match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if menu.activate_focused() == Some(MenuOutcome::Closed) {
                        app.pop_screen();
                    }
                }
                KeyCode::Esc | KeyCode::Char('q') => {
                    menu.dismiss();
                    app.pop_screen();
                }
                _ => {}
            }
        }
    }
}

fn focus_move(code: KeyCode) -> Option<FocusMove> {
    match code {
        KeyCode::Up => Some(FocusMove::Up),
        KeyCode::Down => Some(FocusMove::Down),
        KeyCode::Left => Some(FocusMove::Left),
        KeyCode::Right => Some(FocusMove::Right),
        _ => None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
