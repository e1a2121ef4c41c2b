use ratatui::layout::{Constraint, Layout};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::app::{App, Screen};
use crate::ui::catalog::render_catalog;
use crate::ui::modal::render_modal;
use crate::ui::selection::render_selection_menu;
use crate::ui::theme::{MUTED_TEXT, SEPARATOR, TEXT};
use crate::ui::toggles::render_fast_toggles;

const PAGE_PLACEHOLDER: &str = "The quick brown fox jumps over the lazy dog. \
Select text or open the quick toggles to change how this page is shown.";

pub fn draw(frame: &mut Frame, app: &App) {
    let [body, status] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

    // Overlays float over the nearest catalog, or over the page.
    let underneath = app.screens().iter().rev().find_map(|screen| match screen {
        Screen::Catalog { title, controller } => Some((title, controller)),
        _ => None,
    });
    match underneath {
        Some((title, controller)) => render_catalog(frame, body, title, controller),
        None => {
            let page = Paragraph::new(Line::from(Span::styled(
                PAGE_PLACEHOLDER,
                Style::default().fg(TEXT),
            )))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(SEPARATOR)),
            );
            frame.render_widget(page, body);
        }
    }

    match app.screens().last() {
        Some(Screen::Toggles(panel)) => render_fast_toggles(frame, body, panel),
        Some(Screen::Selection(menu)) => render_selection_menu(frame, body, menu),
        Some(Screen::Catalog { .. }) | None => {}
    }

    let status_line = match app.status() {
        Some(notice) => notice.line(),
        None => Line::from(Span::styled(
            format!(" inkbro {}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(MUTED_TEXT),
        )),
    };
    frame.render_widget(Paragraph::new(status_line), status);

    render_modal(frame, app.modal().state());
}
