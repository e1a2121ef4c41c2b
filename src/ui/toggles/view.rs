use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::layout::anchored_rect;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, MUTED_TEXT, POPUP_BORDER, SEPARATOR, TEXT};
use crate::ui::toggles::model::separator_before;
use crate::ui::toggles::panel::FastTogglePanel;
use crate::ui::toggles::state::FastToggleState;

const PANEL_WIDTH: u16 = 34;

pub fn render_fast_toggles(frame: &mut Frame, area: Rect, panel: &FastTogglePanel) {
    let FastToggleState::Visible {
        checked,
        focused,
        notice,
    } = panel.state()
    else {
        return;
    };
    let separator = separator_before(panel.toggles());
    let rule = "─".repeat(usize::from(PANEL_WIDTH.saturating_sub(2)));

    let mut lines = Vec::with_capacity(panel.toggles().len() + 3);
    for (index, toggle) in panel.toggles().iter().enumerate() {
        if separator == Some(index) {
            lines.push(Line::from(Span::styled(
                rule.clone(),
                Style::default().fg(SEPARATOR),
            )));
        }
        let mark = if checked.get(index).copied().unwrap_or(false) {
            "[x] "
        } else {
            "[ ] "
        };
        let line = Line::from(vec![
            Span::styled(mark, Style::default().fg(ACCENT)),
            Span::raw(format!("{} ", toggle.icon)),
            Span::styled(toggle.title, Style::default().fg(TEXT)),
        ]);
        lines.push(if index == *focused {
            line.style(
                Style::default()
                    .bg(ACTIVE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            line
        });
    }
    lines.push(match notice {
        Some(notice) => notice.line(),
        None => Line::from(Span::styled(
            "Enter: Toggle  Esc: Close",
            Style::default().fg(MUTED_TEXT),
        )),
    });

    let height = lines.len() as u16 + 2;
    let rect = anchored_rect(area, PANEL_WIDTH, height, panel.gravity());
    frame.render_widget(Clear, rect);
    let block = Block::default()
        .title(" Quick toggles ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}
