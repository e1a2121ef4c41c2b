use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::layout::centered_rect_by_size;
use crate::ui::selection::menu::SelectionMenu;
use crate::ui::selection::metrics::{caption_lines, CAPTION_LINES, MENU_COLUMNS};
use crate::ui::selection::state::SelectionMenuState;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, MUTED_TEXT, POPUP_BORDER, TEXT};

/// Icon row plus caption.
const CELL_HEIGHT: u16 = 1 + CAPTION_LINES as u16;

pub fn render_selection_menu(frame: &mut Frame, area: Rect, menu: &SelectionMenu) {
    let SelectionMenuState::Visible {
        selected_text,
        focused,
        ..
    } = menu.state()
    else {
        return;
    };
    let metrics = menu.metrics();
    let rows = menu.items().len().div_ceil(MENU_COLUMNS) as u16;
    let height = rows * CELL_HEIGHT + 2;
    let rect = centered_rect_by_size(area, metrics.menu_width(), height);

    frame.render_widget(Clear, rect);
    let block = Block::default()
        .title(format!(" “{}” ", preview(selected_text, 24)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    for (index, item) in menu.items().iter().enumerate() {
        let row = (index / MENU_COLUMNS) as u16;
        let column = (index % MENU_COLUMNS) as u16;
        let cell = Rect {
            x: inner.x + column * metrics.cell_width,
            y: inner.y + row * CELL_HEIGHT,
            width: metrics.cell_width,
            height: CELL_HEIGHT,
        }
        .intersection(inner);
        if cell.is_empty() {
            continue;
        }

        let mut lines = vec![Line::from(item.icon.unwrap_or("·"))];
        lines.extend(
            caption_lines(&item.title, usize::from(metrics.cell_width.saturating_sub(2)))
                .into_iter()
                .map(|caption| Line::from(Span::styled(caption, Style::default().fg(TEXT)))),
        );
        let mut style = Style::default().fg(MUTED_TEXT);
        if index == *focused {
            style = style.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD);
        }
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .style(style),
            cell,
        );
    }
}

fn preview(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}
