use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::catalog::controller::CatalogController;
use crate::ui::catalog::grid::GridCell;
use crate::ui::catalog::state::ItemDisplay;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, MUTED_TEXT, SEPARATOR, TEXT};

/// Title plus summary line.
const ITEM_LINES: u16 = 2;

pub fn render_catalog(frame: &mut Frame, area: Rect, title: &str, controller: &CatalogController) {
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(SEPARATOR));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [grid_area, footer_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

    render_grid(frame, grid_area, controller);

    let footer = match &controller.state().notice {
        Some(notice) => notice.line(),
        None => Line::from(Span::styled(
            " Arrows: Move  Enter: Select  t: Toggles  Esc: Back  q: Quit",
            Style::default().fg(MUTED_TEXT),
        )),
    };
    frame.render_widget(Paragraph::new(footer), footer_area);
}

fn render_grid(frame: &mut Frame, area: Rect, controller: &CatalogController) {
    let cells = controller.cells();
    let Some(focused) = cells.get(controller.state().focused) else {
        return;
    };
    let bordered = controller.show_border();
    let row_height = if bordered { ITEM_LINES + 2 } else { ITEM_LINES };
    let visible_rows = usize::from((area.height / row_height).max(1));
    let first_row = (focused.row + 1).saturating_sub(visible_rows);
    let column_width = area.width / controller.columns().max(1);

    for cell in cells {
        if cell.row < first_row || cell.row >= first_row + visible_rows {
            continue;
        }
        let rect = cell_rect(area, cell, first_row, row_height, column_width, controller.columns());
        render_item(frame, rect, controller, cell.index, bordered);
    }
}

fn cell_rect(
    area: Rect,
    cell: &GridCell,
    first_row: usize,
    row_height: u16,
    column_width: u16,
    columns: u16,
) -> Rect {
    let x = area.x + cell.column * column_width;
    // The rightmost cell absorbs the division remainder.
    let width = if cell.column + cell.span >= columns {
        area.x + area.width - x
    } else {
        cell.span * column_width
    };
    let y = area.y + (cell.row - first_row) as u16 * row_height;
    Rect {
        x,
        y,
        width,
        height: row_height.min(area.y + area.height - y),
    }
}

fn render_item(
    frame: &mut Frame,
    rect: Rect,
    controller: &CatalogController,
    index: usize,
    bordered: bool,
) {
    let (Some(item), Some(display), Some(title)) = (
        controller.items().get(index),
        controller.state().display(index),
        controller.title_text(index),
    ) else {
        return;
    };
    let header = item.header();
    let focused = controller.state().focused == index;
    let checked = matches!(display, ItemDisplay::Checked(true));

    let mut title_spans = vec![Span::raw(format!("{} ", header.icon))];
    if let ItemDisplay::Checked(on) = display {
        let glyph = if *on { "☑ " } else { "☐ " };
        title_spans.push(Span::styled(glyph, Style::default().fg(ACCENT)));
    }
    title_spans.push(Span::styled(title, Style::default().fg(TEXT)));
    if controller.state().is_pending(index) {
        title_spans.push(Span::styled(" …", Style::default().fg(MUTED_TEXT)));
    }

    let mut lines = vec![Line::from(title_spans)];
    if let Some(summary) = header.summary {
        lines.push(Line::from(Span::styled(
            format!("  {summary}"),
            Style::default().fg(MUTED_TEXT),
        )));
    }

    let mut paragraph = Paragraph::new(lines);
    if focused {
        paragraph = paragraph.style(
            Style::default()
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        );
    }
    if bordered {
        let (border_type, color) = if focused || checked {
            (BorderType::Thick, ACCENT)
        } else {
            (BorderType::Plain, SEPARATOR)
        };
        paragraph = paragraph.block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(Style::default().fg(color)),
        );
    }
    frame.render_widget(paragraph, rect);
}
