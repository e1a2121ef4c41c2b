use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::layout::centered_rect_by_size;
use crate::ui::modal::state::ModalState;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, MUTED_TEXT, POPUP_BORDER, TEXT};

const DIALOG_WIDTH: u16 = 48;

pub fn render_modal(frame: &mut Frame, state: &ModalState) {
    let (title, lines) = match state {
        ModalState::Hidden => return,
        ModalState::TextInput {
            title,
            help,
            buffer,
        } => (title, text_input_lines(help.as_deref(), buffer)),
        ModalState::Choice {
            title,
            options,
            selected,
        } => (title, choice_lines(options, *selected)),
    };

    let height = lines.len() as u16 + 2;
    let area = centered_rect_by_size(frame.area(), DIALOG_WIDTH, height);

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn text_input_lines<'a>(help: Option<&'a str>, buffer: &'a str) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    if let Some(help) = help {
        lines.push(Line::from(Span::styled(help, Style::default().fg(MUTED_TEXT))));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(vec![
        Span::styled("> ", Style::default().fg(ACCENT)),
        Span::styled(buffer, Style::default().fg(TEXT)),
        Span::styled("█", Style::default().fg(ACCENT)),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter: OK  Esc: Cancel",
        Style::default().fg(MUTED_TEXT),
    )));
    lines
}

fn choice_lines(options: &[String], selected: usize) -> Vec<Line<'_>> {
    let mut lines: Vec<Line> = options
        .iter()
        .enumerate()
        .map(|(idx, option)| {
            let marker = if idx == selected { "(•) " } else { "( ) " };
            let line = Line::from(vec![
                Span::styled(marker, Style::default().fg(ACCENT)),
                Span::styled(option.as_str(), Style::default().fg(TEXT)),
            ]);
            if idx == selected {
                line.style(
                    Style::default()
                        .bg(ACTIVE_HIGHLIGHT)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                line
            }
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Up/Down: Move  Enter: OK  Esc: Cancel",
        Style::default().fg(MUTED_TEXT),
    )));
    lines
}
