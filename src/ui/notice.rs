//! Transient, dismissible message shown at the bottom of a panel.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::ui::theme::{STATUS_ERROR, STATUS_OK};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn line(&self) -> Line<'_> {
        let (prefix, color) = match self.level {
            NoticeLevel::Info => (" ✓ ", STATUS_OK),
            NoticeLevel::Error => (" ✗ ", STATUS_ERROR),
        };
        Line::from(vec![
            Span::styled(prefix, Style::default().fg(color)),
            Span::styled(self.message.as_str(), Style::default().fg(color)),
        ])
    }
}
