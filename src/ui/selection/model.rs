use std::fmt;

use crate::ui::catalog::ActionFn;

/// Request for another application to handle the selected text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalAction {
    /// Handler identifier, e.g. `"translate"` or `"share"`.
    pub target: String,
    pub text: Option<String>,
    pub read_only: bool,
}

impl ExternalAction {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            text: None,
            read_only: false,
        }
    }

    /// Attach the current selection as a read-only payload.
    pub fn with_selection(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self.read_only = true;
        self
    }
}

/// One cell of the selection menu.
#[derive(Clone, Default)]
pub struct MenuInfo {
    pub title: String,
    pub icon: Option<&'static str>,
    pub action: Option<ActionFn>,
    pub intent: Option<ExternalAction>,
    pub close_menu: bool,
}

impl MenuInfo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn action(mut self, action: impl Fn() + Send + Sync + 'static) -> Self {
        self.action = Some(std::sync::Arc::new(action));
        self
    }

    pub fn intent(mut self, intent: ExternalAction) -> Self {
        self.intent = Some(intent);
        self
    }

    pub fn close_menu(mut self, close_menu: bool) -> Self {
        self.close_menu = close_menu;
        self
    }

    /// Whether activating this item hands control back to the host.
    pub fn closes(&self) -> bool {
        self.intent.is_some() || self.close_menu
    }
}

impl fmt::Debug for MenuInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuInfo")
            .field("title", &self.title)
            .field("icon", &self.icon)
            .field("action", &self.action.is_some())
            .field("intent", &self.intent)
            .field("close_menu", &self.close_menu)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_decision_is_per_item() {
        assert!(!MenuInfo::new("Highlight").action(|| {}).closes());
        assert!(MenuInfo::new("Copy").action(|| {}).close_menu(true).closes());
        assert!(MenuInfo::new("Translate")
            .intent(ExternalAction::new("translate"))
            .closes());
    }

    #[test]
    fn selection_payload_is_read_only() {
        let action = ExternalAction::new("share").with_selection("hello");
        assert_eq!(action.text.as_deref(), Some("hello"));
        assert!(action.read_only);
    }
}
