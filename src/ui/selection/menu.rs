use crate::ui::catalog::FocusMove;
use crate::ui::mvi::Reducer;
use crate::ui::selection::intent::SelectionMenuIntent;
use crate::ui::selection::metrics::MenuMetrics;
use crate::ui::selection::model::{ExternalAction, MenuInfo};
use crate::ui::selection::reducer::SelectionMenuReducer;
use crate::ui::selection::state::SelectionMenuState;
use crate::ui::surface::HostSurface;

/// Receives the external action (if any) of an item that closes the menu.
pub type ExternalDispatch = Box<dyn FnMut(Option<ExternalAction>) + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    StayOpen,
    Closed,
}

pub struct SelectionMenu {
    items: Vec<MenuInfo>,
    metrics: MenuMetrics,
    on_dispatch: ExternalDispatch,
    state: SelectionMenuState,
}

impl SelectionMenu {
    pub fn open(
        items: Vec<MenuInfo>,
        selected_text: impl Into<String>,
        surface: &HostSurface,
        on_dispatch: impl FnMut(Option<ExternalAction>) + Send + 'static,
    ) -> Self {
        let len = items.len();
        let mut menu = Self {
            items,
            metrics: MenuMetrics::for_surface(surface),
            on_dispatch: Box::new(on_dispatch),
            state: SelectionMenuState::Hidden,
        };
        menu.dispatch(SelectionMenuIntent::Open {
            selected_text: selected_text.into(),
            len,
        });
        menu
    }

    pub fn state(&self) -> &SelectionMenuState {
        &self.state
    }

    pub fn items(&self) -> &[MenuInfo] {
        &self.items
    }

    pub fn metrics(&self) -> MenuMetrics {
        self.metrics
    }

    pub fn is_open(&self) -> bool {
        self.state.is_visible()
    }

    pub fn dispatch(&mut self, intent: SelectionMenuIntent) {
        self.state = SelectionMenuReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    pub fn move_focus(&mut self, direction: FocusMove) {
        self.dispatch(SelectionMenuIntent::Move(direction));
    }

    pub fn activate_focused(&mut self) -> Option<MenuOutcome> {
        match self.state {
            SelectionMenuState::Visible { focused, .. } => self.activate(focused),
            SelectionMenuState::Hidden => None,
        }
    }

    /// Run the item's callback, then hand its external action to the host
    /// and close if the item asks for it. `None` once the menu is closed.
    pub fn activate(&mut self, index: usize) -> Option<MenuOutcome> {
        let SelectionMenuState::Visible { selected_text, .. } = &self.state else {
            return None;
        };
        let item = self.items.get(index)?;

        if let Some(action) = &item.action {
            action();
        }
        if !item.closes() {
            return Some(MenuOutcome::StayOpen);
        }

        let intent = item
            .intent
            .clone()
            .map(|intent| intent.with_selection(selected_text));
        tracing::debug!(
            title = %item.title,
            target = ?intent.as_ref().map(|i| &i.target),
            "selection menu closing"
        );
        (self.on_dispatch)(intent);
        self.dispatch(SelectionMenuIntent::Close);
        Some(MenuOutcome::Closed)
    }

    pub fn dismiss(&mut self) {
        self.dispatch(SelectionMenuIntent::Close);
    }
}
