use crate::config::ConfigStore;
use crate::ui::mvi::Reducer;
use crate::ui::notice::Notice;
use crate::ui::surface::PanelGravity;
use crate::ui::toggles::intent::FastToggleIntent;
use crate::ui::toggles::model::ToggleItem;
use crate::ui::toggles::reducer::FastToggleReducer;
use crate::ui::toggles::state::FastToggleState;

/// Receives `needs_extra_action` after every successful flip.
pub type ResultHandler = Box<dyn FnMut(bool) + Send>;

/// What the panel does after a toggle was activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelDisposition {
    /// The host runs its extra action; the panel has closed.
    Dismiss,
    StayOpen,
}

pub struct FastTogglePanel {
    toggles: Vec<ToggleItem>,
    store: ConfigStore,
    gravity: PanelGravity,
    on_result: ResultHandler,
    state: FastToggleState,
}

impl FastTogglePanel {
    /// Open the panel with each toggle's current stored value.
    pub fn open(
        toggles: Vec<ToggleItem>,
        store: ConfigStore,
        gravity: PanelGravity,
        on_result: impl FnMut(bool) + Send + 'static,
    ) -> Self {
        let checked = toggles
            .iter()
            .map(|toggle| toggle.config.get(&store))
            .collect();
        let mut panel = Self {
            toggles,
            store,
            gravity,
            on_result: Box::new(on_result),
            state: FastToggleState::Hidden,
        };
        panel.dispatch(FastToggleIntent::Open { checked });
        panel
    }

    pub fn state(&self) -> &FastToggleState {
        &self.state
    }

    pub fn toggles(&self) -> &[ToggleItem] {
        &self.toggles
    }

    pub fn gravity(&self) -> PanelGravity {
        self.gravity
    }

    pub fn is_open(&self) -> bool {
        self.state.is_visible()
    }

    pub fn dispatch(&mut self, intent: FastToggleIntent) {
        self.state = FastToggleReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    pub fn activate_focused(&mut self) -> Option<PanelDisposition> {
        match self.state {
            FastToggleState::Visible { focused, .. } => self.activate(focused),
            FastToggleState::Hidden => None,
        }
    }

    /// Flip toggle `index` in the store, mirror it, then report to the
    /// host. A failed write reports nothing and keeps the panel open.
    ///
    /// Returns `None` when the panel is closed or `index` is out of range.
    pub fn activate(&mut self, index: usize) -> Option<PanelDisposition> {
        if !self.is_open() {
            return None;
        }
        let toggle = self.toggles.get(index)?;
        let (config, needs_extra_action) = (toggle.config, toggle.needs_extra_action);

        match config.toggle(&self.store) {
            Ok(checked) => {
                tracing::debug!(key = config.key(), checked, "quick toggle flipped");
                self.dispatch(FastToggleIntent::Flipped { index, checked });
                (self.on_result)(needs_extra_action);
                if needs_extra_action {
                    self.dispatch(FastToggleIntent::Close);
                    Some(PanelDisposition::Dismiss)
                } else {
                    Some(PanelDisposition::StayOpen)
                }
            }
            Err(err) => {
                tracing::warn!(key = config.key(), error = %err, "quick toggle not saved");
                self.dispatch(FastToggleIntent::Failed(Notice::error(format!(
                    "could not save setting: {err}"
                ))));
                Some(PanelDisposition::StayOpen)
            }
        }
    }

    pub fn move_up(&mut self) {
        self.dispatch(FastToggleIntent::MoveUp);
    }

    pub fn move_down(&mut self) {
        self.dispatch(FastToggleIntent::MoveDown);
    }

    /// Explicit dismissal; the only way a panel closes without an extra
    /// action.
    pub fn dismiss(&mut self) {
        self.dispatch(FastToggleIntent::Close);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ADBLOCK;
    use crate::ui::toggles::model::browser_toggles;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn seeds_from_store() {
        let store = ConfigStore::in_memory();
        ADBLOCK.set(&store, false).unwrap();
        let panel = FastTogglePanel::open(browser_toggles(), store, PanelGravity::Bottom, |_| {});
        assert_eq!(panel.state().is_checked(1), Some(false));
        assert_eq!(panel.state().is_checked(2), Some(true));
    }

    #[test]
    fn closed_panel_ignores_activation() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&calls);
        let mut panel = FastTogglePanel::open(
            browser_toggles(),
            ConfigStore::in_memory(),
            PanelGravity::Top,
            move |needs| seen.lock().push(needs),
        );
        panel.dismiss();
        assert_eq!(panel.activate(0), None);
        assert!(calls.lock().is_empty());
    }
}
