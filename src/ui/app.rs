use std::sync::Arc;

use tokio::sync::mpsc;

use crate::catalogs::{self, SETTINGS};
use crate::config::ConfigStore;
use crate::ui::catalog::{
    Activation, CatalogController, CatalogError, CatalogOptions, EditCompletion, Route,
};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::modal::{modal_channel, ModalQueue, ModalRequest, ModalService};
use crate::ui::notice::Notice;
use crate::ui::selection::{ExternalAction, SelectionMenu};
use crate::ui::surface::HostSurface;
use crate::ui::toggles::{browser_toggles, FastTogglePanel};

/// Screen the binary opens with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchScreen {
    Catalog,
    Toggles,
    Selection { text: String },
}

/// Callbacks from panels to the embedding browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    LinkOpened(String),
    /// A quick toggle was flipped; `true` means it must be applied to the
    /// current page.
    ToggleResult(bool),
    External(Option<ExternalAction>),
}

pub enum Screen {
    Catalog {
        title: &'static str,
        controller: CatalogController,
    },
    Toggles(FastTogglePanel),
    Selection(SelectionMenu),
}

/// One turn of the event loop.
pub enum Step {
    Input(Option<AppEvent>),
    Edit(EditCompletion),
    Prompt(ModalRequest),
    Host(HostEvent),
}

pub struct App {
    store: ConfigStore,
    modal_client: Arc<dyn ModalService>,
    modal: ModalQueue,
    screens: Vec<Screen>,
    host_tx: mpsc::UnboundedSender<HostEvent>,
    host_rx: mpsc::UnboundedReceiver<HostEvent>,
    width: u16,
    forced_grid_size: u16,
    status: Option<Notice>,
    should_quit: bool,
}

impl App {
    pub fn new(store: ConfigStore, forced_grid_size: u16, width: u16) -> Self {
        let (client, modal) = modal_channel();
        let (host_tx, host_rx) = mpsc::unbounded_channel();
        Self {
            store,
            modal_client: Arc::new(client),
            modal,
            screens: Vec::new(),
            host_tx,
            host_rx,
            width,
            forced_grid_size,
            status: None,
            should_quit: false,
        }
    }

    pub fn launch(&mut self, screen: LaunchScreen) -> Result<(), CatalogError> {
        match screen {
            LaunchScreen::Catalog => self.push_catalog(SETTINGS),
            LaunchScreen::Toggles => {
                self.open_toggles();
                Ok(())
            }
            LaunchScreen::Selection { text } => {
                self.open_selection(text);
                Ok(())
            }
        }
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    pub fn modal(&self) -> &ModalQueue {
        &self.modal
    }

    pub fn modal_mut(&mut self) -> &mut ModalQueue {
        &mut self.modal
    }

    pub fn status(&self) -> Option<&Notice> {
        self.status.as_ref()
    }

    pub fn surface(&self) -> HostSurface {
        HostSurface::from_terminal(self.width, &self.store)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn top_mut(&mut self) -> Option<&mut Screen> {
        self.screens.last_mut()
    }

    pub fn push_catalog(&mut self, route: Route) -> Result<(), CatalogError> {
        let Some((title, items)) = catalogs::catalog(route, &self.store) else {
            tracing::warn!(%route, "no catalog for route");
            self.status = Some(Notice::error(format!("nothing to show for '{route}'")));
            return Ok(());
        };
        let host = self.host_tx.clone();
        let controller = CatalogController::new(
            items,
            self.store.clone(),
            Arc::clone(&self.modal_client),
            CatalogOptions {
                surface: self.surface(),
                forced_grid_size: self.forced_grid_size,
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            move |url| {
                let _ = host.send(HostEvent::LinkOpened(url.to_string()));
            },
        )?;
        tracing::debug!(%route, "catalog opened");
        self.screens.push(Screen::Catalog { title, controller });
        Ok(())
    }

    pub fn open_toggles(&mut self) {
        let host = self.host_tx.clone();
        let panel = FastTogglePanel::open(
            browser_toggles(),
            self.store.clone(),
            self.surface().gravity,
            move |needs_extra_action| {
                let _ = host.send(HostEvent::ToggleResult(needs_extra_action));
            },
        );
        self.screens.push(Screen::Toggles(panel));
    }

    pub fn open_selection(&mut self, text: String) {
        let host = self.host_tx.clone();
        let menu = SelectionMenu::open(
            catalogs::selection_menu(),
            text,
            &self.surface(),
            move |action| {
                let _ = host.send(HostEvent::External(action));
            },
        );
        self.screens.push(Screen::Selection(menu));
    }

    /// Close the top screen; closing the last one quits.
    pub fn pop_screen(&mut self) {
        self.screens.pop();
        if self.screens.is_empty() {
            self.should_quit = true;
        }
    }

    pub fn on_activation(&mut self, activation: Activation) {
        if let Activation::Navigate(route) = activation {
            if let Err(err) = self.push_catalog(route) {
                tracing::error!(%route, error = %err, "catalog rejected");
                self.status = Some(Notice::error(err.to_string()));
            }
        }
    }

    pub fn on_resize(&mut self, width: u16) {
        self.width = width;
        let surface = self.surface();
        for screen in &mut self.screens {
            if let Screen::Catalog { controller, .. } = screen {
                controller.resize(surface);
            }
        }
    }

    pub fn on_host_event(&mut self, event: HostEvent) {
        tracing::info!(?event, "host event");
        let message = match &event {
            HostEvent::LinkOpened(url) => format!("opening {url}"),
            HostEvent::ToggleResult(true) => "applying to current page".to_string(),
            HostEvent::ToggleResult(false) => "saved".to_string(),
            HostEvent::External(Some(action)) => format!("sent to {}", action.target),
            HostEvent::External(None) => "menu closed".to_string(),
        };
        self.status = Some(Notice::info(message));
    }

    /// Hand a resolved prompt to the catalog that asked for it.
    pub fn apply_completion(&mut self, completion: EditCompletion) {
        if let Some(Screen::Catalog { controller, .. }) = self.screens.last_mut() {
            controller.apply_completion(completion);
        }
    }

    pub fn dismiss_status(&mut self) -> bool {
        self.status.take().is_some()
    }

    /// Wait for whichever source is ready first.
    pub async fn next_step(&mut self, events: &mut EventHandler) -> Step {
        tokio::select! {
            event = events.next() => Step::Input(event),
            completion = top_completion(&mut self.screens) => Step::Edit(completion),
            Some(request) = self.modal.recv() => Step::Prompt(request),
            Some(event) = self.host_rx.recv() => Step::Host(event),
        }
    }
}

/// Edits resolve against the visible catalog; a covered catalog's
/// completions wait until it is on top again.
async fn top_completion(screens: &mut [Screen]) -> EditCompletion {
    match screens.last_mut() {
        Some(Screen::Catalog { controller, .. }) => controller.next_completion().await,
        _ => std::future::pending().await,
    }
}
