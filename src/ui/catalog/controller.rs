//! Activation handling for a mounted catalog.
//!
//! Booleans, actions and links complete synchronously inside
//! [`CatalogController::activate`]. Value and list items open a prompt on a
//! spawned task; the answer comes back as an [`EditCompletion`] that the
//! owner feeds to [`CatalogController::apply_completion`] on the UI side,
//! where it is persisted first and displayed second.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::config::{ConfigStore, SettingValue};
use crate::ui::catalog::error::{CatalogError, EditError};
use crate::ui::catalog::grid::{
    border_emphasis, column_count, layout_grid, neighbor, FocusMove, GridCell, MAX_COLUMNS,
};
use crate::ui::catalog::intent::CatalogIntent;
use crate::ui::catalog::model::{Route, SettingItem, ValueSetting, VersionTarget};
use crate::ui::catalog::reducer::CatalogReducer;
use crate::ui::catalog::state::{CatalogState, ItemDisplay, ItemSlot};
use crate::ui::modal::{ChoiceRequest, ModalService, TextInputRequest};
use crate::ui::mvi::Reducer;
use crate::ui::notice::Notice;
use crate::ui::surface::HostSurface;

/// Called with the URL of an activated link item.
pub type LinkHandler = Box<dyn FnMut(&str) + Send>;

#[derive(Debug, Clone)]
pub struct CatalogOptions {
    pub surface: HostSurface,
    /// Grid size requested by the screen; 2 forces two columns.
    pub forced_grid_size: u16,
    /// Appended to version items' titles.
    pub version: String,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            surface: HostSurface::default(),
            forced_grid_size: 1,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Result of activating one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// An action callback ran.
    Invoked,
    /// A boolean was persisted with this value.
    Toggled(bool),
    /// The link handler was called.
    LinkOpened,
    /// The host should show this route.
    Navigate(Route),
    /// A prompt was requested; the result arrives as an [`EditCompletion`].
    EditStarted,
    /// The item already has a prompt open or queued.
    Busy,
    /// Nothing changed; the reason is in the state's notice.
    Failed,
    /// No item at that index.
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditResolution {
    Text(Option<String>),
    Choice(Option<usize>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCompletion {
    pub index: usize,
    pub resolution: EditResolution,
}

pub struct CatalogController {
    items: Vec<SettingItem>,
    store: ConfigStore,
    modal: Arc<dyn ModalService>,
    on_link: LinkHandler,
    forced_grid_size: u16,
    cells: Vec<GridCell>,
    state: CatalogState,
    edits_tx: mpsc::UnboundedSender<EditCompletion>,
    edits_rx: mpsc::UnboundedReceiver<EditCompletion>,
}

impl CatalogController {
    /// Validate `items` and mount them, reading every displayed value from
    /// `store` once.
    pub fn new(
        items: Vec<SettingItem>,
        store: ConfigStore,
        modal: Arc<dyn ModalService>,
        options: CatalogOptions,
        on_link: impl FnMut(&str) + Send + 'static,
    ) -> Result<Self, CatalogError> {
        validate(&items)?;

        let columns = column_count(options.surface.wide, options.forced_grid_size);
        let slots = items
            .iter()
            .map(|item| ItemSlot::new(seed_display(item, &store, &options.version)))
            .collect();
        let (edits_tx, edits_rx) = mpsc::unbounded_channel();

        let mut controller = Self {
            items,
            store,
            modal,
            on_link: Box::new(on_link),
            forced_grid_size: options.forced_grid_size,
            cells: Vec::new(),
            state: CatalogState::default(),
            edits_tx,
            edits_rx,
        };
        controller.dispatch(CatalogIntent::Mount { slots, columns });
        controller.relayout();
        Ok(controller)
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn items(&self) -> &[SettingItem] {
        &self.items
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn columns(&self) -> u16 {
        self.state.columns
    }

    pub fn show_border(&self) -> bool {
        border_emphasis(self.state.columns)
    }

    /// Title as displayed, including the value or version postfix.
    pub fn title_text(&self, index: usize) -> Option<String> {
        let title = self.items.get(index)?.header().title;
        let text = match self.state.display(index)? {
            ItemDisplay::Plain | ItemDisplay::Checked(_) => title.to_string(),
            ItemDisplay::Value(value) => format!("{title}: {value}"),
            ItemDisplay::Version(version) => format!("{title} v{version}"),
        };
        Some(text)
    }

    pub fn dispatch(&mut self, intent: CatalogIntent) {
        self.state = CatalogReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    pub fn activate_focused(&mut self) -> Activation {
        self.activate(self.state.focused)
    }

    pub fn activate(&mut self, index: usize) -> Activation {
        let Some(item) = self.items.get(index).cloned() else {
            return Activation::Missing;
        };
        self.dispatch(CatalogIntent::Focus { index });
        tracing::debug!(index, kind = ?item.kind(), "catalog item activated");

        match item {
            SettingItem::Action { action, .. } => {
                action();
                Activation::Invoked
            }
            SettingItem::Boolean { config, .. } => match config.toggle(&self.store) {
                Ok(checked) => {
                    self.dispatch(CatalogIntent::Toggled { index, checked });
                    Activation::Toggled(checked)
                }
                Err(err) => {
                    let err = EditError::from(err);
                    tracing::warn!(index, error = %err, "toggle not applied");
                    self.dispatch(CatalogIntent::ShowNotice(Notice::error(err.to_string())));
                    Activation::Failed
                }
            },
            SettingItem::Value { header, config } => {
                let initial = match &config {
                    ValueSetting::Int(config) => config.get(&self.store).to_string(),
                    ValueSetting::Text(config) => config.get(&self.store),
                };
                let request = TextInputRequest {
                    title: header.title.to_string(),
                    help: header.summary.map(str::to_string),
                    initial,
                };
                self.start_edit(index, move |modal| async move {
                    EditResolution::Text(modal.get_text_input(request).await)
                })
            }
            SettingItem::ListEnum {
                header,
                config,
                options,
            } => {
                let request = ChoiceRequest {
                    title: header.title.to_string(),
                    options: labels(options),
                    initial: config.selected_ordinal(&self.store),
                };
                self.start_edit(index, move |modal| async move {
                    EditResolution::Choice(modal.get_selected_option(request).await)
                })
            }
            SettingItem::ListString {
                header,
                config,
                options,
            } => {
                let stored = config
                    .selected_index(&self.store)
                    .filter(|index| *index < options.len());
                if stored.is_none() {
                    tracing::warn!(
                        key = config.key(),
                        raw = %config.get(&self.store),
                        "stored selection has no option, starting at the first"
                    );
                }
                let request = ChoiceRequest {
                    title: header.title.to_string(),
                    options: labels(options),
                    initial: stored.unwrap_or(0),
                };
                self.start_edit(index, move |modal| async move {
                    EditResolution::Choice(modal.get_selected_option(request).await)
                })
            }
            SettingItem::Link { url, .. } => {
                (self.on_link)(&url);
                Activation::LinkOpened
            }
            SettingItem::Navigate { destination, .. } => Activation::Navigate(destination),
            SettingItem::Version { target, .. } => match target {
                VersionTarget::Action(action) => {
                    action();
                    Activation::Invoked
                }
                VersionTarget::Navigate(route) => Activation::Navigate(route),
            },
        }
    }

    /// Wait for the next answered (or cancelled) prompt.
    pub async fn next_completion(&mut self) -> EditCompletion {
        match self.edits_rx.recv().await {
            Some(completion) => completion,
            // The controller holds a sender, so the channel never closes.
            None => std::future::pending().await,
        }
    }

    /// Wait for one prompt to resolve and apply it.
    pub async fn settle(&mut self) {
        let completion = self.next_completion().await;
        self.apply_completion(completion);
    }

    /// Persist a resolved prompt, then update what the item displays.
    ///
    /// Cancellation and every failure leave both the store and the display
    /// untouched.
    pub fn apply_completion(&mut self, completion: EditCompletion) {
        let EditCompletion { index, resolution } = completion;
        let Some(item) = self.items.get(index) else {
            tracing::warn!(index, "edit completion for unknown item");
            return;
        };

        let outcome = match (item, resolution) {
            (_, EditResolution::Text(None) | EditResolution::Choice(None)) => Ok(None),
            (SettingItem::Value { config, .. }, EditResolution::Text(Some(text))) => {
                commit_value(config, &self.store, &text).map(Some)
            }
            (SettingItem::ListEnum { config, options, .. }, EditResolution::Choice(Some(i))) => {
                check_index(i, options.len())
                    .and_then(|()| config.select(&self.store, i).map_err(EditError::from))
                    .map(|()| Some(options[i].to_string()))
            }
            (SettingItem::ListString { config, options, .. }, EditResolution::Choice(Some(i))) => {
                check_index(i, options.len())
                    .and_then(|()| config.set_index(&self.store, i).map_err(EditError::from))
                    .map(|()| Some(options[i].to_string()))
            }
            (item, resolution) => {
                tracing::warn!(
                    index,
                    kind = ?item.kind(),
                    ?resolution,
                    "edit resolution does not match item"
                );
                Ok(None)
            }
        };

        match outcome {
            Ok(None) => {
                tracing::debug!(index, "edit cancelled");
                self.dispatch(CatalogIntent::EditCancelled { index });
            }
            Ok(Some(value)) => {
                tracing::info!(index, value = %value, "setting updated");
                self.dispatch(CatalogIntent::ValueCommitted { index, value });
            }
            Err(err) => {
                tracing::warn!(index, error = %err, "edit rejected");
                self.dispatch(CatalogIntent::EditRejected {
                    index,
                    notice: Notice::error(err.to_string()),
                });
            }
        }
    }

    pub fn move_focus(&mut self, direction: FocusMove) {
        if let Some(index) = neighbor(&self.cells, self.state.focused, direction) {
            self.dispatch(CatalogIntent::Focus { index });
        }
    }

    /// Re-run the column decision for a new surface.
    pub fn resize(&mut self, surface: HostSurface) {
        let columns = column_count(surface.wide, self.forced_grid_size);
        if columns != self.state.columns {
            self.dispatch(CatalogIntent::Resize { columns });
            self.relayout();
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.dispatch(CatalogIntent::DismissNotice);
    }

    fn relayout(&mut self) {
        let spans: Vec<u16> = self.items.iter().map(|item| item.header().span).collect();
        self.cells = layout_grid(&spans, self.state.columns);
    }

    /// Mark `index` pending and run `prompt` on its own task. A second
    /// activation while the first is unresolved is refused.
    fn start_edit<F, Fut>(&mut self, index: usize, prompt: F) -> Activation
    where
        F: FnOnce(Arc<dyn ModalService>) -> Fut,
        Fut: std::future::Future<Output = EditResolution> + Send + 'static,
    {
        if self.state.is_pending(index) {
            tracing::debug!(index, "edit already pending");
            return Activation::Busy;
        }
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::error!(index, "no async runtime to run prompt on");
            self.dispatch(CatalogIntent::ShowNotice(Notice::error(
                "cannot open prompt outside the UI runtime",
            )));
            return Activation::Failed;
        };

        self.dispatch(CatalogIntent::EditStarted { index });
        let edits = self.edits_tx.clone();
        let answer = prompt(Arc::clone(&self.modal));
        runtime.spawn(async move {
            let resolution = answer.await;
            let _ = edits.send(EditCompletion { index, resolution });
        });
        Activation::EditStarted
    }
}

fn validate(items: &[SettingItem]) -> Result<(), CatalogError> {
    for item in items {
        let header = item.header();
        if header.span == 0 || header.span > MAX_COLUMNS {
            return Err(CatalogError::InvalidSpan {
                title: header.title,
                span: header.span,
                max: MAX_COLUMNS,
            });
        }
        if let SettingItem::ListEnum {
            config, options, ..
        } = item
        {
            if options.len() != config.domain_len() {
                return Err(CatalogError::OptionCountMismatch {
                    title: header.title,
                    options: options.len(),
                    domain: config.domain_len(),
                });
            }
        }
    }
    Ok(())
}

fn seed_display(item: &SettingItem, store: &ConfigStore, version: &str) -> ItemDisplay {
    match item {
        SettingItem::Action { .. } | SettingItem::Link { .. } | SettingItem::Navigate { .. } => {
            ItemDisplay::Plain
        }
        SettingItem::Boolean { config, .. } => ItemDisplay::Checked(config.get(store)),
        SettingItem::Value { config, .. } => ItemDisplay::Value(match config {
            ValueSetting::Int(config) => config.get(store).to_string(),
            ValueSetting::Text(config) => config.get(store),
        }),
        SettingItem::ListEnum {
            config, options, ..
        } => ItemDisplay::Value(
            options
                .get(config.selected_ordinal(store))
                .copied()
                .unwrap_or_default()
                .to_string(),
        ),
        SettingItem::ListString {
            config, options, ..
        } => {
            let label = config
                .selected_index(store)
                .and_then(|index| options.get(index));
            match label {
                Some(label) => ItemDisplay::Value(label.to_string()),
                None => {
                    let raw = config.get(store);
                    tracing::warn!(
                        key = config.key(),
                        raw = %raw,
                        "stored selection has no option"
                    );
                    ItemDisplay::Value(raw)
                }
            }
        }
        SettingItem::Version { .. } => ItemDisplay::Version(version.to_string()),
    }
}

fn commit_value(
    config: &ValueSetting,
    store: &ConfigStore,
    text: &str,
) -> Result<String, EditError> {
    match config {
        ValueSetting::Int(config) => {
            let value = i64::parse_edit(text)?;
            config.set(store, value)?;
            Ok(value.to_string())
        }
        ValueSetting::Text(config) => {
            let value = String::parse_edit(text)?;
            config.set(store, value.clone())?;
            Ok(value)
        }
    }
}

fn check_index(index: usize, len: usize) -> Result<(), EditError> {
    if index < len {
        Ok(())
    } else {
        Err(EditError::IndexOutOfRange { index, len })
    }
}

fn labels(options: &[&str]) -> Vec<String> {
    options.iter().map(|option| option.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BooleanConfig, ValueConfig};
    use crate::ui::catalog::model::ItemHeader;
    use async_trait::async_trait;

    struct NeverAsked;

    #[async_trait]
    impl ModalService for NeverAsked {
        async fn get_text_input(&self, _request: TextInputRequest) -> Option<String> {
            None
        }

        async fn get_selected_option(&self, _request: ChoiceRequest) -> Option<usize> {
            None
        }
    }

    fn controller(items: Vec<SettingItem>) -> Result<CatalogController, CatalogError> {
        CatalogController::new(
            items,
            ConfigStore::in_memory(),
            Arc::new(NeverAsked),
            CatalogOptions::default(),
            |_| {},
        )
    }

    #[test]
    fn zero_span_is_rejected() {
        let items = vec![SettingItem::boolean(
            ItemHeader::new("Cookies", "🍪").span(0),
            BooleanConfig::new("cookies", true),
        )];
        assert!(matches!(
            controller(items),
            Err(CatalogError::InvalidSpan { span: 0, .. })
        ));
    }

    #[test]
    fn titles_carry_value_and_version() {
        let items = vec![
            SettingItem::int_value(
                ItemHeader::new("Timeout", "⏱"),
                ValueConfig::new("page_timeout", 30),
            ),
            SettingItem::version(
                ItemHeader::new("About", "ℹ"),
                VersionTarget::Navigate(Route("about")),
            ),
        ];
        let controller = controller(items).unwrap();
        assert_eq!(controller.title_text(0).as_deref(), Some("Timeout: 30"));
        let version = format!("About v{}", env!("CARGO_PKG_VERSION"));
        assert_eq!(controller.title_text(1), Some(version));
    }

    #[test]
    fn prompt_outside_runtime_fails_softly() {
        let items = vec![SettingItem::int_value(
            ItemHeader::new("Timeout", "⏱"),
            ValueConfig::new("page_timeout", 30),
        )];
        let mut controller = controller(items).unwrap();
        assert_eq!(controller.activate(0), Activation::Failed);
        assert!(!controller.state().is_pending(0));
        assert!(controller.state().notice.is_some());
    }

    #[test]
    fn missing_index_is_reported() {
        let mut controller = controller(Vec::new()).unwrap();
        assert_eq!(controller.activate(3), Activation::Missing);
    }
}
