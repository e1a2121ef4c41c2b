//! Shared test utilities: scripted prompts and persistence that can fail.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use inkbro::config::{ConfigError, ConfigStore, SettingsDocument, SettingsPersistence};
use inkbro::ui::catalog::{CatalogController, CatalogOptions, SettingItem};
use inkbro::ui::modal::{ChoiceRequest, ModalService, TextInputRequest};
use inkbro::ui::surface::HostSurface;
use parking_lot::Mutex;
use tokio::sync::Semaphore;

/// Answers prompts from a script, in order. An exhausted script cancels.
#[derive(Default)]
pub struct ScriptedModal {
    texts: Mutex<VecDeque<Option<String>>>,
    choices: Mutex<VecDeque<Option<usize>>>,
    text_requests: Mutex<Vec<TextInputRequest>>,
    choice_requests: Mutex<Vec<ChoiceRequest>>,
}

impl ScriptedModal {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn answer_text(&self, answer: Option<&str>) {
        self.texts.lock().push_back(answer.map(str::to_string));
    }

    pub fn answer_choice(&self, answer: Option<usize>) {
        self.choices.lock().push_back(answer);
    }

    pub fn text_requests(&self) -> Vec<TextInputRequest> {
        self.text_requests.lock().clone()
    }

    pub fn choice_requests(&self) -> Vec<ChoiceRequest> {
        self.choice_requests.lock().clone()
    }
}

#[async_trait]
impl ModalService for ScriptedModal {
    async fn get_text_input(&self, request: TextInputRequest) -> Option<String> {
        self.text_requests.lock().push(request);
        self.texts.lock().pop_front().flatten()
    }

    async fn get_selected_option(&self, request: ChoiceRequest) -> Option<usize> {
        self.choice_requests.lock().push(request);
        self.choices.lock().pop_front().flatten()
    }
}

/// Holds every prompt open until [`GatedModal::release`] is called.
pub struct GatedModal {
    gate: Semaphore,
    answer: String,
}

impl GatedModal {
    pub fn new(answer: &str) -> Arc<Self> {
        Arc::new(Self {
            gate: Semaphore::new(0),
            answer: answer.to_string(),
        })
    }

    pub fn release(&self) {
        self.gate.add_permits(1);
    }
}

#[async_trait]
impl ModalService for GatedModal {
    async fn get_text_input(&self, _request: TextInputRequest) -> Option<String> {
        let _permit = self.gate.acquire().await.ok()?;
        Some(self.answer.clone())
    }

    async fn get_selected_option(&self, _request: ChoiceRequest) -> Option<usize> {
        let _permit = self.gate.acquire().await.ok()?;
        self.answer.parse().ok()
    }
}

/// In-memory persistence whose saves fail while `failing` is set.
#[derive(Default)]
pub struct FlakyPersistence {
    failing: AtomicBool,
}

impl FlakyPersistence {
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

impl SettingsPersistence for FlakyPersistence {
    fn load(&self) -> Result<SettingsDocument, ConfigError> {
        Ok(SettingsDocument::default())
    }

    fn save(&self, _document: &SettingsDocument) -> Result<(), ConfigError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(ConfigError::Unavailable {
                message: "disk full".to_string(),
            });
        }
        Ok(())
    }
}

pub fn flaky_store() -> (ConfigStore, Arc<FlakyPersistence>) {
    let persistence = Arc::new(FlakyPersistence::default());
    let store = ConfigStore::with_document(SettingsDocument::default(), persistence.clone());
    (store, persistence)
}

/// URLs passed to the link handler.
pub type LinkLog = Arc<Mutex<Vec<String>>>;

pub fn mount(
    items: Vec<SettingItem>,
    store: &ConfigStore,
    modal: Arc<dyn ModalService>,
) -> (CatalogController, LinkLog) {
    mount_with(items, store, modal, CatalogOptions::default())
}

pub fn mount_with(
    items: Vec<SettingItem>,
    store: &ConfigStore,
    modal: Arc<dyn ModalService>,
    options: CatalogOptions,
) -> (CatalogController, LinkLog) {
    let links: LinkLog = Arc::default();
    let sink = Arc::clone(&links);
    let controller = CatalogController::new(items, store.clone(), modal, options, move |url| {
        sink.lock().push(url.to_string())
    })
    .expect("catalog should mount");
    (controller, links)
}

pub fn surface(wide: bool) -> HostSurface {
    HostSurface {
        width: if wide { 120 } else { 60 },
        wide,
        ..HostSurface::default()
    }
}
