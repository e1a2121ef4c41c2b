use std::collections::VecDeque;

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::{mpsc, oneshot};

use crate::ui::modal::intent::ModalIntent;
use crate::ui::modal::reducer::ModalReducer;
use crate::ui::modal::service::{ChoiceRequest, ModalService, TextInputRequest};
use crate::ui::modal::state::ModalState;
use crate::ui::mvi::Reducer;

/// A prompt waiting to be shown, with the channel its answer goes back on.
#[derive(Debug)]
pub enum ModalRequest {
    Text {
        request: TextInputRequest,
        reply: oneshot::Sender<Option<String>>,
    },
    Choice {
        request: ChoiceRequest,
        reply: oneshot::Sender<Option<usize>>,
    },
}

impl ModalRequest {
    /// The asking side stopped waiting.
    fn is_abandoned(&self) -> bool {
        match self {
            Self::Text { reply, .. } => reply.is_closed(),
            Self::Choice { reply, .. } => reply.is_closed(),
        }
    }
}

/// Create a connected client/queue pair.
pub fn modal_channel() -> (ModalClient, ModalQueue) {
    let (tx, rx) = mpsc::unbounded_channel();
    (
        ModalClient { tx },
        ModalQueue {
            rx,
            waiting: VecDeque::new(),
            active: None,
            state: ModalState::default(),
        },
    )
}

/// [`ModalService`] that forwards prompts to a [`ModalQueue`].
///
/// If the queue is gone the prompt counts as cancelled.
#[derive(Clone)]
pub struct ModalClient {
    tx: mpsc::UnboundedSender<ModalRequest>,
}

#[async_trait]
impl ModalService for ModalClient {
    async fn get_text_input(&self, request: TextInputRequest) -> Option<String> {
        let (reply, answer) = oneshot::channel();
        if self.tx.send(ModalRequest::Text { request, reply }).is_err() {
            tracing::warn!("modal queue closed, text prompt cancelled");
            return None;
        }
        answer.await.ok().flatten()
    }

    async fn get_selected_option(&self, request: ChoiceRequest) -> Option<usize> {
        let (reply, answer) = oneshot::channel();
        if self.tx.send(ModalRequest::Choice { request, reply }).is_err() {
            tracing::warn!("modal queue closed, choice prompt cancelled");
            return None;
        }
        answer.await.ok().flatten()
    }
}

enum ActiveReply {
    Text(oneshot::Sender<Option<String>>),
    Choice(oneshot::Sender<Option<usize>>),
}

/// UI-side end of the modal channel.
///
/// Shows one prompt at a time; later requests queue up behind it in
/// arrival order.
pub struct ModalQueue {
    rx: mpsc::UnboundedReceiver<ModalRequest>,
    waiting: VecDeque<ModalRequest>,
    active: Option<ActiveReply>,
    state: ModalState,
}

impl ModalQueue {
    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_visible()
    }

    /// Requests queued behind the visible one.
    pub fn waiting(&self) -> usize {
        self.waiting.len()
    }

    /// Wait for the next request from any client.
    pub async fn recv(&mut self) -> Option<ModalRequest> {
        self.rx.recv().await
    }

    pub fn enqueue(&mut self, request: ModalRequest) {
        self.waiting.push_back(request);
        if self.active.is_none() {
            self.present_next();
        }
    }

    pub fn dispatch(&mut self, intent: ModalIntent) {
        self.state = ModalReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    /// Route a key to the open prompt. Returns `false` when no prompt is
    /// open and the key belongs to the panel underneath.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if !self.is_open() {
            return false;
        }
        if key.kind != KeyEventKind::Press {
            return true;
        }

        match key.code {
            KeyCode::Esc => self.cancel(),
            KeyCode::Enter => self.confirm(),
            KeyCode::Up => self.dispatch(ModalIntent::MoveUp),
            KeyCode::Down => self.dispatch(ModalIntent::MoveDown),
            KeyCode::Backspace => self.dispatch(ModalIntent::Backspace),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.dispatch(ModalIntent::ClearInput)
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.dispatch(ModalIntent::Insert(ch))
            }
            _ => {}
        }
        true
    }

    /// Resolve the visible prompt with its current answer.
    pub fn confirm(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };
        match (active, &self.state) {
            (ActiveReply::Text(reply), ModalState::TextInput { buffer, .. }) => {
                let _ = reply.send(Some(buffer.clone()));
            }
            (ActiveReply::Choice(reply), ModalState::Choice { selected, .. }) => {
                let _ = reply.send(Some(*selected));
            }
            _ => {
                tracing::warn!("modal state does not match pending reply, dropping prompt");
            }
        }
        self.dispatch(ModalIntent::Close);
        self.present_next();
    }

    /// Resolve the visible prompt with `None`.
    pub fn cancel(&mut self) {
        match self.active.take() {
            Some(ActiveReply::Text(reply)) => {
                let _ = reply.send(None);
            }
            Some(ActiveReply::Choice(reply)) => {
                let _ = reply.send(None);
            }
            None => {}
        }
        self.dispatch(ModalIntent::Close);
        self.present_next();
    }

    fn present_next(&mut self) {
        while let Some(request) = self.waiting.pop_front() {
            if request.is_abandoned() {
                tracing::debug!("skipping abandoned modal request");
                continue;
            }
            match request {
                ModalRequest::Text { request, reply } => {
                    self.active = Some(ActiveReply::Text(reply));
                    self.dispatch(ModalIntent::OpenText(request));
                }
                ModalRequest::Choice { request, reply } => {
                    self.active = Some(ActiveReply::Choice(reply));
                    self.dispatch(ModalIntent::OpenChoice(request));
                }
            }
            return;
        }
    }
}
