//! Cancellable modal prompts: free text and single choice.
//!
//! Panels talk to [`ModalService`]; the terminal runtime owns the matching
//! [`ModalQueue`] and draws whatever prompt is at its head. Prompts never
//! overlap: requests arriving while one is open wait their turn.

mod intent;
mod queue;
mod reducer;
mod service;
mod state;
mod view;

pub use intent::ModalIntent;
pub use queue::{modal_channel, ModalClient, ModalQueue, ModalRequest};
pub use reducer::ModalReducer;
pub use service::{ChoiceRequest, ModalService, TextInputRequest};
pub use state::ModalState;
pub use view::render_modal;
