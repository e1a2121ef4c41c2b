//! Model-View-Intent primitives shared by every panel.
//!
//! ```text
//! key press ──→ Intent ──→ Reducer ──→ State ──→ view::render
//!     ↑                                              │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! Reducers only move UI state. Side effects (settings writes, modal
//! requests, host callbacks) live in the panel controllers, which dispatch
//! intents once the effect has succeeded.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
