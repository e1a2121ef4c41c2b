//! Context menu shown over selected text.
//!
//! Items run an in-process callback, hand an [`ExternalAction`] to the
//! host, or both. Only items with an external action or `close_menu` set
//! close the menu.

mod intent;
mod menu;
mod metrics;
mod model;
mod reducer;
mod state;
mod view;

pub use intent::SelectionMenuIntent;
pub use menu::{ExternalDispatch, MenuOutcome, SelectionMenu};
pub use metrics::{caption_lines, MenuMetrics, CAPTION_LINES, MENU_COLUMNS};
pub use model::{ExternalAction, MenuInfo};
pub use reducer::SelectionMenuReducer;
pub use state::SelectionMenuState;
pub use view::render_selection_menu;
