//! Quick-toggle panel: a fixed list of browser booleans flipped in place.

mod intent;
mod model;
mod panel;
mod reducer;
mod state;
mod view;

pub use intent::FastToggleIntent;
pub use model::{browser_toggles, separator_before, ToggleGroup, ToggleItem};
pub use panel::{FastTogglePanel, PanelDisposition, ResultHandler};
pub use reducer::FastToggleReducer;
pub use state::FastToggleState;
pub use view::render_fast_toggles;
