//! Declarative settings screens.
//!
//! A screen is a `Vec<SettingItem>`; [`CatalogController`] mounts it over a
//! [`ConfigStore`](crate::config::ConfigStore), turns activations into
//! settings writes or host callbacks, and keeps what each item displays in
//! step with what was persisted.

mod controller;
mod error;
mod grid;
mod intent;
mod model;
mod reducer;
mod state;
mod view;

pub use controller::{
    Activation, CatalogController, CatalogOptions, EditCompletion, EditResolution, LinkHandler,
};
pub use error::{CatalogError, EditError};
pub use grid::{
    border_emphasis, column_count, layout_grid, neighbor, FocusMove, GridCell, MAX_COLUMNS,
};
pub use intent::CatalogIntent;
pub use model::{
    ActionFn, ItemHeader, ItemKind, Route, SettingItem, ValueSetting, VersionTarget,
};
pub use reducer::CatalogReducer;
pub use state::{CatalogState, ItemDisplay, ItemSlot};
pub use view::render_catalog;
