//! Settings catalog, quick toggles and text-selection menu of a small
//! browser, drawn in the terminal.
//!
//! Every screen reads and writes one process-wide
//! [`ConfigStore`](config::ConfigStore), passed in explicitly.

pub mod catalogs;
pub mod config;
pub mod logging;
pub mod ui;
