//! Terminal rendition of the browser's settings screens and overlays.

pub mod app;
pub mod catalog;
pub mod events;
pub mod input;
pub mod layout;
pub mod modal;
pub mod mvi;
pub mod notice;
pub mod render;
pub mod runtime;
pub mod selection;
pub mod surface;
pub mod terminal_guard;
pub mod theme;
pub mod toggles;
