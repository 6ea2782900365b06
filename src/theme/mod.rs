//! Theme resolution and persistence.
//!
//! This module provides:
//!
//! - [`ColorMode`]: the two-valued light/dark display preference
//! - [`ThemeManager`]: resolves the initial mode, applies it to the document
//!   root, persists it, and reacts to toggles, the keyboard shortcut, and
//!   ambient platform changes

mod manager;
mod mode;

pub use manager::{ThemeManager, ROOT_ELEMENT, THEME_ATTRIBUTE, THEME_STORAGE_KEY};
pub use mode::{ColorMode, UnknownColorMode};
