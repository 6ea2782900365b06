//! Platform capability seams.
//!
//! The page runtime the site originally ran in (document tree, origin-scoped
//! key-value storage, a prefers-dark media signal) is abstracted into small
//! traits here so the components in [`theme`](crate::theme) and
//! [`form`](crate::form) stay pure of any concrete host:
//!
//! - [`Surface`]: named-element attribute/text/value access
//! - [`PreferenceStore`]: durable string key-value storage
//! - [`AmbientScheme`]: the platform's prefers-dark signal
//!
//! Each trait has a production implementation and an in-memory one for
//! headless use and testing.

mod scheme;
mod store;
mod surface;

pub use scheme::{AmbientScheme, FixedScheme, SystemScheme};
pub use store::{FileStore, MemoryStore, NullStore, PreferenceStore};
pub use surface::{MemorySurface, Surface};

/// A single key press as delivered by the host's global keydown handling.
///
/// Built fluently:
///
/// ```rust
/// use forefront::KeyPress;
///
/// let press = KeyPress::new('D').ctrl().shift();
/// assert!(press.ctrl && press.shift && !press.meta);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key value, as the platform reports it ("D" arrives uppercase
    /// because shift is held).
    pub key: char,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl KeyPress {
    /// Creates a press of `key` with no modifiers held.
    pub fn new(key: char) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
            shift: false,
        }
    }

    /// Marks the control modifier as held.
    pub fn ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    /// Marks the platform command/meta modifier as held.
    pub fn meta(mut self) -> Self {
        self.meta = true;
        self
    }

    /// Marks the shift modifier as held.
    pub fn shift(mut self) -> Self {
        self.shift = true;
        self
    }
}
