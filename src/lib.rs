//! Client-side core for a static portfolio site.
//!
//! This crate models the two stateful pieces of the site's page scripts:
//!
//! - [`ThemeManager`]: resolves, applies, and persists a light/dark display
//!   preference, reacting to the stored preference, the ambient platform
//!   preference, an explicit toggle, and a keyboard shortcut.
//! - [`ContactForm`]: validates a fixed set of form fields, manages per-field
//!   error display, and gates a single network submission per attempt.
//!
//! Both components are independent leaves. They touch the outside world only
//! through the capability traits in [`platform`]: a durable key-value store,
//! an ambient color-scheme signal, a document surface, and a submission
//! transport. Every trait ships with a production implementation and an
//! in-memory one, so the whole core runs headless in tests.
//!
//! # Example
//!
//! ```rust
//! use forefront::{ColorMode, FixedScheme, MemoryStore, MemorySurface, ThemeManager};
//!
//! let surface = MemorySurface::new().with_element(":root");
//! let mut manager = ThemeManager::new(MemoryStore::new(), FixedScheme::dark(), surface);
//!
//! // No stored preference, ambient reports dark.
//! assert_eq!(manager.init(), ColorMode::Dark);
//!
//! // An explicit toggle inverts and persists the choice.
//! assert_eq!(manager.toggle(), Some(ColorMode::Light));
//! assert_eq!(manager.current(), Some(ColorMode::Light));
//! ```

pub mod form;
pub mod platform;
pub mod theme;

pub use form::{
    ContactForm, FormValidator, HttpTransport, StatusKind, SubmissionState, Transport,
    TransportError,
};
pub use platform::{
    AmbientScheme, FileStore, FixedScheme, KeyPress, MemoryStore, MemorySurface, NullStore,
    PreferenceStore, Surface, SystemScheme,
};
pub use theme::{ColorMode, ThemeManager};
