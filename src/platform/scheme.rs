//! Ambient color-scheme signal.

use dark_light::{detect as detect_os_scheme, Mode as OsSchemeMode};

/// The platform's system-wide prefers-dark signal.
///
/// This is consumed, never produced, by the theme component. Change
/// notification is push-based on the host side: when the platform signal
/// flips, the host calls
/// [`ThemeManager::ambient_changed`](crate::ThemeManager::ambient_changed)
/// with the new value.
pub trait AmbientScheme {
    /// Returns `Some(true)` when the platform prefers dark, `Some(false)`
    /// when it prefers light, and `None` when it cannot say.
    fn prefers_dark(&self) -> Option<bool>;
}

/// [`AmbientScheme`] backed by OS color-mode detection.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemScheme;

impl AmbientScheme for SystemScheme {
    fn prefers_dark(&self) -> Option<bool> {
        match detect_os_scheme() {
            OsSchemeMode::Dark => Some(true),
            OsSchemeMode::Light => Some(false),
        }
    }
}

/// [`AmbientScheme`] reporting a fixed answer, for tests and headless hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedScheme(Option<bool>);

impl FixedScheme {
    /// A platform that prefers dark.
    pub fn dark() -> Self {
        Self(Some(true))
    }

    /// A platform that prefers light.
    pub fn light() -> Self {
        Self(Some(false))
    }

    /// A platform without a color-scheme signal.
    pub fn unsupported() -> Self {
        Self(None)
    }
}

impl AmbientScheme for FixedScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}
