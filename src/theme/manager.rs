//! Theme manager: resolution, application, toggling.

use tracing::debug;

use super::ColorMode;
use crate::platform::{AmbientScheme, KeyPress, PreferenceStore, Surface};

/// Storage key holding the explicit theme preference.
pub const THEME_STORAGE_KEY: &str = "portfolio-theme";

/// Surface id of the document root the theme attribute lives on.
pub const ROOT_ELEMENT: &str = ":root";

/// Attribute carrying the applied mode, consumed by styling rules outside
/// this crate.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Resolves and applies the two-valued display theme.
///
/// The displayed theme always equals the persisted preference when one
/// exists, otherwise the ambient platform preference, otherwise light. An
/// explicit toggle persists the choice; once the storage key exists, ambient
/// changes no longer move the theme.
///
/// The manager lives for the document's lifetime; there is no teardown.
#[derive(Debug)]
pub struct ThemeManager<S, A, U> {
    store: S,
    ambient: A,
    surface: U,
}

impl<S, A, U> ThemeManager<S, A, U>
where
    S: PreferenceStore,
    A: AmbientScheme,
    U: Surface,
{
    /// Creates a manager over the given platform capabilities.
    pub fn new(store: S, ambient: A, surface: U) -> Self {
        Self {
            store,
            ambient,
            surface,
        }
    }

    /// Returns the underlying surface, for host-side wiring.
    pub fn surface(&self) -> &U {
        &self.surface
    }

    /// Resolves the initial mode without applying it.
    ///
    /// Precedence: persisted preference, then ambient platform preference,
    /// then [`ColorMode::Light`]. A persisted value that does not parse is
    /// treated as absent.
    pub fn resolve_initial(&self) -> ColorMode {
        if let Some(stored) = self.store.get(THEME_STORAGE_KEY) {
            if let Ok(mode) = stored.parse() {
                return mode;
            }
        }
        match self.ambient.prefers_dark() {
            Some(true) => ColorMode::Dark,
            _ => ColorMode::Light,
        }
    }

    /// Resolves the initial mode and applies it, returning what was applied.
    ///
    /// Call once at page load, before wiring toggle or keyboard handling.
    pub fn init(&mut self) -> ColorMode {
        let mode = self.resolve_initial();
        self.apply(mode);
        debug!(mode = mode.as_str(), "theme initialized");
        mode
    }

    /// Applies `mode`: sets the root theme attribute and persists the value,
    /// overwriting any prior preference. Applying the same mode twice is a
    /// no-op in effect.
    pub fn apply(&mut self, mode: ColorMode) {
        self.surface
            .set_attribute(ROOT_ELEMENT, THEME_ATTRIBUTE, mode.as_str());
        self.store.set(THEME_STORAGE_KEY, mode.as_str());
    }

    /// Returns the currently applied mode, read from the root attribute.
    ///
    /// `None` when the attribute is missing or carries an unrecognized
    /// value, e.g. before [`init`](Self::init) has run.
    pub fn current(&self) -> Option<ColorMode> {
        self.surface
            .attribute(ROOT_ELEMENT, THEME_ATTRIBUTE)?
            .parse()
            .ok()
    }

    /// Inverts the applied mode.
    ///
    /// The current mode is read from the root attribute, not from storage,
    /// so external mutation of the attribute cannot cause drift. Returns the
    /// newly applied mode, or `None` (without effect) when the root carries
    /// no recognized theme attribute.
    pub fn toggle(&mut self) -> Option<ColorMode> {
        let next = self.current()?.inverted();
        self.apply(next);
        Some(next)
    }

    /// Reacts to a change of the ambient platform preference.
    ///
    /// Applies the new ambient value only while no explicit preference is
    /// persisted. The test is key presence, not value: any persisted entry
    /// pins the theme against ambient changes.
    pub fn ambient_changed(&mut self, prefers_dark: bool) {
        if self.store.contains(THEME_STORAGE_KEY) {
            return;
        }
        let mode = if prefers_dark {
            ColorMode::Dark
        } else {
            ColorMode::Light
        };
        self.apply(mode);
    }

    /// Handles a global key press, toggling on Ctrl/Cmd + Shift + D.
    ///
    /// Returns `true` when the combination was consumed; the host must then
    /// suppress the platform's default handling for it.
    pub fn handle_key(&mut self, press: &KeyPress) -> bool {
        if (press.ctrl || press.meta) && press.shift && press.key == 'D' {
            self.toggle();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{FixedScheme, MemoryStore, MemorySurface, NullStore};

    fn manager(
        store: MemoryStore,
        ambient: FixedScheme,
    ) -> ThemeManager<MemoryStore, FixedScheme, MemorySurface> {
        let surface = MemorySurface::new().with_element(ROOT_ELEMENT);
        ThemeManager::new(store, ambient, surface)
    }

    #[test]
    fn test_resolve_initial_defaults_light() {
        let m = manager(MemoryStore::new(), FixedScheme::unsupported());
        assert_eq!(m.resolve_initial(), ColorMode::Light);
    }

    #[test]
    fn test_resolve_initial_ambient_dark() {
        let m = manager(MemoryStore::new(), FixedScheme::dark());
        assert_eq!(m.resolve_initial(), ColorMode::Dark);
    }

    #[test]
    fn test_resolve_initial_stored_wins_over_ambient() {
        let mut store = MemoryStore::new();
        store.set(THEME_STORAGE_KEY, "light");
        let m = manager(store, FixedScheme::dark());
        assert_eq!(m.resolve_initial(), ColorMode::Light);
    }

    #[test]
    fn test_resolve_initial_garbage_stored_treated_as_absent() {
        let mut store = MemoryStore::new();
        store.set(THEME_STORAGE_KEY, "solarized");
        let m = manager(store, FixedScheme::dark());
        assert_eq!(m.resolve_initial(), ColorMode::Dark);
    }

    #[test]
    fn test_apply_sets_attribute_and_persists() {
        let mut m = manager(MemoryStore::new(), FixedScheme::unsupported());
        m.apply(ColorMode::Dark);

        assert_eq!(m.current(), Some(ColorMode::Dark));
        assert_eq!(
            m.store.get(THEME_STORAGE_KEY).as_deref(),
            Some("dark")
        );
    }

    #[test]
    fn test_toggle_roundtrip() {
        let mut m = manager(MemoryStore::new(), FixedScheme::unsupported());
        m.apply(ColorMode::Dark);

        assert_eq!(m.toggle(), Some(ColorMode::Light));
        assert_eq!(m.current(), Some(ColorMode::Light));
        assert_eq!(
            m.store.get(THEME_STORAGE_KEY).as_deref(),
            Some("light")
        );

        assert_eq!(m.toggle(), Some(ColorMode::Dark));
        assert_eq!(
            m.store.get(THEME_STORAGE_KEY).as_deref(),
            Some("dark")
        );
    }

    #[test]
    fn test_toggle_without_applied_theme_is_noop() {
        let mut m = manager(MemoryStore::new(), FixedScheme::unsupported());
        assert_eq!(m.toggle(), None);
        assert!(!m.store.contains(THEME_STORAGE_KEY));
    }

    #[test]
    fn test_toggle_reads_attribute_not_storage() {
        let mut m = manager(MemoryStore::new(), FixedScheme::unsupported());
        m.apply(ColorMode::Light);
        // External code flipped the attribute behind our back.
        m.surface
            .set_attribute(ROOT_ELEMENT, THEME_ATTRIBUTE, "dark");

        assert_eq!(m.toggle(), Some(ColorMode::Light));
    }

    #[test]
    fn test_ambient_change_applies_when_unset() {
        let mut m = manager(MemoryStore::new(), FixedScheme::light());
        m.ambient_changed(true);
        assert_eq!(m.current(), Some(ColorMode::Dark));
    }

    #[test]
    fn test_ambient_change_pinned_by_persisted_key() {
        let mut store = MemoryStore::new();
        store.set(THEME_STORAGE_KEY, "light");
        let mut m = manager(store, FixedScheme::light());
        m.apply(ColorMode::Light);

        m.ambient_changed(true);
        assert_eq!(m.current(), Some(ColorMode::Light));
    }

    #[test]
    fn test_handle_key_toggles_on_shortcut() {
        let mut m = manager(MemoryStore::new(), FixedScheme::unsupported());
        m.apply(ColorMode::Light);

        assert!(m.handle_key(&KeyPress::new('D').ctrl().shift()));
        assert_eq!(m.current(), Some(ColorMode::Dark));

        assert!(m.handle_key(&KeyPress::new('D').meta().shift()));
        assert_eq!(m.current(), Some(ColorMode::Light));
    }

    #[test]
    fn test_handle_key_ignores_other_combinations() {
        let mut m = manager(MemoryStore::new(), FixedScheme::unsupported());
        m.apply(ColorMode::Light);

        assert!(!m.handle_key(&KeyPress::new('D').ctrl()));
        assert!(!m.handle_key(&KeyPress::new('D').shift()));
        assert!(!m.handle_key(&KeyPress::new('E').ctrl().shift()));
        assert_eq!(m.current(), Some(ColorMode::Light));
    }

    #[test]
    fn test_unavailable_storage_degrades_silently() {
        let surface = MemorySurface::new().with_element(ROOT_ELEMENT);
        let mut m = ThemeManager::new(NullStore, FixedScheme::dark(), surface);

        assert_eq!(m.init(), ColorMode::Dark);
        assert_eq!(m.toggle(), Some(ColorMode::Light));
        // Nothing persisted, so ambient changes still apply.
        m.ambient_changed(true);
        assert_eq!(m.current(), Some(ColorMode::Dark));
    }

    #[test]
    fn test_missing_root_element_noops() {
        let mut m = ThemeManager::new(
            MemoryStore::new(),
            FixedScheme::unsupported(),
            MemorySurface::new(),
        );
        m.apply(ColorMode::Dark);
        assert_eq!(m.current(), None);
        assert_eq!(m.toggle(), None);
    }
}
