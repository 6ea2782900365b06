//! Document surface abstraction.

use std::collections::HashMap;

/// Read/write access to named elements of a structured document tree.
///
/// The core never constructs elements; it only reads and writes attributes,
/// text content, control values, and the enabled flag on elements the host
/// exposes by id. Writes to an element that does not exist are silent no-ops:
/// a page without a given collaborator simply degrades to doing nothing,
/// never to an error.
pub trait Surface {
    /// Returns true if an element with this id exists.
    fn has_element(&self, id: &str) -> bool;

    /// Reads an attribute, `None` if the element or attribute is absent.
    fn attribute(&self, id: &str, name: &str) -> Option<String>;

    /// Sets an attribute on an element.
    fn set_attribute(&mut self, id: &str, name: &str, value: &str);

    /// Removes an attribute from an element.
    fn remove_attribute(&mut self, id: &str, name: &str);

    /// Reads an element's text content, `None` if the element is absent.
    fn text(&self, id: &str) -> Option<String>;

    /// Replaces an element's text content.
    fn set_text(&mut self, id: &str, text: &str);

    /// Reads a form control's current value, `None` if the element is absent.
    fn value(&self, id: &str) -> Option<String>;

    /// Replaces a form control's value.
    fn set_value(&mut self, id: &str, value: &str);

    /// Enables or disables an interactive control.
    fn set_enabled(&mut self, id: &str, enabled: bool);

    /// Returns whether a control is enabled. Absent elements report true.
    fn is_enabled(&self, id: &str) -> bool;
}

#[derive(Debug, Clone)]
struct Element {
    attributes: HashMap<String, String>,
    text: String,
    value: String,
    enabled: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            attributes: HashMap::new(),
            text: String::new(),
            value: String::new(),
            enabled: true,
        }
    }
}

/// In-memory [`Surface`] backed by a map of elements.
///
/// Used by the test suite and by any embedder that wants a headless
/// document. Elements must be registered up front; writes against
/// unregistered ids are dropped, matching how the components degrade on a
/// page that lacks a collaborator.
///
/// # Example
///
/// ```rust
/// use forefront::{MemorySurface, Surface};
///
/// let mut surface = MemorySurface::new().with_element("form-status");
/// surface.set_text("form-status", "Saved.");
/// assert_eq!(surface.text("form-status").as_deref(), Some("Saved."));
///
/// // Unregistered element: the write is dropped.
/// surface.set_text("missing", "never lands");
/// assert_eq!(surface.text("missing"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    elements: HashMap<String, Element>,
}

impl MemorySurface {
    /// Creates an empty surface with no elements.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an element, returning the surface for chaining.
    pub fn with_element(mut self, id: &str) -> Self {
        self.insert_element(id);
        self
    }

    /// Registers an element by id.
    pub fn insert_element(&mut self, id: &str) {
        self.elements.entry(id.to_string()).or_default();
    }
}

impl Surface for MemorySurface {
    fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn attribute(&self, id: &str, name: &str) -> Option<String> {
        self.elements.get(id)?.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) {
        if let Some(element) = self.elements.get_mut(id) {
            element
                .attributes
                .insert(name.to_string(), value.to_string());
        }
    }

    fn remove_attribute(&mut self, id: &str, name: &str) {
        if let Some(element) = self.elements.get_mut(id) {
            element.attributes.remove(name);
        }
    }

    fn text(&self, id: &str) -> Option<String> {
        self.elements.get(id).map(|e| e.text.clone())
    }

    fn set_text(&mut self, id: &str, text: &str) {
        if let Some(element) = self.elements.get_mut(id) {
            element.text = text.to_string();
        }
    }

    fn value(&self, id: &str) -> Option<String> {
        self.elements.get(id).map(|e| e.value.clone())
    }

    fn set_value(&mut self, id: &str, value: &str) {
        if let Some(element) = self.elements.get_mut(id) {
            element.value = value.to_string();
        }
    }

    fn set_enabled(&mut self, id: &str, enabled: bool) {
        if let Some(element) = self.elements.get_mut(id) {
            element.enabled = enabled;
        }
    }

    fn is_enabled(&self, id: &str) -> bool {
        self.elements.get(id).map(|e| e.enabled).unwrap_or(true)
    }
}
