//! Per-field validation and error display lifecycle.

use super::rules::{rule_for, FIELDS};
use crate::platform::Surface;

/// Attribute marking a field invalid for assistive technology.
const ARIA_INVALID: &str = "aria-invalid";

/// Runs field rules against live values and keeps each field's error display
/// in sync.
///
/// Invariant: a field carries `aria-invalid="true"` if and only if its error
/// element shows a non-empty message. Both are written together by
/// [`validate_field`](Self::validate_field) and cleared together by the
/// input handler.
#[derive(Debug)]
pub struct FormValidator<U> {
    surface: U,
}

impl<U: Surface> FormValidator<U> {
    /// Wraps a document surface.
    pub fn new(surface: U) -> Self {
        Self { surface }
    }

    /// Returns the underlying surface.
    pub fn surface(&self) -> &U {
        &self.surface
    }

    /// Returns the underlying surface mutably.
    pub fn surface_mut(&mut self) -> &mut U {
        &mut self.surface
    }

    /// Id of the error-display element paired with `field`.
    fn error_element(field: &str) -> String {
        format!("{}-error", field)
    }

    /// Validates one field value, updating its error display.
    ///
    /// Fields without a registered rule pass through as valid and never get
    /// an error display. Returns whether the field is valid.
    pub fn validate_field(&mut self, field: &str, value: &str) -> bool {
        let rule = match rule_for(field) {
            Some(rule) => rule,
            None => return true,
        };

        match rule(value) {
            Some(message) => {
                self.show_error(field, message);
                false
            }
            None => {
                self.clear_error(field);
                true
            }
        }
    }

    /// Validates every registered field against its live value.
    ///
    /// All fields are evaluated, never short-circuited, so one pass surfaces
    /// every error. Fields whose element is absent from the page are
    /// skipped. Returns true iff every evaluated field passed.
    pub fn validate_form(&mut self) -> bool {
        let mut valid = true;
        for field in FIELDS {
            if let Some(value) = self.surface.value(field) {
                if !self.validate_field(field, &value) {
                    valid = false;
                }
            }
        }
        valid
    }

    /// Blur handler: re-validates the field from its live value.
    pub fn handle_blur(&mut self, field: &str) {
        if let Some(value) = self.surface.value(field) {
            self.validate_field(field, &value);
        }
    }

    /// Input handler: optimistically clears a shown error while the user is
    /// typing. No re-validation happens until the next blur or submit.
    pub fn handle_input(&mut self, field: &str) {
        if self.is_marked_invalid(field) {
            self.clear_error(field);
        }
    }

    /// Whether `field` currently carries the invalid marker.
    pub fn is_marked_invalid(&self, field: &str) -> bool {
        self.surface.attribute(field, ARIA_INVALID).as_deref() == Some("true")
    }

    fn show_error(&mut self, field: &str, message: &str) {
        self.surface.set_text(&Self::error_element(field), message);
        self.surface.set_attribute(field, ARIA_INVALID, "true");
    }

    fn clear_error(&mut self, field: &str) {
        self.surface.set_text(&Self::error_element(field), "");
        self.surface.remove_attribute(field, ARIA_INVALID);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::rules::{EMAIL_INVALID, NAME_REQUIRED};
    use crate::platform::MemorySurface;

    fn form_surface() -> MemorySurface {
        let mut surface = MemorySurface::new();
        for field in FIELDS {
            surface.insert_element(field);
            surface.insert_element(&format!("{}-error", field));
        }
        surface
    }

    fn fill_valid(surface: &mut MemorySurface) {
        surface.set_value("name", "Ada Lovelace");
        surface.set_value("email", "ada@lovelace.dev");
        surface.set_value("subject", "general");
        surface.set_value("message", "A message long enough to pass.");
    }

    #[test]
    fn test_validate_field_failure_shows_error_and_marker() {
        let mut v = FormValidator::new(form_surface());

        assert!(!v.validate_field("name", ""));
        assert_eq!(
            v.surface().text("name-error").as_deref(),
            Some(NAME_REQUIRED)
        );
        assert!(v.is_marked_invalid("name"));
    }

    #[test]
    fn test_validate_field_success_clears_both() {
        let mut v = FormValidator::new(form_surface());
        v.validate_field("name", "");

        assert!(v.validate_field("name", "Ada"));
        assert_eq!(v.surface().text("name-error").as_deref(), Some(""));
        assert!(!v.is_marked_invalid("name"));
    }

    #[test]
    fn test_unregistered_field_passes_through() {
        let mut v = FormValidator::new(form_surface());
        assert!(v.validate_field("company", ""));
        assert!(!v.is_marked_invalid("company"));
    }

    #[test]
    fn test_validate_form_all_valid() {
        let mut surface = form_surface();
        fill_valid(&mut surface);
        let mut v = FormValidator::new(surface);

        assert!(v.validate_form());
        for field in FIELDS {
            assert!(!v.is_marked_invalid(field));
        }
    }

    #[test]
    fn test_validate_form_marks_only_the_invalid_field() {
        let mut surface = form_surface();
        fill_valid(&mut surface);
        surface.set_value("email", "not-an-email");
        let mut v = FormValidator::new(surface);

        assert!(!v.validate_form());
        assert!(v.is_marked_invalid("email"));
        assert_eq!(
            v.surface().text("email-error").as_deref(),
            Some(EMAIL_INVALID)
        );
        for field in ["name", "subject", "message"] {
            assert!(!v.is_marked_invalid(field));
        }
    }

    #[test]
    fn test_validate_form_evaluates_all_fields() {
        // Every field empty: every error must surface in one pass.
        let mut v = FormValidator::new(form_surface());

        assert!(!v.validate_form());
        for field in FIELDS {
            assert!(v.is_marked_invalid(field), "{} not marked", field);
            assert_ne!(v.surface().text(&format!("{}-error", field)), Some(String::new()));
        }
    }

    #[test]
    fn test_validate_form_skips_absent_elements() {
        // Page exposes only the name field.
        let mut surface = MemorySurface::new()
            .with_element("name")
            .with_element("name-error");
        surface.set_value("name", "Ada");
        let mut v = FormValidator::new(surface);

        assert!(v.validate_form());
    }

    #[test]
    fn test_blur_revalidates_from_live_value() {
        let mut v = FormValidator::new(form_surface());
        v.surface_mut().set_value("name", "a");

        v.handle_blur("name");
        assert!(v.is_marked_invalid("name"));

        v.surface_mut().set_value("name", "Ada");
        v.handle_blur("name");
        assert!(!v.is_marked_invalid("name"));
    }

    #[test]
    fn test_input_clears_only_when_marked() {
        let mut v = FormValidator::new(form_surface());
        v.validate_field("name", "");
        assert!(v.is_marked_invalid("name"));

        v.handle_input("name");
        assert!(!v.is_marked_invalid("name"));
        assert_eq!(v.surface().text("name-error").as_deref(), Some(""));
    }

    #[test]
    fn test_input_on_clean_field_changes_nothing() {
        let mut v = FormValidator::new(form_surface());
        v.handle_input("name");
        assert!(!v.is_marked_invalid("name"));
        assert_eq!(v.surface().text("name-error").as_deref(), Some(""));
    }
}
