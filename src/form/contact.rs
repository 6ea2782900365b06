//! Contact form submit pipeline.

use std::time::Duration;

use tracing::{debug, error};

use super::rules::FIELDS;
use super::status::{StatusKind, SubmissionState, IDLE_STATUS_CLASS};
use super::transport::Transport;
use super::validator::FormValidator;
use crate::platform::Surface;

/// Surface id of the form element; its `action` attribute holds the
/// submission target URL.
pub const FORM_ELEMENT: &str = "contact-form";

/// Surface id of the status banner element.
pub const STATUS_ELEMENT: &str = "form-status";

/// Surface id of the submit control.
pub const SUBMIT_CONTROL: &str = "form-submit";

/// Attribute on [`FORM_ELEMENT`] naming the submission endpoint.
pub const ACTION_ATTRIBUTE: &str = "action";

/// Label shown on the submit control while a request is in flight.
pub const SENDING_LABEL: &str = "Sending...";

/// How long a success banner stays up before reverting to idle.
pub const STATUS_RESET_DELAY: Duration = Duration::from_millis(5000);

pub const VALIDATION_FAILED_BANNER: &str = "Please fix the errors above before submitting.";

pub const SUCCESS_BANNER: &str =
    "Thank you! Your message has been sent successfully. I'll get back to you soon.";

pub const FAILURE_BANNER: &str =
    "Oops! There was a problem sending your message. Please try again or email me directly.";

/// The contact form: validation gate, submit control lifecycle, status
/// banner, and a single POST per explicit submit.
///
/// Binding no-ops entirely when the page has no form element, so pages
/// without a contact form pay nothing and other components are unaffected.
///
/// The success banner's automatic return to idle is modeled as an explicit
/// pending-delay value rather than a captured timer callback: after a
/// successful submit, [`banner_reset_after`](Self::banner_reset_after)
/// reports the delay and the host invokes
/// [`expire_status`](Self::expire_status) once it elapses.
#[derive(Debug)]
pub struct ContactForm<U, T> {
    validator: FormValidator<U>,
    transport: T,
    state: SubmissionState,
    pending_banner_reset: Option<Duration>,
}

impl<U: Surface, T: Transport> ContactForm<U, T> {
    /// Binds to the page's form element.
    ///
    /// Returns `None` when [`FORM_ELEMENT`] is absent; the component then
    /// does not exist for this page.
    pub fn bind(surface: U, transport: T) -> Option<Self> {
        if !surface.has_element(FORM_ELEMENT) {
            return None;
        }
        debug!("contact form initialized");
        Some(Self {
            validator: FormValidator::new(surface),
            transport,
            state: SubmissionState::Idle,
            pending_banner_reset: None,
        })
    }

    /// Current submission state.
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Returns the underlying surface.
    pub fn surface(&self) -> &U {
        self.validator.surface()
    }

    /// Returns the underlying surface mutably, for host-side wiring.
    pub fn surface_mut(&mut self) -> &mut U {
        self.validator.surface_mut()
    }

    /// Blur handler for a field element.
    pub fn handle_blur(&mut self, field: &str) {
        self.validator.handle_blur(field);
    }

    /// Input handler for a field element.
    pub fn handle_input(&mut self, field: &str) {
        self.validator.handle_input(field);
    }

    /// Delay after which the host should call
    /// [`expire_status`](Self::expire_status), if a reset is pending.
    pub fn banner_reset_after(&self) -> Option<Duration> {
        self.pending_banner_reset
    }

    /// Host-invoked timer callback: reverts a success banner to idle.
    ///
    /// A failed banner is unaffected; it persists until the next submit.
    pub fn expire_status(&mut self) {
        self.pending_banner_reset = None;
        if self.state == SubmissionState::Succeeded {
            self.state = SubmissionState::Idle;
            self.clear_banner();
        }
    }

    /// Submit handler. The host must have suppressed the platform's default
    /// form submission before calling this.
    ///
    /// Invalid input short-circuits without network I/O. A valid form
    /// disables the submit control, swaps its label, POSTs the live field
    /// values once, and maps the outcome onto the status banner. The control
    /// is re-enabled and its label restored on every path. Returns the
    /// resulting state.
    pub fn submit(&mut self) -> SubmissionState {
        // The disabled control serializes attempts; guard anyway so a stray
        // second event during flight cannot reach the network.
        if self.state == SubmissionState::Submitting {
            return self.state;
        }
        self.pending_banner_reset = None;

        if !self.validator.validate_form() {
            self.show_status(StatusKind::Error, VALIDATION_FAILED_BANNER);
            self.state = SubmissionState::Failed;
            return self.state;
        }

        self.state = SubmissionState::Submitting;
        let original_label = self
            .validator
            .surface()
            .text(SUBMIT_CONTROL)
            .unwrap_or_default();
        let surface = self.validator.surface_mut();
        surface.set_enabled(SUBMIT_CONTROL, false);
        surface.set_text(SUBMIT_CONTROL, SENDING_LABEL);

        let action = self
            .validator
            .surface()
            .attribute(FORM_ELEMENT, ACTION_ATTRIBUTE)
            .unwrap_or_default();
        let payload = self.collect_payload();

        match self.transport.post_form(&action, &payload) {
            Ok(()) => {
                self.state = SubmissionState::Succeeded;
                self.show_status(StatusKind::Success, SUCCESS_BANNER);
                self.reset_fields();
                self.pending_banner_reset = Some(STATUS_RESET_DELAY);
            }
            Err(err) => {
                error!(error = %err, "contact form submission failed");
                self.state = SubmissionState::Failed;
                self.show_status(StatusKind::Error, FAILURE_BANNER);
            }
        }

        let surface = self.validator.surface_mut();
        surface.set_enabled(SUBMIT_CONTROL, true);
        surface.set_text(SUBMIT_CONTROL, &original_label);
        self.state
    }

    fn collect_payload(&self) -> Vec<(String, String)> {
        FIELDS
            .iter()
            .filter_map(|field| {
                self.validator
                    .surface()
                    .value(field)
                    .map(|value| (field.to_string(), value))
            })
            .collect()
    }

    fn reset_fields(&mut self) {
        for field in FIELDS {
            self.validator.surface_mut().set_value(field, "");
        }
    }

    fn show_status(&mut self, kind: StatusKind, message: &str) {
        let surface = self.validator.surface_mut();
        surface.set_attribute(STATUS_ELEMENT, "class", kind.class());
        surface.set_text(STATUS_ELEMENT, message);
    }

    fn clear_banner(&mut self) {
        let surface = self.validator.surface_mut();
        surface.set_attribute(STATUS_ELEMENT, "class", IDLE_STATUS_CLASS);
        surface.set_text(STATUS_ELEMENT, "");
    }
}
