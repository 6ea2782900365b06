//! Contact form validation and submission.
//!
//! This module provides:
//!
//! - field rules: pure per-field validation functions with fixed messages
//! - [`FormValidator`]: per-field error display lifecycle over a surface
//! - [`ContactForm`]: the submit pipeline gating a single network POST
//! - [`Transport`] / [`HttpTransport`]: the network seam and its production
//!   implementation

mod contact;
mod rules;
mod status;
mod transport;
mod validator;

pub use contact::{
    ContactForm, ACTION_ATTRIBUTE, FAILURE_BANNER, FORM_ELEMENT, SENDING_LABEL, STATUS_ELEMENT,
    STATUS_RESET_DELAY, SUBMIT_CONTROL, SUCCESS_BANNER, VALIDATION_FAILED_BANNER,
};
pub use rules::{
    rule_for, FieldRule, EMAIL_INVALID, EMAIL_REQUIRED, FIELDS, MESSAGE_REQUIRED,
    MESSAGE_TOO_SHORT, NAME_REQUIRED, NAME_TOO_SHORT, SUBJECT_REQUIRED,
};
pub use status::{StatusKind, SubmissionState};
pub use transport::{HttpTransport, Transport, TransportError};
pub use validator::FormValidator;
