//! Submission state and status banner kinds.

/// Lifecycle of a submission attempt.
///
/// Drives the submit control's enabled flag and label, and the status
/// banner. `Succeeded` returns to `Idle` automatically after a fixed delay;
/// `Failed` persists until the next attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Visual kind of the status banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    /// The banner element's `class` attribute value for this kind.
    pub(crate) fn class(&self) -> &'static str {
        match self {
            StatusKind::Success => "form-status success",
            StatusKind::Error => "form-status error",
        }
    }
}

/// The banner element's `class` attribute value when no status is shown.
pub(crate) const IDLE_STATUS_CLASS: &str = "form-status";
