//! Network submission transport.

use thiserror::Error;

/// Error from a submission attempt.
///
/// Both variants map to the same user-visible outcome; the distinction
/// exists only for diagnostics. The message text is logged, never shown.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// The endpoint answered outside the 2xx class.
    #[error("submission endpoint returned status {0}")]
    Status(u16),
    /// The request never completed.
    #[error("network error: {0}")]
    Network(String),
}

/// One-shot form submission seam.
///
/// A single POST per explicit submit attempt; no retry, no backoff, no
/// cancellation.
pub trait Transport {
    /// Posts form-encoded `fields` to `url`, negotiating a JSON response.
    fn post_form(&self, url: &str, fields: &[(String, String)]) -> Result<(), TransportError>;
}

/// Blocking HTTP [`Transport`].
///
/// No explicit timeout is applied beyond the platform default, and an
/// in-flight request cannot be aborted; the submit control stays disabled
/// until the call settles.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpTransport;

impl HttpTransport {
    pub fn new() -> Self {
        Self
    }
}

impl Transport for HttpTransport {
    fn post_form(&self, url: &str, fields: &[(String, String)]) -> Result<(), TransportError> {
        let pairs = fields.iter().map(|(k, v)| (k.as_str(), v.as_str()));
        match ureq::post(url)
            .header("Accept", "application/json")
            .send_form(pairs)
        {
            Ok(_) => Ok(()),
            Err(ureq::Error::StatusCode(code)) => Err(TransportError::Status(code)),
            Err(err) => Err(TransportError::Network(err.to_string())),
        }
    }
}
