//! HTTP response type for the Stash client.

use crate::clients::errors::{HttpError, HttpResponseError};

/// A raw HTTP response from the Stash server.
///
/// The body is kept as text; JSON decoding happens in the GraphQL layer so
/// that a malformed body can be reported separately from a transport error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, body: String) -> Self {
        Self { code, body }
    }

    /// Returns `true` if the status code is exactly 200.
    ///
    /// Stash answers every successful GraphQL request with 200; any other
    /// status, including other 2xx codes, is treated as a failure.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code == 200
    }

    /// Turns a response with a status other than 200 into an error.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] carrying the status and raw body.
    pub fn error_for_status(self) -> Result<Self, HttpError> {
        if self.is_ok() {
            return Ok(self);
        }
        Err(HttpError::Response(HttpResponseError {
            code: self.code,
            body: self.body,
        }))
    }
}
