//! Error taxonomy for backend requests.
//!
//! ERROR HANDLING
//! ==============
//! Every request funnels its failure through `classify_status` so the rest
//! of the client can branch on a small closed set of outcomes instead of
//! raw status codes. `SessionInvalidated` is the only variant with global
//! consequences; everything else stays local to the caller.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failure modes a backend request can surface to the UI.
///
/// Views branch on the variant: `Validation` renders inline next to the
/// offending form, `SessionInvalidated` is handled once globally, and the
/// rest become failure notices local to the triggering screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Input rejected locally before any request was sent.
    #[error("{0}")]
    Validation(String),
    /// The server refused the request (4xx other than a session-level 401).
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// A credentialed request came back 401: the stored session is dead
    /// everywhere, not just for this call.
    #[error("Your session has expired. Please sign in again.")]
    SessionInvalidated,
    /// The server failed internally (5xx).
    #[error("The server reported an error (status {status}).")]
    Server { status: u16 },
    /// The request never completed (network failure, DNS, abort).
    #[error("Could not reach the server: {0}")]
    Transport(String),
}

impl ApiError {
    /// True when the failure invalidates the stored session.
    pub fn is_session_invalidated(&self) -> bool {
        matches!(self, ApiError::SessionInvalidated)
    }
}

/// Whether the endpoint that produced a response carries the session token.
///
/// A 401 means different things on each side of this line: on an `Open`
/// endpoint (login, signup, health) it is an ordinary rejection of the
/// submitted credentials; on an `Authenticated` endpoint it proves the
/// stored token is no longer accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointScope {
    Open,
    Authenticated,
}

/// Map a non-2xx status (plus any server-provided message) to an `ApiError`.
pub fn classify_status(status: u16, message: Option<String>, scope: EndpointScope) -> ApiError {
    if status == 401 && scope == EndpointScope::Authenticated {
        return ApiError::SessionInvalidated;
    }
    if status >= 500 {
        return ApiError::Server { status };
    }
    let message = message.unwrap_or_else(|| default_rejection_message(status));
    ApiError::Rejected { status, message }
}

/// Fallback text when the server body carried no usable message.
fn default_rejection_message(status: u16) -> String {
    match status {
        401 => "Incorrect email or password.".to_owned(),
        403 => "You do not have permission to do that.".to_owned(),
        404 => "The requested record was not found.".to_owned(),
        _ => format!("The request was rejected (status {status})."),
    }
}

/// Pull a human-readable message out of a JSON error body.
///
/// The backend reports errors as `{"detail": "..."}`; older handlers used
/// `message` or `error` keys. Non-string payloads (structured validation
/// detail arrays, for example) are skipped so the status-based fallback
/// applies instead.
pub fn error_message_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    for key in ["detail", "message", "error"] {
        if let Some(text) = value.get(key).and_then(serde_json::Value::as_str) {
            if !text.is_empty() {
                return Some(text.to_owned());
            }
        }
    }
    None
}
