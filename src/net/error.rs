//! Tagged submit failures and Record API response classification.
//!
//! ERROR HANDLING
//! ==============
//! Every failure on the submit path is normalized into one `SubmitError`
//! variant carrying the message shown to the user. Raw transport detail is
//! logged where the error is built and never reaches the UI.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::fmt::Display;

use serde_json::Value;

pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred";
pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired. Please log in again.";

const STATUS_CREATED: u16 = 201;
const STATUS_UNAUTHORIZED: u16 = 401;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The Record API rejected the listing with a domain message.
    #[error("validation error: {message}")]
    Validation { message: String },
    /// The session is no longer valid.
    #[error("auth error: {message}")]
    Auth { message: String },
    /// A request could not be completed.
    #[error("transport error: {message}")]
    Transport { message: String },
    #[error("unknown error: {message}")]
    Unknown { message: String },
}

impl SubmitError {
    pub fn auth() -> Self {
        Self::Auth { message: SESSION_EXPIRED_MESSAGE.to_owned() }
    }

    /// Build a transport failure, logging `detail` and keeping only the fallback text.
    pub fn transport(detail: impl Display) -> Self {
        log::warn!("bulk-waste submit transport failure: {detail}");
        Self::Transport { message: FALLBACK_ERROR_MESSAGE.to_owned() }
    }

    pub fn unknown(detail: impl Display) -> Self {
        log::warn!("bulk-waste submit unknown failure: {detail}");
        Self::Unknown { message: FALLBACK_ERROR_MESSAGE.to_owned() }
    }

    /// User-facing message for toasts.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message }
            | Self::Auth { message }
            | Self::Transport { message }
            | Self::Unknown { message } => message,
        }
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }
}

const REJECTED_POINTERS: [&str; 2] = ["/errors/0/message", "/message"];
const UNCREATED_POINTERS: [&str; 1] = ["/error/0/message"];

/// First non-blank string found at `pointers`, in order.
fn first_message_at<'a>(body: &'a Value, pointers: &[&str]) -> Option<&'a str> {
    pointers
        .iter()
        .filter_map(|pointer| body.pointer(pointer).and_then(Value::as_str))
        .find(|message| !message.trim().is_empty())
}

/// Message from an error-status payload: `errors[0].message`, then `message`.
pub fn rejected_message(body: &Value) -> Option<&str> {
    first_message_at(body, &REJECTED_POINTERS)
}

/// Message from a success-status payload that did not create the listing: `error[0].message`.
pub fn uncreated_message(body: &Value) -> Option<&str> {
    first_message_at(body, &UNCREATED_POINTERS)
}

/// Classify a Record API response by status and raw body text.
///
/// # Errors
///
/// Returns the tagged failure for any status other than 201.
pub fn classify_record_response(status: u16, body: &str) -> Result<(), SubmitError> {
    if status == STATUS_CREATED {
        return Ok(());
    }
    if status == STATUS_UNAUTHORIZED {
        return Err(SubmitError::auth());
    }

    let payload = serde_json::from_str::<Value>(body).unwrap_or(Value::Null);
    if (200..300).contains(&status) {
        let message = uncreated_message(&payload).unwrap_or(FALLBACK_ERROR_MESSAGE);
        return Err(SubmitError::Validation { message: message.to_owned() });
    }
    match rejected_message(&payload) {
        Some(message) => Err(SubmitError::Validation { message: message.to_owned() }),
        None => Err(SubmitError::unknown(format!("record api status {status}"))),
    }
}
