use bytes::Bytes;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Unified error type for the client.
///
/// Aggregates low-level failures into the categories the reporting layer
/// cares about: transport failures, completed exchanges with an unaccepted
/// status, local precondition failures, and decode failures.
#[derive(Debug, Error)]
pub enum Error {
    /// Network, timeout, or protocol failure before a usable response.
    #[error("http transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Exchange completed but the status was not in the operation's accepted
    /// set. Carries the raw body so normalization can extract a message.
    #[error("remote error: HTTP {status}")]
    Remote { status: u16, body: Bytes },

    /// Local invalid-input safety check.
    #[error("precondition failed: {0}")]
    Precondition(String),

    /// Response body could not be decoded as the expected type.
    #[error("response decode error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn remote(status: reqwest::StatusCode, body: Bytes) -> Self {
        Error::Remote {
            status: status.as_u16(),
            body,
        }
    }
}

static LINE_BREAKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\r|\n").unwrap());

/// Normalize an error into a single-line, user-reportable message.
///
/// For remote errors the body is mined for detail: a JSON object with a
/// string `message` field wins, a JSON string or plain text body is used
/// directly, and an empty or unhelpful body falls back to `default_message`.
/// The detail is composed as `"{error} [ {detail} ]"`. Transport errors have
/// no response body and compose with the default; everything else renders via
/// its display string. Line-break sequences are rewritten to `<br>` so the
/// record stays a single line.
pub fn normalize_error(err: &Error, default_message: &str) -> String {
    let message = match err {
        Error::Remote { body, .. } => {
            let detail = remote_detail(body).unwrap_or_else(|| default_message.to_string());
            if detail.is_empty() {
                err.to_string()
            } else {
                format!("{err} [ {detail} ]")
            }
        }
        Error::Transport(_) => {
            if default_message.is_empty() {
                err.to_string()
            } else {
                format!("{err} [ {default_message} ]")
            }
        }
        other => {
            let rendered = other.to_string();
            if rendered.is_empty() {
                default_message.to_string()
            } else {
                rendered
            }
        }
    };

    LINE_BREAKS.replace_all(&message, "<br>").into_owned()
}

/// Extract a human-readable detail from a failure response body.
fn remote_detail(body: &Bytes) -> Option<String> {
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(serde_json::Value::String(s)) => Some(s),
        // A structured body without a message field yields nothing; the call
        // site's default takes over.
        Ok(value) => value
            .get("message")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string),
        Err(_) => Some(text.to_string()),
    }
}
