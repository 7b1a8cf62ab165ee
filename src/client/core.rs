use crate::error::normalize_error;
use crate::reporting::{AppError, ErrorReporter};
use crate::session::SessionStore;
use crate::transport::HttpTransport;
use crate::{Error, Result};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::error;

/// Statuses accepted by write operations (create/edit/action endpoints).
pub(crate) const WRITE_SUCCESS: &[StatusCode] = &[
    StatusCode::OK,
    StatusCode::CREATED,
    StatusCode::ACCEPTED,
    StatusCode::NO_CONTENT,
];

/// Typed client for the NameX name-reservation API.
///
/// Each endpoint method either returns the backend payload (`Some`/`true`) or
/// forwards a normalized [`AppError`] to the injected reporter and returns a
/// sentinel (`None`/`false`). Every sentinel method has a `try_*` sibling
/// returning `Result<T>` for callers that want the typed error instead.
pub struct NamexClient {
    pub(crate) transport: HttpTransport,
    pub(crate) session: Arc<dyn SessionStore>,
    pub(crate) reporter: Arc<dyn ErrorReporter>,
}

impl NamexClient {
    pub fn builder() -> crate::client::builder::NamexClientBuilder {
        crate::client::builder::NamexClientBuilder::new()
    }

    /// The session store this client reads identity and lock state from.
    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    /// Normalize, log and forward a failure, keyed by its stable record id.
    pub(crate) async fn fail(&self, op: &str, id: &str, err: &Error, default_message: &str) {
        let msg = normalize_error(err, default_message);
        error!(target: "namex_client", "{op}() = {msg}");
        self.reporter.report(AppError::new(id, msg)).await;
    }
}

/// Reject any status outside `accepted`, capturing the body for
/// error normalization.
pub(crate) async fn expect_status(response: Response, accepted: &[StatusCode]) -> Result<Response> {
    let status = response.status();
    if accepted.contains(&status) {
        return Ok(response);
    }
    let body = response.bytes().await.unwrap_or_default();
    Err(Error::remote(status, body))
}

/// Reject non-2xx statuses, capturing the body for error normalization.
pub(crate) async fn expect_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.bytes().await.unwrap_or_default();
    Err(Error::remote(status, body))
}

/// Decode the response body. An empty body is a decode error, which mirrors
/// the per-operation requirement that success carries a payload.
pub(crate) async fn json_body<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
