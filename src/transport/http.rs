use crate::session::{keys, SessionStore};
use crate::{Error, Result};
use reqwest::{Method, RequestBuilder, Response};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

/// Common headers attached to every call, sourced from the session store.
/// Absent session values mean the header is omitted.
const COMMON_HEADERS: &[(&str, &str)] = &[
    ("BCREG-NR", keys::NR_NUMBER),
    ("BCREG-NRL", keys::NR_LINK),
    ("BCREG-User-Phone", keys::PHONE),
    ("BCREG-User-Email", keys::EMAIL),
];

/// Thin wrapper around `reqwest` that resolves the base URL, stamps the
/// session identity headers and a correlation id on every request.
pub struct HttpTransport {
    client: reqwest::Client,
    session: Arc<dyn SessionStore>,
    base_url_override: Option<String>,
}

impl HttpTransport {
    pub fn new(
        session: Arc<dyn SessionStore>,
        base_url_override: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        // Minimal production-friendly default (env-overridable).
        let timeout = timeout.unwrap_or_else(|| {
            let secs = env::var("NAMEX_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(30);
            Duration::from_secs(secs)
        });

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            session,
            base_url_override,
        })
    }

    /// Resolve the base URL: builder override first, then the session store.
    pub fn base_url(&self) -> Result<String> {
        self.base_url_override
            .clone()
            .or_else(|| self.session.get(keys::BASE_URL))
            .map(|url| url.trim_end_matches('/').to_string())
            .ok_or_else(|| Error::Precondition("no base URL configured".to_string()))
    }

    /// Start a request with the common headers and a fresh correlation id.
    pub fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = format!("{}{}", self.base_url()?, path);
        let request_id = Uuid::new_v4();

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header("x-request-id", request_id.to_string());

        for (header, key) in COMMON_HEADERS {
            if let Some(value) = self.session.get(key) {
                request = request.header(*header, value);
            }
        }

        debug!(
            target: "namex_client",
            %method,
            %url,
            %request_id,
            nr = self.session.get(keys::NR_NUMBER).as_deref().unwrap_or(""),
            "outbound request"
        );

        Ok(request)
    }

    pub async fn send(&self, request: RequestBuilder) -> Result<Response> {
        Ok(request.send().await?)
    }
}
