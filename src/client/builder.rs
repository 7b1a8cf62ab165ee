use crate::client::core::NamexClient;
use crate::reporting::{noop_reporter, ErrorReporter};
use crate::session::{InMemorySession, SessionStore};
use crate::transport::HttpTransport;
use crate::{Error, Result};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Builder for [`NamexClient`].
///
/// Keep this surface small and predictable: a session store, a reporter, and
/// the transport knobs needed for tests and deployments.
pub struct NamexClientBuilder {
    session: Option<Arc<dyn SessionStore>>,
    reporter: Arc<dyn ErrorReporter>,
    base_url_override: Option<String>,
    timeout: Option<Duration>,
}

impl NamexClientBuilder {
    pub fn new() -> Self {
        Self {
            session: None,
            reporter: noop_reporter(),
            base_url_override: None,
            timeout: None,
        }
    }

    /// Inject the session store. Defaults to a fresh [`InMemorySession`].
    pub fn session(mut self, session: Arc<dyn SessionStore>) -> Self {
        self.session = Some(session);
        self
    }

    /// Inject an error reporter. Default is a no-op reporter.
    pub fn reporter(mut self, reporter: Arc<dyn ErrorReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Override the base URL from the session store.
    ///
    /// This is primarily for testing with mock servers; in production the
    /// base URL comes from the session store.
    pub fn base_url_override(mut self, base_url: impl Into<String>) -> Self {
        self.base_url_override = Some(base_url.into());
        self
    }

    /// Override the client-wide request timeout
    /// (default 30 s, env-overridable via `NAMEX_HTTP_TIMEOUT_SECS`).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<NamexClient> {
        if let Some(base_url) = &self.base_url_override {
            Url::parse(base_url)
                .map_err(|e| Error::Precondition(format!("invalid base URL override: {e}")))?;
        }

        let session = self
            .session
            .unwrap_or_else(|| Arc::new(InMemorySession::new()));
        let transport =
            HttpTransport::new(session.clone(), self.base_url_override, self.timeout)?;

        Ok(NamexClient {
            transport,
            session,
            reporter: self.reporter,
        })
    }
}

impl Default for NamexClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_base_url_override() {
        let err = NamexClientBuilder::new()
            .base_url_override("not a url")
            .build()
            .err()
            .expect("build should fail");
        assert!(matches!(err, Error::Precondition(_)));
    }

    #[test]
    fn builds_with_defaults() {
        assert!(NamexClientBuilder::new().build().is_ok());
    }
}
