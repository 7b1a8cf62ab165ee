//! Mock HTTP server setup for integration tests.

use mockito::{Server, ServerGuard};
use namex_client::{InMemoryReporter, InMemorySession, NamexClient};
use std::sync::Arc;

/// Test fixture wiring a client to a mock server, with the session store and
/// reporter kept inspectable.
pub struct TestHarness {
    pub server: ServerGuard,
    pub client: NamexClient,
    pub session: Arc<InMemorySession>,
    pub reporter: Arc<InMemoryReporter>,
}

impl TestHarness {
    pub async fn new() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();

        let server = Server::new_async().await;
        let session = Arc::new(InMemorySession::new());
        let reporter = Arc::new(InMemoryReporter::new());

        let client = NamexClient::builder()
            .session(session.clone())
            .reporter(reporter.clone())
            .base_url_override(server.url())
            .build()
            .expect("client should build");

        Self {
            server,
            client,
            session,
            reporter,
        }
    }
}
