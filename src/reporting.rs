//! Error-reporting collaborator.
//!
//! Endpoint methods surface failures indirectly: they return a sentinel and
//! forward a normalized [`AppError`] record to whatever [`ErrorReporter`] the
//! application injected. The crate ships three reporters:
//!
//! | Reporter | Use |
//! |----------|-----|
//! | [`NoopReporter`] | Default; discards records |
//! | [`InMemoryReporter`] | Captures records for inspection in tests |
//! | [`TracingReporter`] | Emits records as `tracing` error events |

use async_trait::async_trait;
use serde::Serialize;
use std::sync::{Arc, RwLock};

/// Normalized error record delivered to the reporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppError {
    /// Stable identifier of the failing operation (e.g. `get-name-request-error`).
    pub id: String,
    /// Normalized, single-line message (line breaks rewritten to `<br>`).
    pub error: String,
}

impl AppError {
    pub fn new(id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            error: error.into(),
        }
    }
}

/// Destination for [`AppError`] records.
#[async_trait]
pub trait ErrorReporter: Send + Sync {
    async fn report(&self, error: AppError);
}

/// Reporter that drops every record.
pub struct NoopReporter;

#[async_trait]
impl ErrorReporter for NoopReporter {
    async fn report(&self, _error: AppError) {}
}

/// Returns a shared no-op reporter.
pub fn noop_reporter() -> Arc<dyn ErrorReporter> {
    Arc::new(NoopReporter)
}

/// In-memory reporter for testing.
#[derive(Default)]
pub struct InMemoryReporter {
    records: Arc<RwLock<Vec<AppError>>>,
}

impl InMemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<AppError> {
        self.records.read().unwrap().clone()
    }

    pub fn records_by_id(&self, id: &str) -> Vec<AppError> {
        self.records
            .read()
            .unwrap()
            .iter()
            .filter(|r| r.id == id)
            .cloned()
            .collect()
    }

    pub fn clear(&self) {
        self.records.write().unwrap().clear();
    }

    pub fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ErrorReporter for InMemoryReporter {
    async fn report(&self, error: AppError) {
        self.records.write().unwrap().push(error);
    }
}

/// Reporter that forwards records to `tracing` at error level.
pub struct TracingReporter;

#[async_trait]
impl ErrorReporter for TracingReporter {
    async fn report(&self, error: AppError) {
        tracing::error!(target: "namex_client", id = %error.id, "{}", error.error);
    }
}
