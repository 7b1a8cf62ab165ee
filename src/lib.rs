//! # namex-client
//!
//! Typed async client for the NameX name-reservation REST API.
//!
//! ## Overview
//!
//! This library wraps each NameX endpoint in a typed method: create, edit,
//! checkout/checkin, cancel/rollback, payments, search, statistics, name
//! analysis, and result-PDF download. Every call attaches the session
//! identity headers and a correlation id, classifies the response, and either
//! returns the backend payload or forwards a normalized error record to an
//! application-supplied reporter.
//!
//! ## Key Features
//!
//! - **Sentinel or typed errors**: endpoint methods return `Option`/`bool`
//!   after reporting; each has a `try_*` sibling returning [`Result`] for
//!   callers that want the typed error.
//! - **Explicit collaborators**: the per-session store ([`SessionStore`]) and
//!   error reporter ([`ErrorReporter`]) are injected through the builder and
//!   owned by the caller.
//! - **Marker comments**: create/edit submissions stamp the action taken into
//!   the record's annotation field, keeping at most one marker present.
//! - **Edit locking**: checkout/checkin round-trips the lock token through
//!   the session store.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use namex_client::{keys, InMemorySession, NamexClient, NrAction, SessionStore};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> namex_client::Result<()> {
//!     let session = Arc::new(InMemorySession::new());
//!     session.set(keys::BASE_URL, "https://namex.example.com/api/v1");
//!
//!     let client = NamexClient::builder().session(session).build()?;
//!
//!     if let Some(nr) = client.get_name_request(true).await {
//!         client.patch_name_request_by_action(nr.id.unwrap(), NrAction::Upgrade).await;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client, builder, and per-endpoint methods |
//! | [`transport`] | HTTP transport: base URL, common headers, correlation |
//! | [`session`] | Per-session storage collaborator and well-known keys |
//! | [`reporting`] | Error-reporting collaborator and record type |
//! | [`actions`] | Request actions and the marker-comment transform |
//! | [`types`] | Wire types (records, payments, search, analysis) |
//! | [`error`] | Error taxonomy and normalization |

pub mod actions;
pub mod client;
pub mod error;
pub mod reporting;
pub mod session;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use actions::{add_action_comment, NrAction, RollbackAction};
pub use client::{NamexClient, NamexClientBuilder, ANALYSIS_TIMEOUT};
pub use error::{normalize_error, Error};
pub use reporting::{AppError, ErrorReporter, InMemoryReporter, NoopReporter, TracingReporter};
pub use session::{keys, InMemorySession, SessionStore};
pub use types::{
    AdvancedSearch, AdvancedSearchResults, AnalysisJson, CheckoutToken, NameAnalysisQuery,
    NameRequest, NrState, Payment, PaymentOutcome, Stats,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
