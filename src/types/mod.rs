//! Wire types for the NameX API.
//!
//! Types carry the fields the client reads or writes; everything else the
//! backend sends is kept in a flattened passthrough map so payloads
//! round-trip unchanged.

pub mod name_request;
pub mod payment;
pub mod search;

pub use name_request::{CheckoutToken, NameRequest, NrState};
pub use payment::{Payment, PaymentOutcome};
pub use search::{AdvancedSearch, AdvancedSearchResults, AnalysisJson, NameAnalysisQuery, Stats};
