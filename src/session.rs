//! Ambient per-session storage collaborator.
//!
//! The backend correlates calls through a handful of session-scoped values
//! (base URL, bearer token, NR number, lock token, contact fields). The store
//! is owned and lifecycle-managed by the caller and injected into the client
//! builder; the client reads and writes it but never initializes it.

use std::collections::HashMap;
use std::sync::RwLock;

/// Well-known session keys read and written by the client.
///
/// Key names match the backend's session conventions so a store can be backed
/// by an existing web session without translation.
pub mod keys {
    /// Base URL of the NameX API.
    pub const BASE_URL: &str = "BASE_URL";
    /// Bearer token used by the search endpoint.
    pub const AUTH_TOKEN: &str = "KEYCLOAK_TOKEN";
    /// Current NR number, sent as the `BCREG-NR` header.
    pub const NR_NUMBER: &str = "BCREG-nrNum";
    /// NR reference link, sent as the `BCREG-NRL` header.
    pub const NR_LINK: &str = "BCREG-NRL";
    /// Applicant phone number, sent as the `BCREG-User-Phone` header.
    pub const PHONE: &str = "BCREG-phoneNumber";
    /// Applicant email address, sent as the `BCREG-User-Email` header.
    pub const EMAIL: &str = "BCREG-emailAddress";
    /// Actor holding the edit lock.
    pub const CHECKED_OUT_BY: &str = "checkedOutBy";
    /// Timestamp the edit lock was acquired.
    pub const CHECKED_OUT_DT: &str = "checkedOutDt";
}

/// String key/value session storage.
///
/// Implementations must be cheap to clone behind an `Arc` and safe to share
/// across tasks. All operations are synchronous; stores backed by remote
/// systems should cache locally.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory session store. Default for tests and standalone use.
#[derive(Debug, Default)]
pub struct InMemorySession {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemorySession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySession {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.write().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove_round_trip() {
        let session = InMemorySession::new();
        assert_eq!(session.get(keys::NR_NUMBER), None);

        session.set(keys::NR_NUMBER, "NR 1234567");
        assert_eq!(session.get(keys::NR_NUMBER), Some("NR 1234567".to_string()));

        session.set(keys::NR_NUMBER, "NR 7654321");
        assert_eq!(session.get(keys::NR_NUMBER), Some("NR 7654321".to_string()));

        session.remove(keys::NR_NUMBER);
        assert_eq!(session.get(keys::NR_NUMBER), None);
    }
}
