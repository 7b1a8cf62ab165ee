use serde::{Deserialize, Serialize};

/// State of a name request record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NrState {
    Approved,
    Cancelled,
    Conditional,
    Consumed,
    Draft,
    Expired,
    Historical,
    Hold,
    InProgress,
    PendingPayment,
    Refunded,
    Rejected,
}

impl NrState {
    /// Approved and rejected records expose so little editable data that they
    /// are never checked out.
    pub fn is_terminal(&self) -> bool {
        matches!(self, NrState::Approved | NrState::Rejected)
    }
}

/// A name request record, as sent to and returned by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nr_num: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<NrState>,
    /// Free-text annotation field; the marker-comment transform appends the
    /// last action taken here before submission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_action_cd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type_cd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicants: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub names: Option<serde_json::Value>,
    /// Backend fields the client does not interpret.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Exclusive edit lock, round-tripped in checkout/checkin calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutToken {
    pub checked_out_by: Option<String>,
    pub checked_out_dt: Option<String>,
}
