use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// A payment record attached to a name request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Per-call result of a payment operation.
///
/// A completed exchange with a 2xx status other than 200 yields an
/// unsuccessful outcome rather than an error record.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOutcome {
    pub payment_success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_status_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<Payment>,
}

impl PaymentOutcome {
    pub(crate) fn succeeded(status: StatusCode, payment: Payment) -> Self {
        Self {
            payment_success: true,
            http_status_code: Some(status.as_u16().to_string()),
            payment: Some(payment),
        }
    }

    pub(crate) fn failed(status: StatusCode) -> Self {
        Self {
            payment_success: false,
            http_status_code: Some(status.as_u16().to_string()),
            payment: None,
        }
    }
}
