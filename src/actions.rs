//! Request actions and the marker-comment transform.
//!
//! Every create/edit submission records which action produced it by stamping
//! a `*** <description> ***` marker into the request's free-text
//! `additionalInfo` field. The transform keeps at most one marker present:
//! re-applying an action is a no-op, switching actions replaces the previous
//! marker in place, and unrelated text is preserved.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::NameRequest;

/// Action being performed on a name request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NrAction {
    Cancel,
    Edit,
    Incorporate,
    Reapply,
    Receipt,
    Refund,
    Resend,
    Result,
    RetryPayment,
    Upgrade,
}

/// Known actions with the short description used in marker comments.
const REQUEST_ACTIONS: &[(NrAction, &str)] = &[
    (NrAction::Cancel, "Cancel"),
    (NrAction::Edit, "Edit"),
    (NrAction::Incorporate, "Incorporate"),
    (NrAction::Reapply, "Reapply"),
    (NrAction::Receipt, "Receipt"),
    (NrAction::Refund, "Refund"),
    (NrAction::Resend, "Resend"),
    (NrAction::Result, "Result"),
    (NrAction::RetryPayment, "Retry Payment"),
    (NrAction::Upgrade, "Upgrade"),
];

impl NrAction {
    /// Path segment for `PATCH /namerequests/{id}/{action}`.
    pub fn as_str(&self) -> &'static str {
        match self {
            NrAction::Cancel => "CANCEL",
            NrAction::Edit => "EDIT",
            NrAction::Incorporate => "INCORPORATE",
            NrAction::Reapply => "REAPPLY",
            NrAction::Receipt => "RECEIPT",
            NrAction::Refund => "REQUEST_REFUND",
            NrAction::Resend => "RESEND",
            NrAction::Result => "RESULT",
            NrAction::RetryPayment => "RETRY_PAYMENT",
            NrAction::Upgrade => "UPGRADE",
        }
    }

    /// Short description stamped into marker comments.
    pub fn short_desc(&self) -> &'static str {
        REQUEST_ACTIONS
            .iter()
            .find(|(action, _)| action == self)
            .map(|(_, desc)| *desc)
            .unwrap_or("action not found")
    }
}

impl fmt::Display for NrAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Action used on the rollback endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RollbackAction {
    Cancel,
}

impl RollbackAction {
    /// Path segment for `PATCH /namerequests/{id}/rollback/{action}`.
    pub fn as_str(&self) -> &'static str {
        match self {
            RollbackAction::Cancel => "cancel",
        }
    }
}

fn marker(desc: &str) -> String {
    format!("*** {desc} ***")
}

/// Stamp the marker comment for `action` into `nr.additional_info`.
///
/// - empty field: set it to the marker;
/// - marker already present: leave unchanged (idempotent);
/// - a different known marker present: replace that one occurrence;
/// - otherwise: preserve the existing text and append the marker.
pub fn add_action_comment(action: NrAction, nr: &mut NameRequest) {
    let msg = marker(action.short_desc());

    let current = match nr.additional_info.as_deref() {
        None | Some("") => {
            nr.additional_info = Some(msg);
            return;
        }
        Some(text) => text,
    };

    if current.contains(&msg) {
        return;
    }

    // There is text, but not the marker we must add. A marker from an earlier
    // action may be present; replace it rather than accumulating markers.
    let prior = REQUEST_ACTIONS
        .iter()
        .map(|(_, desc)| marker(desc))
        .find(|m| current.contains(m.as_str()));
    if let Some(prior) = prior {
        nr.additional_info = Some(current.replacen(&prior, &msg, 1));
        return;
    }

    nr.additional_info = Some(format!("{current} \n\n {msg}"));
}
