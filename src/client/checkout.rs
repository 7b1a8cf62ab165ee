//! Checkout/checkin: the exclusive edit lock on a name request.
//!
//! The lock is witnessed by the `checkedOutBy`/`checkedOutDt` pair in the
//! session store. Checkout with a held token resubmits it (refresh); checkout
//! without one acquires a fresh lock with an empty body. Checkin releases the
//! token and clears the session state.

use crate::client::core::{expect_success, NamexClient};
use crate::session::keys;
use crate::types::{CheckoutToken, NrState};
use crate::Result;
use reqwest::Method;

impl NamexClient {
    /// Acquire or refresh the edit lock for a name request.
    pub async fn checkout_name_request(&self, nr_id: i64) -> bool {
        match self.try_checkout_name_request(nr_id).await {
            Ok(_) => true,
            Err(err) => {
                self.fail(
                    "checkout_name_request",
                    "checkout-name-requests-error",
                    &err,
                    "Could not checkout name request",
                )
                .await;
                false
            }
        }
    }

    pub async fn try_checkout_name_request(&self, nr_id: i64) -> Result<CheckoutToken> {
        let body = match self.session.get(keys::CHECKED_OUT_BY) {
            Some(checked_out_by) => serde_json::json!({
                "checkedOutBy": checked_out_by,
                "checkedOutDt": self.session.get(keys::CHECKED_OUT_DT),
            }),
            None => serde_json::json!({}),
        };

        let request = self
            .transport
            .request(Method::PATCH, &format!("/namerequests/{nr_id}/checkout"))?
            .json(&body);
        let response = self.transport.send(request).await?;
        let response = expect_success(response).await?;

        // An empty or unexpected body clears the lock state rather than
        // failing the checkout.
        let bytes = response.bytes().await.unwrap_or_default();
        let token: CheckoutToken = serde_json::from_slice(&bytes).unwrap_or_default();

        match &token.checked_out_by {
            Some(by) => self.session.set(keys::CHECKED_OUT_BY, by),
            None => self.session.remove(keys::CHECKED_OUT_BY),
        }
        match &token.checked_out_dt {
            Some(dt) => self.session.set(keys::CHECKED_OUT_DT, dt),
            None => self.session.remove(keys::CHECKED_OUT_DT),
        }

        Ok(token)
    }

    /// Release the edit lock for a name request.
    ///
    /// Returns `true` when the record was never checked out (terminal states)
    /// or the lock was released; `false` when no lock token is held.
    pub async fn checkin_name_request(&self, nr_id: i64, state: NrState) -> bool {
        match self.try_checkin_name_request(nr_id, state).await {
            Ok(done) => done,
            Err(err) => {
                self.fail(
                    "checkin_name_request",
                    "checkin-name-requests-error",
                    &err,
                    "Could not checkin name request",
                )
                .await;
                false
            }
        }
    }

    pub async fn try_checkin_name_request(&self, nr_id: i64, state: NrState) -> Result<bool> {
        // Terminal records were never checked out; nothing to release.
        if state.is_terminal() {
            return Ok(true);
        }

        let Some(checked_out_by) = self.session.get(keys::CHECKED_OUT_BY) else {
            return Ok(false);
        };

        let body = serde_json::json!({
            "checkedOutBy": checked_out_by,
            "checkedOutDt": self.session.get(keys::CHECKED_OUT_DT),
        });

        let request = self
            .transport
            .request(Method::PATCH, &format!("/namerequests/{nr_id}/checkin"))?
            .json(&body);
        let response = self.transport.send(request).await?;
        expect_success(response).await?;

        self.session.remove(keys::CHECKED_OUT_BY);
        self.session.remove(keys::CHECKED_OUT_DT);

        Ok(true)
    }
}
