//! Payment operations attached to a name request.
//!
//! Payment calls report their HTTP status through [`PaymentOutcome`]: a
//! completed exchange with a 2xx status other than 200 yields an unsuccessful
//! outcome, while error statuses and transport failures go through the usual
//! report-and-sentinel path.

use crate::client::core::{expect_success, json_body, NamexClient};
use crate::types::PaymentOutcome;
use crate::Result;
use reqwest::{Method, StatusCode};
use tracing::error;

impl NamexClient {
    /// Fetch a payment record.
    pub async fn get_payment(&self, nr_id: i64, payment_id: &str) -> Option<PaymentOutcome> {
        match self.try_get_payment(nr_id, payment_id).await {
            Ok(outcome) => Some(outcome),
            Err(err) => {
                self.fail(
                    "get_payment",
                    "get-payment-error",
                    &err,
                    "Could not get payment",
                )
                .await;
                None
            }
        }
    }

    pub async fn try_get_payment(&self, nr_id: i64, payment_id: &str) -> Result<PaymentOutcome> {
        let path = format!("/payments/{nr_id}/payment/{payment_id}");
        let request = self.transport.request(Method::GET, &path)?;
        let response = self.transport.send(request).await?;
        self.payment_outcome("get_payment", response).await
    }

    /// Cancel a pending payment.
    pub async fn cancel_payment(&self, nr_id: i64, payment_id: &str) -> Option<PaymentOutcome> {
        match self.try_cancel_payment(nr_id, payment_id).await {
            Ok(outcome) => Some(outcome),
            Err(err) => {
                self.fail(
                    "cancel_payment",
                    "cancel-payment-error",
                    &err,
                    "Could not cancel payment",
                )
                .await;
                None
            }
        }
    }

    pub async fn try_cancel_payment(
        &self,
        nr_id: i64,
        payment_id: &str,
    ) -> Result<PaymentOutcome> {
        let path = format!("/payments/{nr_id}/payment/{payment_id}");
        let request = self.transport.request(Method::DELETE, &path)?;
        let response = self.transport.send(request).await?;
        self.payment_outcome("cancel_payment", response).await
    }

    /// Complete (or otherwise transition) a payment.
    pub async fn complete_payment(
        &self,
        nr_id: i64,
        payment_id: i64,
        action: &str,
    ) -> Option<PaymentOutcome> {
        match self.try_complete_payment(nr_id, payment_id, action).await {
            Ok(outcome) => Some(outcome),
            Err(err) => {
                self.fail(
                    "complete_payment",
                    "complete-payment-error",
                    &err,
                    "Could not complete payment",
                )
                .await;
                None
            }
        }
    }

    pub async fn try_complete_payment(
        &self,
        nr_id: i64,
        payment_id: i64,
        action: &str,
    ) -> Result<PaymentOutcome> {
        let path = format!("/payments/{nr_id}/payment/{payment_id}/{action}");
        let request = self
            .transport
            .request(Method::PATCH, &path)?
            .json(&serde_json::json!({}));
        let response = self.transport.send(request).await?;
        self.payment_outcome("complete_payment", response).await
    }

    async fn payment_outcome(
        &self,
        op: &str,
        response: reqwest::Response,
    ) -> Result<PaymentOutcome> {
        let response = expect_success(response).await?;
        let status = response.status();
        if status != StatusCode::OK {
            error!(target: "namex_client", "{op}(), status was not 200: {status}");
            return Ok(PaymentOutcome::failed(status));
        }
        let payment = json_body(response).await?;
        Ok(PaymentOutcome::succeeded(status, payment))
    }
}
