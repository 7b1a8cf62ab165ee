//! Record operations: fetch, create, edit, action transitions, rollback and
//! result download.

use crate::actions::{add_action_comment, NrAction, RollbackAction};
use crate::client::core::{expect_status, expect_success, json_body, NamexClient, WRITE_SUCCESS};
use crate::reporting::AppError;
use crate::session::keys;
use crate::types::NameRequest;
use crate::Result;
use bytes::Bytes;
use reqwest::{Method, StatusCode};
use tracing::error;

impl NamexClient {
    /// Fetch the current name request. Errors are forwarded to the reporter
    /// only when `handle_error` is set.
    pub async fn get_name_request(&self, handle_error: bool) -> Option<NameRequest> {
        match self.try_get_name_request().await {
            Ok(nr) => Some(nr),
            Err(err) => {
                if handle_error {
                    self.fail(
                        "get_name_request",
                        "get-name-request-error",
                        &err,
                        "Could not get name request",
                    )
                    .await;
                }
                None
            }
        }
    }

    pub async fn try_get_name_request(&self) -> Result<NameRequest> {
        let request = self.transport.request(Method::GET, "/namerequests")?;
        let response = self.transport.send(request).await?;
        let response = expect_status(response, &[StatusCode::OK]).await?;
        json_body(response).await
    }

    /// Create a new name request. The session identity keys are cleared
    /// first: this is a new record, so values from a previous user action
    /// must not leak into the create call's headers.
    pub async fn post_name_request(&self, action: NrAction, nr: &NameRequest) -> Option<NameRequest> {
        match self.try_post_name_request(action, nr).await {
            Ok(created) => Some(created),
            Err(err) => {
                self.fail(
                    "post_name_request",
                    "post-name-requests-error",
                    &err,
                    "Could not post name requests",
                )
                .await;
                None
            }
        }
    }

    pub async fn try_post_name_request(
        &self,
        action: NrAction,
        nr: &NameRequest,
    ) -> Result<NameRequest> {
        for key in [keys::NR_LINK, keys::NR_NUMBER, keys::EMAIL, keys::PHONE] {
            self.session.remove(key);
        }

        let mut body = nr.clone();
        add_action_comment(action, &mut body);

        let request = self
            .transport
            .request(Method::POST, "/namerequests")?
            .json(&body);
        let response = self.transport.send(request).await?;
        let response = expect_status(response, WRITE_SUCCESS).await?;
        json_body(response).await
    }

    /// Replace a name reservation.
    pub async fn put_name_reservation(
        &self,
        nr_id: i64,
        action: NrAction,
        nr: &NameRequest,
    ) -> Option<NameRequest> {
        match self.try_put_name_reservation(nr_id, action, nr).await {
            Ok(updated) => Some(updated),
            Err(err) => {
                self.fail(
                    "put_name_reservation",
                    "put-name-reservation-error",
                    &err,
                    "Could not put name reservation",
                )
                .await;
                None
            }
        }
    }

    pub async fn try_put_name_reservation(
        &self,
        nr_id: i64,
        action: NrAction,
        nr: &NameRequest,
    ) -> Result<NameRequest> {
        let mut body = nr.clone();
        add_action_comment(action, &mut body);

        let request = self
            .transport
            .request(Method::PUT, &format!("/namerequests/{nr_id}"))?
            .json(&body);
        let response = self.transport.send(request).await?;
        let response = expect_status(response, WRITE_SUCCESS).await?;
        json_body(response).await
    }

    /// Edit a name request in place. Returns the backend payload unchanged.
    pub async fn patch_name_request(
        &self,
        nr_id: i64,
        action: NrAction,
        nr: &NameRequest,
    ) -> Option<serde_json::Value> {
        match self.try_patch_name_request(nr_id, action, nr).await {
            Ok(payload) => Some(payload),
            Err(err) => {
                self.fail(
                    "patch_name_request",
                    "patch-name-requests-error",
                    &err,
                    "Could not patch name requests",
                )
                .await;
                None
            }
        }
    }

    pub async fn try_patch_name_request(
        &self,
        nr_id: i64,
        action: NrAction,
        nr: &NameRequest,
    ) -> Result<serde_json::Value> {
        let mut body = nr.clone();
        add_action_comment(action, &mut body);

        let request = self
            .transport
            .request(Method::PATCH, &format!("/namerequests/{nr_id}/edit"))?
            .json(&body);
        let response = self.transport.send(request).await?;
        let response = expect_status(response, WRITE_SUCCESS).await?;
        json_body(response).await
    }

    /// Apply a state-transition action to a name request.
    pub async fn patch_name_request_by_action(
        &self,
        nr_id: i64,
        action: NrAction,
    ) -> Option<serde_json::Value> {
        match self.try_patch_name_request_by_action(nr_id, action).await {
            Ok(payload) => Some(payload),
            Err(err) => {
                self.fail(
                    "patch_name_request_by_action",
                    "patch-name-requests-by-action-error",
                    &err,
                    "Could not patch name requests by action",
                )
                .await;
                None
            }
        }
    }

    pub async fn try_patch_name_request_by_action(
        &self,
        nr_id: i64,
        action: NrAction,
    ) -> Result<serde_json::Value> {
        let request = self
            .transport
            .request(Method::PATCH, &format!("/namerequests/{nr_id}/{action}"))?
            .json(&serde_json::json!({}));
        let response = self.transport.send(request).await?;
        let response = expect_status(response, WRITE_SUCCESS).await?;
        json_body(response).await
    }

    /// Revert a name request to its prior state.
    pub async fn rollback_name_request(&self, nr_id: i64) -> bool {
        // Safety check. An invalid id means upstream state is already wrong;
        // log it loudly and bail without a backend call.
        if nr_id <= 0 {
            error!(target: "namex_client", "rollback_name_request(), invalid NR id");
            return false;
        }

        match self.try_rollback_name_request(nr_id).await {
            Ok(()) => true,
            Err(err) => {
                self.fail(
                    "rollback_name_request",
                    "rollback-name-request-error",
                    &err,
                    "Could not rollback name request",
                )
                .await;
                false
            }
        }
    }

    pub async fn try_rollback_name_request(&self, nr_id: i64) -> Result<()> {
        let path = format!(
            "/namerequests/{nr_id}/rollback/{}",
            RollbackAction::Cancel.as_str()
        );
        let request = self
            .transport
            .request(Method::PATCH, &path)?
            .json(&serde_json::json!({}));
        let response = self.transport.send(request).await?;
        expect_status(response, &[StatusCode::OK]).await?;
        Ok(())
    }

    /// Download the result PDF for a name request. Returns the raw bytes;
    /// presentation is the caller's concern.
    pub async fn download_outputs(&self, nr_id: i64) -> Option<Bytes> {
        match self.try_download_outputs(nr_id).await {
            Ok(bytes) => Some(bytes),
            Err(err) => {
                error!(target: "namex_client", "download_outputs() = {err}");
                self.reporter
                    .report(AppError::new("download-pdf-error", "Could not download PDF"))
                    .await;
                None
            }
        }
    }

    pub async fn try_download_outputs(&self, nr_id: i64) -> Result<Bytes> {
        let request = self
            .transport
            .request(Method::GET, &format!("/namerequests/{nr_id}/result"))?
            .header("Accept", "application/pdf");
        let response = self.transport.send(request).await?;
        let response = expect_success(response).await?;
        Ok(response.bytes().await?)
    }
}
