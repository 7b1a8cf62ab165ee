//! Integration tests for record operations against a mock server.

mod support;

use mockito::Matcher;
use namex_client::{keys, NameRequest, NrAction, SessionStore};
use support::TestHarness;

#[tokio::test]
async fn get_name_request_returns_payload_on_ok() {
    let mut harness = TestHarness::new().await;
    harness.session.set(keys::NR_NUMBER, "NR 1234567");
    harness.session.set(keys::PHONE, "250-555-0199");

    let mock = harness
        .server
        .mock("GET", "/namerequests")
        .match_header("BCREG-NR", "NR 1234567")
        .match_header("BCREG-User-Phone", "250-555-0199")
        .match_header(
            "x-request-id",
            Matcher::Regex("^[0-9a-f-]{36}$".to_string()),
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": 42, "nrNum": "NR 1234567", "state": "DRAFT"}"#)
        .create_async()
        .await;

    let nr = harness.client.get_name_request(true).await;

    mock.assert_async().await;
    let nr = nr.expect("payload expected");
    assert_eq!(nr.id, Some(42));
    assert!(harness.reporter.is_empty());
}

#[tokio::test]
async fn get_name_request_reports_on_server_error() {
    let mut harness = TestHarness::new().await;
    let _mock = harness
        .server
        .mock("GET", "/namerequests")
        .with_status(500)
        .with_body(r#"{"message":"database on fire"}"#)
        .create_async()
        .await;

    let nr = harness.client.get_name_request(true).await;

    assert!(nr.is_none());
    let records = harness.reporter.records_by_id("get-name-request-error");
    assert_eq!(records.len(), 1);
    assert!(records[0].error.contains("database on fire"));
}

#[tokio::test]
async fn get_name_request_stays_silent_when_error_handling_is_off() {
    let mut harness = TestHarness::new().await;
    let _mock = harness
        .server
        .mock("GET", "/namerequests")
        .with_status(500)
        .create_async()
        .await;

    let nr = harness.client.get_name_request(false).await;

    assert!(nr.is_none());
    assert!(harness.reporter.is_empty());
}

#[tokio::test]
async fn post_name_request_stamps_marker_and_clears_session_identity() {
    let mut harness = TestHarness::new().await;
    // Stale identity from a previous user action must not reach the wire.
    harness.session.set(keys::NR_NUMBER, "NR 0000001");
    harness.session.set(keys::EMAIL, "old@example.com");

    let mock = harness
        .server
        .mock("POST", "/namerequests")
        .match_header("BCREG-NR", Matcher::Missing)
        .match_header("BCREG-User-Email", Matcher::Missing)
        .match_body(Matcher::PartialJson(serde_json::json!({
            "additionalInfo": "*** Upgrade ***",
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": 7, "nrNum": "NR 7654321", "state": "DRAFT"}"#)
        .create_async()
        .await;

    let draft = NameRequest::default();
    let created = harness
        .client
        .post_name_request(NrAction::Upgrade, &draft)
        .await;

    mock.assert_async().await;
    assert_eq!(created.expect("created record").id, Some(7));
    assert_eq!(harness.session.get(keys::NR_NUMBER), None);
    assert_eq!(harness.session.get(keys::EMAIL), None);
}

#[tokio::test]
async fn put_name_reservation_accepts_any_write_status() {
    let mut harness = TestHarness::new().await;
    let mock = harness
        .server
        .mock("PUT", "/namerequests/42")
        .with_status(202)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": 42, "state": "CONDITIONAL"}"#)
        .create_async()
        .await;

    let nr = NameRequest {
        id: Some(42),
        ..Default::default()
    };
    let updated = harness
        .client
        .put_name_reservation(42, NrAction::Edit, &nr)
        .await;

    mock.assert_async().await;
    assert!(updated.is_some());
    assert!(harness.reporter.is_empty());
}

#[tokio::test]
async fn patch_by_action_sends_empty_body_and_action_segment() {
    let mut harness = TestHarness::new().await;
    let mock = harness
        .server
        .mock("PATCH", "/namerequests/42/REQUEST_REFUND")
        .match_body(Matcher::Json(serde_json::json!({})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": 42}"#)
        .create_async()
        .await;

    let payload = harness
        .client
        .patch_name_request_by_action(42, NrAction::Refund)
        .await;

    mock.assert_async().await;
    assert!(payload.is_some());
}

#[tokio::test]
async fn unrecognized_write_status_yields_sentinel_and_default_message() {
    let mut harness = TestHarness::new().await;
    let _mock = harness
        .server
        .mock("PATCH", "/namerequests/42/UPGRADE")
        .with_status(206)
        .create_async()
        .await;

    let payload = harness
        .client
        .patch_name_request_by_action(42, NrAction::Upgrade)
        .await;

    assert!(payload.is_none());
    let records = harness
        .reporter
        .records_by_id("patch-name-requests-by-action-error");
    assert_eq!(records.len(), 1);
    assert!(records[0]
        .error
        .contains("Could not patch name requests by action"));
}

#[tokio::test]
async fn rollback_hits_the_cancel_rollback_endpoint() {
    let mut harness = TestHarness::new().await;
    let mock = harness
        .server
        .mock("PATCH", "/namerequests/5/rollback/cancel")
        .match_body(Matcher::Json(serde_json::json!({})))
        .with_status(200)
        .create_async()
        .await;

    assert!(harness.client.rollback_name_request(5).await);
    mock.assert_async().await;
}

#[tokio::test]
async fn rollback_with_invalid_id_short_circuits_without_a_call() {
    let mut harness = TestHarness::new().await;
    let mock = harness
        .server
        .mock("PATCH", Matcher::Regex("^/namerequests".to_string()))
        .expect(0)
        .create_async()
        .await;

    assert!(!harness.client.rollback_name_request(0).await);

    mock.assert_async().await;
    // The invalid id is logged, not reported.
    assert!(harness.reporter.is_empty());
}

#[tokio::test]
async fn download_outputs_returns_raw_pdf_bytes() {
    let mut harness = TestHarness::new().await;
    let mock = harness
        .server
        .mock("GET", "/namerequests/42/result")
        .match_header("accept", "application/pdf")
        .with_status(200)
        .with_header("content-type", "application/pdf")
        .with_body(b"%PDF-1.4 fake".to_vec())
        .create_async()
        .await;

    let bytes = harness.client.download_outputs(42).await;

    mock.assert_async().await;
    assert_eq!(bytes.expect("pdf bytes").as_ref(), b"%PDF-1.4 fake");
}

#[tokio::test]
async fn download_outputs_reports_a_fixed_message_on_failure() {
    let mut harness = TestHarness::new().await;
    let _mock = harness
        .server
        .mock("GET", "/namerequests/42/result")
        .with_status(500)
        .create_async()
        .await;

    let bytes = harness.client.download_outputs(42).await;

    assert!(bytes.is_none());
    let records = harness.reporter.records_by_id("download-pdf-error");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].error, "Could not download PDF");
}
