//! Integration tests for payment operations.

mod support;

use support::TestHarness;

#[tokio::test]
async fn cancel_payment_succeeds_on_ok() {
    let mut harness = TestHarness::new().await;
    let mock = harness
        .server
        .mock("DELETE", "/payments/42/payment/pay-9")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": 9, "statusCode": "CANCELLED"}"#)
        .create_async()
        .await;

    let outcome = harness
        .client
        .cancel_payment(42, "pay-9")
        .await
        .expect("outcome expected");

    mock.assert_async().await;
    assert!(outcome.payment_success);
    assert_eq!(outcome.http_status_code.as_deref(), Some("200"));
    assert_eq!(
        outcome.payment.and_then(|p| p.status_code),
        Some("CANCELLED".to_string())
    );
}

#[tokio::test]
async fn non_200_success_status_yields_unsuccessful_outcome() {
    let mut harness = TestHarness::new().await;
    let _mock = harness
        .server
        .mock("PATCH", "/payments/42/payment/9/COMPLETE")
        .with_status(202)
        .create_async()
        .await;

    let outcome = harness
        .client
        .complete_payment(42, 9, "COMPLETE")
        .await
        .expect("outcome expected");

    assert!(!outcome.payment_success);
    assert_eq!(outcome.http_status_code.as_deref(), Some("202"));
    assert!(outcome.payment.is_none());
    // Not an error: the exchange completed, it just wasn't a 200.
    assert!(harness.reporter.is_empty());
}

#[tokio::test]
async fn cancel_payment_reports_on_error_status() {
    let mut harness = TestHarness::new().await;
    let _mock = harness
        .server
        .mock("DELETE", "/payments/42/payment/pay-9")
        .with_status(404)
        .with_body(r#"{"message":"Payment not found"}"#)
        .create_async()
        .await;

    let outcome = harness.client.cancel_payment(42, "pay-9").await;

    assert!(outcome.is_none());
    let records = harness.reporter.records_by_id("cancel-payment-error");
    assert_eq!(records.len(), 1);
    assert!(records[0].error.contains("Payment not found"));
}

#[tokio::test]
async fn get_payment_fetches_the_record() {
    let mut harness = TestHarness::new().await;
    let mock = harness
        .server
        .mock("GET", "/payments/42/payment/pay-9")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": 9, "token": "tok-1", "statusCode": "COMPLETED"}"#)
        .create_async()
        .await;

    let outcome = harness
        .client
        .get_payment(42, "pay-9")
        .await
        .expect("outcome expected");

    mock.assert_async().await;
    assert!(outcome.payment_success);
    assert_eq!(
        outcome.payment.and_then(|p| p.token),
        Some("tok-1".to_string())
    );
}
