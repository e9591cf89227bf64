//! End-to-end tests for the ingestion path: valid reports through the
//! router, forwarded records captured at the store seam.

use axum_test::TestServer;
use integration_tests::{fixtures, setup::TestContext};

/// A minimal valid report is accepted and forwarded once.
#[tokio::test]
async fn test_valid_report_forwarded_once() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let response = server.post("/detections").json(&fixtures::valid_report()).await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);

    assert_eq!(ctx.captured_record_count(), 1);
    let record = &ctx.captured_records()[0];
    assert_eq!(record.device_id, "pi-1");
    assert_eq!(record.species_code, "AMCO");
    assert_eq!(record.confidence, 0.87);
}

/// A zero confidence is a legitimate value, not a missing field.
#[tokio::test]
async fn test_zero_confidence_accepted() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let report = serde_json::json!({
        "deviceId": "pi-1",
        "speciesCode": "AMCO",
        "confidence": 0,
        "timestamp": "2024-01-01T00:00:00Z"
    });

    let response = server.post("/detections").json(&report).await;

    response.assert_status_ok();
    assert_eq!(ctx.captured_record_count(), 1);
    assert_eq!(ctx.captured_records()[0].confidence, 0.0);
}

/// Every provided optional field survives normalization unchanged.
#[tokio::test]
async fn test_optional_fields_preserved() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let response = server.post("/detections").json(&fixtures::full_report()).await;

    response.assert_status_ok();
    let record = &ctx.captured_records()[0];
    assert_eq!(record.scientific_name.as_deref(), Some("Fulica americana"));
    assert_eq!(record.common_name.as_deref(), Some("American Coot"));
    assert_eq!(
        record.audio_url.as_deref(),
        Some("audio/pi-1/20240101-000000.wav")
    );
    assert_eq!(
        record.image_url.as_deref(),
        Some("images/pi-1/20240101-000000.png")
    );

    let location = record.location.as_ref().unwrap();
    assert_eq!(location.lat, Some(40.1));
    assert_eq!(location.lon, Some(-105.3));
}

/// A location with only a latitude keeps the longitude absent, never
/// defaulted to zero.
#[tokio::test]
async fn test_partial_location_not_zero_defaulted() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let mut report = fixtures::valid_report();
    report["location"] = serde_json::json!({ "lat": 40.1 });

    let response = server.post("/detections").json(&report).await;

    response.assert_status_ok();
    let record = &ctx.captured_records()[0];
    let location = record.location.as_ref().unwrap();
    assert_eq!(location.lat, Some(40.1));
    assert_eq!(location.lon, None);
}

/// Absent optional fields stay absent in the forwarded record.
#[tokio::test]
async fn test_absent_optionals_stay_absent() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let response = server.post("/detections").json(&fixtures::valid_report()).await;

    response.assert_status_ok();
    let record = &ctx.captured_records()[0];
    assert!(record.scientific_name.is_none());
    assert!(record.common_name.is_none());
    assert!(record.location.is_none());
    assert!(record.audio_url.is_none());
    assert!(record.image_url.is_none());
}

/// Each invocation is independent: two posts, two records, one each.
#[tokio::test]
async fn test_invocations_independent() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    server.post("/detections").json(&fixtures::valid_report()).await.assert_status_ok();

    let mut second = fixtures::valid_report();
    second["deviceId"] = serde_json::json!("pi-2");
    server.post("/detections").json(&second).await.assert_status_ok();

    let records = ctx.captured_records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].device_id, "pi-1");
    assert_eq!(records[1].device_id, "pi-2");
}

/// Unknown extra fields in the payload are ignored, not an error.
#[tokio::test]
async fn test_unknown_fields_ignored() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let mut report = fixtures::valid_report();
    report["firmwareVersion"] = serde_json::json!("2.4.1");

    let response = server.post("/detections").json(&report).await;

    response.assert_status_ok();
    assert_eq!(ctx.captured_record_count(), 1);
}
