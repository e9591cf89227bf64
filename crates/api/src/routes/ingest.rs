//! Ingestion endpoint handler.
//!
//! The message bridge delivers one detection report per invocation as
//! an untyped JSON payload. The handler validates the required fields,
//! normalizes the report, and forwards it exactly once to the data
//! API's `createDetection` operation.

use axum::{body::Bytes, extract::State, Json};
use birdwatch_core::{validate_report_size, DetectionReport};
use std::time::Instant;
use telemetry::metrics;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::response::{ApiError, IngestResponse};
use crate::state::AppState;

/// POST /detections - trigger endpoint for the message bridge.
///
/// Two terminal outcomes: 400 when the report fails the required-field
/// invariant (never forwarded), 200 after a single successful forward.
/// A store failure is not recovered here; it surfaces as 502 for the
/// bridge to retry.
pub async fn ingest_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<IngestResponse>, ApiError> {
    let start = Instant::now();
    let invocation_id = Uuid::new_v4();

    metrics().reports_received.inc();

    // One observability record per invocation, regardless of outcome.
    info!(
        invocation_id = %invocation_id,
        payload = %String::from_utf8_lossy(&body),
        "Detection received"
    );

    if let Err(e) = validate_report_size(&body) {
        metrics().reports_rejected.inc();
        warn!(invocation_id = %invocation_id, error = %e, "Report rejected");
        return Err(ApiError::from(e));
    }

    let report = DetectionReport::parse(&body)
        .and_then(|report| report.validate_required().map(|_| report));

    let report = match report {
        Ok(report) => report,
        Err(e) => {
            metrics().reports_rejected.inc();
            warn!(invocation_id = %invocation_id, error = %e, "Report rejected");
            return Err(ApiError::from(e));
        }
    };

    let record = report.normalize().map_err(ApiError::from)?;

    // At most one forward attempt per invocation, no internal retry.
    let store_start = Instant::now();
    let created = state
        .store
        .create_detection(&record)
        .await
        .map_err(|e| {
            metrics().forward_errors.inc();
            error!(invocation_id = %invocation_id, error = %e, "Forwarding failed");
            ApiError::from(e)
        })?;
    metrics()
        .store_latency_ms
        .observe(store_start.elapsed().as_millis() as u64);

    metrics().reports_forwarded.inc();

    let latency_ms = start.elapsed().as_millis() as u64;
    metrics().ingest_latency_ms.observe(latency_ms);

    info!(
        invocation_id = %invocation_id,
        device_id = %record.device_id,
        species_code = %record.species_code,
        confidence = record.confidence,
        latency_ms = latency_ms,
        "Detection forwarded"
    );

    Ok(Json(IngestResponse::success(created.id)))
}
