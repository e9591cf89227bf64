//! Test fixtures and report generators.

use serde_json::{json, Value};

/// A minimal valid detection report.
pub fn valid_report() -> Value {
    json!({
        "deviceId": "pi-1",
        "speciesCode": "AMCO",
        "confidence": 0.87,
        "timestamp": "2024-01-01T00:00:00Z"
    })
}

/// A report with every field populated.
pub fn full_report() -> Value {
    json!({
        "deviceId": "pi-1",
        "speciesCode": "AMCO",
        "scientificName": "Fulica americana",
        "commonName": "American Coot",
        "confidence": 0.87,
        "timestamp": "2024-01-01T00:00:00Z",
        "location": { "lat": 40.1, "lon": -105.3 },
        "audioUrl": "audio/pi-1/20240101-000000.wav",
        "imageUrl": "images/pi-1/20240101-000000.png"
    })
}

/// A valid report with the given field removed.
pub fn report_without(field: &str) -> Value {
    let mut report = valid_report();
    report.as_object_mut().unwrap().remove(field);
    report
}

/// A report larger than the 64KB payload limit.
pub fn oversized_report() -> Value {
    let mut report = valid_report();
    report["commonName"] = Value::String("x".repeat(70_000));
    report
}
