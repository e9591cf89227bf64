//! Detection report types and normalization.
//!
//! This module handles:
//! - Parsing a raw bridge payload (camelCase JSON, no schema guarantee)
//! - Checking the required-field invariant
//! - Normalizing into the record shape the data API persists

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::error::{Error, Result};
use crate::limits::MAX_REPORT_SIZE_BYTES;

/// Diagnostic returned to the bridge when a report fails validation.
pub const MISSING_REQUIRED_FIELDS: &str = "Missing required fields";

/// GPS coordinates attached to a report.
///
/// Both sub-fields are independently optional; a device may know its
/// latitude without a longitude fix.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
}

/// Detection report as received from the bridge (camelCase).
///
/// Every field is optional at this layer. The transport guarantees no
/// schema, so each field lands in an `Option` and presence is checked
/// explicitly before any typed access.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct DetectionReport {
    /// Identifies the originating sensor
    #[validate(length(max = 128))]
    pub device_id: Option<String>,

    /// Taxonomic code (e.g. "AMCO")
    #[validate(length(max = 128))]
    pub species_code: Option<String>,

    #[validate(length(max = 256))]
    pub scientific_name: Option<String>,

    #[validate(length(max = 256))]
    pub common_name: Option<String>,

    /// Analyzer confidence; zero is a legitimate value
    pub confidence: Option<f64>,

    /// ISO 8601 datetime string
    #[validate(length(max = 64))]
    pub timestamp: Option<String>,

    pub location: Option<Location>,

    /// Reference to the stored audio clip
    #[validate(length(max = 2048))]
    pub audio_url: Option<String>,

    /// Reference to the stored spectrogram image
    #[validate(length(max = 2048))]
    pub image_url: Option<String>,
}

/// Normalized record submitted to the data API's `createDetection`
/// operation. Absent optional fields are omitted from the wire form,
/// never zero-defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionRecord {
    pub device_id: String,
    pub species_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scientific_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,
    pub confidence: f64,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Validates raw payload size BEFORE deserialization.
///
/// Call this first to prevent allocation from oversized payloads.
pub fn validate_report_size(raw_bytes: &[u8]) -> Result<()> {
    if raw_bytes.len() > MAX_REPORT_SIZE_BYTES {
        return Err(Error::validation(format!(
            "payload {}KB exceeds {}KB limit",
            raw_bytes.len() / 1024,
            MAX_REPORT_SIZE_BYTES / 1024
        )));
    }
    Ok(())
}

impl DetectionReport {
    /// Parse a raw bridge payload.
    ///
    /// The payload must be a JSON object; a present-but-mistyped field
    /// is a validation failure, same as a missing one.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| Error::validation(format!("invalid JSON: {}", e)))?;

        if !value.is_object() {
            return Err(Error::validation("payload must be a JSON object"));
        }

        serde_json::from_value(value)
            .map_err(|e| Error::validation(format!("invalid report: {}", e)))
    }

    /// Checks the validity invariant: `deviceId`, `speciesCode`, and
    /// `timestamp` are non-empty strings and `confidence` is present.
    pub fn validate_required(&self) -> Result<()> {
        // Field length bounds from the derive
        self.validate()
            .map_err(|e| Error::validation(format!("{}", e)))?;

        let missing = |f: &Option<String>| f.as_deref().map_or(true, str::is_empty);

        // Presence test, not a falsy test: confidence 0.0 is valid.
        if missing(&self.device_id)
            || missing(&self.species_code)
            || missing(&self.timestamp)
            || self.confidence.is_none()
        {
            return Err(Error::validation(MISSING_REQUIRED_FIELDS));
        }

        Ok(())
    }

    /// Normalizes a validated report into the persisted record shape,
    /// preserving optional fields exactly as provided.
    pub fn normalize(self) -> Result<DetectionRecord> {
        let required = |f: Option<String>| {
            f.filter(|s| !s.is_empty())
                .ok_or_else(|| Error::validation(MISSING_REQUIRED_FIELDS))
        };

        Ok(DetectionRecord {
            device_id: required(self.device_id)?,
            species_code: required(self.species_code)?,
            scientific_name: self.scientific_name,
            common_name: self.common_name,
            confidence: self
                .confidence
                .ok_or_else(|| Error::validation(MISSING_REQUIRED_FIELDS))?,
            timestamp: required(self.timestamp)?,
            location: self.location,
            audio_url: self.audio_url,
            image_url: self.image_url,
        })
    }
}
