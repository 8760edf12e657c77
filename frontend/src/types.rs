//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **API Types** - Inference endpoint response
//! - **Status Types** - Inference service health
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

// =============================================================================
// API Types
// =============================================================================

/// Classification answer returned by the inference endpoint on HTTP 200.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InferenceResult {
    /// Predicted disease label
    #[serde(rename = "class")]
    pub label: String,
    /// Confidence score in [0, 1]
    #[serde(deserialize_with = "deserialize_confidence")]
    pub confidence: f64,
    /// Suggested treatment
    pub solution: String,
}

impl InferenceResult {
    /// Parse and validate a response body.
    pub fn from_json(body: &str) -> AppResult<Self> {
        let result: InferenceResult =
            serde_json::from_str(body).map_err(|e| AppError::Decode(e.to_string()))?;
        result.validate()
    }

    /// Reject confidences outside [0, 1].
    pub fn validate(mut self) -> AppResult<Self> {
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(AppError::Decode(format!(
                "confidence {} outside [0, 1]",
                self.confidence
            )));
        }
        // -0.0 passes the range check; store it as 0.0
        self.confidence += 0.0;
        Ok(self)
    }

    /// Confidence as a percentage with two decimals, e.g. `"87.34"`.
    pub fn confidence_percent(&self) -> String {
        format_percent(self.confidence)
    }
}

/// Format a [0, 1] score as a percentage with two decimals.
///
/// Ties round away from zero (`0.12125` gives `"12.13"`), not to even.
pub fn format_percent(score: f64) -> String {
    let hundredths = (score * 100.0 * 100.0).round() + 0.0;
    format!("{:.2}", hundredths / 100.0)
}

/// Some model servers serialize numpy floats as strings.
fn deserialize_confidence<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}

// =============================================================================
// Status Types
// =============================================================================

/// Reachability of the inference service, from the `/ping` probe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ServiceStatus {
    /// Probe not answered yet
    #[default]
    Unknown,
    /// Probe returned 2xx
    Online,
    /// Probe failed
    Offline,
}

impl ServiceStatus {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            ServiceStatus::Unknown => "status-unknown",
            ServiceStatus::Online => "status-online",
            ServiceStatus::Offline => "status-offline",
        }
    }

    /// Tooltip text.
    pub fn label(&self) -> &'static str {
        match self {
            ServiceStatus::Unknown => "Checking model server...",
            ServiceStatus::Online => "Model server online",
            ServiceStatus::Offline => "Model server unreachable",
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// None of these reach the user verbatim: the widget shows one fixed
/// message and the detail goes to the console.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AppError {
    /// Request never got a response.
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-2xx status.
    #[error("Server error ({0}): {1}")]
    Status(u16, String),

    /// Response body is not a valid prediction.
    #[error("Invalid response: {0}")]
    Decode(String),

    /// Multipart body could not be built.
    #[error("Failed to build form data: {0}")]
    FormData(String),

    /// Object URL for the preview could not be created.
    #[error("Failed to create preview: {0}")]
    Preview(String),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_deserialization() {
        let json = r#"{
            "class": "Bacterial Red disease",
            "confidence": 0.97,
            "solution": "Treat water with potassium permanganate."
        }"#;

        let result = InferenceResult::from_json(json).unwrap();
        assert_eq!(result.label, "Bacterial Red disease");
        assert_eq!(result.confidence, 0.97);
        assert_eq!(result.solution, "Treat water with potassium permanganate.");
    }

    #[test]
    fn test_confidence_as_string() {
        let json = r#"{"class": "Healthy Fish", "confidence": "0.5", "solution": "No action needed."}"#;
        let result = InferenceResult::from_json(json).unwrap();
        assert_eq!(result.confidence, 0.5);
    }

    #[test]
    fn test_missing_field_is_decode_error() {
        let json = r#"{"class": "Healthy Fish", "confidence": 0.5}"#;
        assert!(matches!(InferenceResult::from_json(json), Err(AppError::Decode(_))));
    }

    #[test]
    fn test_out_of_range_confidence_rejected() {
        let json = r#"{"class": "Healthy Fish", "confidence": 1.5, "solution": "-"}"#;
        assert!(matches!(InferenceResult::from_json(json), Err(AppError::Decode(_))));
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.8734), "87.34");
        assert_eq!(format_percent(1.0), "100.00");
        assert_eq!(format_percent(0.92), "92.00");
        assert_eq!(format_percent(0.0), "0.00");
    }

    #[test]
    fn test_format_percent_rounds_ties_up() {
        assert_eq!(format_percent(0.00125), "0.13");
        assert_eq!(format_percent(0.12125), "12.13");
    }

    #[test]
    fn test_negative_zero_confidence_shows_as_zero() {
        let json = r#"{"class": "Healthy Fish", "confidence": -0.0, "solution": "No action needed."}"#;
        let result = InferenceResult::from_json(json).unwrap();
        assert!(result.confidence.is_sign_positive());
        assert_eq!(result.confidence_percent(), "0.00");
        assert_eq!(format_percent(-0.0), "0.00");
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Status(415, "Unsupported file type".to_string());
        assert_eq!(err.to_string(), "Server error (415): Unsupported file type");
    }
}
