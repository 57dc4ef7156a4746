//! The record returned by the inference entry point.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Outcome of one analysis call.
///
/// Only `ai_probability` is required. The engine serializes its record in
/// camelCase, so both spellings are accepted. No range check is applied.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Probability in `[0.0, 1.0]` that the image is machine-generated.
    #[serde(alias = "aiProbability")]
    pub ai_probability: f64,
    /// Engine self-reported confidence.
    #[serde(default)]
    pub confidence: Option<f64>,
    /// Named intermediate measurements (e.g. `entropy`, `variance`).
    #[serde(default)]
    pub breakdown: HashMap<String, f64>,
    #[serde(default, alias = "heatmapBase64")]
    pub heatmap_base64: Option<String>,
    /// Diagnostic set by the engine when it fell back to a neutral score.
    #[serde(default)]
    pub message: Option<String>,
}

impl AnalysisResult {
    /// A bare result carrying only the probability.
    pub fn with_probability(ai_probability: f64) -> Self {
        Self {
            ai_probability,
            ..Self::default()
        }
    }

    /// Decode a record from its JSON form.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_snake_case() {
        let result = AnalysisResult::from_json_value(json!({ "ai_probability": 0.25 })).unwrap();
        assert_eq!(result.ai_probability, 0.25);
        assert!(result.breakdown.is_empty());
        assert!(result.message.is_none());
    }

    #[test]
    fn test_decode_engine_record() {
        let result = AnalysisResult::from_json_value(json!({
            "aiProbability": 0.5,
            "confidence": 0.0,
            "breakdown": {},
            "heatmapBase64": null,
            "message": "Format error decoding Png"
        }))
        .unwrap();
        assert_eq!(result.ai_probability, 0.5);
        assert_eq!(result.confidence, Some(0.0));
        assert_eq!(result.message.as_deref(), Some("Format error decoding Png"));
    }

    #[test]
    fn test_decode_breakdown() {
        let result = AnalysisResult::from_json_value(json!({
            "aiProbability": 0.8,
            "breakdown": { "entropy": 3.2, "variance": 120.5 }
        }))
        .unwrap();
        assert_eq!(result.breakdown.get("entropy"), Some(&3.2));
        assert_eq!(result.breakdown.len(), 2);
    }

    #[test]
    fn test_out_of_range_passes_through() {
        let result = AnalysisResult::from_json_value(json!({ "ai_probability": 1.7 })).unwrap();
        assert_eq!(result.ai_probability, 1.7);
    }

    #[test]
    fn test_missing_probability_rejected() {
        assert!(AnalysisResult::from_json_value(json!({ "confidence": 0.75 })).is_err());
    }
}
