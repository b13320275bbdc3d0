// Textspect Data Models
// Typed result records for the signal pipeline

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============ Signal Types ============

/// One detector's scored opinion about the text plus a short explanation.
/// Produced by exactly one detector; never mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signal {
    pub name: String,
    /// Heuristic score in [0, 1]; higher means more machine-like.
    pub score: f64,
    pub rationale: String,
}

/// Deep-scan view of a Signal, named and ordered by detector registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerResult {
    pub layer_name: String,
    pub score: f64,
    pub detail: String,
}

// ============ Pipeline Results ============

/// Integrator output: aggregate confidence plus a one-line summary of the
/// dominant evidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub analysis: String,
    pub confidence: f64,
}

/// Full per-layer evidence from a deep scan.
/// `layers` is empty iff the input text was blank.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeepScanResult {
    pub layers: Vec<LayerResult>,
    pub confidence: f64,
}

/// Top-level verdict.
///
/// `ai_probability` and `confidence` are both derived from the same weighted
/// mean over the detector set; the crate models AI-likelihood and aggregate
/// evidence strength as the same normalized signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAnalysis {
    pub ai_probability: f64,
    pub confidence: f64,
    pub reasoning: String,
}

// ============ Options ============

/// Aggregation configuration.
///
/// Weights are keyed by detector name and normalized at aggregation time, so
/// detector registration order never influences the aggregate. An empty map
/// (the default) means equal weighting; detectors missing from a non-empty
/// map get weight 1.0.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DetectionOptions {
    #[serde(default)]
    pub weights: HashMap<String, f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_result_serializes_camel_case() {
        let layer = LayerResult {
            layer_name: "lexical_repetition".to_string(),
            score: 0.42,
            detail: "3-gram repeat rate 0.120".to_string(),
        };
        let json = serde_json::to_value(&layer).unwrap();
        assert!(json.get("layerName").is_some());
        assert!(json.get("layer_name").is_none());
    }

    #[test]
    fn test_top_level_serializes_camel_case() {
        let analysis = TextAnalysis {
            ai_probability: 0.5,
            confidence: 0.5,
            reasoning: "dominant signal".to_string(),
        };
        let json = serde_json::to_value(&analysis).unwrap();
        assert!(json.get("aiProbability").is_some());
    }

    #[test]
    fn test_options_default_from_empty_json() {
        let opts: DetectionOptions = serde_json::from_str("{}").unwrap();
        assert!(opts.weights.is_empty());
    }
}
