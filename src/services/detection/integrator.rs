// Signal Integrator
// Merges the heterogeneous detector signals into one normalized verdict
// plus a one-line summary of the dominant evidence.

use crate::models::{AnalysisResult, DetectionOptions, Signal};
use tracing::debug;

use super::aggregation::{aggregate_confidence, dominant_signal};
use super::detectors::{default_detectors, SignalDetector};

/// Sentinel analysis for blank input.
pub const NO_CONTENT_MESSAGE: &str = "No content provided.";

/// Blank-input policy, decided once for the whole pipeline: whitespace-only
/// text counts as empty. Every entry point routes through this check.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Runs an injected, ordered list of detectors and combines their signals
/// with the shared weighted-mean rule. Holds no mutable state; each call
/// produces fresh, independent results.
pub struct SignalIntegrator {
    detectors: Vec<Box<dyn SignalDetector>>,
    options: DetectionOptions,
}

impl Default for SignalIntegrator {
    fn default() -> Self {
        Self::new(default_detectors())
    }
}

impl SignalIntegrator {
    pub fn new(detectors: Vec<Box<dyn SignalDetector>>) -> Self {
        Self::with_options(detectors, DetectionOptions::default())
    }

    pub fn with_options(detectors: Vec<Box<dyn SignalDetector>>, options: DetectionOptions) -> Self {
        Self { detectors, options }
    }

    pub fn detector_count(&self) -> usize {
        self.detectors.len()
    }

    /// Run every registered detector in order. Blank text short-circuits to
    /// an empty signal set without invoking any detector.
    pub fn signals(&self, text: &str) -> Vec<Signal> {
        if is_blank(text) {
            return vec![];
        }
        self.detectors.iter().map(|d| d.detect(text)).collect()
    }

    /// The shared aggregation rule over a signal set.
    pub fn aggregate(&self, signals: &[Signal]) -> f64 {
        aggregate_confidence(signals, &self.options.weights)
    }

    /// Integrate the text into one aggregate confidence and a summary naming
    /// the highest-scoring signal (first-registered wins exact ties).
    pub fn process_signal(&self, text: &str) -> AnalysisResult {
        if is_blank(text) {
            return AnalysisResult {
                analysis: NO_CONTENT_MESSAGE.to_string(),
                confidence: 0.0,
            };
        }

        let signals = self.signals(text);
        let confidence = self.aggregate(&signals);
        let analysis = match dominant_signal(&signals) {
            Some(top) => format!(
                "Strongest signal '{}' (score {:.2}): {}",
                top.name, top.score, top.rationale
            ),
            None => "No detectors registered.".to_string(),
        };

        debug!(
            detectors = self.detectors.len(),
            confidence,
            "signal_integration.complete"
        );

        AnalysisResult { analysis, confidence }
    }
}
