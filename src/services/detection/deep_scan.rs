// Deep Scan Orchestrator
// Runs the full detector set as named layers and preserves per-layer
// provenance for auditability. Uses the same aggregation rule as the
// integrator, so deep-scanning and integrating the same text agree on the
// overall confidence.

use crate::models::{DeepScanResult, DetectionOptions, LayerResult};
use tracing::debug;

use super::aggregation::aggregate_confidence;
use super::detectors::{default_detectors, SignalDetector};
use super::integrator::is_blank;

/// Runs every registered detector as a distinct layer, in registration
/// order. Stateless; each scan produces fresh result objects.
pub struct DeepScanOrchestrator {
    detectors: Vec<Box<dyn SignalDetector>>,
    options: DetectionOptions,
}

impl Default for DeepScanOrchestrator {
    fn default() -> Self {
        Self::new(default_detectors())
    }
}

impl DeepScanOrchestrator {
    pub fn new(detectors: Vec<Box<dyn SignalDetector>>) -> Self {
        Self::with_options(detectors, DetectionOptions::default())
    }

    pub fn with_options(detectors: Vec<Box<dyn SignalDetector>>, options: DetectionOptions) -> Self {
        Self { detectors, options }
    }

    pub fn layer_count(&self) -> usize {
        self.detectors.len()
    }

    /// Scan the text through every layer. Blank text yields no layers and
    /// zero confidence.
    pub fn deep_analyze(&self, text: &str) -> DeepScanResult {
        if is_blank(text) {
            return DeepScanResult {
                layers: vec![],
                confidence: 0.0,
            };
        }

        let signals: Vec<_> = self.detectors.iter().map(|d| d.detect(text)).collect();
        let confidence = aggregate_confidence(&signals, &self.options.weights);

        let layers = signals
            .into_iter()
            .map(|signal| LayerResult {
                layer_name: signal.name,
                score: signal.score.clamp(0.0, 1.0),
                detail: signal.rationale,
            })
            .collect::<Vec<_>>();

        debug!(layers = layers.len(), confidence, "deep_scan.complete");

        DeepScanResult { layers, confidence }
    }
}
