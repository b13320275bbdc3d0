// Detection Module
// The multi-layer signal pipeline, organized into specialized submodules:
// - detectors: SignalDetector trait + the built-in heuristic detectors
// - aggregation: the shared weighted-mean rule over signal sets
// - integrator: merges signals into one normalized verdict
// - deep_scan: runs detectors as named layers with per-layer provenance

pub mod aggregation;
pub mod deep_scan;
pub mod detectors;
pub mod integrator;

pub use aggregation::{aggregate_confidence, dominant_signal};
pub use deep_scan::DeepScanOrchestrator;
pub use detectors::{
    default_detectors, LexicalRepetitionDetector, PredictabilityDetector,
    SentenceUniformityDetector, SignalDetector, VocabularyDiversityDetector,
};
pub use integrator::{is_blank, SignalIntegrator, NO_CONTENT_MESSAGE};
