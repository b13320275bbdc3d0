// Textspect Core Services

pub mod analyzer;
pub mod detection;
pub mod text_processor;

pub use analyzer::{TextAnalyzer, NO_TEXT_MESSAGE};
pub use detection::{
    default_detectors, DeepScanOrchestrator, SignalDetector, SignalIntegrator, NO_CONTENT_MESSAGE,
};
