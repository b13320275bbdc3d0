// Textspect
// Heuristic AI-generated text likelihood estimation.
//
// The pipeline is a one-way flow: text -> detectors -> integrator /
// orchestrator -> shaped response. Every operation is a synchronous, pure
// function over its input string; no component holds state between calls.
// Transports (HTTP, CLI, GUI) are external collaborators that serialize the
// returned records for their own wire formats.

pub mod models;
pub mod services;

pub use models::{
    AnalysisResult, DeepScanResult, DetectionOptions, LayerResult, Signal, TextAnalysis,
};
pub use services::analyzer::{TextAnalyzer, NO_TEXT_MESSAGE};
pub use services::detection::{
    default_detectors, DeepScanOrchestrator, SignalDetector, SignalIntegrator, NO_CONTENT_MESSAGE,
};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a console-only tracing subscriber with env-filter support.
/// Convenience for embedding applications; the pipeline itself only emits
/// `tracing` events and never performs I/O. Safe to call more than once.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init();
}

/// Analyze text with the default detector set and shape the top-level
/// verdict.
pub fn analyze_text(text: &str) -> TextAnalysis {
    TextAnalyzer::default().analyze(text)
}

/// Run every default detector as a named layer, preserving per-layer
/// provenance.
pub fn deep_analyze(text: &str) -> DeepScanResult {
    DeepScanOrchestrator::default().deep_analyze(text)
}

/// Integrate the default detector signals into one aggregate confidence and
/// a dominant-evidence summary.
pub fn process_signal(text: &str) -> AnalysisResult {
    SignalIntegrator::default().process_signal(text)
}
