// Top-Level Analyzer
// Public entry point shaping the final verdict. Delegates signal collection
// and aggregation to the integrator; ai_probability is set equal to the
// aggregate confidence (AI-likelihood and aggregate evidence strength are
// modeled as the same normalized signal).

use crate::models::TextAnalysis;
use crate::services::detection::aggregation::dominant_signal;
use crate::services::detection::integrator::{is_blank, SignalIntegrator};

/// Sentinel reasoning for blank input. Deliberately distinct from the
/// integrator's message; each layer owns its own user-facing wording.
pub const NO_TEXT_MESSAGE: &str = "No text provided";

/// Shapes integrator output into the top-level verdict.
#[derive(Default)]
pub struct TextAnalyzer {
    integrator: SignalIntegrator,
}

impl TextAnalyzer {
    pub fn new(integrator: SignalIntegrator) -> Self {
        Self { integrator }
    }

    pub fn analyze(&self, text: &str) -> TextAnalysis {
        if is_blank(text) {
            return TextAnalysis {
                ai_probability: 0.0,
                confidence: 0.0,
                reasoning: NO_TEXT_MESSAGE.to_string(),
            };
        }

        let signals = self.integrator.signals(text);
        let confidence = self.integrator.aggregate(&signals);
        let reasoning = match dominant_signal(&signals) {
            Some(top) => format!(
                "Dominant signal '{}' scored {:.2} across {} detectors: {}",
                top.name,
                top.score,
                signals.len(),
                top.rationale
            ),
            None => "No detectors registered.".to_string(),
        };

        TextAnalysis {
            ai_probability: confidence,
            confidence,
            reasoning,
        }
    }
}
