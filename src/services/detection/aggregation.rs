// Aggregation Rule
// The single weighted-mean rule shared by the integrator and the deep-scan
// orchestrator. Both callers must agree on aggregation semantics: integrating
// and deep-scanning the same text yield the same confidence.

use crate::models::Signal;
use std::collections::HashMap;

/// Sanitize one score: non-finite values count as 0, everything else is
/// clamped to [0, 1].
fn safe_score(score: f64) -> f64 {
    if score.is_finite() {
        score.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Weighted mean of signal scores, clamped to [0, 1].
///
/// Weights are looked up by signal name; a missing entry means weight 1.0, so
/// an empty map is equal weighting. Negative or non-finite weights count as 0.
/// An empty signal set, or one whose weights sum to 0, aggregates to 0.
pub fn aggregate_confidence(signals: &[Signal], weights: &HashMap<String, f64>) -> f64 {
    if signals.is_empty() {
        return 0.0;
    }

    let mut weighted_sum = 0.0;
    let mut total = 0.0;
    for signal in signals {
        let raw_weight = weights.get(&signal.name).copied().unwrap_or(1.0);
        let weight = if raw_weight.is_finite() { raw_weight.max(0.0) } else { 0.0 };
        weighted_sum += safe_score(signal.score) * weight;
        total += weight;
    }

    if total <= 0.0 {
        return 0.0;
    }
    (weighted_sum / total).clamp(0.0, 1.0)
}

/// The highest-scoring signal; the first-registered wins exact ties.
pub fn dominant_signal(signals: &[Signal]) -> Option<&Signal> {
    let mut best: Option<&Signal> = None;
    for signal in signals {
        match best {
            Some(current) if safe_score(signal.score) <= safe_score(current.score) => {}
            _ => best = Some(signal),
        }
    }
    best
}
