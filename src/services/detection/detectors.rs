// Signal Detectors
// Each detector encodes one heuristic family and maps text to a single
// scored signal. Detectors are pure, total, and independent of one another,
// so the pipeline may run them in any order.
//
// Scoring uses soft thresholds (sigmoid) rather than hard cutoffs so scores
// vary continuously with the underlying measure.

use crate::models::Signal;
use crate::services::text_processor::{
    distinct_tokens, mean_std, ngram_repeat_rate, split_sentences, token_frequencies, tokenize,
};

/// A pure detector mapping text to one scored signal.
///
/// Implementations must be stateless and total: any string input, including
/// the empty string, yields a well-defined signal.
pub trait SignalDetector: Send + Sync {
    /// Stable identifier; doubles as the layer name in deep scans and as the
    /// key for aggregation weights.
    fn name(&self) -> &'static str;

    fn detect(&self, text: &str) -> Signal;
}

/// The built-in detector set, in canonical registration order.
pub fn default_detectors() -> Vec<Box<dyn SignalDetector>> {
    vec![
        Box::new(LexicalRepetitionDetector),
        Box::new(SentenceUniformityDetector),
        Box::new(VocabularyDiversityDetector),
        Box::new(PredictabilityDetector),
    ]
}

// ============================================================================
// Soft threshold functions
// ============================================================================

/// Sigmoid: smooth transition around center, decreasing in x.
/// k controls steepness (smaller = steeper).
#[inline]
fn sigmoid(x: f64, center: f64, k: f64) -> f64 {
    1.0 / (1.0 + ((x - center) / k).exp())
}

/// Inverse sigmoid: 1 - sigmoid (for "greater than" thresholds).
#[inline]
fn sigmoid_inv(x: f64, center: f64, k: f64) -> f64 {
    1.0 - sigmoid(x, center, k)
}

fn zero_signal(name: &str) -> Signal {
    Signal {
        name: name.to_string(),
        score: 0.0,
        rationale: "no content to inspect".to_string(),
    }
}

// ============================================================================
// Built-in detectors
// ============================================================================

/// Scores n-gram and token repetition. Machine-generated text tends to reuse
/// phrases and vocabulary more than human prose does.
pub struct LexicalRepetitionDetector;

impl SignalDetector for LexicalRepetitionDetector {
    fn name(&self) -> &'static str {
        "lexical_repetition"
    }

    fn detect(&self, text: &str) -> Signal {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return zero_signal(self.name());
        }

        let ngram = ngram_repeat_rate(&tokens, 3);
        let freq = token_frequencies(&tokens);
        // Fraction of vocabulary items occurring 3+ times.
        let repeat_ratio =
            freq.values().filter(|&&c| c >= 3).count() as f64 / freq.len().max(1) as f64;

        let score = 0.7 * sigmoid_inv(ngram, 0.10, 0.04) + 0.3 * sigmoid_inv(repeat_ratio, 0.18, 0.06);

        Signal {
            name: self.name().to_string(),
            score: score.clamp(0.0, 1.0),
            rationale: format!(
                "3-gram repeat rate {:.3}, {:.0}% of vocabulary repeats 3+ times",
                ngram,
                repeat_ratio * 100.0
            ),
        }
    }
}

/// Scores uniformity of sentence lengths. Low variance across sentences is a
/// known template-like trait of generated text.
pub struct SentenceUniformityDetector;

impl SignalDetector for SentenceUniformityDetector {
    fn name(&self) -> &'static str {
        "sentence_uniformity"
    }

    fn detect(&self, text: &str) -> Signal {
        let sentences = split_sentences(text);
        if sentences.is_empty() {
            return zero_signal(self.name());
        }
        if sentences.len() < 2 {
            return Signal {
                name: self.name().to_string(),
                score: 0.0,
                rationale: "single sentence, no length-variance evidence".to_string(),
            };
        }

        let lengths: Vec<f64> = sentences.iter().map(|s| s.chars().count() as f64).collect();
        let (mean, std) = mean_std(&lengths);
        // Coefficient of variation; mean > 0 because sentences are non-empty.
        let cv = std / mean.max(1.0);
        let score = sigmoid(cv, 0.35, 0.12);

        Signal {
            name: self.name().to_string(),
            score: score.clamp(0.0, 1.0),
            rationale: format!(
                "{} sentences, mean length {:.1} chars, length variation {:.2}",
                sentences.len(),
                mean,
                cv
            ),
        }
    }
}

/// Scores lexical diversity via the type/token ratio. A narrow vocabulary
/// relative to text length reads as template-like.
pub struct VocabularyDiversityDetector;

impl SignalDetector for VocabularyDiversityDetector {
    fn name(&self) -> &'static str {
        "vocabulary_diversity"
    }

    fn detect(&self, text: &str) -> Signal {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return zero_signal(self.name());
        }

        let ttr = distinct_tokens(&tokens) as f64 / tokens.len() as f64;
        let score = sigmoid(ttr, 0.58, 0.08);

        Signal {
            name: self.name().to_string(),
            score: score.clamp(0.0, 1.0),
            rationale: format!(
                "type/token ratio {:.3} over {} tokens",
                ttr,
                tokens.len()
            ),
        }
    }
}

/// Scores how predictable the token stream is, using a unigram-entropy
/// pseudo-perplexity. Low perplexity suggests machine generation.
pub struct PredictabilityDetector;

impl PredictabilityDetector {
    /// Unigram-entropy pseudo-perplexity, scaled into [20, 300].
    fn estimate_perplexity(tokens: &[&str], char_len: usize) -> f64 {
        let freq = token_frequencies(tokens);
        let total = tokens.len() as f64;

        let entropy = -freq
            .values()
            .map(|&c| {
                let p = c as f64 / total;
                p * (p + 1e-12).ln()
            })
            .sum::<f64>();

        let ppl_uni = entropy.exp();
        let ppl_scaled = 20.0 + ((ppl_uni - 1.0) * 22.5).min(280.0);
        let diversity = freq.len() as f64 / total.max(1.0);
        let base = 120.0 - diversity * 60.0 + char_len as f64 / 500.0;
        (0.5 * ppl_scaled + 0.5 * base).clamp(20.0, 300.0)
    }
}

impl SignalDetector for PredictabilityDetector {
    fn name(&self) -> &'static str {
        "predictability"
    }

    fn detect(&self, text: &str) -> Signal {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return zero_signal(self.name());
        }

        let ppl = Self::estimate_perplexity(&tokens, text.chars().count());
        let score = sigmoid(ppl, 100.0, 25.0);

        Signal {
            name: self.name().to_string(),
            score: score.clamp(0.0, 1.0),
            rationale: format!("estimated perplexity {:.1}", ppl),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_in_range(signal: &Signal) {
        assert!(
            (0.0..=1.0).contains(&signal.score),
            "{} score {} out of range",
            signal.name,
            signal.score
        );
        assert!(!signal.rationale.is_empty());
    }

    #[test]
    fn test_all_detectors_total_on_empty_input() {
        for detector in default_detectors() {
            let signal = detector.detect("");
            assert_eq!(signal.score, 0.0);
            assert_eq!(signal.name, detector.name());
            assert!(!signal.rationale.is_empty());
        }
    }

    #[test]
    fn test_all_detectors_in_range_on_varied_input() {
        let inputs = [
            "Hello AI world",
            "word ",
            "。。。",
            "\u{0000}\u{0007} control characters \u{001b}[0m",
            "The quick brown fox jumps over the lazy dog. \
             Pack my box with five dozen liquor jugs.",
        ];
        for detector in default_detectors() {
            for input in inputs {
                assert_in_range(&detector.detect(input));
            }
        }
    }

    #[test]
    fn test_repetition_scores_repeated_phrases_higher() {
        let repetitive = "the system works well. the system works well. the system works well. \
                          the system works well. the system works well.";
        let varied = "morning light crept across the harbor. gulls argued over scraps near \
                      the pier. a ferry horn startled the fishmonger mid-sentence.";
        let detector = LexicalRepetitionDetector;
        assert!(detector.detect(repetitive).score > detector.detect(varied).score);
    }

    #[test]
    fn test_uniformity_scores_even_sentences_higher() {
        let uniform = "This line has seven words in total. That line has seven words in total. \
                       Each line has seven words in total.";
        let ragged = "Short one. This sentence meanders on for quite a while before finally \
                      arriving anywhere useful at all. Then, a fragment. Done.";
        let detector = SentenceUniformityDetector;
        assert!(detector.detect(uniform).score > detector.detect(ragged).score);
    }

    #[test]
    fn test_uniformity_single_sentence_is_zero() {
        let signal = SentenceUniformityDetector.detect("One lonely sentence here.");
        assert_eq!(signal.score, 0.0);
    }

    #[test]
    fn test_diversity_scores_narrow_vocabulary_higher() {
        let narrow = "good good good good good thing thing thing thing thing";
        let wide = "seventeen lanterns flickered while distant thunder rearranged the horizon";
        let detector = VocabularyDiversityDetector;
        assert!(detector.detect(narrow).score > detector.detect(wide).score);
    }

    #[test]
    fn test_detectors_are_deterministic() {
        let text = "Determinism means calling twice yields the same answer. Every time.";
        for detector in default_detectors() {
            let a = detector.detect(text);
            let b = detector.detect(text);
            assert_eq!(a.score, b.score);
            assert_eq!(a.rationale, b.rationale);
        }
    }
}
