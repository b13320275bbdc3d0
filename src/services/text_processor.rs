// Text Processing Service
// Shared tokenization and sentence machinery for the signal detectors

use regex::Regex;
use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::OnceLock;

fn token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // English/numeric words plus individual CJK characters.
    RE.get_or_init(|| Regex::new(r"[A-Za-z0-9_]+|[\u{4e00}-\u{9fff}]").expect("token regex"))
}

/// Tokenize text into words (English/numeric) and individual CJK characters.
pub fn tokenize(text: &str) -> Vec<&str> {
    token_re().find_iter(text).map(|m| m.as_str()).collect()
}

/// Count distinct token types.
pub fn distinct_tokens(tokens: &[&str]) -> usize {
    tokens.iter().collect::<HashSet<_>>().len()
}

/// Per-token occurrence counts.
pub fn token_frequencies<'a>(tokens: &[&'a str]) -> HashMap<&'a str, usize> {
    let mut freq: HashMap<&str, usize> = HashMap::new();
    for t in tokens {
        *freq.entry(t).or_insert(0) += 1;
    }
    freq
}

/// Fraction of n-gram occurrences that are repeats of an earlier occurrence.
pub fn ngram_repeat_rate(tokens: &[&str], n: usize) -> f64 {
    if n == 0 || tokens.len() < n + 1 {
        return 0.0;
    }
    let mut counts: HashMap<Vec<&str>, usize> = HashMap::new();
    let mut total = 0usize;
    for i in 0..=tokens.len().saturating_sub(n) {
        let key: Vec<&str> = tokens[i..i + n].to_vec();
        *counts.entry(key).or_insert(0) += 1;
        total += 1;
    }
    let repeats = counts.values().filter(|&&c| c >= 2).map(|&c| c - 1).sum::<usize>();
    repeats as f64 / total.max(1) as f64
}

/// Split text into sentences, tracking quotes and decimal points so that
/// `"He said \"stop.\" and left."` and `3.14` do not produce spurious splits.
/// Handles CJK terminators without requiring trailing whitespace.
pub fn split_sentences(text: &str) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }

    let chars: Vec<char> = text.chars().collect();
    let quote_chars: HashSet<char> =
        ['"', '\u{201c}', '\u{201d}', '\'', '\u{2018}', '\u{2019}'].into_iter().collect();

    let mut sentences = Vec::new();
    let mut buffer = String::new();
    let mut in_quote = false;
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        buffer.push(ch);

        if quote_chars.contains(&ch) {
            in_quote = !in_quote;
        }

        let mut is_sentence_end = false;
        if ['。', '！', '？', '.', '!', '?'].contains(&ch) {
            if in_quote {
                i += 1;
                continue;
            }

            // Decimal numbers are not sentence boundaries.
            if ch == '.' && i > 0 && i < chars.len() - 1 {
                if chars[i - 1].is_ascii_digit() && chars[i + 1].is_ascii_digit() {
                    i += 1;
                    continue;
                }
            }

            is_sentence_end = true;
        }

        if is_sentence_end {
            // Absorb trailing whitespace into the current sentence.
            while i < chars.len() - 1 && [' ', '\t'].contains(&chars[i + 1]) {
                i += 1;
                buffer.push(chars[i]);
            }

            let sentence = buffer.trim().to_string();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            buffer.clear();
        }

        i += 1;
    }

    let remaining = buffer.trim().to_string();
    if !remaining.is_empty() {
        sentences.push(remaining);
    }

    sentences
}

/// Mean and standard deviation of a sample; (0, 0) for an empty slice.
pub fn mean_std(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    (mean, variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_mixed_script() {
        assert_eq!(tokenize("Hello World").len(), 2);
        assert_eq!(tokenize("你好世界").len(), 4);
        assert_eq!(tokenize("Hello 你好").len(), 3);
    }

    #[test]
    fn test_tokenize_empty_and_punctuation_only() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("... !!! ???").is_empty());
    }

    #[test]
    fn test_ngram_repeat_rate_detects_repeats() {
        let tokens = vec!["a", "b", "c", "a", "b", "c", "a", "b", "c"];
        assert!(ngram_repeat_rate(&tokens, 3) > 0.0);

        let unique = vec!["a", "b", "c", "d", "e", "f"];
        assert_eq!(ngram_repeat_rate(&unique, 3), 0.0);
    }

    #[test]
    fn test_ngram_repeat_rate_short_input() {
        assert_eq!(ngram_repeat_rate(&["a", "b"], 3), 0.0);
        assert_eq!(ngram_repeat_rate(&[], 3), 0.0);
    }

    #[test]
    fn test_split_sentences_basic() {
        let sentences = split_sentences("First one. Second one! Third one?");
        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[0], "First one.");
    }

    #[test]
    fn test_split_sentences_cjk_without_whitespace() {
        let sentences = split_sentences("这是第一句。这是第二句！这是第三句？");
        assert_eq!(sentences.len(), 3);
    }

    #[test]
    fn test_split_sentences_skips_decimals() {
        let sentences = split_sentences("The value is 3.14 exactly. Next sentence.");
        assert_eq!(sentences.len(), 2);
    }

    #[test]
    fn test_split_sentences_keeps_unterminated_tail() {
        let sentences = split_sentences("Done. trailing fragment");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[1], "trailing fragment");
    }

    #[test]
    fn test_mean_std() {
        let (mean, std) = mean_std(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((mean - 5.0).abs() < 1e-9);
        assert!((std - 2.0).abs() < 1e-9);
        assert_eq!(mean_std(&[]), (0.0, 0.0));
    }
}
