//! Word-count and readability metrics.

use serde::{Deserialize, Serialize};

/// Average silent-reading speed used for the reading-time estimate.
const WORDS_PER_MINUTE: f64 = 200.0;

/// Readability analytics attached to every generated note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analytics {
    pub original_words: usize,
    pub summary_words: usize,
    /// Percentage drop in word count, rounded to 2 decimals
    pub reduction_percent: f64,
    /// Estimated minutes to read the summary, rounded to 2 decimals
    pub reading_time: f64,
}

impl Analytics {
    /// Derive analytics from the original text and its summary.
    ///
    /// Callers must reject empty input first; a zero original count yields a
    /// 0.0 reduction rather than dividing by zero.
    pub fn compute(original: &str, summary: &str) -> Self {
        let original_words = word_count(original);
        let summary_words = word_count(summary);
        Self {
            original_words,
            summary_words,
            reduction_percent: reduction_percent(original_words, summary_words),
            reading_time: reading_time(summary_words),
        }
    }
}

/// Number of whitespace-delimited tokens in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimated reading time in minutes at 200 words per minute.
pub fn reading_time(words: usize) -> f64 {
    round2(words as f64 / WORDS_PER_MINUTE)
}

/// Percentage reduction from `original` to `summary` word counts.
pub fn reduction_percent(original: usize, summary: usize) -> f64 {
    if original == 0 {
        return 0.0;
    }
    round2((original as f64 - summary as f64) / original as f64 * 100.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
