//! Keyword extraction by stopword-filtered frequency counting.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// Common English words excluded from keyword ranking.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "the", "is", "are", "was", "were", "this", "that", "from", "with", "into", "about", "their",
    "there", "which", "have", "has", "had", "will", "would", "could", "should", "can", "also",
    "such", "these", "those", "than", "then", "them",
];

/// Tokens shorter than this never qualify as keywords.
pub const DEFAULT_MIN_WORD_LENGTH: usize = 4;

/// Number of keywords returned when the caller does not override it.
pub const DEFAULT_TOP_N: usize = 6;

lazy_static! {
    // Maximal alphabetic runs; digits and punctuation act as separators.
    static ref WORD_PATTERN: Regex = Regex::new(r"[A-Za-z]+").unwrap();
}

/// Frequency-based keyword extractor with a configurable stopword set.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    stopwords: HashSet<String>,
    min_word_length: usize,
    top_n: usize,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::from_list(DEFAULT_STOPWORDS, DEFAULT_MIN_WORD_LENGTH, DEFAULT_TOP_N)
    }
}

impl KeywordExtractor {
    /// Create an extractor from a custom stopword list.
    pub fn from_list(stopwords: &[&str], min_word_length: usize, top_n: usize) -> Self {
        Self {
            stopwords: stopwords.iter().map(|w| w.to_lowercase()).collect(),
            min_word_length,
            top_n,
        }
    }

    /// Check if a word is filtered out as a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Extract the configured number of top keywords from `text`.
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.extract_top(text, self.top_n)
    }

    /// Extract up to `top_n` keywords, ranked by descending frequency.
    ///
    /// Ties keep first-encountered order. Fewer than `top_n` qualifying words
    /// is a valid short result, not an error.
    pub fn extract_top(&self, text: &str, top_n: usize) -> Vec<String> {
        let lowered = text.to_lowercase();

        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut first_seen: Vec<&str> = Vec::new();

        for token in WORD_PATTERN.find_iter(&lowered).map(|m| m.as_str()) {
            if token.len() < self.min_word_length || self.stopwords.contains(token) {
                continue;
            }
            let entry = counts.entry(token).or_insert(0);
            if *entry == 0 {
                first_seen.push(token);
            }
            *entry += 1;
        }

        // Stable sort over first-seen order gives the counter-style tie-break.
        first_seen.sort_by_key(|token| std::cmp::Reverse(counts[token]));
        first_seen
            .into_iter()
            .take(top_n)
            .map(String::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopwords_and_short_words_excluded() {
        let extractor = KeywordExtractor::default();
        let keywords =
            extractor.extract("the learning about learning with our own code that should compile");

        assert!(!keywords.iter().any(|k| extractor.is_stopword(k)));
        assert!(keywords.iter().all(|k| k.len() >= 4));
        assert!(!keywords.contains(&"own".to_string()));
        assert_eq!(keywords.first(), Some(&"learning".to_string()));
    }

    #[test]
    fn test_fewer_qualifying_words_than_top_n() {
        let extractor = KeywordExtractor::default();
        let keywords = extractor.extract("neurons neurons synapse synapse synapse dendrite");

        assert_eq!(keywords, vec!["synapse", "neurons", "dendrite"]);
    }

    #[test]
    fn test_frequency_ranking_with_stable_ties() {
        let extractor = KeywordExtractor::default();
        let keywords = extractor.extract_top("beta alpha beta alpha gamma", 3);

        // Equal counts keep first-encountered order.
        assert_eq!(keywords, vec!["beta", "alpha", "gamma"]);
    }

    #[test]
    fn test_digits_split_tokens() {
        let extractor = KeywordExtractor::default();
        let keywords = extractor.extract("mitochondria42mitochondria respiration2respiration");

        assert_eq!(keywords, vec!["mitochondria", "respiration"]);
    }

    #[test]
    fn test_case_folding() {
        let extractor = KeywordExtractor::default();
        let keywords = extractor.extract("Photosynthesis PHOTOSYNTHESIS photosynthesis");

        assert_eq!(keywords, vec!["photosynthesis"]);
    }

    #[test]
    fn test_custom_configuration() {
        let extractor = KeywordExtractor::from_list(&["banned"], 3, 2);
        let keywords = extractor.extract("banned owl owl fox fox fox elk");

        assert_eq!(keywords, vec!["fox", "owl"]);
    }
}
