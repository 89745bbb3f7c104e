//! Text post-processing pipeline around the summarisation model.
//!
//! Normalises input, guards degenerate text, cleans and deduplicates the raw
//! model output, and assembles the final `StudyNote` with title, keywords and
//! analytics.

use crate::agent::{AgentError, Summarizer};
use crate::config::PipelineConfig;
use crate::keywords::KeywordExtractor;
use crate::metrics::Analytics;
use crate::summary::{StudyNote, SummaryOutput};
use std::collections::HashSet;
use thiserror::Error;

/// Returned instead of a model summary when the input is too short to be worth
/// sending to the model.
pub const PLACEHOLDER_SUMMARY: &str = "Please provide more text for a meaningful summary.";

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("no study text provided")]
    EmptyInput,
    #[error(transparent)]
    Agent(#[from] AgentError),
}

/// Collapse all whitespace runs into single spaces and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Title-case the first two whitespace tokens of `summary`.
///
/// Fewer than two tokens returns whatever is available.
pub fn generate_title(summary: &str) -> String {
    summary
        .split_whitespace()
        .take(2)
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// The post-processing pipeline with its injected summarisation model.
pub struct Pipeline<S: Summarizer> {
    summarizer: S,
    config: PipelineConfig,
    extractor: KeywordExtractor,
}

impl<S: Summarizer> Pipeline<S> {
    pub fn new(summarizer: S, config: PipelineConfig) -> Self {
        let extractor = KeywordExtractor::from_list(
            &config.stopword_list(),
            config.min_word_length,
            config.top_n,
        );
        Self {
            summarizer,
            config,
            extractor,
        }
    }

    /// Summarise `text` into cleaned prose and bullet points.
    ///
    /// Input shorter than the configured minimum (after normalisation) yields
    /// the placeholder summary with no bullets. Model failures propagate.
    pub async fn generate_summary(&self, text: &str) -> Result<SummaryOutput, PipelineError> {
        let normalized = normalize_whitespace(text);
        if normalized.chars().count() < self.config.min_input_chars {
            log::debug!(
                "input below {} chars, returning placeholder",
                self.config.min_input_chars
            );
            return Ok(SummaryOutput::new(PLACEHOLDER_SUMMARY.to_string(), vec![]));
        }

        let raw = self.summarizer.summarize(&normalized).await?;
        Ok(self.clean_raw_summary(&raw))
    }

    /// Run the full analysis: summary, title, keywords and analytics.
    ///
    /// Empty or whitespace-only input is rejected here, before any metric
    /// arithmetic can divide by zero.
    pub async fn analyse(&self, text: &str) -> Result<StudyNote, PipelineError> {
        if text.trim().is_empty() {
            return Err(PipelineError::EmptyInput);
        }

        let output = self.generate_summary(text).await?;
        let title = generate_title(&output.summary);
        let keywords = self.extractor.extract(text);
        let analytics = Analytics::compute(text, &output.summary);

        log::debug!(
            "analysed {} words into {} ({}% reduction)",
            analytics.original_words,
            analytics.summary_words,
            analytics.reduction_percent
        );

        Ok(StudyNote::new(title, output, keywords, analytics))
    }

    /// Extract keywords with the pipeline's configured stopwords and limits.
    pub fn extract_keywords(&self, text: &str) -> Vec<String> {
        self.extractor.extract(text)
    }

    /// Split, length-filter, deduplicate and rejoin the raw model output.
    fn clean_raw_summary(&self, raw: &str) -> SummaryOutput {
        let sentences = dedup_sentences(split_sentences(raw, self.config.min_sentence_chars));

        let bullets = sentences
            .iter()
            .take(self.config.max_bullets)
            .cloned()
            .collect();
        let summary = sentences.join(". ");

        SummaryOutput::new(summary, bullets)
    }
}

/// Sentence candidates from the raw summary: split on `.` or newline,
/// normalise each candidate's whitespace, and keep only those strictly longer
/// than `min_chars`. Normalising here keeps the rejoined summary a no-op
/// under re-normalisation.
fn split_sentences(raw: &str, min_chars: usize) -> Vec<String> {
    raw.split(['.', '\n'])
        .map(normalize_whitespace)
        .filter(|s| s.chars().count() > min_chars)
        .collect()
}

/// Drop exact duplicates, keeping first-seen order.
fn dedup_sentences(sentences: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    sentences
        .into_iter()
        .filter(|s| seen.insert(s.clone()))
        .collect()
}
