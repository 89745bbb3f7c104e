//! Value types produced by the post-processing pipeline.

use crate::metrics::Analytics;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cleaned summary text together with its extracted bullet points.
///
/// The bullets are a prefix of the deduplicated sentences that make up
/// `summary`; order follows the model output and is never re-sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryOutput {
    /// Deduplicated sentences rejoined with `". "`
    pub summary: String,
    /// Up to six key-point sentences
    pub bullets: Vec<String>,
}

impl SummaryOutput {
    pub fn new(summary: String, bullets: Vec<String>) -> Self {
        Self { summary, bullets }
    }

    /// Check if the summary carries any bullet points
    pub fn has_bullets(&self) -> bool {
        !self.bullets.is_empty()
    }
}

/// A fully analysed piece of study material, ready for display or export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyNote {
    /// Short title derived from the summary
    pub title: String,
    /// Cleaned summary text
    pub summary: String,
    /// Key-point bullets
    pub bullets: Vec<String>,
    /// Ranked keywords from the original text
    pub keywords: Vec<String>,
    /// When the note was generated
    pub timestamp: DateTime<Utc>,
    /// Word counts, reduction and reading time
    pub analytics: Analytics,
}

impl StudyNote {
    pub fn new(
        title: String,
        output: SummaryOutput,
        keywords: Vec<String>,
        analytics: Analytics,
    ) -> Self {
        Self {
            title,
            summary: output.summary,
            bullets: output.bullets,
            keywords,
            timestamp: Utc::now(),
            analytics,
        }
    }
}
