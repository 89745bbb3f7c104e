//! End-to-end analysis flow: summarise, record, search, export.

use async_trait::async_trait;
use studia::agent::{AgentError, Summarizer};
use studia::config::PipelineConfig;
use studia::{export, Pipeline, SessionHistory};

/// Deterministic stand-in for the LLM backend.
struct ScriptedSummarizer {
    response: &'static str,
}

#[async_trait]
impl Summarizer for ScriptedSummarizer {
    async fn summarize(&self, _text: &str) -> Result<String, AgentError> {
        Ok(self.response.to_string())
    }
}

const STUDY_TEXT: &str = "Photosynthesis is the process by which green plants convert light \
    energy into chemical energy. Light is absorbed by chlorophyll inside chloroplasts, and \
    the captured energy drives the synthesis of glucose from carbon dioxide and water. \
    Photosynthesis also releases the oxygen that most life on Earth depends on.";

const MODEL_OUTPUT: &str = "plants convert light energy into chemical energy. \
    chlorophyll inside chloroplasts absorbs the light.\n\
    plants convert light energy into chemical energy. \
    the process releases oxygen as a by-product";

#[tokio::test]
async fn full_session_flow() {
    let pipeline = Pipeline::new(
        ScriptedSummarizer {
            response: MODEL_OUTPUT,
        },
        PipelineConfig::default(),
    );
    let mut history = SessionHistory::new();

    let note = pipeline.analyse(STUDY_TEXT).await.unwrap();

    // The duplicated model sentence collapses, order preserved.
    assert_eq!(
        note.bullets,
        vec![
            "plants convert light energy into chemical energy",
            "chlorophyll inside chloroplasts absorbs the light",
            "the process releases oxygen as a by-product",
        ]
    );
    assert_eq!(note.summary, note.bullets.join(". "));
    assert_eq!(note.title, "Plants Convert");

    // Keywords come from the original text, most frequent first.
    assert_eq!(note.keywords.first(), Some(&"energy".to_string()));
    assert!(note.keywords.contains(&"photosynthesis".to_string()));
    assert!(!note.keywords.contains(&"the".to_string()));
    assert!(note.keywords.len() <= 6);

    // Analytics reflect the word counts of input and cleaned summary.
    assert!(note.analytics.original_words > note.analytics.summary_words);
    assert!(note.analytics.reduction_percent > 0.0);
    assert!(note.analytics.reading_time > 0.0);

    history.record(note);
    assert_eq!(history.search("plants").len(), 1);

    // Export the session and read it back.
    let dir = tempfile::tempdir().unwrap();
    let json_path = dir.path().join("history.json");
    export::write_history_json(&history, &json_path).unwrap();
    let restored: Vec<studia::StudyNote> =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(restored[0].title, "Plants Convert");

    let report = export::render_markdown(history.latest().unwrap());
    assert!(report.starts_with("# Plants Convert"));
    assert!(report.contains("- chlorophyll inside chloroplasts absorbs the light"));
}

#[tokio::test]
async fn degenerate_input_is_not_an_error() {
    let pipeline = Pipeline::new(
        ScriptedSummarizer { response: "unused" },
        PipelineConfig::default(),
    );

    let note = pipeline.analyse("too short to summarise").await.unwrap();
    assert_eq!(
        note.summary,
        "Please provide more text for a meaningful summary."
    );
    assert!(note.bullets.is_empty());
}
