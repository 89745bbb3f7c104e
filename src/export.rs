//! Export of notes and session history to JSON and Markdown.

use crate::session::SessionHistory;
use crate::summary::StudyNote;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("failed to write export file: {0}")]
    WriteError(#[from] std::io::Error),
}

/// Write the whole session history as pretty-printed JSON.
pub fn write_history_json<P: AsRef<Path>>(
    history: &SessionHistory,
    path: P,
) -> Result<(), ExportError> {
    let json = serde_json::to_string_pretty(history.entries())?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Write a single note as pretty-printed JSON.
pub fn write_note_json<P: AsRef<Path>>(note: &StudyNote, path: P) -> Result<(), ExportError> {
    let json = serde_json::to_string_pretty(note)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Write a printable Markdown report for a note.
pub fn write_markdown_report<P: AsRef<Path>>(
    note: &StudyNote,
    path: P,
) -> Result<(), ExportError> {
    std::fs::write(path, render_markdown(note))?;
    Ok(())
}

/// Render a note as a Markdown document: title, summary, bullet list,
/// keywords and analytics, in the order the terminal output uses.
pub fn render_markdown(note: &StudyNote) -> String {
    let mut doc = String::new();

    doc.push_str(&format!("# {}\n\n", note.title));
    doc.push_str(&format!(
        "_Generated {}_\n\n",
        note.timestamp.format("%d-%m-%Y %H:%M:%S")
    ));

    doc.push_str("## Summary\n\n");
    doc.push_str(&note.summary);
    doc.push_str("\n\n");

    if !note.bullets.is_empty() {
        doc.push_str("## Important Points\n\n");
        for bullet in &note.bullets {
            doc.push_str(&format!("- {}\n", bullet));
        }
        doc.push('\n');
    }

    if !note.keywords.is_empty() {
        doc.push_str("## Keywords\n\n");
        doc.push_str(&note.keywords.join(", "));
        doc.push_str("\n\n");
    }

    doc.push_str("## Analytics\n\n");
    doc.push_str(&format!(
        "- Original words: {}\n- Summary words: {}\n- Word reduction: {}%\n- Estimated reading time: {} minutes\n",
        note.analytics.original_words,
        note.analytics.summary_words,
        note.analytics.reduction_percent,
        note.analytics.reading_time,
    ));

    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::Analytics;
    use crate::summary::SummaryOutput;

    fn note() -> StudyNote {
        StudyNote::new(
            "Cell Division".to_string(),
            SummaryOutput::new(
                "cells divide by mitosis. each daughter cell keeps the genome".to_string(),
                vec!["cells divide by mitosis".to_string()],
            ),
            vec!["mitosis".to_string(), "genome".to_string()],
            Analytics::compute(
                "cells divide by mitosis and each daughter cell keeps a full copy of the genome",
                "cells divide by mitosis. each daughter cell keeps the genome",
            ),
        )
    }

    #[test]
    fn test_render_markdown_sections() {
        let doc = render_markdown(&note());

        assert!(doc.starts_with("# Cell Division\n"));
        assert!(doc.contains("## Summary"));
        assert!(doc.contains("- cells divide by mitosis\n"));
        assert!(doc.contains("mitosis, genome"));
        assert!(doc.contains("## Analytics"));
    }

    #[test]
    fn test_markdown_omits_empty_sections() {
        let mut bare = note();
        bare.bullets.clear();
        bare.keywords.clear();

        let doc = render_markdown(&bare);
        assert!(!doc.contains("## Important Points"));
        assert!(!doc.contains("## Keywords"));
    }

    #[test]
    fn test_history_json_round_trips() {
        let mut history = SessionHistory::new();
        history.record(note());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        write_history_json(&history, &path).unwrap();

        let restored: Vec<StudyNote> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(restored.len(), 1);
        assert_eq!(restored[0].title, "Cell Division");
        assert_eq!(restored[0].analytics.reduction_percent, 33.33);
    }

    #[test]
    fn test_note_json_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.json");
        write_note_json(&note(), &path).unwrap();

        let restored: StudyNote =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(restored.keywords, vec!["mitosis", "genome"]);
    }
}
