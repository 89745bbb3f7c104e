//! In-memory session history of generated notes.
//!
//! History lives for the duration of the process only; there is no
//! persistence layer.

use crate::summary::StudyNote;

/// Newest-first collection of the notes generated this session.
#[derive(Debug, Default)]
pub struct SessionHistory {
    entries: Vec<StudyNote>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a note at the front of the history
    pub fn record(&mut self, note: StudyNote) {
        self.entries.insert(0, note);
    }

    /// All notes, newest first
    pub fn entries(&self) -> &[StudyNote] {
        &self.entries
    }

    /// The most recently recorded note
    pub fn latest(&self) -> Option<&StudyNote> {
        self.entries.first()
    }

    /// Case-insensitive title substring search, preserving history order
    pub fn search(&self, query: &str) -> Vec<&StudyNote> {
        let query = query.to_lowercase();
        self.entries
            .iter()
            .filter(|note| note.title.to_lowercase().contains(&query))
            .collect()
    }

    /// Drop all recorded notes
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
