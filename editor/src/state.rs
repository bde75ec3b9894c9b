//! Draft, status and version history with pure transitions.
//!
//! The history is an insertion-ordered stack of full snapshots, most recent
//! first; `current` is an index into it. Entries are only ever appended at
//! the front — nothing is edited or removed except by `reject`, which resets
//! the whole state.

use chrono::{DateTime, Utc};
use common::model::response::GenerationResponse;
use serde::{Deserialize, Serialize};

/// Review status of the current draft.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftStatus {
    #[default]
    Draft,
    Approved,
    Rejected,
}

/// One snapshot in the version history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentVersion {
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// Main state container for the content editor.
#[derive(Clone, Debug, Default)]
pub struct EditorState {
    /// Text currently shown in the editor.
    pub draft: String,

    pub status: DraftStatus,

    /// Full snapshots, most recent first.
    history: Vec<ContentVersion>,

    /// Index into `history` pointing at the active version.
    current: usize,

    /// MD5 of the draft at the last generate/save. Used for dirty tracking.
    saved_md5: Option<String>,
}

fn checksum(text: &str) -> String {
    format!("{:x}", md5::compute(text.as_bytes()))
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[ContentVersion] {
        &self.history
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Install freshly generated content as the newest version.
    pub fn apply_generated(&mut self, content: String, at: DateTime<Utc>) {
        self.history.insert(
            0,
            ContentVersion {
                content: content.clone(),
                timestamp: at,
            },
        );
        self.current = 0;
        self.saved_md5 = Some(checksum(&content));
        self.draft = content;
        self.status = DraftStatus::Draft;
    }

    /// Convenience for view layers: install the content of a backend
    /// generation response.
    pub fn apply_response(&mut self, response: &GenerationResponse, at: DateTime<Utc>) {
        self.apply_generated(response.content.clone(), at);
    }

    /// Record a manual edit as a new version and drop back to draft status.
    pub fn save_edit(&mut self, content: String, at: DateTime<Utc>) {
        self.apply_generated(content, at);
    }

    pub fn approve(&mut self) {
        self.status = DraftStatus::Approved;
    }

    /// Destructive: clears the draft and the entire history.
    pub fn reject(&mut self) {
        *self = Self {
            status: DraftStatus::Rejected,
            ..Self::default()
        };
    }

    /// Copy version `index` into the draft without touching the history.
    /// Returns `false` when the index is out of range.
    pub fn load_version(&mut self, index: usize) -> bool {
        match self.history.get(index) {
            Some(version) => {
                self.draft = version.content.clone();
                self.current = index;
                self.saved_md5 = Some(checksum(&self.draft));
                self.status = DraftStatus::Draft;
                true
            }
            None => false,
        }
    }

    /// Whether the draft has been modified since the last generate/save.
    pub fn is_dirty(&self) -> bool {
        match &self.saved_md5 {
            Some(saved) => checksum(&self.draft) != *saved,
            None => !self.draft.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn history_is_most_recent_first_with_current_at_zero() {
        let mut state = EditorState::new();
        for i in 0..5 {
            state.apply_generated(format!("version {i}"), at(i));
        }
        assert_eq!(state.history().len(), 5);
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.draft, "version 4");
        // Reverse-chronological order.
        let stamps: Vec<_> = state.history().iter().map(|v| v.timestamp).collect();
        let mut sorted = stamps.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(stamps, sorted);
    }

    #[test]
    fn save_edit_appends_and_resets_status() {
        let mut state = EditorState::new();
        state.apply_generated("generated".into(), at(0));
        state.approve();
        assert_eq!(state.status, DraftStatus::Approved);

        state.save_edit("edited".into(), at(1));
        assert_eq!(state.status, DraftStatus::Draft);
        assert_eq!(state.history().len(), 2);
        assert_eq!(state.history()[0].content, "edited");
        assert_eq!(state.history()[1].content, "generated");
    }

    #[test]
    fn reject_clears_draft_and_history() {
        let mut state = EditorState::new();
        state.apply_generated("something".into(), at(0));
        state.save_edit("something else".into(), at(1));
        state.reject();
        assert_eq!(state.status, DraftStatus::Rejected);
        assert!(state.draft.is_empty());
        assert!(state.history().is_empty());
    }

    #[test]
    fn load_version_does_not_mutate_history() {
        let mut state = EditorState::new();
        state.apply_generated("first".into(), at(0));
        state.apply_generated("second".into(), at(1));

        assert!(state.load_version(1));
        assert_eq!(state.draft, "first");
        assert_eq!(state.current_index(), 1);
        assert_eq!(state.history().len(), 2);

        assert!(!state.load_version(7));
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn dirty_tracking_follows_the_draft() {
        let mut state = EditorState::new();
        state.apply_generated("text".into(), at(0));
        assert!(!state.is_dirty());
        state.draft.push_str(" changed");
        assert!(state.is_dirty());
        state.save_edit(state.draft.clone(), at(1));
        assert!(!state.is_dirty());
    }
}
