//! Client-side editor state for generated content.
//!
//! This crate is deliberately free of any UI framework: it holds the current
//! draft, its approval status and the append-only version history, and
//! exposes pure transition functions a view layer can call. Keeping the
//! transitions pure makes the history invariants unit-testable on their own.

pub mod refine;
pub mod state;

pub use refine::refine_prompt;
pub use state::{ContentVersion, DraftStatus, EditorState};
