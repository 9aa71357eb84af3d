//! Application model
//!
//! Single state tree mutated only by the update functions.

pub mod editor;
pub mod review;

pub use editor::{EditorState, LayerMetrics, ScrollOffset, HIGHLIGHT_DEBOUNCE_MS};
pub use review::{render_review_html, ReviewSession, ReviewStatus, REVIEW_FAILED_MESSAGE};

/// Root application state
#[derive(Debug, Clone, Default)]
pub struct AppModel {
    pub editor: EditorState,
    pub review: ReviewSession,
}

impl AppModel {
    pub fn new() -> Self {
        Self::default()
    }
}
