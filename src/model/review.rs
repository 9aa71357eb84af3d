//! Review session model
//!
//! Tracks the lifecycle of a code review request. One session per
//! editor; results persist until the next request overwrites them.

use pulldown_cmark::{html, Options, Parser};

/// Shown whenever a review request fails, regardless of cause
pub const REVIEW_FAILED_MESSAGE: &str =
    "Error occurred while reviewing the code. Please try again.";

/// Review request lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReviewStatus {
    #[default]
    Idle,
    Loading,
    /// The backend's review text (markdown)
    Succeeded(String),
    /// The fixed user-facing failure message
    Failed(String),
}

/// State of the review session
#[derive(Debug, Clone, Default)]
pub struct ReviewSession {
    pub status: ReviewStatus,
}

impl ReviewSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a request is currently in flight
    pub fn is_loading(&self) -> bool {
        self.status == ReviewStatus::Loading
    }

    /// The review text, if the last request succeeded
    pub fn review_text(&self) -> Option<&str> {
        match &self.status {
            ReviewStatus::Succeeded(text) => Some(text),
            _ => None,
        }
    }
}

/// Render a review response (markdown) to HTML for the result panel
pub fn render_review_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(markdown, options);
    let mut output = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut output, parser);
    output
}
