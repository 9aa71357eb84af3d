//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an
//! update. The runtime executes them on worker threads and feeds the
//! results back as messages.

use crate::syntax::LanguageId;

/// Side effects returned by update functions
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    /// No side effect
    None,
    /// The rendering layer needs repainting
    Redraw,
    /// Multiple commands
    Batch(Vec<Cmd>),
    /// Fire `SyntaxMsg::HighlightReady { generation }` after `delay_ms`
    DebouncedHighlight { generation: u64, delay_ms: u64 },
    /// Run the highlighter on the worker thread
    RunHighlight {
        generation: u64,
        source: String,
        language: LanguageId,
    },
    /// Call the review backend with the given code
    SubmitReview { code: String },
}

impl Cmd {
    /// Whether this command (or any nested command) requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::Redraw => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            _ => false,
        }
    }
}
