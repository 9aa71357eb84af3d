//! Message types for the Elm-style architecture
//!
//! Messages describe things that happened (user edits, timer fires,
//! worker completions). The update functions turn them into model
//! changes plus follow-up commands.

use crate::remote::ReviewError;
use crate::syntax::LanguageId;

/// Editor layer messages (input layer events)
#[derive(Debug, Clone, PartialEq)]
pub enum EditorMsg {
    /// The input layer's full text was replaced
    SetText(String),
    /// The language selector changed
    SetLanguage(LanguageId),
    /// The input layer scrolled
    SetScroll { x: f32, y: f32 },
}

/// Highlight pipeline messages
#[derive(Debug, Clone, PartialEq)]
pub enum SyntaxMsg {
    /// Debounce timer fired for the given generation
    HighlightReady { generation: u64 },
    /// Worker finished highlighting for the given generation
    HighlightCompleted { generation: u64, markup: String },
}

/// Review session messages
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewMsg {
    /// User requested a review of the current code
    Submit,
    /// Backend call finished
    Completed(Result<String, ReviewError>),
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Editor(EditorMsg),
    Syntax(SyntaxMsg),
    Review(ReviewMsg),
}
