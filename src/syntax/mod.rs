//! Syntax highlighting
//!
//! Tree-sitter based highlighting behind a lazy grammar registry. The
//! `Highlighter` runs on a dedicated worker thread; everything here is
//! thread-confined to it.

pub mod highlighter;
pub mod languages;
pub mod registry;

pub use highlighter::{highlight_id_for_name, HighlightId, Highlighter, HIGHLIGHT_NAMES};
pub use languages::LanguageId;
pub use registry::{Grammar, GrammarRegistry};
