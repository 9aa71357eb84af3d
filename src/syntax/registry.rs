//! Lazy grammar registry
//!
//! Grammars and their highlight queries are compiled on first use and kept
//! for the lifetime of the registry. The registry is owned by the highlight
//! worker thread (tree-sitter parsers and queries are not Sync).

use std::collections::HashMap;

use tree_sitter::{Language, Query};

use super::languages::LanguageId;

// Built-in queries shipped with the grammar crates (some use the singular
// HIGHLIGHT_QUERY name)
const JAVASCRIPT_HIGHLIGHTS: &str = tree_sitter_javascript::HIGHLIGHT_QUERY;
const PYTHON_HIGHLIGHTS: &str = tree_sitter_python::HIGHLIGHTS_QUERY;
const JAVA_HIGHLIGHTS: &str = tree_sitter_java::HIGHLIGHTS_QUERY;
const CPP_HIGHLIGHTS: &str = tree_sitter_cpp::HIGHLIGHT_QUERY;
const GO_HIGHLIGHTS: &str = tree_sitter_go::HIGHLIGHTS_QUERY;
const RUST_HIGHLIGHTS: &str = tree_sitter_rust::HIGHLIGHTS_QUERY;

// Embedded query files for grammars whose bundled queries don't compile
// standalone
const CSHARP_HIGHLIGHTS: &str = include_str!("../../queries/csharp/highlights.scm");
const TYPESCRIPT_HIGHLIGHTS: &str = include_str!("../../queries/typescript/highlights.scm");

/// A loaded grammar: the tree-sitter language plus its compiled
/// highlight query
pub struct Grammar {
    pub language: Language,
    pub query: Query,
}

/// Per-worker registry of lazily loaded grammars
///
/// Entries are additive-only and never evicted. A failed load is logged
/// and the language simply stays unavailable; callers fall back to
/// unhighlighted text.
#[derive(Default)]
pub struct GrammarRegistry {
    grammars: HashMap<LanguageId, Grammar>,
}

fn grammar_source(lang: LanguageId) -> (Language, &'static str) {
    match lang {
        LanguageId::JavaScript => (
            tree_sitter_javascript::LANGUAGE.into(),
            JAVASCRIPT_HIGHLIGHTS,
        ),
        LanguageId::Python => (tree_sitter_python::LANGUAGE.into(), PYTHON_HIGHLIGHTS),
        LanguageId::Java => (tree_sitter_java::LANGUAGE.into(), JAVA_HIGHLIGHTS),
        LanguageId::Cpp => (tree_sitter_cpp::LANGUAGE.into(), CPP_HIGHLIGHTS),
        LanguageId::CSharp => (tree_sitter_c_sharp::LANGUAGE.into(), CSHARP_HIGHLIGHTS),
        LanguageId::Go => (tree_sitter_go::LANGUAGE.into(), GO_HIGHLIGHTS),
        LanguageId::Rust => (tree_sitter_rust::LANGUAGE.into(), RUST_HIGHLIGHTS),
        LanguageId::TypeScript => (
            tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            TYPESCRIPT_HIGHLIGHTS,
        ),
    }
}

impl GrammarRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure the grammar for `lang` is loaded, returning availability.
    ///
    /// Idempotent: the first call compiles the highlight query, later
    /// calls are a map lookup. A compile failure is logged and retried
    /// on the next call.
    pub fn ensure(&mut self, lang: LanguageId) -> bool {
        if self.grammars.contains_key(&lang) {
            return true;
        }

        let (language, highlights_scm) = grammar_source(lang);

        match Query::new(&language, highlights_scm) {
            Ok(query) => {
                tracing::debug!("Loaded grammar for {:?}", lang);
                self.grammars.insert(lang, Grammar { language, query });
                true
            }
            Err(e) => {
                tracing::error!("Failed to compile highlight query for {:?}: {:?}", lang, e);
                false
            }
        }
    }

    /// Whether the grammar for `lang` has been loaded
    pub fn is_loaded(&self, lang: LanguageId) -> bool {
        self.grammars.contains_key(&lang)
    }

    /// Get a loaded grammar, if available
    pub fn get(&self, lang: LanguageId) -> Option<&Grammar> {
        self.grammars.get(&lang)
    }

    /// Number of loaded grammars
    pub fn loaded_count(&self) -> usize {
        self.grammars.len()
    }
}
