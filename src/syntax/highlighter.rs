//! Markup extraction from parsed source
//!
//! Produces the rendering layer's markup: an HTML-like string of
//! `<span class="tok-...">` wrapped classified spans. Highlighting is
//! progressive enhancement; any failure falls back to the raw source
//! text so the rendering layer always has something to mirror.

use std::collections::HashMap;

use streaming_iterator::StreamingIterator;
use tree_sitter::{Parser, QueryCursor};

use super::languages::LanguageId;
use super::registry::GrammarRegistry;

/// Standard tree-sitter capture names recognized for classification.
/// Index into this array is the HighlightId.
pub const HIGHLIGHT_NAMES: &[&str] = &[
    "attribute",             // @attribute
    "boolean",               // @boolean (true, false)
    "comment",               // @comment
    "constant",              // @constant
    "constant.builtin",      // @constant.builtin (null, nil)
    "constructor",           // @constructor (new Foo)
    "escape",                // @escape (string escapes)
    "function",              // @function
    "function.builtin",      // @function.builtin
    "function.method",       // @function.method
    "keyword",               // @keyword
    "keyword.return",        // @keyword.return
    "keyword.function",      // @keyword.function (function, fn)
    "keyword.operator",      // @keyword.operator (and, or)
    "label",                 // @label
    "number",                // @number
    "operator",              // @operator
    "property",              // @property
    "punctuation",           // @punctuation (general)
    "punctuation.bracket",   // @punctuation.bracket
    "punctuation.delimiter", // @punctuation.delimiter
    "punctuation.special",   // @punctuation.special
    "string",                // @string
    "string.special",        // @string.special (regex, heredoc)
    "tag",                   // @tag
    "type",                  // @type
    "type.builtin",          // @type.builtin (int, string, bool)
    "variable",              // @variable
    "variable.builtin",      // @variable.builtin (this, self)
    "variable.parameter",    // @variable.parameter
];

/// Index into HIGHLIGHT_NAMES
pub type HighlightId = u16;

/// Look up highlight ID by capture name
pub fn highlight_id_for_name(name: &str) -> Option<HighlightId> {
    // Handle hierarchical names: try exact match first, then progressively
    // shorter parents (e.g. "keyword.control.import" -> "keyword.control"
    // -> "keyword").
    let mut current = name;
    loop {
        if let Some(pos) = HIGHLIGHT_NAMES.iter().position(|&n| n == current) {
            return Some(pos as HighlightId);
        }

        let Some(dot_pos) = current.rfind('.') else {
            break;
        };
        current = &current[..dot_pos];
    }

    None
}

/// CSS class for a highlight ID ("keyword.function" -> "tok-keyword-function")
pub fn class_for_highlight(id: HighlightId) -> String {
    format!("tok-{}", HIGHLIGHT_NAMES[id as usize].replace('.', "-"))
}

/// A classified byte range within the source
#[derive(Debug, Clone, PartialEq, Eq)]
struct HighlightSpan {
    start_byte: usize,
    end_byte: usize,
    highlight: HighlightId,
}

fn escape_html(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

/// Turns source text into rendering-layer markup
///
/// Owns the grammar registry plus one parser per language. Lives on the
/// highlight worker thread (parsers are not Sync).
pub struct Highlighter {
    registry: GrammarRegistry,
    parsers: HashMap<LanguageId, Parser>,
}

impl Highlighter {
    pub fn new() -> Self {
        Self {
            registry: GrammarRegistry::new(),
            parsers: HashMap::new(),
        }
    }

    /// Access to the underlying registry (availability queries)
    pub fn registry(&self) -> &GrammarRegistry {
        &self.registry
    }

    /// Highlight `source` as `language`, returning markup.
    ///
    /// Returns the source verbatim when the grammar is unavailable, the
    /// parse fails, or the query captures nothing. No error reaches the
    /// caller.
    pub fn highlight(&mut self, source: &str, language: LanguageId) -> String {
        if !self.registry.ensure(language) {
            return source.to_owned();
        }

        if !self.parsers.contains_key(&language) {
            let mut parser = Parser::new();
            let grammar = match self.registry.get(language) {
                Some(g) => g,
                None => return source.to_owned(),
            };
            if let Err(e) = parser.set_language(&grammar.language) {
                tracing::error!("Failed to set language for {:?}: {}", language, e);
                return source.to_owned();
            }
            self.parsers.insert(language, parser);
        }

        let spans = match self.collect_spans(source, language) {
            Some(spans) if !spans.is_empty() => spans,
            _ => return source.to_owned(),
        };

        render_markup(source, &spans)
    }

    /// Parse and run the highlight query, returning classified spans
    /// sorted by start byte
    fn collect_spans(&mut self, source: &str, language: LanguageId) -> Option<Vec<HighlightSpan>> {
        let grammar = self.registry.get(language)?;
        let parser = self.parsers.get_mut(&language)?;

        let tree = match parser.parse(source, None) {
            Some(t) => t,
            None => {
                tracing::warn!("Parse failed for {:?}", language);
                return None;
            }
        };

        let query = &grammar.query;
        let mut cursor = QueryCursor::new();
        let source_bytes = source.as_bytes();

        let mut spans = Vec::new();
        let mut captures = cursor.captures(query, tree.root_node(), source_bytes);
        while let Some((query_match, capture_idx)) = captures.next() {
            let capture = &query_match.captures[*capture_idx];
            let capture_name = &query.capture_names()[capture.index as usize];

            let highlight = match highlight_id_for_name(capture_name) {
                Some(id) => id,
                None => continue, // Skip unknown captures
            };

            let node = capture.node;
            if node.start_byte() < node.end_byte() {
                spans.push(HighlightSpan {
                    start_byte: node.start_byte(),
                    end_byte: node.end_byte(),
                    highlight,
                });
            }
        }

        spans.sort_by_key(|s| (s.start_byte, s.end_byte));
        Some(spans)
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

/// Interleave escaped source text with span wrappers.
///
/// Spans must be sorted by start byte. Overlapping spans keep the first
/// one; nested or later-starting duplicates are dropped so the emitted
/// text concatenates back to the source exactly.
fn render_markup(source: &str, spans: &[HighlightSpan]) -> String {
    let mut out = String::with_capacity(source.len() + spans.len() * 32);
    let mut pos = 0usize;

    for span in spans {
        if span.start_byte < pos {
            continue;
        }
        // Capture boundaries are node boundaries, always char boundaries
        let Some(before) = source.get(pos..span.start_byte) else {
            continue;
        };
        let Some(inner) = source.get(span.start_byte..span.end_byte) else {
            continue;
        };

        escape_html(before, &mut out);
        out.push_str("<span class=\"");
        out.push_str(&class_for_highlight(span.highlight));
        out.push_str("\">");
        escape_html(inner, &mut out);
        out.push_str("</span>");
        pos = span.end_byte;
    }

    if let Some(rest) = source.get(pos..) {
        escape_html(rest, &mut out);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_id_lookup() {
        assert!(highlight_id_for_name("keyword").is_some());
        assert!(highlight_id_for_name("keyword.function").is_some());
        assert!(highlight_id_for_name("keyword.control.import").is_some());
        assert!(highlight_id_for_name("string").is_some());
        assert!(highlight_id_for_name("nonexistent").is_none());
    }

    #[test]
    fn test_class_for_highlight() {
        let id = highlight_id_for_name("keyword.function").unwrap();
        assert_eq!(class_for_highlight(id), "tok-keyword-function");

        let id = highlight_id_for_name("string").unwrap();
        assert_eq!(class_for_highlight(id), "tok-string");
    }

    #[test]
    fn test_javascript_markup() {
        let mut highlighter = Highlighter::new();
        let source = "const x = 42;";
        let markup = highlighter.highlight(source, LanguageId::JavaScript);

        assert!(markup.contains("<span class=\"tok-"), "markup: {}", markup);
        assert!(markup.contains("42"));
    }

    #[test]
    fn test_rust_markup() {
        let mut highlighter = Highlighter::new();
        let source = "fn main() { let x = 1; }";
        let markup = highlighter.highlight(source, LanguageId::Rust);

        assert!(markup.contains("<span class=\"tok-"));
    }

    #[test]
    fn test_markup_escapes_html() {
        let mut highlighter = Highlighter::new();
        let source = "let a = 1 < 2 && 3 > 2;";
        let markup = highlighter.highlight(source, LanguageId::JavaScript);

        assert!(markup.contains("&lt;"));
        assert!(markup.contains("&amp;&amp;"));
        assert!(markup.contains("&gt;"));
    }

    #[test]
    fn test_markup_text_concatenates_to_source() {
        let mut highlighter = Highlighter::new();
        let source = "def greet(name):\n    return f\"hi {name}\"\n";
        let markup = highlighter.highlight(source, LanguageId::Python);

        // Strip tags and unescape; the remaining text must equal the source
        let mut text = String::new();
        let mut in_tag = false;
        for ch in markup.chars() {
            match ch {
                '<' => in_tag = true,
                '>' if in_tag => in_tag = false,
                c if !in_tag => text.push(c),
                _ => {}
            }
        }
        let text = text
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&amp;", "&");
        assert_eq!(text, source);
    }

    #[test]
    fn test_lazy_grammar_loading() {
        let mut highlighter = Highlighter::new();
        assert_eq!(highlighter.registry().loaded_count(), 0);

        highlighter.highlight("x = 1", LanguageId::Python);
        assert!(highlighter.registry().is_loaded(LanguageId::Python));
        assert!(!highlighter.registry().is_loaded(LanguageId::Java));
    }

    #[test]
    fn test_malformed_source_still_produces_markup() {
        let mut highlighter = Highlighter::new();
        // Tree-sitter recovers from syntax errors; we still get spans for
        // the parts it understood
        let source = "function ((( {{{";
        let markup = highlighter.highlight(source, LanguageId::JavaScript);
        assert!(!markup.is_empty());
    }

    #[test]
    fn test_empty_source() {
        let mut highlighter = Highlighter::new();
        let markup = highlighter.highlight("", LanguageId::JavaScript);
        assert_eq!(markup, "");
    }

    #[test]
    fn test_render_markup_skips_overlaps() {
        let source = "abcdef";
        let spans = vec![
            HighlightSpan {
                start_byte: 0,
                end_byte: 4,
                highlight: 0,
            },
            HighlightSpan {
                start_byte: 2,
                end_byte: 6,
                highlight: 1,
            },
        ];
        let markup = render_markup(source, &spans);
        assert_eq!(markup, "<span class=\"tok-attribute\">abcd</span>ef");
    }

    #[test]
    fn test_all_languages_highlight_hello_world() {
        let mut highlighter = Highlighter::new();
        let samples = [
            (LanguageId::JavaScript, "console.log(\"hi\");"),
            (LanguageId::Python, "print(\"hi\")"),
            (LanguageId::Java, "class A { void f() {} }"),
            (LanguageId::Cpp, "int main() { return 0; }"),
            (LanguageId::CSharp, "class A { void F() {} }"),
            (LanguageId::Go, "package main\nfunc main() {}"),
            (LanguageId::Rust, "fn main() {}"),
            (LanguageId::TypeScript, "const x: number = 1;"),
        ];

        for (lang, source) in samples {
            let markup = highlighter.highlight(source, lang);
            assert!(
                markup.contains("<span class=\"tok-"),
                "no spans for {:?}: {}",
                lang,
                markup
            );
        }
    }
}
