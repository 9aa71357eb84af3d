//! Editor model: the dual-layer code pad
//!
//! The input layer (a plain text field) sits transparently over the
//! rendering layer (highlighted markup). This model owns the raw text,
//! the derived markup, and the scroll offsets of both layers.

use crate::syntax::LanguageId;

/// Debounce delay for re-highlighting after an edit, in milliseconds.
/// Trailing edge: each edit reschedules, only the last one fires.
pub const HIGHLIGHT_DEBOUNCE_MS: u64 = 100;

/// Scroll position of a layer
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOffset {
    pub x: f32,
    pub y: f32,
}

/// Typography shared by both layers. A single value feeds the input and
/// rendering layers so glyph positions line up by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerMetrics {
    pub font_size: f32,
    pub line_height: f32,
    pub padding: f32,
    pub tab_width: u8,
}

impl Default for LayerMetrics {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            line_height: 1.4,
            padding: 12.0,
            tab_width: 4,
        }
    }
}

/// State of the dual-layer editor
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    /// The input layer's text, the source of truth
    pub raw_text: String,
    /// Selected language
    pub language: LanguageId,
    /// Markup currently shown by the rendering layer. May lag `raw_text`
    /// by at most one pending recompute; the old markup is kept while a
    /// recompute is in flight.
    pub markup: String,
    /// Bumped by 1 on every text or language change. Highlight results
    /// carrying an older generation are discarded.
    pub generation: u64,
    /// Input layer scroll position (source of truth)
    pub input_scroll: ScrollOffset,
    /// Rendering layer scroll position, copied from the input layer on
    /// every scroll event
    pub render_scroll: ScrollOffset,
    /// Typography shared by both layers
    pub metrics: LayerMetrics,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the text, bumping the generation. Returns false when the
    /// text is unchanged (no recompute needed).
    pub fn set_text(&mut self, text: String) -> bool {
        if self.raw_text == text {
            return false;
        }
        self.raw_text = text;
        self.generation += 1;
        true
    }

    /// Change the language, bumping the generation. Returns false when
    /// the language is unchanged.
    pub fn set_language(&mut self, language: LanguageId) -> bool {
        if self.language == language {
            return false;
        }
        self.language = language;
        self.generation += 1;
        true
    }

    /// Apply a scroll event from the input layer and mirror it onto the
    /// rendering layer in the same call.
    pub fn set_scroll(&mut self, x: f32, y: f32) {
        self.input_scroll = ScrollOffset { x, y };
        self.render_scroll = self.input_scroll;
    }

    /// Whether the layers are scroll-aligned
    pub fn layers_aligned(&self) -> bool {
        self.input_scroll == self.render_scroll
    }
}
