//! Editor update handlers
//!
//! Text and language changes schedule a debounced re-highlight; scroll
//! events sync the rendering layer immediately.

use crate::commands::Cmd;
use crate::messages::EditorMsg;
use crate::model::{AppModel, HIGHLIGHT_DEBOUNCE_MS};

/// Handle input layer messages
pub fn update_editor(model: &mut AppModel, msg: EditorMsg) -> Option<Cmd> {
    match msg {
        EditorMsg::SetText(text) => {
            if !model.editor.set_text(text) {
                return None;
            }
            Some(schedule_highlight(model))
        }

        EditorMsg::SetLanguage(language) => {
            if !model.editor.set_language(language) {
                return None;
            }
            tracing::debug!("Language changed to {:?}", language);
            Some(schedule_highlight(model))
        }

        EditorMsg::SetScroll { x, y } => {
            // One-way sync: the input layer drives, the rendering layer
            // is updated in the same dispatch
            model.editor.set_scroll(x, y);
            Some(Cmd::Redraw)
        }
    }
}

/// Schedule a debounced highlight for the current generation
fn schedule_highlight(model: &AppModel) -> Cmd {
    let generation = model.editor.generation;
    tracing::debug!(
        "Scheduling highlight for generation {} ({}ms debounce)",
        generation,
        HIGHLIGHT_DEBOUNCE_MS
    );
    Cmd::DebouncedHighlight {
        generation,
        delay_ms: HIGHLIGHT_DEBOUNCE_MS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::LanguageId;

    #[test]
    fn test_set_text_schedules_debounced_highlight() {
        let mut model = AppModel::new();
        let cmd = update_editor(&mut model, EditorMsg::SetText("let x = 1;".to_string()));

        assert_eq!(
            cmd,
            Some(Cmd::DebouncedHighlight {
                generation: 1,
                delay_ms: HIGHLIGHT_DEBOUNCE_MS,
            })
        );
        assert_eq!(model.editor.raw_text, "let x = 1;");
    }

    #[test]
    fn test_unchanged_text_is_noop() {
        let mut model = AppModel::new();
        update_editor(&mut model, EditorMsg::SetText("same".to_string()));

        let cmd = update_editor(&mut model, EditorMsg::SetText("same".to_string()));
        assert!(cmd.is_none());
        assert_eq!(model.editor.generation, 1);
    }

    #[test]
    fn test_language_change_schedules_highlight() {
        let mut model = AppModel::new();
        let cmd = update_editor(&mut model, EditorMsg::SetLanguage(LanguageId::Python));

        assert!(matches!(cmd, Some(Cmd::DebouncedHighlight { generation: 1, .. })));
        assert_eq!(model.editor.language, LanguageId::Python);
    }

    #[test]
    fn test_same_language_is_noop() {
        let mut model = AppModel::new();
        let cmd = update_editor(&mut model, EditorMsg::SetLanguage(LanguageId::JavaScript));
        assert!(cmd.is_none());
    }

    #[test]
    fn test_scroll_syncs_layers() {
        let mut model = AppModel::new();
        let cmd = update_editor(&mut model, EditorMsg::SetScroll { x: 0.0, y: 42.0 });

        assert_eq!(cmd, Some(Cmd::Redraw));
        assert_eq!(model.editor.input_scroll.y, 42.0);
        assert_eq!(model.editor.render_scroll, model.editor.input_scroll);
    }

    #[test]
    fn test_each_edit_reschedules_with_new_generation() {
        let mut model = AppModel::new();

        let first = update_editor(&mut model, EditorMsg::SetText("a".to_string()));
        let second = update_editor(&mut model, EditorMsg::SetText("ab".to_string()));

        assert!(matches!(first, Some(Cmd::DebouncedHighlight { generation: 1, .. })));
        assert!(matches!(second, Some(Cmd::DebouncedHighlight { generation: 2, .. })));
    }
}
