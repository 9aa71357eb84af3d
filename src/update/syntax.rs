//! Highlight pipeline update handlers
//!
//! Both stages check the edit generation so results computed against
//! superseded text are dropped silently.

use crate::commands::Cmd;
use crate::messages::SyntaxMsg;
use crate::model::AppModel;

/// Handle highlight pipeline messages
pub fn update_syntax(model: &mut AppModel, msg: SyntaxMsg) -> Option<Cmd> {
    match msg {
        SyntaxMsg::HighlightReady { generation } => {
            tracing::debug!("update_syntax: HighlightReady for generation {}", generation);

            // Skip if the text was edited since this debounce started
            if model.editor.generation != generation {
                tracing::debug!(
                    "Skipping stale highlight request: current generation {} != {}",
                    model.editor.generation,
                    generation
                );
                return None;
            }

            // Snapshot the text and language for the worker
            Some(Cmd::RunHighlight {
                generation,
                source: model.editor.raw_text.clone(),
                language: model.editor.language,
            })
        }

        SyntaxMsg::HighlightCompleted { generation, markup } => {
            tracing::debug!(
                "update_syntax: HighlightCompleted for generation {}",
                generation
            );

            // Skip if the text was edited while the worker was running
            if model.editor.generation != generation {
                tracing::debug!(
                    "Discarding stale highlight result: current generation {} != {}",
                    model.editor.generation,
                    generation
                );
                return None;
            }

            model.editor.markup = markup;
            Some(Cmd::Redraw)
        }
    }
}
