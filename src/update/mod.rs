//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

pub mod editor;
pub mod review;
pub mod syntax;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

pub use editor::update_editor;
pub use review::update_review;
pub use syntax::update_syntax;

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Editor(m) => editor::update_editor(model, m),
        Msg::Syntax(m) => syntax::update_syntax(model, m),
        Msg::Review(m) => review::update_review(model, m),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::EditorMsg;

    #[test]
    fn test_dispatch_routes_editor_messages() {
        let mut model = AppModel::new();
        let cmd = update(&mut model, Msg::Editor(EditorMsg::SetText("x".to_string())));
        assert!(cmd.is_some());
        assert_eq!(model.editor.raw_text, "x");
    }
}
