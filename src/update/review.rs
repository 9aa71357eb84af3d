//! Review session update handlers
//!
//! Enforces the submit preconditions (non-blank code, no request in
//! flight) and maps backend results onto the session status.

use crate::commands::Cmd;
use crate::messages::ReviewMsg;
use crate::model::{AppModel, ReviewStatus, REVIEW_FAILED_MESSAGE};

/// Handle review session messages
pub fn update_review(model: &mut AppModel, msg: ReviewMsg) -> Option<Cmd> {
    match msg {
        ReviewMsg::Submit => {
            // Blank input never reaches the backend
            if model.editor.raw_text.trim().is_empty() {
                tracing::debug!("Ignoring review submit: no code entered");
                return None;
            }
            // At most one in-flight request
            if model.review.is_loading() {
                tracing::debug!("Ignoring review submit: request already in flight");
                return None;
            }

            model.review.status = ReviewStatus::Loading;
            Some(Cmd::SubmitReview {
                code: model.editor.raw_text.clone(),
            })
        }

        ReviewMsg::Completed(result) => {
            match result {
                Ok(text) => {
                    tracing::info!("Review completed ({} bytes)", text.len());
                    model.review.status = ReviewStatus::Succeeded(text);
                }
                Err(e) => {
                    tracing::error!("Review request failed: {}", e);
                    model.review.status = ReviewStatus::Failed(REVIEW_FAILED_MESSAGE.to_string());
                }
            }
            Some(Cmd::Redraw)
        }
    }
}
