use std::io::Read;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use critique::cli::CliArgs;
use critique::config::AppConfig;
use critique::messages::{EditorMsg, Msg, ReviewMsg};
use critique::model::{render_review_html, ReviewStatus};
use critique::remote::HttpReviewClient;
use critique::runtime::Runtime;

/// Generous ceiling for the highlight pipeline and the review request
const SETTLE_TIMEOUT: Duration = Duration::from_secs(90);

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    critique::trace::init();

    let language = args.resolve_language().map_err(anyhow::Error::msg)?;

    let code = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let config = AppConfig::load();
    let endpoint = args.endpoint.clone().unwrap_or(config.endpoint);

    let backend = HttpReviewClient::new(endpoint)
        .map_err(|e| anyhow::anyhow!("Failed to build review client: {}", e))?;
    let mut runtime = Runtime::new(Arc::new(backend));

    runtime.dispatch(Msg::Editor(EditorMsg::SetLanguage(language)));
    runtime.dispatch(Msg::Editor(EditorMsg::SetText(code)));

    if !runtime.settle(SETTLE_TIMEOUT) {
        anyhow::bail!("Highlighting did not finish in time");
    }

    println!("{}", runtime.model.editor.markup);

    if args.review {
        runtime.dispatch(Msg::Review(ReviewMsg::Submit));
        if !runtime.settle(SETTLE_TIMEOUT) {
            anyhow::bail!("Review request did not finish in time");
        }

        match &runtime.model.review.status {
            ReviewStatus::Succeeded(text) => println!("{}", render_review_html(text)),
            ReviewStatus::Failed(message) => println!("{}", message),
            status => tracing::warn!("Unexpected review status: {:?}", status),
        }
    }

    Ok(())
}
