//! Command-line argument parsing
//!
//! Supports:
//! - Highlighting a file (language inferred from extension)
//! - Overriding the language
//! - Requesting a review of the file's contents

use clap::Parser;
use std::path::PathBuf;

use crate::syntax::LanguageId;

/// An AI code review pad
#[derive(Parser, Debug)]
#[command(name = "critique", version, about = "An AI code review pad")]
pub struct CliArgs {
    /// File to load (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Language id (javascript, python, java, cpp, csharp, go, rust,
    /// typescript). Inferred from the file extension when omitted.
    #[arg(short, long, value_name = "ID")]
    pub language: Option<String>,

    /// Submit the code for review and print the result
    #[arg(short, long)]
    pub review: bool,

    /// Review endpoint base URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,
}

impl CliArgs {
    /// Resolve the language: explicit flag wins, then the file
    /// extension, then the default.
    pub fn resolve_language(&self) -> Result<LanguageId, String> {
        if let Some(id) = &self.language {
            return LanguageId::from_id(id)
                .ok_or_else(|| format!("Unknown language id: {}", id));
        }

        Ok(self
            .file
            .as_deref()
            .and_then(LanguageId::from_path)
            .unwrap_or_default())
    }
}
