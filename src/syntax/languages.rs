//! Language identification
//!
//! Maps selector ids and file extensions to language IDs and provides
//! language metadata.

use std::path::Path;

/// Supported language identifiers
///
/// This is the fixed set offered in the language selector; adding a
/// language means adding a variant here and wiring a grammar in
/// `registry.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LanguageId {
    #[default]
    JavaScript,
    Python,
    Java,
    Cpp,
    CSharp,
    Go,
    Rust,
    TypeScript,
}

impl LanguageId {
    /// All supported languages, in selector order
    pub const ALL: [LanguageId; 8] = [
        LanguageId::JavaScript,
        LanguageId::Python,
        LanguageId::Java,
        LanguageId::Cpp,
        LanguageId::CSharp,
        LanguageId::Go,
        LanguageId::Rust,
        LanguageId::TypeScript,
    ];

    /// Parse a selector id (e.g. "javascript", "csharp")
    pub fn from_id(id: &str) -> Option<Self> {
        match id.to_lowercase().as_str() {
            "javascript" => Some(LanguageId::JavaScript),
            "python" => Some(LanguageId::Python),
            "java" => Some(LanguageId::Java),
            "cpp" => Some(LanguageId::Cpp),
            "csharp" => Some(LanguageId::CSharp),
            "go" => Some(LanguageId::Go),
            "rust" => Some(LanguageId::Rust),
            "typescript" => Some(LanguageId::TypeScript),
            _ => None,
        }
    }

    /// The selector id for this language
    pub fn id(&self) -> &'static str {
        match self {
            LanguageId::JavaScript => "javascript",
            LanguageId::Python => "python",
            LanguageId::Java => "java",
            LanguageId::Cpp => "cpp",
            LanguageId::CSharp => "csharp",
            LanguageId::Go => "go",
            LanguageId::Rust => "rust",
            LanguageId::TypeScript => "typescript",
        }
    }

    /// Detect language from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "js" | "mjs" | "cjs" | "jsx" => Some(LanguageId::JavaScript),
            "py" | "pyi" => Some(LanguageId::Python),
            "java" => Some(LanguageId::Java),
            "cpp" | "cc" | "cxx" | "hpp" | "hh" | "h" => Some(LanguageId::Cpp),
            "cs" => Some(LanguageId::CSharp),
            "go" => Some(LanguageId::Go),
            "rs" => Some(LanguageId::Rust),
            "ts" | "mts" | "cts" => Some(LanguageId::TypeScript),
            _ => None,
        }
    }

    /// Detect language from file path
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Get display name for the language
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageId::JavaScript => "JavaScript",
            LanguageId::Python => "Python",
            LanguageId::Java => "Java",
            LanguageId::Cpp => "C++",
            LanguageId::CSharp => "C#",
            LanguageId::Go => "Go",
            LanguageId::Rust => "Rust",
            LanguageId::TypeScript => "TypeScript",
        }
    }
}
