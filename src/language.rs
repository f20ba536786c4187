//! Language Support - Shared language identification
//!
//! This module is the single source of truth for which languages the parser
//! understands and how their tags and file extensions are spelled. ALL alias
//! handling should go here so the extractors only ever see canonical tags.

use std::path::Path;

/// Canonical language identity
///
/// Tags the parser has no strategy for are kept as `Other` (lowercased) and
/// routed to the generic fallback; they are never an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Language {
    Go,
    Rust,
    CSharp,
    Java,
    JavaScript,
    Python,
    Other(String),
}

/// How a language delimits its blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStyle {
    /// Bodies bounded by `{` / `}` with a running balance
    Delimited,
    /// Bodies bounded by relative indentation
    Indented,
    /// No structural knowledge: the whole input is one block
    Whole,
}

impl Language {
    /// Normalize a language tag, resolving known aliases
    ///
    /// # Examples
    /// ```
    /// use prspec_parser::language::Language;
    /// assert_eq!(Language::from_tag("C#"), Language::CSharp);
    /// assert_eq!(Language::from_tag("cs"), Language::CSharp);
    /// assert_eq!(Language::from_tag("golang"), Language::Go);
    /// ```
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim().to_lowercase();
        match tag.as_str() {
            "go" | "golang" => Language::Go,
            "rust" | "rs" => Language::Rust,
            "csharp" | "c#" | "cs" => Language::CSharp,
            "java" => Language::Java,
            "javascript" | "js" | "jsx" | "typescript" | "ts" | "tsx" => Language::JavaScript,
            "python" | "py" => Language::Python,
            _ => Language::Other(tag),
        }
    }

    /// Canonical tag stored on produced blocks
    pub fn as_str(&self) -> &str {
        match self {
            Language::Go => "go",
            Language::Rust => "rust",
            Language::CSharp => "csharp",
            Language::Java => "java",
            Language::JavaScript => "javascript",
            Language::Python => "python",
            Language::Other(tag) => tag,
        }
    }

    pub fn block_style(&self) -> BlockStyle {
        match self {
            Language::Go
            | Language::Rust
            | Language::CSharp
            | Language::Java
            | Language::JavaScript => BlockStyle::Delimited,
            Language::Python => BlockStyle::Indented,
            Language::Other(_) => BlockStyle::Whole,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Language::Other(_))
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Canonical tags of every language with a dedicated extractor
pub fn supported_languages() -> Vec<&'static str> {
    vec!["go", "rust", "csharp", "java", "javascript", "python"]
}

/// Detect language from file extension
///
/// Returns a canonical tag that `Language::from_tag()` maps back to itself.
pub fn detect_language_from_extension(extension: &str) -> Option<&'static str> {
    match extension {
        "go" => Some("go"),
        "rs" => Some("rust"),
        "cs" => Some("csharp"),
        "java" => Some("java"),
        "js" | "jsx" | "mjs" | "cjs" | "ts" | "tsx" | "mts" | "cts" => Some("javascript"),
        "py" | "pyi" => Some("python"),
        _ => None,
    }
}

/// Detect language from a file path, using its extension
pub fn detect_language_from_path(path: &str) -> Option<&'static str> {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(detect_language_from_extension)
}
