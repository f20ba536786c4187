// BaseExtractor implementation
//
// Line-oriented view of a source file shared by every extractor strategy:
// splitting, indentation width, span slicing and block creation.

use super::types::{BlockKind, CodeBlock};

/// A block extraction strategy for one language family
///
/// Strategies are stateless: every call builds its result from the immutable
/// input alone, so one strategy value can serve concurrent callers.
pub trait ExtractorStrategy: Send + Sync {
    /// Normalized language tag stamped on every produced block
    fn language(&self) -> &str;

    /// Recover the ordered, flat block list from `content`
    fn extract(&self, content: &str) -> Vec<CodeBlock>;
}

/// Base implementation shared by the extractors
///
/// Lines are split on `\n` only, so a trailing newline yields a final empty
/// line and `total_lines()` matches what an editor shows.
pub struct BaseExtractor<'a> {
    pub language: String,
    pub lines: Vec<&'a str>,
}

impl<'a> BaseExtractor<'a> {
    pub fn new(language: impl Into<String>, content: &'a str) -> Self {
        Self {
            language: language.into(),
            lines: content.split('\n').collect(),
        }
    }

    pub fn total_lines(&self) -> usize {
        self.lines.len()
    }

    /// Line at zero-based `index` with any trailing carriage return removed
    pub fn line(&self, index: usize) -> &'a str {
        self.lines
            .get(index)
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .unwrap_or("")
    }

    /// Raw text of zero-based lines `start..=end`, joined with `\n`
    pub fn slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.lines.len().saturating_sub(1));
        if start > end || self.lines.is_empty() {
            return String::new();
        }
        self.lines[start..=end].join("\n")
    }

    /// Create a block from zero-based line indices
    pub fn create_block(
        &self,
        name: impl Into<String>,
        kind: BlockKind,
        start: usize,
        end: usize,
        signature: String,
        docstring: Option<String>,
    ) -> CodeBlock {
        debug_assert!(start <= end, "block must not end before it starts");
        CodeBlock {
            name: name.into(),
            kind,
            start_line: (start + 1) as u32,
            end_line: (end + 1) as u32,
            language: self.language.clone(),
            signature,
            docstring,
            content: self.slice(start, end),
        }
    }
}

/// Width of the leading whitespace of `line`, in characters
///
/// Tabs count as a single character, so mixed indentation compares the way the
/// characters appear rather than the way an editor renders them.
pub fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// True for lines that hold nothing but whitespace
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Collapse whitespace runs into single spaces
pub fn one_line_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
