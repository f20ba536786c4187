// Base Types for block extraction
//
// All data structures produced by the extractors: code blocks, their kinds and
// spans, and the comment records of the auxiliary comment pass.

use serde::{Deserialize, Serialize};

/// A named code block (function, method, class, interface) recovered from source text
///
/// Blocks form a flat list: a method keeps no pointer to its owning class, its
/// span simply lies inside the class span.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodeBlock {
    /// Declared name as it appears in code
    pub name: String,
    /// Kind of block
    pub kind: BlockKind,
    /// First line of the block (1-based, inclusive)
    pub start_line: u32,
    /// Last line of the block (1-based, inclusive)
    pub end_line: u32,
    /// Normalized language tag used to produce this block
    pub language: String,
    /// Header text that introduced the block
    pub signature: String,
    /// Leading string literal of the body (indentation-sensitive languages only)
    pub docstring: Option<String>,
    /// Raw source lines covered by the span
    pub content: String,
}

impl CodeBlock {
    pub fn span(&self) -> Span {
        Span {
            start_line: self.start_line,
            end_line: self.end_line,
        }
    }

    /// Number of source lines covered by the block
    pub fn line_count(&self) -> u32 {
        self.end_line - self.start_line + 1
    }

    /// True if `other` lies entirely within this block's span
    pub fn contains(&self, other: &CodeBlock) -> bool {
        self.span().contains(&other.span())
    }
}

/// Inclusive 1-based line range
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    pub start_line: u32,
    pub end_line: u32,
}

impl Span {
    pub fn contains(&self, other: &Span) -> bool {
        self.start_line <= other.start_line && other.end_line <= self.end_line
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "L{}-L{}", self.start_line, self.end_line)
    }
}

/// Block kinds
///
/// `File` is only produced by the generic fallback for unsupported languages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Function,
    Method,
    Class,
    Interface,
    File,
}

impl BlockKind {
    /// Convert from string representation (for report deserialization)
    pub fn from_string(s: &str) -> Option<Self> {
        match s {
            "function" => Some(BlockKind::Function),
            "method" => Some(BlockKind::Method),
            "class" => Some(BlockKind::Class),
            "interface" => Some(BlockKind::Interface),
            "file" => Some(BlockKind::File),
            _ => None,
        }
    }

    pub fn is_type(&self) -> bool {
        matches!(self, BlockKind::Class | BlockKind::Interface)
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockKind::Function => write!(f, "function"),
            BlockKind::Method => write!(f, "method"),
            BlockKind::Class => write!(f, "class"),
            BlockKind::Interface => write!(f, "interface"),
            BlockKind::File => write!(f, "file"),
        }
    }
}

/// A human-authored annotation recovered by the comment pass
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    /// Line the comment starts on (1-based)
    pub line: u32,
    /// Line the comment ends on (1-based, equal to `line` for single-line comments)
    pub end_line: u32,
    pub kind: CommentKind,
    /// Comment text with delimiters stripped and surrounding whitespace trimmed
    pub text: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CommentKind {
    /// Line comment (`//`, `#`)
    Single,
    /// Delimited comment (`/* ... */`), possibly spanning lines
    Block,
    /// Statement-level triple-quoted string
    Docstring,
}

impl std::fmt::Display for CommentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommentKind::Single => write!(f, "single"),
            CommentKind::Block => write!(f, "block"),
            CommentKind::Docstring => write!(f, "docstring"),
        }
    }
}
