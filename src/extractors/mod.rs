//! Block extractors
//!
//! Lexical extractors that recover named code blocks (functions, methods,
//! classes, interfaces) with 1-based inclusive line spans. Nothing here builds a
//! syntax tree: headers are recognized with regular expressions and bodies are
//! bounded by brace balance or by indentation.
//!
//! # Architecture
//!
//! - `base` - Block types and the `ExtractorStrategy` trait
//! - `delimited` - Brace-delimited languages (Go, Rust, C#, Java, JavaScript/TypeScript)
//! - `indented` - Python
//! - `fallback` - Whole-file block for unsupported languages
//! - `routing` - Language tag to strategy selection
//! - `manager` - ExtractorManager public API

pub mod base;
pub mod delimited;
pub mod fallback;
pub mod indented;
pub mod manager;
pub mod routing;

// Re-export the public API
pub use base::{BlockKind, CodeBlock, Comment, CommentKind, ExtractorStrategy, Span};
pub use manager::{ExtractorManager, ParsedFile, SourceFile};
pub use routing::dispatch;
