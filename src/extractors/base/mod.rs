// Base Extractor Types and Traits
//
// - types.rs: data structures (CodeBlock, BlockKind, Span, Comment)
// - extractor.rs: ExtractorStrategy trait and the line-oriented BaseExtractor

pub mod extractor;
pub mod types;

// Re-export key types for external use
pub use extractor::{BaseExtractor, ExtractorStrategy};
pub use types::{BlockKind, CodeBlock, Comment, CommentKind, Span};
