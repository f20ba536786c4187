// prspec_parser - structural source parsing for protocol compliance checks
//
// Recovers named code blocks (functions, methods, classes, interfaces) with
// line spans from client source files, tags the ones relevant to a protocol
// topic, and surfaces comments as supplementary evidence. Everything is
// lexical: header regexes plus brace counting or indentation tracking.

pub mod comments;
pub mod extractors;
pub mod language;
pub mod relevance;
pub mod utils;

pub use extractors::{
    dispatch, BlockKind, CodeBlock, Comment, CommentKind, ExtractorManager, ExtractorStrategy,
    ParsedFile, SourceFile, Span,
};
pub use language::Language;
pub use relevance::{load_topic_registry, RelevanceTagger, TopicConfigError, TopicRegistry};
pub use utils::hash_content;

/// Recover the ordered block list of `content` written in `language`
///
/// Unknown languages yield one whole-file block.
pub fn parse(content: &str, language: &str) -> Vec<CodeBlock> {
    ExtractorManager::new().parse(content, language)
}

/// Comments and docstrings of `content`, in source order
pub fn extract_comments(content: &str, language: &str) -> Vec<Comment> {
    comments::extract_comments(content, language)
}
