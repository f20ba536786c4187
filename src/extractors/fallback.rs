// Generic fallback extractor
//
// Languages without a dedicated strategy still produce one block so callers can
// hand the whole file to later stages.

use crate::extractors::base::{BaseExtractor, BlockKind, CodeBlock, ExtractorStrategy};

/// Whole-input extractor for languages with no structural support
pub struct FallbackExtractor {
    language: String,
}

impl FallbackExtractor {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }
}

impl ExtractorStrategy for FallbackExtractor {
    fn language(&self) -> &str {
        &self.language
    }

    /// One `File` block named `file` covering every line
    ///
    /// Empty input still yields a block, reported on line 1 with empty content.
    fn extract(&self, content: &str) -> Vec<CodeBlock> {
        let base = BaseExtractor::new(self.language.as_str(), content);
        let last = base.total_lines().saturating_sub(1);
        let mut block = base.create_block("file", BlockKind::File, 0, last, String::new(), None);
        block.content = content.to_string();
        vec![block]
    }
}
