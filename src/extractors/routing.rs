//! Routing for block extraction - selects the strategy for a language tag

use crate::extractors::base::ExtractorStrategy;
use crate::extractors::delimited::DelimitedExtractor;
use crate::extractors::fallback::FallbackExtractor;
use crate::extractors::indented::IndentedExtractor;
use crate::language::{BlockStyle, Language};

/// Route a language tag to its extraction strategy
///
/// Never fails: tags without a dedicated strategy get the whole-file fallback.
pub fn dispatch(tag: &str) -> Box<dyn ExtractorStrategy> {
    dispatch_language(&Language::from_tag(tag))
}

pub(crate) fn dispatch_language(language: &Language) -> Box<dyn ExtractorStrategy> {
    match language.block_style() {
        BlockStyle::Indented => Box::new(IndentedExtractor::new()),
        BlockStyle::Delimited => match DelimitedExtractor::for_language(language) {
            Some(extractor) => Box::new(extractor),
            None => Box::new(FallbackExtractor::new(language.as_str())),
        },
        BlockStyle::Whole => {
            tracing::debug!(
                "No extractor for language '{}', using whole-file fallback",
                language
            );
            Box::new(FallbackExtractor::new(language.as_str()))
        }
    }
}
