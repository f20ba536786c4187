//! Relevance tagging
//!
//! Filters extracted blocks down to the ones related to a topic (usually an EIP
//! number) by case-insensitive keyword search over each block's name and body.
//! The keyword table is an immutable [`TopicRegistry`] injected at construction.
//!
//! A topic with no registered keywords, or an empty set, falls back to its own
//! textual form as the single keyword, so tagging `7702` without a table entry
//! still finds blocks that mention "7702".

pub mod config;
pub mod registry;

pub use config::{load_topic_registry, TopicConfigError};
pub use registry::TopicRegistry;

use crate::extractors::base::CodeBlock;
use std::borrow::Cow;
use std::fmt::Display;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct RelevanceTagger {
    registry: Arc<TopicRegistry>,
}

impl RelevanceTagger {
    pub fn new(registry: Arc<TopicRegistry>) -> Self {
        Self { registry }
    }

    /// Tagger over the builtin EIP keyword sets
    pub fn builtin() -> Self {
        Self::new(Arc::new(TopicRegistry::builtin()))
    }

    pub fn registry(&self) -> &TopicRegistry {
        &self.registry
    }

    /// Keywords used for `topic`: the registered set, or the topic id itself
    pub fn keywords_for(&self, topic: impl Display) -> Cow<'_, [String]> {
        let topic = topic.to_string();
        let topic = topic.trim();
        match self.registry.keywords(topic) {
            Some(keywords) if !keywords.is_empty() => Cow::Borrowed(keywords),
            _ => {
                tracing::debug!(
                    "No keywords registered for topic '{}', matching the id itself",
                    topic
                );
                Cow::Owned(vec![topic.to_lowercase()])
            }
        }
    }

    /// Whether any keyword for `topic` occurs in the block's name or content
    pub fn is_relevant(&self, block: &CodeBlock, topic: impl Display) -> bool {
        matches_any(block, &self.keywords_for(topic))
    }

    /// Keep the blocks relevant to `topic`, in their original order
    pub fn tag(&self, blocks: &[CodeBlock], topic: impl Display) -> Vec<CodeBlock> {
        let keywords = self.keywords_for(topic);
        blocks
            .iter()
            .filter(|block| matches_any(block, &keywords))
            .cloned()
            .collect()
    }
}

fn matches_any(block: &CodeBlock, keywords: &[String]) -> bool {
    let name = block.name.to_lowercase();
    let content = block.content.to_lowercase();
    keywords
        .iter()
        .any(|keyword| name.contains(keyword.as_str()) || content.contains(keyword.as_str()))
}
