//! ExtractorManager - Public API for block extraction
//!
//! Resolves a language tag to its extraction strategy through the routing layer
//! and exposes the queries the compliance pipeline runs over a source file:
//! block lists, comments, lookup by name and topic relevance.

use crate::comments;
use crate::extractors::base::{CodeBlock, Comment};
use crate::extractors::routing::dispatch_language;
use crate::language::{self, Language};
use crate::relevance::RelevanceTagger;
use crate::utils::hash_content;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// One source file handed to [`ExtractorManager::parse_batch`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: String,
    pub content: String,
    /// Language tag; detected from the path extension when absent
    pub language: Option<String>,
}

impl SourceFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            language: None,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    fn resolved_language(&self) -> Language {
        match &self.language {
            Some(tag) => Language::from_tag(tag),
            None => Language::from_tag(
                language::detect_language_from_path(&self.path).unwrap_or("unknown"),
            ),
        }
    }
}

/// Blocks recovered from one file of a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedFile {
    pub path: String,
    pub language: String,
    /// blake3 hex digest of the parsed content
    pub content_hash: String,
    pub blocks: Vec<CodeBlock>,
}

/// Manager for all block extractors
pub struct ExtractorManager {
    // Stateless: every call resolves its own strategy
}

impl Default for ExtractorManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractorManager {
    pub fn new() -> Self {
        Self {}
    }

    /// Canonical tags of the languages with a dedicated extractor
    pub fn supported_languages(&self) -> Vec<&'static str> {
        language::supported_languages()
    }

    /// Recover the ordered block list of `content`
    ///
    /// Never fails: unknown tags produce a single whole-file block.
    pub fn parse(&self, content: &str, language: &str) -> Vec<CodeBlock> {
        self.parse_language(content, &Language::from_tag(language))
    }

    fn parse_language(&self, content: &str, language: &Language) -> Vec<CodeBlock> {
        let blocks = dispatch_language(language).extract(content);
        tracing::debug!("Extracted {} blocks from {} source", blocks.len(), language);
        blocks
    }

    /// Parse many files in parallel
    ///
    /// Results keep the input order. Files without a language tag are
    /// detected from their extension, falling back to the whole-file block.
    pub fn parse_batch(&self, files: &[SourceFile]) -> Vec<ParsedFile> {
        files
            .par_iter()
            .map(|file| {
                let language = file.resolved_language();
                let blocks = self.parse_language(&file.content, &language);
                ParsedFile {
                    path: file.path.clone(),
                    language: language.as_str().to_string(),
                    content_hash: hash_content(&file.content),
                    blocks,
                }
            })
            .collect()
    }

    /// Comments and docstrings of `content`, in source order
    pub fn extract_comments(&self, content: &str, language: &str) -> Vec<Comment> {
        comments::extract_comments(content, language)
    }

    /// First block named exactly `name`
    pub fn find_block(&self, content: &str, language: &str, name: &str) -> Option<CodeBlock> {
        self.parse(content, language)
            .into_iter()
            .find(|block| block.name == name)
    }

    /// Parse `content` and keep the blocks relevant to `topic`
    pub fn find_relevant(
        &self,
        content: &str,
        language: &str,
        topic: impl Display,
        tagger: &RelevanceTagger,
    ) -> Vec<CodeBlock> {
        let blocks = self.parse(content, language);
        tagger.tag(&blocks, topic)
    }
}
