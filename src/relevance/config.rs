// Topic keyword configuration
//
// {"topics": {"1559": ["basefee", "gaslimit"], "4844": ["blob"]}}

use super::registry::TopicRegistry;
use crate::utils::file_utils::read_file_content;
use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TopicConfigError {
    #[error("malformed topic config: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("topic id must not be blank")]
    EmptyTopicId,
}

#[derive(Debug, Deserialize)]
struct TopicConfig {
    #[serde(default)]
    topics: BTreeMap<String, Vec<String>>,
}

impl TopicRegistry {
    /// Parse a registry from its JSON form
    ///
    /// Keywords are normalized the same way [`TopicRegistry::new`] does it.
    pub fn from_json_str(json: &str) -> Result<Self, TopicConfigError> {
        let config: TopicConfig = serde_json::from_str(json)?;
        if config.topics.keys().any(|topic| topic.trim().is_empty()) {
            return Err(TopicConfigError::EmptyTopicId);
        }
        Ok(TopicRegistry::new(config.topics))
    }
}

/// Load a topic registry from a JSON file
///
/// The result holds only the file's topics; combine it with
/// `TopicRegistry::builtin().merged(&loaded)` to keep the builtin sets.
pub fn load_topic_registry(path: &Path) -> anyhow::Result<TopicRegistry> {
    let json = read_file_content(path)?;
    let registry = TopicRegistry::from_json_str(&json)
        .with_context(|| format!("Invalid topic config {}", path.display()))?;
    tracing::debug!(
        "Loaded {} topics from {}",
        registry.len(),
        path.display()
    );
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_json_str() {
        let registry = TopicRegistry::from_json_str(
            r#"{"topics": {"1559": ["BaseFee", "gaslimit", "basefee"], "4844": ["blob", "  "]}}"#,
        )
        .unwrap();
        assert_eq!(
            registry.keywords("1559").unwrap(),
            &["basefee".to_string(), "gaslimit".to_string()]
        );
        assert_eq!(registry.keywords("4844").unwrap(), &["blob".to_string()]);
    }

    #[test]
    fn test_missing_topics_key_is_empty_registry() {
        let registry = TopicRegistry::from_json_str("{}").unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_blank_topic_id_is_rejected() {
        let err = TopicRegistry::from_json_str(r#"{"topics": {" ": ["x"]}}"#).unwrap_err();
        assert!(matches!(err, TopicConfigError::EmptyTopicId));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let err = TopicRegistry::from_json_str(r#"{"topics": {"1559": "basefee"}}"#).unwrap_err();
        assert!(matches!(err, TopicConfigError::Malformed(_)));
        assert!(err.to_string().starts_with("malformed topic config"));
    }

    #[test]
    fn test_load_topic_registry_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"topics": {{"7702": ["SetCode"]}}}}"#).unwrap();

        let loaded = load_topic_registry(file.path()).unwrap();
        assert_eq!(loaded.keywords("7702").unwrap(), &["setcode".to_string()]);

        let combined = TopicRegistry::builtin().merged(&loaded);
        assert!(combined.contains("1559"));
        assert!(combined.contains("7702"));
    }

    #[test]
    fn test_load_topic_registry_names_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = load_topic_registry(file.path()).unwrap_err();
        let message = format!("{:#}", err);
        assert!(
            message.contains(&file.path().display().to_string()),
            "error should name the file: {}",
            message
        );
    }
}
