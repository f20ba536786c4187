// Topic registry
//
// Immutable map from a topic id (an EIP number such as "1559") to the keywords
// that mark a code block as relevant to it. Keywords are stored lowercased so
// matching only has to lowercase the block side.

use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// Keyword sets for the protocol changes the compliance checks know about
static BUILTIN_TOPICS: Lazy<BTreeMap<String, Vec<String>>> = Lazy::new(|| {
    let table: &[(&str, &[&str])] = &[
        (
            "1559",
            &[
                "basefee",
                "base_fee",
                "gaslimit",
                "gas_limit",
                "feecap",
                "fee_cap",
                "tiplimit",
                "priority",
                "1559",
                "dynamicfee",
                "dynamic_fee",
                "calcbasefee",
                "calc_base_fee",
                "verifyeip1559",
            ],
        ),
        (
            "4844",
            &[
                "blob",
                "4844",
                "kzg",
                "shard",
                "blob_gas",
                "blobgas",
                "excess_blob_gas",
                "excessblobgas",
                "blob_fee",
                "blobfee",
                "blobhash",
                "blob_hash",
                "blobsidecar",
                "blob_sidecar",
                "blobtx",
                "blob_tx",
                "max_blob",
                "maxblob",
                "validateblobtransaction",
                "validate_blob",
                "fakeblobsidecar",
                "calcexcessblobgas",
                "calc_excess_blob_gas",
                "blobbasefee",
                "blob_base_fee",
                "point_evaluation",
                "pointevaluation",
            ],
        ),
        (
            "4788",
            &[
                "4788",
                "beacon_root",
                "beaconroot",
                "parent_beacon_block_root",
                "parentbeaconblockroot",
            ],
        ),
        (
            "2930",
            &[
                "2930",
                "access_list",
                "accesslist",
                "accesslisttx",
                "access_list_tx",
            ],
        ),
        (
            "7002",
            &[
                "7002",
                "withdrawal_request",
                "withdrawalrequest",
                "execution_layer_exit",
                "executionlayerexit",
            ],
        ),
        (
            "7251",
            &[
                "7251",
                "max_effective_balance",
                "maxeffectivebalance",
                "consolidation",
            ],
        ),
    ];

    table
        .iter()
        .map(|(topic, keywords)| (topic.to_string(), normalize_keywords(keywords.iter().copied())))
        .collect()
});

/// Immutable topic id -> keyword set table
///
/// Built once and shared (usually behind an `Arc`) by every tagger that needs
/// it. There is no process-wide mutable registry; callers that want extra
/// topics build a new registry with [`TopicRegistry::merged`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicRegistry {
    topics: BTreeMap<String, Vec<String>>,
}

impl TopicRegistry {
    /// Build a registry, trimming topic ids and normalizing every keyword set
    pub fn new<I, K>(topics: I) -> Self
    where
        I: IntoIterator<Item = (String, K)>,
        K: IntoIterator,
        K::Item: AsRef<str>,
    {
        let topics = topics
            .into_iter()
            .map(|(topic, keywords)| (topic.trim().to_string(), normalize_keywords(keywords)))
            .collect();
        Self { topics }
    }

    /// Registry with no topics; every lookup falls back to the topic id itself
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry holding the builtin EIP keyword sets
    pub fn builtin() -> Self {
        Self {
            topics: BUILTIN_TOPICS.clone(),
        }
    }

    /// Keyword set registered for `topic`, if any
    pub fn keywords(&self, topic: &str) -> Option<&[String]> {
        self.topics.get(topic).map(Vec::as_slice)
    }

    pub fn contains(&self, topic: &str) -> bool {
        self.topics.contains_key(topic)
    }

    /// Registered topic ids in ascending order
    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.topics.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// New registry holding both tables; topics in `other` replace ours
    pub fn merged(&self, other: &TopicRegistry) -> TopicRegistry {
        let mut topics = self.topics.clone();
        for (topic, keywords) in &other.topics {
            topics.insert(topic.clone(), keywords.clone());
        }
        TopicRegistry { topics }
    }
}

/// Trim and lowercase keywords, dropping blanks and repeats (first one wins)
pub(crate) fn normalize_keywords<I>(keywords: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut normalized: Vec<String> = Vec::new();
    for keyword in keywords {
        let keyword = keyword.as_ref().trim().to_lowercase();
        if !keyword.is_empty() && !normalized.contains(&keyword) {
            normalized.push(keyword);
        }
    }
    normalized
}
