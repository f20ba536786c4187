// Content hashing
//
// Blake3 digests let the caching layer in front of the parser key parse
// results on file content instead of file paths.

use rayon::prelude::*;

/// Compute the blake3 hash of `content` as a 64-character hex digest
pub fn hash_content(content: &str) -> String {
    let hash = blake3::hash(content.as_bytes());
    hash.to_hex().to_string()
}

/// Compute blake3 hashes for many contents in parallel
///
/// Digests come back in input order.
pub fn hash_contents_batch<S: AsRef<str> + Sync>(contents: &[S]) -> Vec<String> {
    contents
        .par_iter()
        .map(|content| hash_content(content.as_ref()))
        .collect()
}
