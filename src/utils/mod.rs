// Shared utilities: content hashing and file reading

pub mod hash;

pub use hash::{hash_content, hash_contents_batch};

/// File utilities
pub mod file_utils {
    use anyhow::{Context, Result};
    use std::fs;
    use std::path::Path;

    /// Read a UTF-8 file, naming the path in the error
    pub fn read_file_content(path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    }

    /// Check whether a path has an extension with a dedicated extractor
    pub fn is_supported_file(path: &Path) -> bool {
        path.to_str()
            .and_then(crate::language::detect_language_from_path)
            .is_some()
    }

}
