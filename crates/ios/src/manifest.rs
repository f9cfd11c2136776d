//! File manifest for pending Xcode project additions
//!
//! The manifest is fixed at construction and its declared order is
//! preserved everywhere it is rendered. No sorting, no deduplication.

use metube_core::config::ManifestConfig;
use metube_core::error::{Error, Result};
use std::path::Path;

/// An ordered, immutable list of relative file paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileManifest {
    files: Vec<String>,
}

impl FileManifest {
    /// Create a manifest from a list of relative paths
    ///
    /// The list must be non-empty and every entry must be a non-empty
    /// relative path.
    pub fn new(files: Vec<String>) -> Result<Self> {
        if files.is_empty() {
            return Err(Error::validation("Manifest must contain at least one file")
                .with_suggestion("List the files to add under [manifest] files in the config"));
        }

        for file in &files {
            if file.is_empty() {
                return Err(Error::validation("Manifest entries must not be empty"));
            }
            if !Path::new(file).is_relative() {
                return Err(Error::validation(format!(
                    "Manifest entries must be relative paths, got: {}",
                    file
                ))
                .with_suggestion("Paths are resolved against the project root"));
            }
        }

        Ok(Self { files })
    }

    /// Build the manifest declared in a configuration section
    pub fn from_config(config: &ManifestConfig) -> Result<Self> {
        Self::new(config.files.clone())
    }

    /// Iterate entries in declared order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(String::as_str)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the manifest is empty (never true for a validated manifest)
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl Default for FileManifest {
    /// The stock MeTube manifest from the offline-first refactoring
    fn default() -> Self {
        // The built-in list is known-valid, so this cannot fail.
        Self {
            files: ManifestConfig::default().files,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_manifest() {
        let manifest = FileManifest::default();
        assert_eq!(manifest.len(), 9);
        assert!(!manifest.is_empty());
        assert!(manifest.iter().all(|f| Path::new(f).is_relative()));
    }

    #[test]
    fn test_order_preserved_with_duplicates() {
        let files = vec![
            "B/second.swift".to_string(),
            "A/first.swift".to_string(),
            "B/second.swift".to_string(),
        ];
        let manifest = FileManifest::new(files.clone()).unwrap();
        let listed: Vec<&str> = manifest.iter().collect();
        assert_eq!(listed, vec!["B/second.swift", "A/first.swift", "B/second.swift"]);
    }

    #[test]
    fn test_empty_manifest_rejected() {
        let err = FileManifest::new(Vec::new()).unwrap_err();
        assert!(err.to_string().contains("at least one"));
    }

    #[test]
    fn test_absolute_path_rejected() {
        let err = FileManifest::new(vec!["/etc/passwd".to_string()]).unwrap_err();
        assert!(err.to_string().contains("relative"));
    }

    #[test]
    fn test_empty_entry_rejected() {
        assert!(FileManifest::new(vec![String::new()]).is_err());
    }
}
