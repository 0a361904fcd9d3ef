//! TOML catalog loader.
//!
//! A catalog file replaces the built-in categories entirely:
//!
//! ```toml
//! [[category]]
//! key = "sports"
//! name = "Sports"
//! topics = ["Favorite team?", "Best game you've seen?"]
//! ```
//!
//! `name` defaults to the key. A category may have no topics; picking from
//! it reports `NoTopicsAvailable` instead of failing at load time.
use super::{Catalog, Category, ALL_KEY};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in catalog file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Catalog file too large: {0}")]
    TooLarge(String),

    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

// ============================================================================
// File Format
// ============================================================================

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "category")]
    categories: Vec<CategoryEntry>,
}

#[derive(Debug, Deserialize)]
struct CategoryEntry {
    key: String,
    name: Option<String>,
    #[serde(default)]
    topics: Vec<String>,
}

impl Catalog {
    /// Maximum catalog file size (1 MB).
    const MAX_FILE_SIZE: u64 = 1_048_576;

    /// Load a catalog from a TOML file.
    ///
    /// Unlike the config file, a missing catalog is an error: the caller
    /// asked for this file explicitly.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let meta = std::fs::metadata(path)?;
        if meta.len() > Self::MAX_FILE_SIZE {
            return Err(CatalogError::TooLarge(format!(
                "Catalog file is {} bytes (max {} bytes)",
                meta.len(),
                Self::MAX_FILE_SIZE
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            categories = catalog.categories().len(),
            topics = catalog.all_topics().len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// Parse and validate catalog TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;

        let mut seen = HashSet::with_capacity(file.categories.len());
        let mut categories = Vec::with_capacity(file.categories.len());

        for entry in file.categories {
            let key = entry.key.trim().to_string();
            if key.is_empty() {
                return Err(CatalogError::Invalid("category key is empty".into()));
            }
            if key == ALL_KEY {
                return Err(CatalogError::Invalid(format!(
                    "category key '{}' is reserved",
                    ALL_KEY
                )));
            }
            if !seen.insert(key.clone()) {
                return Err(CatalogError::Invalid(format!(
                    "duplicate category key '{}'",
                    key
                )));
            }
            if let Some(pos) = entry.topics.iter().position(|t| t.trim().is_empty()) {
                return Err(CatalogError::Invalid(format!(
                    "category '{}' has an empty topic at position {}",
                    key,
                    pos + 1
                )));
            }
            if entry.topics.is_empty() {
                tracing::warn!(category = %key, "Category has no topics");
            }

            let name = entry.name.unwrap_or_else(|| key.clone());
            categories.push(Category::new(key, name, entry.topics));
        }

        Ok(Self::from_categories(categories))
    }
}

// ============================================================================
// Tests
// ============================================================================
