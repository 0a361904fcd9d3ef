//! Topic catalog: category key → ordered list of conversation prompts.
//!
//! The catalog is built once at startup (from the built-in data or a user
//! TOML file) and never mutated afterwards. Category order is declaration
//! order; it determines both tab order and the order of the synthetic
//! `"all"` union.
//!
//! # Module Structure
//!
//! - `builtin` - The default categories shipped with the binary
//! - `file` - TOML catalog loader and validation

mod builtin;
mod file;

pub use file::CatalogError;

/// Key of the synthetic category covering every real category.
pub const ALL_KEY: &str = "all";

/// Display name of the synthetic `"all"` category.
pub const ALL_NAME: &str = "All Topics";

/// Badge label used when a key has no known display name.
pub const FALLBACK_NAME: &str = "Topic";

/// A real category: stable key, display name, and its topics in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub key: String,
    pub name: String,
    pub topics: Vec<String>,
}

impl Category {
    pub fn new<K, N, I, T>(key: K, name: N, topics: I) -> Self
    where
        K: Into<String>,
        N: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            key: key.into(),
            name: name.into(),
            topics: topics.into_iter().map(Into::into).collect(),
        }
    }
}

/// Immutable mapping of category keys to topic lists.
///
/// Lookups of unknown keys yield an empty list rather than an error; the
/// selector turns an empty candidate list into `NoTopicsAvailable`.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    /// Union of every category's topics, in declaration order. Not de-duplicated.
    all: Vec<String>,
}

impl Catalog {
    /// Build a catalog from explicit categories, keeping their order.
    pub fn from_categories(categories: Vec<Category>) -> Self {
        let all = categories
            .iter()
            .flat_map(|c| c.topics.iter().cloned())
            .collect();
        Self { categories, all }
    }

    /// The catalog shipped with the binary.
    pub fn builtin() -> Self {
        Self::from_categories(builtin::categories())
    }

    /// Topics for a real category key. Unknown keys (and `"all"`) yield an empty slice.
    pub fn topics(&self, key: &str) -> &[String] {
        match self.category(key) {
            Some(category) => &category.topics,
            None => {
                tracing::debug!(category = %key, "Unknown category, no topics");
                &[]
            }
        }
    }

    /// Concatenation of every real category's topics in declaration order.
    pub fn all_topics(&self) -> &[String] {
        &self.all
    }

    /// Candidate list for a selection filter: the union for `"all"`,
    /// otherwise the category's own topics.
    pub fn candidates(&self, key: &str) -> &[String] {
        if key == ALL_KEY {
            self.all_topics()
        } else {
            self.topics(key)
        }
    }

    /// Real category keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.key.as_str())
    }

    /// Every recognized filter option: `"all"` first, then the real keys.
    pub fn options(&self) -> Vec<&str> {
        std::iter::once(ALL_KEY).chain(self.keys()).collect()
    }

    /// Whether `key` is `"all"` or a declared category.
    pub fn is_known(&self, key: &str) -> bool {
        key == ALL_KEY || self.category(key).is_some()
    }

    /// Human-readable label for a filter option.
    pub fn display_name<'a>(&'a self, key: &str) -> &'a str {
        if key == ALL_KEY {
            return ALL_NAME;
        }
        self.category(key)
            .map(|c| c.name.as_str())
            .unwrap_or(FALLBACK_NAME)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    fn category(&self, key: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.key == key)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Catalog {
        Catalog::from_categories(vec![
            Category::new("sports", "Sports", ["A", "B"]),
            Category::new("food", "Food & Cooking", ["C"]),
        ])
    }

    #[test]
    fn test_topics_for_known_key() {
        let catalog = sample();
        assert_eq!(catalog.topics("sports"), ["A", "B"]);
        assert_eq!(catalog.topics("food"), ["C"]);
    }

    #[test]
    fn test_unknown_key_is_empty_not_error() {
        let catalog = sample();
        assert!(catalog.topics("travel").is_empty());
        assert!(catalog.candidates("travel").is_empty());
    }

    #[test]
    fn test_all_is_union_in_declared_order() {
        let catalog = sample();
        assert_eq!(catalog.all_topics(), ["A", "B", "C"]);
        assert_eq!(catalog.candidates(ALL_KEY), ["A", "B", "C"]);
    }

    #[test]
    fn test_all_keeps_duplicates_across_categories() {
        let catalog = Catalog::from_categories(vec![
            Category::new("a", "A", ["same", "x"]),
            Category::new("b", "B", ["same"]),
        ]);
        assert_eq!(catalog.all_topics(), ["same", "x", "same"]);
    }

    #[test]
    fn test_options_start_with_all_and_keep_order() {
        let catalog = sample();
        assert_eq!(catalog.options(), vec!["all", "sports", "food"]);
    }

    #[test]
    fn test_display_names() {
        let catalog = sample();
        assert_eq!(catalog.display_name("all"), "All Topics");
        assert_eq!(catalog.display_name("food"), "Food & Cooking");
        assert_eq!(catalog.display_name("nope"), "Topic");
    }

    #[test]
    fn test_is_known() {
        let catalog = sample();
        assert!(catalog.is_known("all"));
        assert!(catalog.is_known("sports"));
        assert!(!catalog.is_known("travel"));
    }

    #[test]
    fn test_builtin_declares_reference_categories_in_order() {
        let catalog = Catalog::builtin();
        let keys: Vec<&str> = catalog.keys().collect();
        assert_eq!(
            keys,
            vec![
                "deep",
                "sports",
                "intimate",
                "flirty",
                "travel",
                "future",
                "entertainment",
                "food",
                "childhood",
            ]
        );
        for category in catalog.categories() {
            assert!(!category.topics.is_empty(), "{} is empty", category.key);
            assert!(category.topics.iter().all(|t| !t.is_empty()));
        }
    }
}
