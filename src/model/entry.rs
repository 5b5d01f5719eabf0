//! Entry-level types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Separator between heading titles in a category path.
pub const CATEGORY_SEPARATOR: &str = " > ";

/// The parsed knowledge base: entry name to entry record.
///
/// A `BTreeMap`, so iteration (and therefore backfill child listing and
/// JSON key order) is lexicographic by name. Inserting a duplicate name
/// overwrites the earlier record entirely (last write wins).
pub type EntryMap = BTreeMap<String, Entry>;

/// One parsed metadata record, keyed by its name in the [`EntryMap`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Free-text description (possibly empty, possibly backfilled)
    pub description: String,

    /// Key/value properties parsed from `key: value` lines. A repeated
    /// key overwrites the earlier value.
    pub properties: BTreeMap<String, String>,

    /// The `" > "`-joined ancestor heading path in effect when this entry
    /// was opened; empty for top-level, un-headed entries
    pub category: String,

    /// Resolved image URI attached to the entry, if any
    #[serde(rename = "imageUrl")]
    pub image: Option<String>,
}

impl Entry {
    /// Create an empty entry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an entry under the given category path.
    pub fn in_category(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            ..Self::default()
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add a property.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Set the image reference.
    pub fn with_image(mut self, uri: impl Into<String>) -> Self {
        self.image = Some(uri.into());
        self
    }

    /// Check if the entry has a non-blank description.
    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }

    /// The category path a direct child of this entry would carry, given
    /// this entry's name.
    pub fn child_category(&self, name: &str) -> String {
        if self.category.is_empty() {
            name.to_string()
        } else {
            format!("{}{}{}", self.category, CATEGORY_SEPARATOR, name)
        }
    }
}

/// Join heading titles into a category path, skipping empty segments.
pub fn join_category<'a, I>(titles: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    titles
        .into_iter()
        .filter(|title| !title.is_empty())
        .collect::<Vec<_>>()
        .join(CATEGORY_SEPARATOR)
}
