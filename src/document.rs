//! Document model for DOSBox configuration files.
//!
//! A [`ConfigDocument`] holds everything the text format can express:
//! - top-level comments written before the first category
//! - categories, in the order they were first introduced, each with its own
//!   comments and ordered settings (see [`Category`])
//! - the `[autoexec]` body, kept as opaque text and always written last
//!
//! Documents are plain values. [`Clone`] produces a fully independent deep
//! copy, which is how callers build a modified version of a config while
//! keeping the original around for comparison.

use crate::category::Category;
use crate::error::{ConfigError, ParseResult};
use crate::parser::DosboxParser;
use crate::serializer::{self, StringifyOptions};
use indexmap::IndexMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Name of the section whose body is kept as free text
pub const AUTOEXEC: &str = "autoexec";

/// A parsed (or hand-built) configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfigDocument {
    /// Comments before any category, lines joined with `\n`
    comments: String,

    /// Raw `[autoexec]` body, lines joined with `\n`
    autoexec: String,

    /// Categories in order of first appearance
    categories: IndexMap<String, Category>,
}

impl ConfigDocument {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from its parts
    pub fn with_categories<K>(
        comments: impl Into<String>,
        autoexec: impl Into<String>,
        categories: impl IntoIterator<Item = (K, Category)>,
    ) -> Self
    where
        K: Into<String>,
    {
        Self {
            comments: comments.into(),
            autoexec: autoexec.into(),
            categories: categories
                .into_iter()
                .map(|(name, category)| (name.into(), category))
                .collect(),
        }
    }

    /// Parse configuration text. Accepts `\n` and `\r\n` line endings.
    ///
    /// Malformed lines are dropped rather than reported; an error is only
    /// returned if the grammar engine itself fails.
    pub fn parse(input: &str) -> ParseResult<Self> {
        DosboxParser::parse_document(input)
    }

    /// Read and parse a configuration file
    pub fn parse_file(path: impl AsRef<Path>) -> ParseResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::io(path.display().to_string(), e.to_string()))?;

        debug!(path = %path.display(), bytes = content.len(), "read configuration file");

        Self::parse(&content)
    }

    /// Serialize the document
    pub fn stringify(&self, options: &StringifyOptions) -> String {
        serializer::stringify(self, options)
    }

    /// Serialize the document and write it to `path`
    pub fn save_as(&self, path: impl AsRef<Path>, options: &StringifyOptions) -> ParseResult<()> {
        let path = path.as_ref();
        let content = self.stringify(options);

        std::fs::write(path, &content)
            .map_err(|e| ConfigError::io(path.display().to_string(), e.to_string()))?;

        debug!(path = %path.display(), bytes = content.len(), "wrote configuration file");

        Ok(())
    }

    // ========== TOP-LEVEL FIELDS ==========

    /// Top-level comments
    pub fn comments(&self) -> &str {
        &self.comments
    }

    pub fn set_comments(&mut self, value: impl Into<String>) {
        self.comments = value.into();
    }

    /// The `[autoexec]` body
    pub fn autoexec(&self) -> &str {
        &self.autoexec
    }

    pub fn set_autoexec(&mut self, value: impl Into<String>) {
        self.autoexec = value.into();
    }

    // ========== CATEGORIES ==========

    /// Category names in document order
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Categories in document order
    pub fn categories(&self) -> impl Iterator<Item = (&str, &Category)> {
        self.categories.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    pub fn category_mut(&mut self, name: &str) -> Option<&mut Category> {
        self.categories.get_mut(name)
    }

    pub fn contains_category(&self, name: &str) -> bool {
        self.categories.contains_key(name)
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// `true` when there are no comments, no categories and no autoexec text
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty() && self.autoexec.is_empty() && self.categories.is_empty()
    }

    /// Get a category, creating an empty one at the end if it does not exist
    pub(crate) fn ensure_category(&mut self, name: &str) -> &mut Category {
        self.categories.entry(name.to_string()).or_default()
    }

    /// Put a fresh empty category under `name`.
    ///
    /// If the category already exists, its settings and comments are
    /// discarded; it keeps its position in the document. Returns `true` if the
    /// category did not exist before.
    pub fn set_category(&mut self, name: &str) -> bool {
        self.categories
            .insert(name.to_string(), Category::new())
            .is_none()
    }

    /// Remove a category with all its settings and comments.
    /// Returns `true` if something was removed.
    pub fn delete_category(&mut self, name: &str) -> bool {
        self.categories.shift_remove(name).is_some()
    }

    /// Whether a category counts as empty (see [`Category::is_empty`]).
    /// A missing category is empty.
    pub fn is_category_empty(&self, name: &str, strict: bool) -> bool {
        self.categories
            .get(name)
            .is_none_or(|category| category.is_empty(strict))
    }

    // ========== CATEGORY CONTENTS ==========

    /// Setting keys of a category, `None` if the category does not exist
    pub fn get_category_keys(&self, name: &str) -> Option<Vec<&str>> {
        self.categories
            .get(name)
            .map(|category| category.keys().collect())
    }

    /// Settings of a category, `None` if the category does not exist
    pub fn get_category_entries(&self, name: &str) -> Option<Vec<(&str, &str)>> {
        self.categories
            .get(name)
            .map(|category| category.entries().collect())
    }

    pub fn get_category_setting(&self, name: &str, key: &str) -> Option<&str> {
        self.categories.get(name)?.get_setting(key)
    }

    /// Insert or overwrite a setting, creating the category if needed.
    /// Returns `true` if the key was newly created.
    pub fn set_category_setting(
        &mut self,
        name: &str,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> bool {
        self.ensure_category(name).set_setting(key, value)
    }

    /// Remove a setting. Returns `false` if the category or key does not exist.
    pub fn delete_category_setting(&mut self, name: &str, key: &str) -> bool {
        self.categories
            .get_mut(name)
            .is_some_and(|category| category.delete_setting(key))
    }

    pub fn get_category_comments(&self, name: &str) -> Option<&str> {
        self.categories.get(name).map(Category::comments)
    }

    /// Replace the comments of a category, creating the category if needed
    pub fn set_category_comments(&mut self, name: &str, value: impl Into<String>) {
        self.ensure_category(name).set_comments(value);
    }
}

impl FromStr for ConfigDocument {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ConfigDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stringify(&StringifyOptions::default()))
    }
}

// ========== IDENTIFIER VALIDATION ==========

/// Check that `name` can be written as a `[name]` header and read back as the
/// same category.
pub fn validate_category_name(name: &str) -> ParseResult<()> {
    let reason = if name.is_empty() {
        Some("name is empty")
    } else if name == AUTOEXEC {
        Some("name is reserved for the autoexec section")
    } else if name.contains(['[', ']']) {
        Some("name contains a bracket")
    } else if name.contains(['\n', '\r']) {
        Some("name contains a line break")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(ConfigError::invalid_category_name(name, reason)),
        None => Ok(()),
    }
}

/// Check that `key` can be written as `key = value` and read back as the same key.
pub fn validate_setting_key(key: &str) -> ParseResult<()> {
    let reason = if key.trim().is_empty() {
        Some("key is empty")
    } else if key.trim() != key {
        Some("key has surrounding whitespace")
    } else if key.contains('=') {
        Some("key contains '='")
    } else if key.starts_with('#') {
        Some("key starts with '#'")
    } else if key.contains(['\n', '\r']) {
        Some("key contains a line break")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(ConfigError::invalid_setting_key(key, reason)),
        None => Ok(()),
    }
}
