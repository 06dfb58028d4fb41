//! A single `[name]` section of a configuration document.

use indexmap::IndexMap;

/// Comments and settings of one category.
///
/// Settings keep the order in which they were first inserted. Overwriting an
/// existing key keeps its position; deleting a key keeps the relative order of
/// the remaining ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Category {
    comments: String,
    settings: IndexMap<String, String>,
}

impl Category {
    /// Create an empty category
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a category with comments and an initial set of settings
    pub fn with_settings<K, V>(
        comments: impl Into<String>,
        settings: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            comments: comments.into(),
            settings: settings
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Comment text, lines joined with `\n`
    pub fn comments(&self) -> &str {
        &self.comments
    }

    pub fn set_comments(&mut self, value: impl Into<String>) {
        self.comments = value.into();
    }

    /// Append raw text to the comments, without inserting a separator
    pub fn append_comments(&mut self, value: &str) {
        self.comments.push_str(value);
    }

    /// Setting keys in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.settings.keys().map(String::as_str)
    }

    /// Settings as `(key, value)` pairs in order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.settings.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn get_setting(&self, key: &str) -> Option<&str> {
        self.settings.get(key).map(String::as_str)
    }

    /// Insert or overwrite a setting. Returns `true` if the key did not exist before.
    pub fn set_setting(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        self.settings.insert(key.into(), value.into()).is_none()
    }

    /// Remove a setting. Returns `true` if something was removed.
    pub fn delete_setting(&mut self, key: &str) -> bool {
        self.settings.shift_remove(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    /// Emptiness predicate used when deciding whether to write the category out.
    ///
    /// Non-strict: no comments and no settings at all.
    /// Strict: no comments and every setting value is `""`.
    pub fn is_empty(&self, strict: bool) -> bool {
        if !self.comments.is_empty() {
            return false;
        }

        if strict {
            self.settings.values().all(String::is_empty)
        } else {
            self.settings.is_empty()
        }
    }

    /// Width of the longest key, in characters
    pub(crate) fn key_width(&self) -> usize {
        self.settings
            .keys()
            .map(|key| key.chars().count())
            .max()
            .unwrap_or(0)
    }
}
