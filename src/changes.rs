//! Line-level comparison of two serialized configurations.
//!
//! Used to show what saving a modified document would change on disk before
//! the file is actually written.

use crate::parser::normalize_newlines;
use similar::{ChangeTag, TextDiff};
use std::fmt;

/// How a line differs between the old and the new text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Equal,
    Added,
    Removed,
}

impl From<ChangeTag> for ChangeKind {
    fn from(tag: ChangeTag) -> Self {
        match tag {
            ChangeTag::Equal => ChangeKind::Equal,
            ChangeTag::Insert => ChangeKind::Added,
            ChangeTag::Delete => ChangeKind::Removed,
        }
    }
}

/// One line of the comparison, without its line terminator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineChange {
    pub kind: ChangeKind,
    pub text: String,
}

/// Line diff between two configuration texts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigChanges {
    changes: Vec<LineChange>,
    added: usize,
    removed: usize,
}

impl ConfigChanges {
    /// Compare `old` to `new` line by line. `\n` and `\r\n` are treated alike.
    pub fn between(old: &str, new: &str) -> Self {
        let old = normalize_newlines(old);
        let new = normalize_newlines(new);
        let diff = TextDiff::from_lines(old.as_str(), new.as_str());

        let mut changes = Vec::new();
        let mut added = 0;
        let mut removed = 0;

        for change in diff.iter_all_changes() {
            let kind = ChangeKind::from(change.tag());
            match kind {
                ChangeKind::Added => added += 1,
                ChangeKind::Removed => removed += 1,
                ChangeKind::Equal => {}
            }

            let text = change.value().trim_end_matches('\n').to_string();
            changes.push(LineChange { kind, text });
        }

        Self {
            changes,
            added,
            removed,
        }
    }

    /// Every line of both texts in diff order
    pub fn changes(&self) -> &[LineChange] {
        &self.changes
    }

    /// Number of lines only in the new text
    pub fn added(&self) -> usize {
        self.added
    }

    /// Number of lines only in the old text
    pub fn removed(&self) -> usize {
        self.removed
    }

    pub fn has_changes(&self) -> bool {
        self.added > 0 || self.removed > 0
    }
}

impl fmt::Display for ConfigChanges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} line(s) added, {} line(s) removed",
            self.added, self.removed
        )
    }
}
