//! Text output for [`ConfigDocument`].
//!
//! Output layout:
//!
//! ```text
//! #top-level comment      (only if there are top-level comments)
//!
//! [category]
//! #category comment       (only if the category has comments)
//!
//! key     = value         (keys padded to the longest key of the category)
//! longkey = value
//!
//! [autoexec]
//! raw autoexec text
//! ```
//!
//! Which categories are written is controlled by [`AllowEmpty`]; the
//! `[autoexec]` section is always written.

use crate::document::{AUTOEXEC, ConfigDocument};
use crate::error::ConfigError;
use crate::parser::normalize_newlines;
use std::fmt;
use std::str::FromStr;

/// Which empty categories are kept when serializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum AllowEmpty {
    /// Drop categories without comments whose settings are all `""`
    #[default]
    None,

    /// Drop only categories without comments and without any settings
    Settings,

    /// Keep every category
    All,
}

impl AllowEmpty {
    const NAMES: [&'static str; 3] = ["none", "settings", "all"];

    pub fn as_str(&self) -> &'static str {
        match self {
            AllowEmpty::None => "none",
            AllowEmpty::Settings => "settings",
            AllowEmpty::All => "all",
        }
    }

    /// Whether a category is skipped under this policy
    fn skips(&self, document: &ConfigDocument, name: &str) -> bool {
        match self {
            AllowEmpty::None => document.is_category_empty(name, true),
            AllowEmpty::Settings => document.is_category_empty(name, false),
            AllowEmpty::All => false,
        }
    }
}

impl FromStr for AllowEmpty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(AllowEmpty::None),
            "settings" => Ok(AllowEmpty::Settings),
            "all" => Ok(AllowEmpty::All),
            other => Err(ConfigError::invalid_option(
                "empty-value policy",
                other,
                &Self::NAMES,
            )),
        }
    }
}

impl fmt::Display for AllowEmpty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Line terminator written to the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum LineEnding {
    /// `\r\n`, what DOSBox ships its own config files with
    #[default]
    Crlf,

    /// `\n`
    Lf,
}

impl LineEnding {
    const NAMES: [&'static str; 2] = ["crlf", "lf"];

    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Crlf => "\r\n",
            LineEnding::Lf => "\n",
        }
    }
}

impl FromStr for LineEnding {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "crlf" => Ok(LineEnding::Crlf),
            "lf" => Ok(LineEnding::Lf),
            other => Err(ConfigError::invalid_option("line ending", other, &Self::NAMES)),
        }
    }
}

/// Serializer options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct StringifyOptions {
    /// Which empty categories to keep
    pub allow_empty: AllowEmpty,

    /// Output line terminator
    pub line_ending: LineEnding,
}

impl StringifyOptions {
    /// Default options with the given empty-category policy
    pub fn new(allow_empty: AllowEmpty) -> Self {
        Self {
            allow_empty,
            ..Self::default()
        }
    }

    pub fn with_allow_empty(mut self, allow_empty: AllowEmpty) -> Self {
        self.allow_empty = allow_empty;
        self
    }

    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }
}

/// Write each line of `text` prefixed with `#`
fn push_comment_block(output: &mut String, text: &str) {
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push('#');
        output.push_str(line);
    }
    output.push_str("\n\n");
}

/// Serialize a document.
///
/// The output is built with `\n` and converted to the requested line ending
/// at the end, so comments or autoexec text containing `\r\n` come out with a
/// single terminator per line.
pub fn stringify(document: &ConfigDocument, options: &StringifyOptions) -> String {
    let mut output = String::new();

    let comments = normalize_newlines(document.comments());
    if !comments.is_empty() {
        push_comment_block(&mut output, &comments);
    }

    for (name, category) in document.categories() {
        if options.allow_empty.skips(document, name) {
            continue;
        }

        output.push('[');
        output.push_str(name);
        output.push_str("]\n");

        let comments = normalize_newlines(category.comments());
        if !comments.is_empty() {
            push_comment_block(&mut output, &comments);
        }

        let width = category.key_width();
        for (key, value) in category.entries() {
            output.push_str(&format!("{:<width$} = {}\n", key, value));
        }

        output.push('\n');
    }

    output.push('[');
    output.push_str(AUTOEXEC);
    output.push_str("]\n");
    output.push_str(&normalize_newlines(document.autoexec()));

    match options.line_ending {
        LineEnding::Lf => output,
        LineEnding::Crlf => output.replace('\n', LineEnding::Crlf.as_str()),
    }
}
