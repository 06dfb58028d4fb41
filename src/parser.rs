use pest::Parser;
use pest_derive::Parser;
use tracing::{debug, trace};

use crate::document::{AUTOEXEC, ConfigDocument};
use crate::error::ParseResult;

#[derive(Parser)]
#[grammar = "dosbox.pest"]
pub struct DosboxParser;

/// A classified input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// `[name]`
    Header { name: &'a str, raw: &'a str },

    /// `#text`, text kept as written
    Comment { text: &'a str, raw: &'a str },

    /// `key = value`, both sides trimmed
    Setting {
        key: &'a str,
        value: &'a str,
        raw: &'a str,
    },

    /// Non-empty line that is none of the above
    Text { raw: &'a str },

    /// Empty line
    Blank,
}

impl<'a> Line<'a> {
    /// The line exactly as it appeared in the input
    pub fn raw(&self) -> &'a str {
        match self {
            Line::Header { raw, .. }
            | Line::Comment { raw, .. }
            | Line::Setting { raw, .. }
            | Line::Text { raw } => *raw,
            Line::Blank => "",
        }
    }
}

/// Fold `\r\n` into `\n`. A lone `\r` is left alone.
pub(crate) fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n")
}

impl DosboxParser {
    /// Classify every line of `input`. `input` must already use `\n` line endings.
    pub fn parse_lines(input: &str) -> ParseResult<Vec<Line<'_>>> {
        let pairs = DosboxParser::parse(Rule::file, input)?;

        let mut lines = Vec::new();

        for pair in pairs {
            if pair.as_rule() == Rule::file {
                for inner in pair.into_inner() {
                    if let Some(line) = Self::parse_line(inner) {
                        lines.push(line);
                    }
                }
            }
        }

        Ok(lines)
    }

    fn parse_line(pair: pest::iterators::Pair<'_, Rule>) -> Option<Line<'_>> {
        let raw = pair.as_str();

        match pair.as_rule() {
            Rule::header => {
                let name = pair
                    .into_inner()
                    .find(|p| p.as_rule() == Rule::section_name)
                    .map_or("", |p| p.as_str());
                Some(Line::Header { name, raw })
            }
            Rule::comment => {
                let text = pair
                    .into_inner()
                    .find(|p| p.as_rule() == Rule::comment_text)
                    .map_or("", |p| p.as_str());
                Some(Line::Comment { text, raw })
            }
            Rule::setting => {
                let mut key = "";
                let mut value = "";
                for inner in pair.into_inner() {
                    match inner.as_rule() {
                        Rule::setting_key => key = inner.as_str().trim(),
                        Rule::setting_value => value = inner.as_str().trim(),
                        _ => {}
                    }
                }
                Some(Line::Setting { key, value, raw })
            }
            Rule::text => Some(Line::Text { raw }),
            Rule::blank => Some(Line::Blank),
            _ => None,
        }
    }

    /// Parse configuration text into a document.
    ///
    /// Lines are handled in a single pass with a "current category" cursor:
    /// headers move the cursor, the `[autoexec]` body is collected verbatim,
    /// comments and settings go to the current category, which is created the
    /// first time one of them needs it. Unusable lines are dropped.
    pub fn parse_document(input: &str) -> ParseResult<ConfigDocument> {
        let normalized = normalize_newlines(input);
        let lines = Self::parse_lines(&normalized)?;

        let mut document = ConfigDocument::new();
        let mut top_comments = String::new();
        let mut autoexec: Vec<&str> = Vec::new();
        let mut current: Option<&str> = None;

        for (idx, line) in lines.iter().enumerate() {
            let line_no = idx + 1;

            if let Line::Header { name, .. } = line {
                // `[]` behaves like "no category"
                current = if name.is_empty() { None } else { Some(*name) };
                continue;
            }

            if current == Some(AUTOEXEC) {
                autoexec.push(line.raw());
                continue;
            }

            match line {
                Line::Comment { text, .. } => match current {
                    Some(name) => {
                        let category = document.ensure_category(name);
                        if !category.comments().is_empty() {
                            category.append_comments("\n");
                        }
                        category.append_comments(text);
                    }
                    None => {
                        if !top_comments.is_empty() {
                            top_comments.push('\n');
                        }
                        top_comments.push_str(text);
                    }
                },
                Line::Setting { key, value, .. } => match current {
                    Some(name) => {
                        trace!(category = name, key, "setting");
                        document.ensure_category(name).set_setting(*key, *value);
                    }
                    None => {
                        debug!(line = line_no, key, "dropping setting outside of any category");
                    }
                },
                Line::Text { raw } => {
                    debug!(line = line_no, text = raw, "dropping line without '='");
                }
                Line::Header { .. } | Line::Blank => {}
            }
        }

        document.set_comments(top_comments);
        document.set_autoexec(autoexec.join("\n"));

        debug!(
            lines = lines.len(),
            categories = document.len(),
            "parsed configuration"
        );

        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(input: &str) -> Vec<Line<'_>> {
        DosboxParser::parse_lines(input).unwrap()
    }

    #[test]
    fn test_header_lines() {
        let lines = classify("[sdl]\n  [cpu]  \n[a]]\n[]");
        assert_eq!(
            lines,
            vec![
                Line::Header { name: "sdl", raw: "[sdl]" },
                Line::Header { name: "cpu", raw: "  [cpu]  " },
                Line::Header { name: "a]", raw: "[a]]" },
                Line::Header { name: "", raw: "[]" },
            ]
        );
    }

    #[test]
    fn test_not_a_header() {
        let lines = classify("[sdl] trailing\n[open");
        assert_eq!(
            lines,
            vec![
                Line::Text { raw: "[sdl] trailing" },
                Line::Text { raw: "[open" },
            ]
        );
    }

    #[test]
    fn test_comment_text_is_untrimmed() {
        let lines = classify("# spaced \n#");
        assert_eq!(
            lines,
            vec![
                Line::Comment { text: " spaced ", raw: "# spaced " },
                Line::Comment { text: "", raw: "#" },
            ]
        );
    }

    #[test]
    fn test_indented_hash_is_not_a_comment() {
        let lines = classify("  # not a comment");
        assert_eq!(lines, vec![Line::Text { raw: "  # not a comment" }]);
    }

    #[test]
    fn test_setting_splits_on_first_equals() {
        let lines = classify("  cycles =  fixed 3000 \nmount = c = d\nempty =");
        assert_eq!(
            lines,
            vec![
                Line::Setting { key: "cycles", value: "fixed 3000", raw: "  cycles =  fixed 3000 " },
                Line::Setting { key: "mount", value: "c = d", raw: "mount = c = d" },
                Line::Setting { key: "empty", value: "", raw: "empty =" },
            ]
        );
    }

    #[test]
    fn test_blank_lines_are_kept() {
        let lines = classify("\n\n");
        assert_eq!(lines, vec![Line::Blank, Line::Blank, Line::Blank]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(classify(""), vec![Line::Blank]);
    }

    #[test]
    fn test_lone_carriage_return_is_content() {
        assert_eq!(normalize_newlines("a\r\nb\rc"), "a\nb\rc");
    }
}
