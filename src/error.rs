use thiserror::Error;

/// Result type alias for configuration operations
pub type ParseResult<T> = Result<T, ConfigError>;

/// Errors that can occur while reading, writing or validating configuration documents
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Parse error from pest
    #[error("Parse error at line {line}, column {column}: {message}")]
    ParseError {
        line: usize,
        column: usize,
        message: String,
    },

    /// File I/O error
    #[error("I/O error for '{path}': {message}")]
    IoError { path: String, message: String },

    /// Unknown spelling of a serializer policy
    #[error("Unknown {option} '{value}', expected one of: {expected}")]
    InvalidOption {
        option: String,
        value: String,
        expected: String,
    },

    /// Category name that cannot be written as a `[name]` header
    #[error("Invalid category name '{name}': {reason}")]
    InvalidCategoryName { name: String, reason: String },

    /// Setting key that cannot be written as a `key = value` line
    #[error("Invalid setting key '{key}': {reason}")]
    InvalidSettingKey { key: String, reason: String },
}

impl ConfigError {
    /// Create a parse error
    pub fn parse(line: usize, column: usize, message: impl Into<String>) -> Self {
        ConfigError::ParseError {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create an I/O error
    pub fn io(path: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::IoError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid option error
    pub fn invalid_option(
        option: impl Into<String>,
        value: impl Into<String>,
        expected: &[&str],
    ) -> Self {
        ConfigError::InvalidOption {
            option: option.into(),
            value: value.into(),
            expected: expected.join(", "),
        }
    }

    /// Create an invalid category name error
    pub fn invalid_category_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidCategoryName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid setting key error
    pub fn invalid_setting_key(key: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidSettingKey {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError {
            path: String::new(),
            message: err.to_string(),
        }
    }
}

impl<R: pest::RuleType> From<pest::error::Error<R>> for ConfigError {
    fn from(err: pest::error::Error<R>) -> Self {
        let (line, column) = match err.line_col {
            pest::error::LineColLocation::Pos((line, col)) => (line, col),
            pest::error::LineColLocation::Span((line, col), _) => (line, col),
        };

        ConfigError::ParseError {
            line,
            column,
            message: err.variant.to_string(),
        }
    }
}
