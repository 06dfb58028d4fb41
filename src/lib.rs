//! # dosbox-conf
//!
//! Order-preserving parser and serializer for DOSBox-style configuration files.
//!
//! A DOSBox config is an INI-like text file: `#` comment lines, `[category]`
//! headers, `key = value` settings and a final `[autoexec]` section whose body
//! is a batch script rather than settings. This crate reads such files into a
//! [`ConfigDocument`], lets callers edit it through a small structured API and
//! writes it back out deterministically.
//!
//! ## Features
//!
//! - **Order preservation**: categories and settings keep the order they were
//!   first seen in, or inserted in
//! - **Comments**: top-level and per-category comments survive a round trip
//! - **Autoexec**: the `[autoexec]` body is kept verbatim and always written last
//! - **Empty-value policy**: choose which empty categories are written ([`AllowEmpty`])
//! - **Line endings**: `\n` and `\r\n` accepted on input; output convention is
//!   configurable ([`LineEnding`], CRLF by default)
//! - **Layered view**: read a game config on top of a base config ([`ConfigLayers`])
//! - **Change summary**: line diff of two serialized configs ([`ConfigChanges`])
//!
//! ## Optional Features
//!
//! ### `serde` Feature
//!
//! Derives `Serialize`/`Deserialize` for the document types and for
//! [`StringifyOptions`], using the spelling found in settings files
//! (`{"allowEmpty": "settings", "lineEnding": "crlf"}`).
//!
//! ## Example
//!
//! ```rust
//! use dosbox_conf::{AllowEmpty, ConfigDocument, LineEnding, StringifyOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut config = ConfigDocument::parse(
//!     "#DOSBox config\r\n\r\n[cpu]\r\ncycles = auto\r\n\r\n[autoexec]\r\nmount c .\r\nc:",
//! )?;
//!
//! assert_eq!(config.comments(), "DOSBox config");
//! assert_eq!(config.get_category_setting("cpu", "cycles"), Some("auto"));
//! assert_eq!(config.autoexec(), "mount c .\nc:");
//!
//! // Edit a copy, keep the original for comparison
//! let mut edited = config.clone();
//! edited.set_category_setting("cpu", "cputype", "386");
//! edited.set_category_setting("sdl", "fullscreen", "");
//!
//! let options = StringifyOptions::new(AllowEmpty::None).with_line_ending(LineEnding::Lf);
//! assert_eq!(
//!     edited.stringify(&options),
//!     "#DOSBox config\n\n[cpu]\ncycles  = auto\ncputype = 386\n\n[autoexec]\nmount c .\nc:"
//! );
//!
//! config.delete_category("cpu");
//! assert!(config.is_category_empty("cpu", false));
//! # Ok(())
//! # }
//! ```

// Module declarations
mod category;
mod changes;
mod document;
mod error;
mod layers;
mod parser;
mod serializer;

// Public API exports
pub use category::Category;
pub use document::{AUTOEXEC, ConfigDocument, validate_category_name, validate_setting_key};
pub use error::{ConfigError, ParseResult};
pub use serializer::{AllowEmpty, LineEnding, StringifyOptions, stringify};

// Re-export submodules for advanced usage
pub use changes::{ChangeKind, ConfigChanges, LineChange};
pub use layers::ConfigLayers;
pub use parser::{DosboxParser, Line};

/// Parse configuration text. Shorthand for [`ConfigDocument::parse`].
pub fn parse(input: &str) -> ParseResult<ConfigDocument> {
    ConfigDocument::parse(input)
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
