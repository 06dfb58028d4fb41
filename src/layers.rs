//! A game configuration read on top of the base (default) configuration.
//!
//! Game configs usually only carry the settings that differ from the base
//! config DOSBox ships with. [`ConfigLayers`] combines the two for display:
//! it lists every category and key known to either document and tells which
//! values are actually overridden.
//!
//! ```
//! use dosbox_conf::{ConfigDocument, ConfigLayers};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let base = ConfigDocument::parse("[cpu]\ncore = auto\ncycles = auto\n")?;
//! let game = ConfigDocument::parse("[cpu]\ncycles = fixed 3000\n")?;
//!
//! let layers = ConfigLayers::new(&base, &game);
//! assert_eq!(layers.effective_setting("cpu", "core"), Some("auto"));
//! assert_eq!(layers.effective_setting("cpu", "cycles"), Some("fixed 3000"));
//! assert!(layers.setting_differs("cpu", "cycles"));
//! # Ok(())
//! # }
//! ```

use crate::document::ConfigDocument;
use indexmap::IndexSet;

/// Borrowed view of an overlay document layered over a base document
#[derive(Debug, Clone, Copy)]
pub struct ConfigLayers<'a> {
    base: &'a ConfigDocument,
    overlay: &'a ConfigDocument,
}

impl<'a> ConfigLayers<'a> {
    pub fn new(base: &'a ConfigDocument, overlay: &'a ConfigDocument) -> Self {
        Self { base, overlay }
    }

    pub fn base(&self) -> &'a ConfigDocument {
        self.base
    }

    pub fn overlay(&self) -> &'a ConfigDocument {
        self.overlay
    }

    /// Every category of either document: overlay order first, then
    /// categories only the base has, in base order.
    pub fn category_names(&self) -> Vec<&'a str> {
        let names: IndexSet<&'a str> = self
            .overlay
            .category_names()
            .chain(self.base.category_names())
            .collect();
        names.into_iter().collect()
    }

    /// Every setting key of `category` in either document, ordered like
    /// [`ConfigLayers::category_names`]
    pub fn setting_keys(&self, category: &str) -> Vec<&'a str> {
        let overlay = self.overlay.category(category).into_iter().flat_map(|c| c.keys());
        let base = self.base.category(category).into_iter().flat_map(|c| c.keys());
        let keys: IndexSet<&'a str> = overlay.chain(base).collect();
        keys.into_iter().collect()
    }

    /// The overlay value if set, otherwise the base value
    pub fn effective_setting(&self, category: &str, key: &str) -> Option<&'a str> {
        self.overlay
            .get_category_setting(category, key)
            .or_else(|| self.base.get_category_setting(category, key))
    }

    pub fn is_overlay_category(&self, category: &str) -> bool {
        self.overlay.contains_category(category)
    }

    pub fn is_overlay_setting(&self, category: &str, key: &str) -> bool {
        self.overlay.get_category_setting(category, key).is_some()
    }

    /// The overlay sets a non-empty value that is not the base value.
    /// Missing values compare as `""`.
    pub fn setting_differs(&self, category: &str, key: &str) -> bool {
        let value = self.overlay.get_category_setting(category, key).unwrap_or("");
        let base = self.base.get_category_setting(category, key).unwrap_or("");
        !value.is_empty() && value != base
    }

    /// Any setting of `category` differs from the base
    pub fn category_differs(&self, category: &str) -> bool {
        self.setting_keys(category)
            .into_iter()
            .any(|key| self.setting_differs(category, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> ConfigDocument {
        let mut doc = ConfigDocument::new();
        doc.set_category_setting("sdl", "fullscreen", "false");
        doc.set_category_setting("sdl", "output", "surface");
        doc.set_category_setting("cpu", "core", "auto");
        doc.set_category_setting("cpu", "cycles", "auto");
        doc
    }

    fn game() -> ConfigDocument {
        let mut doc = ConfigDocument::new();
        doc.set_category_setting("cpu", "cycles", "fixed 3000");
        doc.set_category_setting("cpu", "cputype", "386");
        doc.set_category_setting("mixer", "rate", "");
        doc
    }

    #[test]
    fn test_category_union_order() {
        let (base, game) = (base(), game());
        let layers = ConfigLayers::new(&base, &game);
        assert_eq!(layers.category_names(), vec!["cpu", "mixer", "sdl"]);
    }

    #[test]
    fn test_setting_union_order() {
        let (base, game) = (base(), game());
        let layers = ConfigLayers::new(&base, &game);
        assert_eq!(layers.setting_keys("cpu"), vec!["cycles", "cputype", "core"]);
        assert_eq!(layers.setting_keys("sdl"), vec!["fullscreen", "output"]);
        assert!(layers.setting_keys("nope").is_empty());
    }

    #[test]
    fn test_effective_setting() {
        let (base, game) = (base(), game());
        let layers = ConfigLayers::new(&base, &game);
        assert_eq!(layers.effective_setting("cpu", "cycles"), Some("fixed 3000"));
        assert_eq!(layers.effective_setting("cpu", "core"), Some("auto"));
        assert_eq!(layers.effective_setting("mixer", "rate"), Some(""));
        assert_eq!(layers.effective_setting("cpu", "nope"), None);
    }

    #[test]
    fn test_differences() {
        let (base, mut game) = (base(), game());
        game.set_category_setting("sdl", "output", "surface");

        let layers = ConfigLayers::new(&base, &game);
        assert!(layers.setting_differs("cpu", "cycles"));
        assert!(layers.setting_differs("cpu", "cputype"));
        assert!(!layers.setting_differs("cpu", "core"));
        // Same as base
        assert!(!layers.setting_differs("sdl", "output"));
        // Empty overlay values never count
        assert!(!layers.setting_differs("mixer", "rate"));

        assert!(layers.category_differs("cpu"));
        assert!(!layers.category_differs("sdl"));
        assert!(!layers.category_differs("mixer"));

        assert!(layers.is_overlay_category("sdl"));
        assert!(!layers.is_overlay_setting("sdl", "fullscreen"));
    }
}
