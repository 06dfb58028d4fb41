use dosbox_conf::{Category, ConfigDocument};

fn two_categories() -> ConfigDocument {
    ConfigDocument::with_categories(
        "COMMENT",
        "AUTOEXEC",
        [
            (
                "CAT1",
                Category::with_settings(
                    "CAT1_COMMENTS",
                    [("CAT1_SET1", "CAT1_SET1_VALUE"), ("CAT1_SET2", "CAT1_SET2_VALUE")],
                ),
            ),
            (
                "CAT2",
                Category::with_settings(
                    "CAT2_COMMENTS",
                    [("CAT2_SET1", "CAT2_SET1_VALUE"), ("CAT2_SET2", "CAT2_SET2_VALUE")],
                ),
            ),
        ],
    )
}

// ========== CLONE ==========

#[test]
fn test_clone_changes_do_not_leak_into_original() {
    let original = two_categories();
    let mut clone = original.clone();

    clone.set_category_setting("CAT1", "CAT1_SET1", "changed");
    clone.set_category_comments("CAT1", "changed");
    clone.delete_category("CAT2");

    assert_eq!(original, two_categories());
    assert_eq!(clone.get_category_setting("CAT1", "CAT1_SET1"), Some("changed"));
}

#[test]
fn test_original_changes_do_not_leak_into_clone() {
    let mut original = two_categories();
    let clone = original.clone();

    if let Some(category) = original.category_mut("CAT2") {
        category.set_setting("CAT2_SET1", "changed");
        category.delete_setting("CAT2_SET2");
        category.append_comments(" more");
    }
    original.set_category("CAT1");

    assert_eq!(clone, two_categories());
}

// ========== SETTINGS ==========

#[test]
fn test_set_category_setting_on_empty_document() {
    let mut config = ConfigDocument::new();

    assert!(config.set_category_setting("cat1", "new", "v"));
    assert_eq!(config.get_category_setting("cat1", "new"), Some("v"));

    assert!(!config.set_category_setting("cat1", "new", "w"));
    assert_eq!(config.get_category_setting("cat1", "new"), Some("w"));
}

#[test]
fn test_new_settings_append_in_order() {
    let mut config = two_categories();
    config.set_category_setting("CAT1", "Z", "1");
    config.set_category_setting("CAT1", "A", "2");

    assert_eq!(
        config.get_category_keys("CAT1"),
        Some(vec!["CAT1_SET1", "CAT1_SET2", "Z", "A"])
    );
}

#[test]
fn test_delete_category_setting() {
    let mut config = two_categories();

    assert!(config.delete_category_setting("CAT1", "CAT1_SET1"));
    assert!(!config.delete_category_setting("CAT1", "CAT1_SET1"));
    assert!(!config.delete_category_setting("MISSING", "CAT1_SET1"));
    assert_eq!(config.get_category_keys("CAT1"), Some(vec!["CAT1_SET2"]));
    // Deleting settings never removes the category itself
    assert!(config.delete_category_setting("CAT1", "CAT1_SET2"));
    assert!(config.contains_category("CAT1"));
}

// ========== CATEGORIES ==========

#[test]
fn test_set_category_clears_existing_content() {
    let mut config = two_categories();

    assert!(!config.set_category("CAT1"));
    assert_eq!(config.get_category_keys("CAT1"), Some(vec![]));
    assert_eq!(config.get_category_comments("CAT1"), Some(""));
    assert!(config.is_category_empty("CAT1", false));
}

#[test]
fn test_set_category_creates_new() {
    let mut config = ConfigDocument::new();
    assert!(config.set_category("render"));
    assert!(config.contains_category("render"));
    assert_eq!(config.get_category_entries("render"), Some(vec![]));
}

#[test]
fn test_delete_category() {
    let mut config = two_categories();
    assert!(config.delete_category("CAT1"));
    assert!(!config.delete_category("CAT1"));
    assert_eq!(config.get_category_comments("CAT1"), None);
    assert_eq!(config.category_names().collect::<Vec<_>>(), vec!["CAT2"]);
}

#[test]
fn test_set_category_comments_creates_category() {
    let mut config = ConfigDocument::new();
    config.set_category_comments("sdl", "Window settings");
    assert_eq!(config.get_category_comments("sdl"), Some("Window settings"));

    config.set_category_comments("sdl", "Replaced");
    assert_eq!(config.get_category_comments("sdl"), Some("Replaced"));
}

#[test]
fn test_top_level_fields() {
    let mut config = two_categories();
    config.set_comments("new top");
    config.set_autoexec("mount c .\nc:");
    assert_eq!(config.comments(), "new top");
    assert_eq!(config.autoexec(), "mount c .\nc:");
}

// ========== EMPTINESS ==========

#[test]
fn test_is_category_empty_with_empty_values() {
    let config = ConfigDocument::with_categories(
        "",
        "",
        [("cat1", Category::with_settings("", [("set1", ""), ("set2", "")]))],
    );

    assert!(!config.is_category_empty("cat1", false));
    assert!(config.is_category_empty("cat1", true));
}

#[test]
fn test_is_category_empty_without_settings() {
    let config = ConfigDocument::with_categories("", "", [("cat1", Category::new())]);

    assert!(config.is_category_empty("cat1", false));
    assert!(config.is_category_empty("cat1", true));
}

#[test]
fn test_is_category_empty_with_comments() {
    let config = ConfigDocument::with_categories(
        "",
        "",
        [("cat1", Category::with_settings("COMMENT", Vec::<(&str, &str)>::new()))],
    );

    assert!(!config.is_category_empty("cat1", false));
    assert!(!config.is_category_empty("cat1", true));
}

#[test]
fn test_is_category_empty_strict_with_values() {
    let config = ConfigDocument::with_categories(
        "",
        "",
        [
            ("cat1", Category::with_settings("", [("set1", ""), ("set2", "VALUE")])),
            ("cat2", Category::with_settings("COMMENT", [("set1", ""), ("set2", "")])),
        ],
    );

    assert!(!config.is_category_empty("cat1", true));
    assert!(!config.is_category_empty("cat2", true));
}
