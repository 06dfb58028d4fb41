//! Edits a game config layered over a base config and previews the result.
//!
//! ```bash
//! cargo run --example edit_config
//! ```

use dosbox_conf::{AllowEmpty, ConfigChanges, ConfigDocument, ConfigLayers, StringifyOptions};

const BASE: &str = "\
# This is the configuration file for DOSBox 0.74-3.\r
\r
[sdl]\r
fullscreen = false\r
output     = surface\r
\r
[cpu]\r
core    = auto\r
cputype = auto\r
cycles  = auto\r
\r
[autoexec]\r
";

const GAME: &str = "\
[cpu]\r
cycles = fixed 3000\r
\r
[autoexec]\r
mount c ~/dosgames/keen\r
c:\r
keen1.exe\r
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== DOSBox config editing ===\n");

    let base = ConfigDocument::parse(BASE)?;
    let game = ConfigDocument::parse(GAME)?;

    {
        let layers = ConfigLayers::new(&base, &game);
        for category in layers.category_names() {
            let marker = if layers.is_overlay_category(category) { "" } else { "~ " };
            println!("{}[{}]", marker, category);

            for key in layers.setting_keys(category) {
                let value = layers.effective_setting(category, key).unwrap_or("");
                let flag = if layers.setting_differs(category, key) { "*" } else { " " };
                println!("  {} {} = {}", flag, key, value);
            }
        }
    }

    // Edit a copy so the original stays available for the preview
    let mut edited = game.clone();
    edited.set_category_setting("cpu", "cputype", "386");
    edited.set_category_setting("sdl", "fullscreen", "true");
    edited.set_category_setting("mixer", "rate", "");

    let options = StringifyOptions::new(AllowEmpty::None);
    let before = game.stringify(&options);
    let after = edited.stringify(&options);

    let changes = ConfigChanges::between(&before, &after);
    println!("\n{}", changes);
    println!("\n--- new file ---\n{}", after.replace("\r\n", "\n"));

    Ok(())
}
