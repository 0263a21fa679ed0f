//! Configuration resolution and runtime settings

pub mod color;
pub mod env;
pub mod path;
pub mod resolver;

// Re-export main functionality
pub use color::HexColorParser;
pub use env::{EnvManager, RuntimeSettings};
pub use path::{expand_user, FixedHomeDir, HomeDirProvider, SystemHomeDir};
pub use resolver::{resolve, ConfigResolver};

// Re-export from models for convenience
pub use crate::models::Configuration;

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

fn dimension(value: u64) -> String {
    if value == 0 {
        "disabled".to_string()
    } else {
        format!("{}px", value)
    }
}

/// Display configuration summary, one `Key: value` line per option
pub fn display_config_summary(config: &Configuration) -> String {
    let mut summary = Vec::new();

    summary.push(format!("Source path: {}", config.source_path.display()));
    summary.push(format!("Recursive: {}", yes_no(config.recursive)));
    summary.push(format!("Max width: {}", dimension(config.max_width)));
    summary.push(format!("Max height: {}", dimension(config.max_height)));
    summary.push(format!("JPEG quality: {}", config.quality));
    summary.push(format!("Keep EXIF: {}", yes_no(config.keep_exif)));
    summary.push(format!("Reduce colors: {}", yes_no(config.reduce_colors)));
    summary.push(format!("Max colors: {}", config.max_colors));
    summary.push(format!(
        "Background color: {} #{}",
        config.background_color,
        config.background_color.to_hex()
    ));
    summary.push(format!("Convert big PNGs to JPEG: {}", yes_no(config.convert_big_png_to_jpeg)));
    summary.push(format!("Delete PNG after conversion: {}", yes_no(config.force_delete_png_after_convert)));

    summary.join("\n")
}
