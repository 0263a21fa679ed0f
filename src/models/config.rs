//! Resolved configuration data model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// An RGB color with 8-bit components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Components as a `(r, g, b)` tuple
    pub fn as_tuple(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Uppercase six-digit hex form, without `#`
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

/// Validated options handed to the image-processing pipeline.
///
/// Only [`crate::ConfigResolver`] builds one, and only after every field has
/// passed its check. Ranges are encoded in the field types where possible:
/// `quality` is always within 1..=100 and the background components within
/// 0..=255.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Expanded source file or directory
    pub source_path: PathBuf,

    /// Descend into subdirectories
    pub recursive: bool,

    /// JPEG quality
    pub quality: u8,

    /// Apply adaptive palette reduction to PNG images
    pub reduce_colors: bool,

    /// Palette size cap used with `reduce_colors`
    pub max_colors: i64,

    /// Resize threshold in pixels, 0 disables
    pub max_width: u64,

    /// Resize threshold in pixels, 0 disables
    pub max_height: u64,

    pub keep_exif: bool,

    pub convert_big_png_to_jpeg: bool,

    pub force_delete_png_after_convert: bool,

    /// Substituted for transparency when alpha is removed
    pub background_color: Rgb,
}

impl Configuration {
    /// Whether any resize threshold is set
    pub fn resize_enabled(&self) -> bool {
        self.max_width > 0 || self.max_height > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_hex_and_display() {
        let color = Rgb::new(255, 0, 16);
        assert_eq!(color.to_hex(), "FF0010");
        assert_eq!(color.to_string(), "(255, 0, 16)");
        assert_eq!(color.as_tuple(), (255, 0, 16));
        assert_eq!(Rgb::from((1, 2, 3)), Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_configuration_serializes_to_json() {
        let config = Configuration {
            source_path: PathBuf::from("/tmp/images"),
            recursive: true,
            quality: 70,
            reduce_colors: false,
            max_colors: 256,
            max_width: 0,
            max_height: 0,
            keep_exif: false,
            convert_big_png_to_jpeg: false,
            force_delete_png_after_convert: false,
            background_color: Rgb::new(255, 255, 255),
        };

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["quality"], 70);
        assert_eq!(json["source_path"], "/tmp/images");
        assert_eq!(json["background_color"]["g"], 255);
        assert!(!config.resize_enabled());

        let back: Configuration = serde_json::from_value(json).unwrap();
        assert_eq!(back, config);
    }
}
