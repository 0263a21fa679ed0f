//! Unvalidated option values as supplied on the command line

use crate::defaults;

/// The literal option values of one invocation.
///
/// Every field is explicit: absent values are `None` rather than a sentinel,
/// and numeric fields carry their documented defaults. Nothing here has been
/// validated; see [`crate::ConfigResolver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawArguments {
    /// Source file or directory, as typed
    pub path: Option<String>,
    pub show_version: bool,
    pub show_supported_formats: bool,
    pub no_recursion: bool,
    pub max_width: i64,
    pub max_height: i64,
    pub quality: i64,
    pub keep_exif: bool,
    pub reduce_colors: bool,
    pub max_colors: i64,
    /// Background as three integers (red, green, blue)
    pub bg_color_rgb: Option<[i64; 3]>,
    /// Background as an HTML-style hex string
    pub bg_color_hex: Option<String>,
    pub convert_big_png_to_jpeg: bool,
    pub force_delete_png_after_convert: bool,
}

impl Default for RawArguments {
    fn default() -> Self {
        Self {
            path: None,
            show_version: false,
            show_supported_formats: false,
            no_recursion: false,
            max_width: defaults::DEFAULT_MAX_WIDTH,
            max_height: defaults::DEFAULT_MAX_HEIGHT,
            quality: defaults::DEFAULT_QUALITY,
            keep_exif: false,
            reduce_colors: false,
            max_colors: defaults::DEFAULT_MAX_COLORS,
            bg_color_rgb: None,
            bg_color_hex: None,
            convert_big_png_to_jpeg: false,
            force_delete_png_after_convert: false,
        }
    }
}

impl RawArguments {
    /// Raw arguments with only a source path set
    pub fn with_path<S: Into<String>>(path: S) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }
}
