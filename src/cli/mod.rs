//! Command-line interface definition

use crate::{defaults, models::RawArguments};
use clap::Parser;
use std::ffi::OsString;

const ABOUT: &str = "Reduce the file size of images in place";

const LONG_ABOUT: &str = "Reduce the file size of images. Pass the path of an image file or of a \
directory containing images. Files are processed DESTRUCTIVELY: each original is replaced by its \
optimized version, so make a copy of the file or folder first if you may need to recover an \
original or a result whose quality is not what you wanted.";

const RESIZE_HEADING: &str = "Image resizing options";
const JPEG_HEADING: &str = "JPEG specific options";
const PNG_HEADING: &str = "PNG specific options";

/// Multi-letter single-dash flags and the long forms they stand for
pub const LEGACY_SHORT_FLAGS: &[(&str, &str)] = &[
    ("-sf", "--supported-formats"),
    ("-nr", "--no-recursion"),
    ("-mw", "--max-width"),
    ("-mh", "--max-height"),
    ("-ke", "--keep-exif"),
    ("-rc", "--reduce-colors"),
    ("-mc", "--max-colors"),
    ("-bg", "--bg-color"),
    ("-hbg", "--hex-bg-color"),
    ("-cb", "--convert_big"),
    ("-fd", "--force-delete"),
];

/// optimize-images - reduce the file size of JPEG and PNG images
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "optimize-images")]
#[command(about = ABOUT, long_about = LONG_ABOUT)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Image file or folder to optimize. Subfolders are processed too unless
    /// --no-recursion is given
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Print the program version and exit
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// List the image formats currently supported and exit [short: -sf]
    #[arg(long = "supported-formats")]
    pub supported_formats: bool,

    /// Don't recurse through subdirectories [short: -nr]
    #[arg(long = "no-recursion")]
    pub no_recursion: bool,

    /// Maximum width in pixels; wider images are downsized first, and the
    /// resize is dropped if it doesn't end up saving space. 0 disables [short: -mw]
    #[arg(
        long = "max-width",
        value_name = "PIXELS",
        default_value_t = defaults::DEFAULT_MAX_WIDTH,
        allow_negative_numbers = true,
        help_heading = RESIZE_HEADING
    )]
    pub max_width: i64,

    /// Maximum height in pixels, same rules as --max-width [short: -mh]
    #[arg(
        long = "max-height",
        value_name = "PIXELS",
        default_value_t = defaults::DEFAULT_MAX_HEIGHT,
        allow_negative_numbers = true,
        help_heading = RESIZE_HEADING
    )]
    pub max_height: i64,

    /// JPEG quality, an integer between 1 and 100. Lower values give smaller
    /// files and lower image quality
    #[arg(
        short = 'q',
        long = "quality",
        default_value_t = defaults::DEFAULT_QUALITY,
        allow_negative_numbers = true,
        help_heading = JPEG_HEADING
    )]
    pub quality: i64,

    /// Keep EXIF metadata (discarded by default) [short: -ke]
    #[arg(long = "keep-exif", help_heading = JPEG_HEADING)]
    pub keep_exif: bool,

    /// Reduce PNG colors with an adaptive palette and dithering. Can shrink
    /// files a lot, at some cost in quality [short: -rc]
    #[arg(long = "reduce-colors", help_heading = PNG_HEADING)]
    pub reduce_colors: bool,

    /// Maximum palette size used with --reduce-colors [short: -mc]
    #[arg(
        long = "max-colors",
        value_name = "COLORS",
        default_value_t = defaults::DEFAULT_MAX_COLORS,
        allow_negative_numbers = true,
        help_heading = PNG_HEADING
    )]
    pub max_colors: i64,

    /// Background color used when transparency is removed, as three integers
    /// between 0 and 255, e.g. '255 0 0' for red. Defaults to white [short: -bg]
    #[arg(
        long = "bg-color",
        num_args = 3,
        value_names = ["R", "G", "B"],
        allow_negative_numbers = true,
        help_heading = PNG_HEADING
    )]
    pub bg_color: Option<Vec<i64>>,

    /// Background color as an HTML-style hex value, e.g. '00FF00' for green.
    /// Defaults to FFFFFF [short: -hbg]
    #[arg(long = "hex-bg-color", value_name = "HEX", help_heading = PNG_HEADING)]
    pub hex_bg_color: Option<String>,

    /// Convert big PNG images with many colors (likely photos) to JPEG when
    /// that looks worthwhile. The PNG is kept alongside the JPEG, and an
    /// existing JPEG with the same name is overwritten [short: -cb]
    #[arg(long = "convert_big", visible_alias = "convert-big", help_heading = PNG_HEADING)]
    pub convert_big: bool,

    /// Delete the original PNG after converting it to JPEG [short: -fd]
    #[arg(long = "force-delete", help_heading = PNG_HEADING)]
    pub force_delete: bool,
}

impl Cli {
    /// Parse the process arguments, accepting the multi-letter short flags
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// Fallible parse from an explicit argument list
    pub fn try_parse_normalized_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args))
    }

    /// Convert into raw, unvalidated arguments
    pub fn to_raw_arguments(&self) -> RawArguments {
        RawArguments {
            path: self.path.clone(),
            show_version: self.version,
            show_supported_formats: self.supported_formats,
            no_recursion: self.no_recursion,
            max_width: self.max_width,
            max_height: self.max_height,
            quality: self.quality,
            keep_exif: self.keep_exif,
            reduce_colors: self.reduce_colors,
            max_colors: self.max_colors,
            bg_color_rgb: self.bg_color.as_deref().and_then(last_bg_color),
            bg_color_hex: self.hex_bg_color.clone(),
            convert_big_png_to_jpeg: self.convert_big,
            force_delete_png_after_convert: self.force_delete,
        }
    }
}

/// Repeated `--bg-color` options append; the last one given wins
fn last_bg_color(values: &[i64]) -> Option<[i64; 3]> {
    match values {
        [.., r, g, b] => Some([*r, *g, *b]),
        _ => None,
    }
}

impl From<Cli> for RawArguments {
    fn from(cli: Cli) -> Self {
        cli.to_raw_arguments()
    }
}

/// Rewrite multi-letter single-dash flags to their long forms.
///
/// Only whole tokens (or `flag=value` tokens) are rewritten, and nothing
/// after a bare `--`. The first element is the program name and is kept.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut passthrough = false;

    for (index, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();
        if index == 0 || passthrough {
            normalized.push(arg);
            continue;
        }

        let rewritten = match arg.to_str() {
            Some("--") => {
                passthrough = true;
                None
            }
            Some(token) => rewrite_token(token),
            None => None,
        };
        normalized.push(rewritten.map(OsString::from).unwrap_or(arg));
    }

    normalized
}

fn rewrite_token(token: &str) -> Option<String> {
    let (flag, value) = match token.split_once('=') {
        Some((flag, value)) => (flag, Some(value)),
        None => (token, None),
    };

    let (_, long) = LEGACY_SHORT_FLAGS.iter().find(|(short, _)| *short == flag)?;
    Some(match value {
        Some(value) => format!("{}={}", long, value),
        None => long.to_string(),
    })
}
