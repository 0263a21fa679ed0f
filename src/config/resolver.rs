//! Resolution of raw command-line options into a validated configuration

use crate::{
    config::color::{rgb_from_components, HexColorParser},
    config::path::{expand_user, HomeDirProvider, SystemHomeDir},
    defaults,
    error::{AppError, Result},
    log_debug,
    logging::Logger,
    models::{Configuration, RawArguments},
};

pub const MISSING_PATH_MESSAGE: &str = "Please specify the path of the image or folder to process.";
pub const QUALITY_RANGE_MESSAGE: &str = "Please specify an integer quality value between 1 and 100.";
pub const DIMENSIONS_MESSAGE: &str = "Please specify image dimensions as positive integers.";
pub const DUPLICATE_BACKGROUND_MESSAGE: &str = "Background color should be entered only once.";
pub const SUPPORTED_FORMATS_PREFIX: &str = "These are the image formats currently supported \
(please note that any files without one of these file extensions will be ignored):";

/// Turns [`RawArguments`] into a [`Configuration`] or a guided termination.
///
/// Checks run in a fixed order and the first failing one decides the
/// outcome. Apart from the home-directory lookup used for `~` expansion,
/// resolution is a pure function of its input.
pub struct ConfigResolver {
    supported_formats: Vec<String>,
    home: Box<dyn HomeDirProvider>,
    hex_parser: HexColorParser,
    logger: Logger,
}

impl ConfigResolver {
    /// Create a resolver that reports the given file extensions
    pub fn new<I, S>(supported_formats: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            supported_formats: supported_formats.into_iter().map(Into::into).collect(),
            home: Box::new(SystemHomeDir),
            hex_parser: HexColorParser::new()?,
            logger: Logger::disabled(),
        })
    }

    /// Resolver using the built-in format list
    pub fn with_defaults() -> Result<Self> {
        Self::new(defaults::SUPPORTED_FORMATS.iter().copied())
    }

    /// Replace the home directory source used for `~` expansion
    pub fn with_home_dir<H: HomeDirProvider + 'static>(mut self, home: H) -> Self {
        self.home = Box::new(home);
        self
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    pub fn supported_formats(&self) -> &[String] {
        &self.supported_formats
    }

    /// Resolve raw options into a configuration
    pub fn resolve(&self, raw: &RawArguments) -> Result<Configuration> {
        let result = self.resolve_inner(raw);
        match &result {
            Ok(config) => {
                self.logger
                    .debug("Configuration resolved")
                    .field("source_path", config.source_path.display().to_string())
                    .field("quality", config.quality)
                    .field("background_color", config.background_color.to_hex())
                    .log();
            }
            Err(e) => {
                self.logger.debug("Resolution stopped").error_info(e).log();
            }
        }
        result
    }

    fn resolve_inner(&self, raw: &RawArguments) -> Result<Configuration> {
        if raw.show_version {
            return Err(AppError::informational(crate::VERSION));
        }

        if raw.show_supported_formats {
            return Err(AppError::informational(self.supported_formats_message()));
        }

        let path = match raw.path.as_deref() {
            Some(path) if !path.is_empty() => path,
            _ => return Err(AppError::missing_input(MISSING_PATH_MESSAGE)),
        };
        let source_path = expand_user(path, &*self.home);
        log_debug!(self.logger, "Expanded source path '{}' to {}", path, source_path.display());

        let recursive = !raw.no_recursion;

        if !(1..=100).contains(&raw.quality) {
            return Err(AppError::range(QUALITY_RANGE_MESSAGE));
        }
        let quality = raw.quality as u8;

        if raw.max_width < 0 || raw.max_height < 0 {
            return Err(AppError::range(DIMENSIONS_MESSAGE));
        }

        // An empty hex value counts as not given
        let hex = raw.bg_color_hex.as_deref().filter(|hex| !hex.is_empty());
        let background_color = match (&raw.bg_color_rgb, hex) {
            (Some(_), Some(_)) => return Err(AppError::conflict(DUPLICATE_BACKGROUND_MESSAGE)),
            (None, None) => defaults::DEFAULT_BACKGROUND,
            (Some(components), None) => {
                log_debug!(self.logger, "Background color from components {:?}", components);
                rgb_from_components(*components)?
            }
            (None, Some(hex)) => {
                log_debug!(self.logger, "Background color from hex '{}'", hex);
                self.hex_parser.parse(hex)?
            }
        };

        Ok(Configuration {
            source_path,
            recursive,
            quality,
            reduce_colors: raw.reduce_colors,
            max_colors: raw.max_colors,
            max_width: raw.max_width as u64,
            max_height: raw.max_height as u64,
            keep_exif: raw.keep_exif,
            convert_big_png_to_jpeg: raw.convert_big_png_to_jpeg,
            force_delete_png_after_convert: raw.force_delete_png_after_convert,
            background_color,
        })
    }

    /// Uppercased, comma-joined format listing
    pub fn supported_formats_message(&self) -> String {
        let formats = self
            .supported_formats
            .iter()
            .map(|f| f.trim().to_uppercase())
            .collect::<Vec<_>>()
            .join(", ");
        format!("{} {}", SUPPORTED_FORMATS_PREFIX, formats)
    }
}

/// Convenience function to resolve with the default resolver
pub fn resolve(raw: &RawArguments) -> Result<Configuration> {
    ConfigResolver::with_defaults()?.resolve(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::color::{COMPONENT_RANGE_MESSAGE, HEX_FORMAT_MESSAGE};
    use crate::config::path::FixedHomeDir;
    use crate::error::TerminationKind;
    use crate::models::Rgb;
    use proptest::prelude::*;
    use std::path::PathBuf;

    fn resolver() -> ConfigResolver {
        ConfigResolver::with_defaults()
            .unwrap()
            .with_home_dir(FixedHomeDir(PathBuf::from("/home/tester")))
    }

    fn raw() -> RawArguments {
        RawArguments::with_path("/data/images")
    }

    fn expect_termination(raw: &RawArguments) -> AppError {
        match resolver().resolve(raw) {
            Ok(config) => panic!("expected termination, got {:?}", config),
            Err(e) => e,
        }
    }

    #[test]
    fn test_defaults_resolve() {
        let config = resolver().resolve(&raw()).unwrap();

        assert_eq!(config.source_path, PathBuf::from("/data/images"));
        assert!(config.recursive);
        assert_eq!(config.quality, 70);
        assert!(!config.reduce_colors);
        assert_eq!(config.max_colors, 256);
        assert_eq!(config.max_width, 0);
        assert_eq!(config.max_height, 0);
        assert!(!config.keep_exif);
        assert!(!config.convert_big_png_to_jpeg);
        assert!(!config.force_delete_png_after_convert);
        assert_eq!(config.background_color, Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_flags_pass_through() {
        let raw = RawArguments {
            no_recursion: true,
            keep_exif: true,
            reduce_colors: true,
            max_colors: 64,
            max_width: 1920,
            max_height: 1080,
            quality: 85,
            convert_big_png_to_jpeg: true,
            force_delete_png_after_convert: true,
            ..raw()
        };
        let config = resolver().resolve(&raw).unwrap();

        assert!(!config.recursive);
        assert!(config.keep_exif);
        assert!(config.reduce_colors);
        assert_eq!(config.max_colors, 64);
        assert_eq!(config.max_width, 1920);
        assert_eq!(config.max_height, 1080);
        assert_eq!(config.quality, 85);
        assert!(config.convert_big_png_to_jpeg);
        assert!(config.force_delete_png_after_convert);
        assert!(config.resize_enabled());
    }

    #[test]
    fn test_version_comes_first() {
        let raw = RawArguments {
            show_version: true,
            show_supported_formats: true,
            path: None,
            ..RawArguments::default()
        };
        let err = expect_termination(&raw);
        assert_eq!(err.kind(), Some(TerminationKind::Informational));
        assert_eq!(err.message(), crate::VERSION);
    }

    #[test]
    fn test_supported_formats_skip_other_checks() {
        let raw = RawArguments {
            show_supported_formats: true,
            quality: 0,
            path: None,
            ..RawArguments::default()
        };
        let err = expect_termination(&raw);
        assert_eq!(err.kind(), Some(TerminationKind::Informational));
        assert!(err.message().starts_with(SUPPORTED_FORMATS_PREFIX));
        assert!(err.message().ends_with("PNG, JPG, JPEG"));
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn test_custom_format_list() {
        let resolver = ConfigResolver::new(["png", " webp "]).unwrap();
        assert_eq!(resolver.supported_formats().len(), 2);
        assert!(resolver.supported_formats_message().ends_with("PNG, WEBP"));
    }

    #[test]
    fn test_missing_path() {
        for path in [None, Some(String::new())] {
            let raw = RawArguments { path, ..RawArguments::default() };
            let err = expect_termination(&raw);
            assert_eq!(err.kind(), Some(TerminationKind::MissingInput));
            assert_eq!(err.message(), MISSING_PATH_MESSAGE);
            assert_eq!(err.exit_code(), 0);
        }
    }

    #[test]
    fn test_missing_path_precedes_range_checks() {
        let raw = RawArguments { quality: 500, ..RawArguments::default() };
        assert_eq!(expect_termination(&raw).kind(), Some(TerminationKind::MissingInput));
    }

    #[test]
    fn test_tilde_expansion() {
        let config = resolver().resolve(&RawArguments::with_path("~/images")).unwrap();
        assert_eq!(config.source_path, PathBuf::from("/home/tester/images"));
    }

    #[test]
    fn test_quality_bounds() {
        for quality in [0, 101, -5, i64::MAX] {
            let err = expect_termination(&RawArguments { quality, ..raw() });
            assert_eq!(err.kind(), Some(TerminationKind::RangeViolation));
            assert_eq!(err.message(), QUALITY_RANGE_MESSAGE);
        }

        for quality in [1, 50, 100] {
            let config = resolver().resolve(&RawArguments { quality, ..raw() }).unwrap();
            assert_eq!(i64::from(config.quality), quality);
        }
    }

    #[test]
    fn test_negative_dimensions() {
        for (max_width, max_height) in [(-1, 0), (0, -1), (-10, -10)] {
            let err = expect_termination(&RawArguments { max_width, max_height, ..raw() });
            assert_eq!(err.kind(), Some(TerminationKind::RangeViolation));
            assert_eq!(err.message(), DIMENSIONS_MESSAGE);
        }

        let config = resolver().resolve(&RawArguments { max_width: 0, max_height: 0, ..raw() }).unwrap();
        assert!(!config.resize_enabled());
    }

    #[test]
    fn test_quality_checked_before_dimensions() {
        let err = expect_termination(&RawArguments { quality: 0, max_width: -1, ..raw() });
        assert_eq!(err.message(), QUALITY_RANGE_MESSAGE);
    }

    #[test]
    fn test_both_background_forms_conflict() {
        let err = expect_termination(&RawArguments {
            bg_color_rgb: Some([10, 20, 30]),
            bg_color_hex: Some("0A141E".to_string()),
            ..raw()
        });
        assert_eq!(err.kind(), Some(TerminationKind::ConflictingInput));
        assert_eq!(err.message(), DUPLICATE_BACKGROUND_MESSAGE);
    }

    #[test]
    fn test_conflict_reported_before_component_range() {
        let err = expect_termination(&RawArguments {
            bg_color_rgb: Some([300, 0, 0]),
            bg_color_hex: Some("zzzzzz".to_string()),
            ..raw()
        });
        assert_eq!(err.kind(), Some(TerminationKind::ConflictingInput));
    }

    #[test]
    fn test_rgb_background() {
        let config = resolver()
            .resolve(&RawArguments { bg_color_rgb: Some([10, 20, 30]), ..raw() })
            .unwrap();
        assert_eq!(config.background_color, Rgb::new(10, 20, 30));
    }

    #[test]
    fn test_rgb_background_out_of_range() {
        for components in [[300, 0, 0], [0, 0, -1]] {
            let err = expect_termination(&RawArguments { bg_color_rgb: Some(components), ..raw() });
            assert_eq!(err.kind(), Some(TerminationKind::RangeViolation));
            assert_eq!(err.message(), COMPONENT_RANGE_MESSAGE);
        }
    }

    #[test]
    fn test_hex_background() {
        let config = resolver()
            .resolve(&RawArguments { bg_color_hex: Some("FF0000".to_string()), ..raw() })
            .unwrap();
        assert_eq!(config.background_color, Rgb::new(255, 0, 0));

        let config = resolver()
            .resolve(&RawArguments { bg_color_hex: Some("#0f0".to_string()), ..raw() })
            .unwrap();
        assert_eq!(config.background_color, Rgb::new(0, 255, 0));
    }

    #[test]
    fn test_empty_hex_background_is_ignored() {
        let config = resolver()
            .resolve(&RawArguments { bg_color_hex: Some(String::new()), ..raw() })
            .unwrap();
        assert_eq!(config.background_color, Rgb::new(255, 255, 255));

        let config = resolver()
            .resolve(&RawArguments {
                bg_color_rgb: Some([1, 2, 3]),
                bg_color_hex: Some(String::new()),
                ..raw()
            })
            .unwrap();
        assert_eq!(config.background_color, Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_invalid_hex_background() {
        let err = expect_termination(&RawArguments { bg_color_hex: Some("zzzzzz".to_string()), ..raw() });
        assert_eq!(err.kind(), Some(TerminationKind::FormatViolation));
        assert_eq!(err.message(), HEX_FORMAT_MESSAGE);
    }

    #[test]
    fn test_module_level_resolve() {
        let config = resolve(&RawArguments::with_path("/tmp/a.png")).unwrap();
        assert_eq!(config.source_path, PathBuf::from("/tmp/a.png"));
    }

    fn arb_raw() -> impl Strategy<Value = RawArguments> {
        (
            -10i64..120,
            -5i64..5000,
            -5i64..5000,
            proptest::option::of(proptest::array::uniform3(-20i64..300)),
            any::<bool>(),
            any::<bool>(),
        )
            .prop_map(|(quality, max_width, max_height, bg_color_rgb, no_recursion, keep_exif)| {
                RawArguments {
                    quality,
                    max_width,
                    max_height,
                    bg_color_rgb,
                    no_recursion,
                    keep_exif,
                    ..RawArguments::with_path("~/photos")
                }
            })
    }

    proptest! {
        #[test]
        fn prop_resolved_fields_respect_ranges(raw in arb_raw()) {
            if let Ok(config) = resolver().resolve(&raw) {
                prop_assert!((1..=100).contains(&config.quality));
                prop_assert_eq!(config.max_width as i64, raw.max_width);
                prop_assert_eq!(config.max_height as i64, raw.max_height);
                prop_assert_eq!(config.recursive, !raw.no_recursion);
                if let Some([r, g, b]) = raw.bg_color_rgb {
                    prop_assert_eq!(config.background_color.as_tuple(), (r as u8, g as u8, b as u8));
                }
            }
        }

        #[test]
        fn prop_out_of_range_quality_always_terminates(quality in prop_oneof![i64::MIN..1i64, 101i64..i64::MAX]) {
            let err = resolver().resolve(&RawArguments { quality, ..raw() }).unwrap_err();
            prop_assert_eq!(err.kind(), Some(TerminationKind::RangeViolation));
        }

        #[test]
        fn prop_resolution_is_idempotent(raw in arb_raw()) {
            let resolver = resolver();
            prop_assert_eq!(resolver.resolve(&raw), resolver.resolve(&raw));
        }
    }
}
