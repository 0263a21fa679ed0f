//! Optimize Images
//!
//! Argument resolution layer of a command-line image size reducer. Raw
//! command-line options are turned into a single validated [`Configuration`]
//! that the image-processing pipeline consumes, or into a guided termination
//! carrying a user-facing message.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod pipeline;

// Re-export commonly used types
pub use config::{ConfigResolver, display_config_summary};
pub use error::{AppError, Result, TerminationKind};
pub use models::{Configuration, RawArguments, Rgb};
pub use pipeline::{ImagePipeline, SummaryPipeline};

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const BUILD_TIME: &str = env!("BUILD_TIME");
pub const GIT_COMMIT: Option<&str> = option_env!("GIT_COMMIT");

/// Default option values
pub mod defaults {
    use crate::models::Rgb;

    pub const DEFAULT_QUALITY: i64 = 70;
    pub const DEFAULT_MAX_COLORS: i64 = 256;
    pub const DEFAULT_MAX_WIDTH: i64 = 0;
    pub const DEFAULT_MAX_HEIGHT: i64 = 0;
    /// Opaque white, used when no background color is given
    pub const DEFAULT_BACKGROUND: Rgb = Rgb::new(255, 255, 255);
    /// File extensions the pipeline will pick up
    pub const SUPPORTED_FORMATS: &[&str] = &["png", "jpg", "jpeg"];
}
