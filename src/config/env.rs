//! Runtime settings from the environment and an optional `.env` file
//!
//! These only steer diagnostics (log level, log format, colors). They never
//! feed into the resolved [`crate::Configuration`].

use crate::error::{AppError, Result};
use crate::logging::{LogFormat, LogLevel};
use std::path::Path;

pub const LOG_LEVEL_VAR: &str = "OPTIMIZE_IMAGES_LOG_LEVEL";
pub const LOG_FORMAT_VAR: &str = "OPTIMIZE_IMAGES_LOG_FORMAT";
pub const NO_COLOR_VAR: &str = "NO_COLOR";

/// Diagnostic settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeSettings {
    pub log_level: LogLevel,
    pub log_format: LogFormat,
    pub enable_color: bool,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            log_format: LogFormat::Console,
            enable_color: true,
        }
    }
}

impl RuntimeSettings {
    /// Build settings from a variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(level) = lookup(LOG_LEVEL_VAR).filter(|v| !v.trim().is_empty()) {
            settings.log_level = level
                .parse()
                .map_err(|_| AppError::config(format!("Invalid {} value '{}'", LOG_LEVEL_VAR, level)))?;
        }

        if let Some(format) = lookup(LOG_FORMAT_VAR).filter(|v| !v.trim().is_empty()) {
            settings.log_format = format
                .parse()
                .map_err(|_| AppError::config(format!("Invalid {} value '{}'", LOG_FORMAT_VAR, format)))?;
        }

        // Any value, even empty, counts per the NO_COLOR convention
        if lookup(NO_COLOR_VAR).is_some() {
            settings.enable_color = false;
        }

        Ok(settings)
    }

    /// Build settings from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

/// Environment variable configuration manager
pub struct EnvManager;

impl EnvManager {
    /// Load `.env` from the current directory if present
    pub fn load_env_file() -> Result<bool> {
        Self::load_env_file_from(Path::new(".env"))
    }

    /// Load the given env file if it exists. Returns whether a file was read.
    ///
    /// Variables already present in the process environment win.
    pub fn load_env_file_from(path: &Path) -> Result<bool> {
        if !path.exists() {
            return Ok(false);
        }

        dotenv::from_path(path)
            .map_err(|e| AppError::config(format!("Failed to load {}: {}", path.display(), e)))?;
        Ok(true)
    }

    /// Load `.env` and read the runtime settings
    pub fn runtime_settings() -> Result<RuntimeSettings> {
        Self::load_env_file()?;
        RuntimeSettings::from_env()
    }
}
