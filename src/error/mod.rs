//! Error handling for argument resolution

use std::fmt;
use thiserror::Error;

/// The five ways resolution can stop short of a configuration.
///
/// All of them are guided exits: the user gets a message explaining what to
/// change and the process exits with status 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminationKind {
    /// Version or format listing was requested
    Informational,
    /// No source path was given
    MissingInput,
    /// Quality, dimensions or color components out of bounds
    RangeViolation,
    /// Both background color forms were given
    ConflictingInput,
    /// Malformed hex background color
    FormatViolation,
}

impl TerminationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Informational => "informational",
            Self::MissingInput => "missing-input",
            Self::RangeViolation => "range-violation",
            Self::ConflictingInput => "conflicting-input",
            Self::FormatViolation => "format-violation",
        }
    }
}

impl fmt::Display for TerminationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Custom error types for optimize-images
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Version or supported-format listing; not a failure
    #[error("{0}")]
    Informational(String),

    /// Required input was not supplied
    #[error("{0}")]
    MissingInput(String),

    /// A value fell outside its allowed range
    #[error("{0}")]
    RangeViolation(String),

    /// Mutually exclusive options were combined
    #[error("{0}")]
    ConflictingInput(String),

    /// A value did not match its expected format
    #[error("{0}")]
    FormatViolation(String),

    /// Invalid runtime settings (.env file, environment variables)
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn informational<S: Into<String>>(message: S) -> Self {
        Self::Informational(message.into())
    }

    pub fn missing_input<S: Into<String>>(message: S) -> Self {
        Self::MissingInput(message.into())
    }

    pub fn range<S: Into<String>>(message: S) -> Self {
        Self::RangeViolation(message.into())
    }

    pub fn conflict<S: Into<String>>(message: S) -> Self {
        Self::ConflictingInput(message.into())
    }

    pub fn format<S: Into<String>>(message: S) -> Self {
        Self::FormatViolation(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Guided termination kind, or `None` for operational errors
    pub fn kind(&self) -> Option<TerminationKind> {
        match self {
            Self::Informational(_) => Some(TerminationKind::Informational),
            Self::MissingInput(_) => Some(TerminationKind::MissingInput),
            Self::RangeViolation(_) => Some(TerminationKind::RangeViolation),
            Self::ConflictingInput(_) => Some(TerminationKind::ConflictingInput),
            Self::FormatViolation(_) => Some(TerminationKind::FormatViolation),
            Self::Config(_) | Self::Io(_) | Self::Internal(_) => None,
        }
    }

    /// Get error category for logging and reporting
    pub fn category(&self) -> &'static str {
        match self {
            Self::Informational(_) => "INFO",
            Self::MissingInput(_) => "INPUT",
            Self::RangeViolation(_) => "RANGE",
            Self::ConflictingInput(_) => "CONFLICT",
            Self::FormatViolation(_) => "FORMAT",
            Self::Config(_) => "CONFIG",
            Self::Io(_) => "IO",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Whether this is a guided exit rather than an operational failure
    pub fn is_guidance(&self) -> bool {
        self.kind().is_some()
    }

    /// The bare user-facing message
    pub fn message(&self) -> &str {
        match self {
            Self::Informational(msg)
            | Self::MissingInput(msg)
            | Self::RangeViolation(msg)
            | Self::ConflictingInput(msg)
            | Self::FormatViolation(msg)
            | Self::Config(msg)
            | Self::Io(msg)
            | Self::Internal(msg) => msg,
        }
    }

    /// Get exit code for this error type
    ///
    /// Guided exits use status 0 so that wrapper scripts written against the
    /// historical behaviour keep working.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Informational(_)
            | Self::MissingInput(_)
            | Self::RangeViolation(_)
            | Self::ConflictingInput(_)
            | Self::FormatViolation(_) => 0,
            Self::Config(_) => 1,
            Self::Io(_) => 5,
            Self::Internal(_) => 99,
        }
    }

    /// Format error for console display with color coding
    pub fn format_for_console(&self, use_color: bool) -> String {
        if self.is_guidance() {
            // Guidance text is shown verbatim, only tinted
            let message = self.message();
            if !use_color {
                return message.to_string();
            }
            use colored::Colorize;
            return match self {
                Self::Informational(_) => message.to_string(),
                _ => message.yellow().to_string(),
            };
        }

        let category = self.category();
        let message = self.to_string();
        if use_color {
            use colored::Colorize;
            match self {
                Self::Internal(_) => {
                    format!("[{}] {}", category.bright_red().bold(), message.bright_red())
                }
                _ => format!("[{}] {}", category.red().bold(), message.red()),
            }
        } else {
            format!("[{}] {}", category, message)
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<dotenv::Error> for AppError {
    fn from(error: dotenv::Error) -> Self {
        Self::config(format!("Environment file error: {}", error))
    }
}

impl From<regex::Error> for AppError {
    fn from(error: regex::Error) -> Self {
        Self::internal(format!("Invalid pattern: {}", error))
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::internal(error.to_string())
    }
}

/// Custom Result type for the application
pub type Result<T> = std::result::Result<T, AppError>;
