//! Data models for raw options and the resolved configuration

pub mod config;
pub mod raw;

// Re-export main model types
pub use config::{Configuration, Rgb};
pub use raw::RawArguments;
