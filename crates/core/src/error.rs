//! Error types for the Gallery Glow core.

use thiserror::Error;

/// Errors produced by palette lookup, configuration, and snapshot operations.
#[derive(Debug, Error)]
pub enum GlowError {
    /// A palette name or id did not name a concrete palette.
    #[error("unknown palette: {0}")]
    UnknownPalette(String),

    /// Width or height was zero, or too large for the target buffer.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A configuration value was out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Writing an image or other output failed.
    #[error("i/o error: {0}")]
    Io(String),
}
