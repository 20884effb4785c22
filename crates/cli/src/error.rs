//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: core error (bad dimensions, bad color)
//! - 11: I/O error (PNG write, output directory)
//! - 12: input error (unknown palette, bad config JSON, unknown deep link)
//! - 13: serialization error

use gallery_glow_core::GlowError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// A core error that isn't the user's input or the filesystem.
    Core(GlowError),
    /// An I/O error (file write, snapshot rendering).
    Io(String),
    /// A user input error (bad palette name, bad JSON config).
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Core(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Core(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<GlowError> for CliError {
    fn from(e: GlowError) -> Self {
        match e {
            GlowError::Io(msg) => CliError::Io(msg),
            GlowError::UnknownPalette(_) | GlowError::InvalidConfig(_) => {
                CliError::Input(e.to_string())
            }
            other => CliError::Core(other),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
