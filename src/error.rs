//! Error types for teststat

use std::io;
use thiserror::Error;

/// Result type alias for teststat operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for teststat
///
/// The classification and rendering engine itself never fails; these errors
/// come from loading configuration, reading outcome records, or writing the
/// report to its sink.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file error or invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An outcome record could not be decoded.
    #[error("Parse error: {0}")]
    Parse(String),

    /// I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
