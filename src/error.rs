use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for mvd operations.
#[derive(Error, Debug)]
pub enum MvdError {
    /// IO error from the terminal or a config file.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Serialization/deserialization error.
    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A line that does not parse into a known command with its arguments.
    #[error("Invalid input {0}, please try again or EXIT")]
    InvalidCommand(String),

    /// An explicitly requested config file does not exist.
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),
}

/// Result type alias for mvd operations.
pub type Result<T> = std::result::Result<T, MvdError>;
