//! Error types for the picker.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for picker operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading data or handing off to the multiplexer.
#[derive(Debug, Error)]
pub enum Error {
    /// The multiplexer binary could not be located on `PATH`.
    #[error("{name} binary not found in PATH")]
    BinaryNotFound {
        name: String,
        #[source]
        source: which::Error,
    },

    /// The layouts directory is missing or unreadable.
    #[error("cannot read layouts directory {}: {source}", path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Starting, reading from or waiting on a child process failed.
    #[error("{program} failed to run: {source}")]
    ProcessSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The interactive program loop failed.
    #[error("program error: {0}")]
    Program(String),

    /// Replacing the current process with the chosen command failed.
    #[error("failed to execute {}: {source}", program.display())]
    Exec {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file logger could not be set up.
    #[error("failed to initialize logging: {0}")]
    Logging(String),
}
