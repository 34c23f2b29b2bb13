//! Error types for the invex-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the invex library.
#[derive(Error, Debug)]
pub enum InvexError {
    /// Text-source collaborator error.
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised by text-producing collaborators.
///
/// Extraction itself cannot fail; a transcript with no recognizable fields
/// yields an empty result. These variants cover the upstream contract of
/// handing the engine one blob of transcribed text.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The input document was never supplied.
    #[error("no input document was provided: {}", .0.display())]
    MissingInput(PathBuf),

    /// Reading the stored transcript failed.
    #[error("failed to read transcript {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for the invex library.
pub type Result<T> = std::result::Result<T, InvexError>;
