//! Error types for ambrosia-core

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using ambrosia-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ambrosia-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// User-correctable input problem (empty title, short description)
    #[error("Validation error: {0}")]
    Validation(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The record has no file behind it
    #[error("Recipe has no backing file: {0}")]
    MissingBackingFile(String),

    /// A recipe file with the derived name already exists
    #[error("Recipe file already exists: {}", .0.display())]
    Conflict(PathBuf),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error should be shown to the user as an input problem.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
