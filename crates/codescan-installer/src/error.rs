//! Error types for installer operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while extracting vendor artifacts.
#[derive(Debug, Error)]
pub enum InstallerError {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The framework bundle exists but has no Headers directory.
    #[error("Framework has no Headers directory: {}", .0.display())]
    MissingHeaders(PathBuf),

    /// The framework bundle exists but has no binary inside it.
    #[error("Framework binary not found: {}", .0.display())]
    MissingFrameworkBinary(PathBuf),
}
