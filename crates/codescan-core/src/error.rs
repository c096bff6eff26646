//! Error types for scan operations

use crate::outcome::ScanOutcome;
use thiserror::Error;

/// Error code delivered when a scan is rejected because one is already
/// in progress.
pub const ERR_SCAN_IN_PROGRESS: u32 = 1;

/// Result type alias for scan operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Error type for scan operations
#[derive(Error, Debug, Clone)]
pub enum ScanError {
    /// Exception while extracting a recognized code's fields. Delivered
    /// as an outcome, never allowed to crash the caller.
    #[error("{0}")]
    RecognitionFault(String),

    /// Re-entrant scan attempt while one is active
    #[error("Scan already in progress")]
    ScanInProgress,

    /// Neither platform bridge is available on this runtime
    #[error("scanning is not supported on this platform")]
    UnsupportedPlatform,

    /// The bridge failed to initialize the native picker
    #[error("failed to create native picker: {0}")]
    NativeConstructionFailure(String),

    /// Missing or partially-missing vendor binaries
    #[error("installation failed: {0}")]
    InstallationFailure(String),
}

impl ScanError {
    /// Returns the numeric code carried by the `Error` outcome variant.
    ///
    /// Recognition faults use code 0 and re-entrancy uses
    /// [`ERR_SCAN_IN_PROGRESS`], matching the vendor bridge contract.
    pub fn error_code(&self) -> u32 {
        match self {
            ScanError::RecognitionFault(_) => 0,
            ScanError::ScanInProgress => ERR_SCAN_IN_PROGRESS,
            ScanError::UnsupportedPlatform => 2,
            ScanError::NativeConstructionFailure(_) => 3,
            ScanError::InstallationFailure(_) => 4,
        }
    }

    /// Create an error from a code and message (for callers reconstructing
    /// an error from a delivered outcome)
    pub fn from_code(code: u32, message: String) -> Self {
        match code {
            1 => ScanError::ScanInProgress,
            2 => ScanError::UnsupportedPlatform,
            3 => ScanError::NativeConstructionFailure(message),
            4 => ScanError::InstallationFailure(message),
            _ => ScanError::RecognitionFault(message),
        }
    }

    /// Convert this error into the `Error` outcome delivered to a handler.
    pub fn into_outcome(self) -> ScanOutcome {
        ScanOutcome::Error {
            code: self.error_code(),
            message: self.to_string(),
        }
    }
}
