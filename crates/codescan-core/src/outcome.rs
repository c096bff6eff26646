//! Scan outcome and handler types

use serde::{Deserialize, Serialize};

/// The single terminal result of one scan attempt.
///
/// Exactly one variant is delivered per scan request, exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum ScanOutcome {
    /// A code was recognized and the native picker dismissed.
    Completed {
        /// Decoded contents of the code
        contents: String,
        /// Symbology name reported by the vendor engine (e.g. "QR")
        format_name: String,
        /// Raw bytes of the code, when the vendor engine provides them
        #[serde(skip_serializing_if = "Option::is_none")]
        raw_bytes: Option<Vec<u8>>,
    },
    /// The user dismissed the picker without scanning.
    Canceled,
    /// The scan failed; see [`crate::ScanError`] for the code vocabulary.
    Error {
        /// Numeric error code
        code: u32,
        /// Descriptive message
        message: String,
    },
}

impl ScanOutcome {
    /// Build a `Completed` outcome without raw bytes.
    ///
    /// Neither platform bridge surfaces raw bytes from the vendor SDK, so
    /// this is the common constructor.
    pub fn completed(contents: impl Into<String>, format_name: impl Into<String>) -> Self {
        ScanOutcome::Completed {
            contents: contents.into(),
            format_name: format_name.into(),
            raw_bytes: None,
        }
    }

    /// True if this outcome carries a recognized code.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self, ScanOutcome::Completed { .. })
    }

    /// True if the user dismissed the picker.
    #[must_use]
    pub fn is_canceled(&self) -> bool {
        matches!(self, ScanOutcome::Canceled)
    }
}

/// A code recognized by the native engine, before it becomes an outcome.
///
/// This is also the shape of the modal buffer: a recognition that arrived
/// while the presentation animation was still running is parked as a
/// `RecognizedCode` until the animation completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizedCode {
    /// Decoded contents
    pub data: String,
    /// Vendor symbology name
    pub symbology_name: String,
}

impl RecognizedCode {
    /// Create a recognized code.
    pub fn new(data: impl Into<String>, symbology_name: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            symbology_name: symbology_name.into(),
        }
    }

    /// Convert into the `Completed` outcome delivered to the handler.
    #[must_use]
    pub fn into_outcome(self) -> ScanOutcome {
        ScanOutcome::completed(self.data, self.symbology_name)
    }
}

/// One-shot handler receiving the outcome of a single scan request.
///
/// Invoked at most once, on the host's UI-thread-equivalent context. The
/// pending-handler slot is cleared before invocation, so a handler may
/// safely start a new scan from inside itself.
pub type OutcomeHandler = Box<dyn FnOnce(ScanOutcome) + Send + 'static>;

#[cfg(test)]
#[path = "outcome/outcome_tests.rs"]
mod outcome_tests;
