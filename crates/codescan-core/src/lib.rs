//! codescan-core - Portable types for the codescan barcode-scan bridge
//!
//! This crate provides the platform-independent vocabulary shared by the
//! coordinator and both platform bridges:
//! - [`Symbology`] and [`SymbologySet`] for selecting barcode formats
//! - [`ScanOutcome`] and [`OutcomeHandler`] for the one-shot result contract
//! - [`ScanError`] for the bridge error taxonomy
//! - the process-wide license key store ([`set_license_key`])

mod error;
mod license;
mod outcome;
mod symbology;

pub use error::{ERR_SCAN_IN_PROGRESS, ScanError, ScanResult};
pub use license::{LicenseStore, debug_enabled, license_key, set_debug, set_license_key};
pub use outcome::{OutcomeHandler, RecognizedCode, ScanOutcome};
pub use symbology::{Symbology, SymbologySet};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ERR_SCAN_IN_PROGRESS, OutcomeHandler, RecognizedCode, ScanError, ScanOutcome, ScanResult,
        Symbology, SymbologySet, set_license_key,
    };
}
