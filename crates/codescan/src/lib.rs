//! # codescan
//!
//! A portable barcode-scan bridge over the Scandit SDK.
//!
//! codescan gives a cross-platform host application one scanning API and
//! marshals it onto whichever vendor integration the platform provides:
//! the iOS-style barcode picker (presented modally, driven by a delegate)
//! or the Android-style picker activity (launched for a result). The
//! platform interop layer implements a handful of narrow traits; everything
//! else (the single-scan guard, the presentation-race buffering, the
//! one-outcome-per-scan contract) lives here.
//!
//! ## Quick Start
//!
//! ```no_run
//! use codescan::prelude::*;
//!
//! # fn demo(services: PlatformServices) {
//! codescan::set_license_key("your-scandit-app-key");
//! let scanner = CodeScanner::init(services);
//!
//! if scanner.is_supported() {
//!     scanner.scan_qr_code(Box::new(|outcome| match outcome {
//!         ScanOutcome::Completed { contents, format_name, .. } => {
//!             println!("scanned {contents} ({format_name})");
//!         }
//!         ScanOutcome::Canceled => println!("scan canceled"),
//!         ScanOutcome::Error { code, message } => {
//!             eprintln!("scan failed ({code}): {message}");
//!         }
//!     }));
//! }
//! # }
//! ```
//!
//! ## Crates
//!
//! - `codescan-core` - symbologies, outcomes, errors, the license store
//! - `codescan-runtime` - serial dispatch contexts and the host display seam
//! - `codescan-bridge` - the coordinator and both platform bridges
//! - `codescan-installer` - vendor artifact extraction for project trees

pub use codescan_bridge::{
    ActivityLauncher, ActivityResult, AndroidScanBridge, CameraFacing, CameraSwitchVisibility,
    CancelStatus, CodeScanner, IosScanBridge, NativeInstaller, NativePicker, OverlayConfig,
    PickerDelegate, PickerFactory, PickerIntent, PlatformServices, ScanSession, ScanSettings,
    native,
};
pub use codescan_core::{
    ERR_SCAN_IN_PROGRESS, OutcomeHandler, RecognizedCode, ScanError, ScanOutcome, ScanResult,
    Symbology, SymbologySet, debug_enabled, license_key, set_debug, set_license_key,
};
pub use codescan_installer::{HostInstaller, InstallReport, InstallerError, ScanditInstaller};
pub use codescan_runtime::{HeadlessDisplay, HostDisplay, SerialQueue};

pub use serde;
pub use serde_json;
pub use tracing;

/// Prelude module for convenient imports.
///
/// Use `use codescan::prelude::*;` to import commonly used types.
pub mod prelude {
    pub use crate::{
        CodeScanner, HostDisplay, OutcomeHandler, PlatformServices, ScanError, ScanOutcome,
        ScanResult, Symbology, SymbologySet, set_license_key,
    };

    // Serde derives (for host-side settings and report types)
    pub use serde::{Deserialize, Serialize};
}
