//! codescan-bridge - platform bridges and the scan coordinator
//!
//! This crate wires the portable scanning API to the vendor SDK:
//! - [`CodeScanner`] - the process-wide coordinator and public entry point
//! - [`IosScanBridge`] - picker lifecycle, presentation buffering, delegate
//!   marshaling for the iOS-style picker
//! - [`AndroidScanBridge`] - activity launch and result filtering for the
//!   Android-style picker activity
//! - [`native`] - the traits a host embedding implements
//!   ([`PickerFactory`], [`ActivityLauncher`], [`NativeInstaller`])
//!
//! The coordinator owns the single-scan guard: at most one scan is pending
//! process-wide, and every handler receives exactly one outcome on the
//! interactive thread.

pub mod android;
pub mod coordinator;
pub mod ios;
pub mod native;
pub mod phase;

pub use android::{AndroidScanBridge, REQUEST_BARCODE_PICKER_ACTIVITY};
pub use coordinator::{CodeScanner, PlatformServices, SHOW_INSTALLED_MESSAGE_PROPERTY};
pub use ios::IosScanBridge;
pub use native::{
    ActivityLauncher, ActivityResult, CameraFacing, CameraSwitchVisibility, CancelStatus,
    NativeInstaller, NativePicker, OverlayConfig, PickerDelegate, PickerFactory, PickerIntent,
    ScanSession, ScanSettings,
};
pub use phase::ScanPhase;

// Re-export the core vocabulary so embedders need only this crate.
pub use codescan_core::{
    ERR_SCAN_IN_PROGRESS, OutcomeHandler, RecognizedCode, ScanError, ScanOutcome, ScanResult,
    Symbology, SymbologySet,
};
pub use codescan_runtime::{HeadlessDisplay, HostDisplay};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{CodeScanner, PlatformServices};
    pub use crate::native::{ActivityLauncher, NativeInstaller, PickerFactory};
    pub use codescan_core::prelude::*;
    pub use codescan_runtime::prelude::*;
}
