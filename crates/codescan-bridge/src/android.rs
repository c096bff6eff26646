//! Android-style bridge: launches the vendor picker activity for a result.
//!
//! No internal state machine lives here; the OS activity stack owns the
//! scan UI lifecycle. The bridge holds the handler in a one-shot slot
//! keyed by the fixed request code, and the coordinator's guard provides
//! the re-entrancy rejection shared with the iOS bridge.

use crate::native::{ActivityLauncher, ActivityResult, PickerIntent};
use codescan_core::{OutcomeHandler, ScanOutcome, SymbologySet};
use codescan_runtime::HostDisplay;
use parking_lot::Mutex;
use std::sync::Arc;

/// Request code used when starting the vendor's picker activity.
pub const REQUEST_BARCODE_PICKER_ACTIVITY: i32 = 55;

/// Fraction of the camera preview the scanning band occupies.
const SCANNING_AREA_HEIGHT: f32 = 0.1;

/// Bridge to the vendor's Android picker activity.
pub struct AndroidScanBridge {
    launcher: Arc<dyn ActivityLauncher>,
    display: Arc<dyn HostDisplay>,
}

impl AndroidScanBridge {
    /// Create the bridge around a resolvable activity launcher.
    pub fn new(launcher: Arc<dyn ActivityLauncher>, display: Arc<dyn HostDisplay>) -> Self {
        Self { launcher, display }
    }

    /// Whether scanning is available. True once the launcher resolved;
    /// the native library is assumed present if it did.
    pub fn is_supported(&self) -> bool {
        self.launcher.is_supported()
    }

    /// Launch the picker activity with the symbology set converted to the
    /// ascending `enabledSymbologies` array, restricted to a thin band.
    ///
    /// The activity result delivers `Completed` when a barcode was
    /// recognized and `Canceled` otherwise; vendor failures surface as
    /// cancellation on this platform. Results for other request codes are
    /// ignored and leave the handler armed.
    pub fn scan(&self, symbologies: &SymbologySet, handler: OutcomeHandler) {
        if let Some(key) = codescan_core::license_key() {
            self.launcher.set_app_key(&key);
        }

        let intent = PickerIntent {
            enabled_symbologies: symbologies.to_values(),
            restrict_scanning_area: true,
            scanning_area_height: SCANNING_AREA_HEIGHT,
        };
        tracing::debug!(symbologies = %symbologies, "starting picker activity");

        let slot = Arc::new(Mutex::new(Some(handler)));
        let display = self.display.clone();
        self.launcher.start_for_result(
            intent,
            REQUEST_BARCODE_PICKER_ACTIVITY,
            Box::new(move |result: ActivityResult| {
                if result.request_code != REQUEST_BARCODE_PICKER_ACTIVITY {
                    return;
                }
                // One-shot: a late duplicate result delivers nothing.
                let Some(handler) = slot.lock().take() else {
                    return;
                };

                let outcome = if result.barcode_recognized {
                    ScanOutcome::completed(
                        result.barcode_data.unwrap_or_default(),
                        result.barcode_symbology_name.unwrap_or_default(),
                    )
                } else {
                    ScanOutcome::Canceled
                };
                display.call_serially(Box::new(move || handler(outcome)));
            }),
        );
    }
}
