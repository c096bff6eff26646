//! Native capability interfaces
//!
//! The only seams to the vendor SDK's platform object graphs. The host's
//! native-interop layer implements these traits per platform; everything
//! selector- or intent-shaped stays behind them. Tests implement them with
//! in-process fakes.

use codescan_core::{RecognizedCode, ScanResult, SymbologySet};
use std::sync::Arc;

/// Camera the picker prefers when it opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraFacing {
    /// Rear-facing camera
    #[default]
    Back,
    /// Front-facing camera
    Front,
}

/// When the overlay shows its camera-switch control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraSwitchVisibility {
    /// Never show the control
    Never,
    /// Show only on tablets
    OnTablet,
    /// Always show the control
    Always,
}

/// Settings applied to the native picker for one scan cycle.
#[derive(Debug, Clone, Default)]
pub struct ScanSettings {
    /// Preferred camera
    pub camera_facing: CameraFacing,
    /// Symbologies to enable on the engine
    pub enabled_symbologies: SymbologySet,
}

impl ScanSettings {
    /// The vendor's default settings: rear camera, no symbologies enabled.
    /// Used for the initial picker allocation before any scan runs.
    #[must_use]
    pub fn default_settings() -> Self {
        Self::default()
    }

    /// Settings with the given symbologies pre-enabled.
    #[must_use]
    pub fn with_symbologies(enabled: SymbologySet) -> Self {
        Self {
            camera_facing: CameraFacing::Back,
            enabled_symbologies: enabled,
        }
    }

    /// Enable or disable a single symbology.
    pub fn set_symbology_enabled(&mut self, symbology: codescan_core::Symbology, enabled: bool) {
        if enabled {
            self.enabled_symbologies.insert(symbology);
        } else {
            self.enabled_symbologies.remove(symbology);
        }
    }
}

/// Overlay configuration applied once at picker construction.
#[derive(Debug, Clone, Copy)]
pub struct OverlayConfig {
    /// Show the overlay toolbar (hosts the cancel button)
    pub show_toolbar: bool,
    /// Camera-switch control visibility
    pub camera_switch: CameraSwitchVisibility,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            show_toolbar: true,
            camera_switch: CameraSwitchVisibility::Always,
        }
    }
}

/// One recognition event from the native engine.
///
/// Extraction can fault (the vendor session may be empty or its fields
/// unreadable); the bridge converts such faults into an `Error` outcome
/// instead of letting them propagate.
pub trait ScanSession {
    /// The first newly recognized code in this session.
    fn newly_recognized(&self) -> ScanResult<RecognizedCode>;
}

/// Status value handed to the cancel delegate by the native overlay.
/// Opaque to the bridge; carried for logging only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CancelStatus(pub i32);

/// Callback slots installed on the native picker's delegate object.
///
/// Each slot fires on the native layer's own calling context, an arbitrary
/// background thread; the bridge re-enters the native main context before
/// touching the picker.
pub struct PickerDelegate {
    /// Fires whenever the vendor engine detects a code
    pub on_recognized: Box<dyn Fn(&dyn ScanSession) + Send + Sync>,
    /// Fires when the user dismisses the picker without a scan
    pub on_cancel: Box<dyn Fn(CancelStatus) + Send + Sync>,
}

/// Narrow capability interface over the vendor's native picker object.
///
/// One implementation per platform interop layer; all native selector
/// literals live inside that implementation. Lifecycle calls
/// (`start_scanning`, `present`, ...) must be made on the native main
/// context; the bridge guarantees that.
pub trait NativePicker: Send + Sync {
    /// Apply a fresh settings object; `completion` fires when the engine
    /// has taken them.
    fn apply_settings(&self, settings: &ScanSettings, completion: Box<dyn FnOnce() + Send>);

    /// Start the scanning engine.
    fn start_scanning(&self);

    /// Stop the scanning engine.
    fn stop_scanning(&self);

    /// Present the picker modally; `completion` fires when the
    /// presentation animation has finished.
    fn present(&self, animated: bool, completion: Box<dyn FnOnce() + Send>);

    /// Dismiss the presented picker.
    fn dismiss(&self, animated: bool);

    /// Configure the picker's overlay controller.
    fn configure_overlay(&self, overlay: &OverlayConfig);

    /// Install the delegate callback slots.
    fn set_delegate(&self, delegate: PickerDelegate);

    /// Release the underlying native object. Called once, when the bridge
    /// owning this picker is discarded.
    fn release(&self);
}

/// Creates native pickers on platforms where the vendor SDK is linked in.
pub trait PickerFactory: Send + Sync {
    /// Whether the native interop runtime is available here at all.
    fn is_supported(&self) -> bool;

    /// Set the vendor license key and allocate a picker with the given
    /// settings. Runs on the native main context.
    fn create_picker(
        &self,
        license_key: &str,
        settings: &ScanSettings,
    ) -> ScanResult<Arc<dyn NativePicker>>;
}

/// Intent extras for the vendor's Android picker activity.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerIntent {
    /// Symbology bit-flag values, ascending
    pub enabled_symbologies: Vec<u32>,
    /// Restrict recognition to a horizontal band
    pub restrict_scanning_area: bool,
    /// Height of the scanning band as a fraction of the preview
    pub scanning_area_height: f32,
}

/// Result delivered by the vendor's Android picker activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityResult {
    /// Request code the activity was started with
    pub request_code: i32,
    /// Platform result code (unused by the bridge beyond logging)
    pub result_code: i32,
    /// Whether a barcode was recognized before the activity closed
    pub barcode_recognized: bool,
    /// Decoded contents, when recognized
    pub barcode_data: Option<String>,
    /// Vendor symbology name, when recognized
    pub barcode_symbology_name: Option<String>,
}

/// Launches the vendor picker as a sub-activity and reports its result.
pub trait ActivityLauncher: Send + Sync {
    /// Always true once this launcher is resolvable at runtime; the native
    /// library is assumed present if the class loaded.
    fn is_supported(&self) -> bool;

    /// Set the vendor license key on the SDK.
    fn set_app_key(&self, license_key: &str);

    /// Start the picker activity for a result. The listener may fire for
    /// unrelated activities too; the bridge filters by request code.
    fn start_for_result(
        &self,
        intent: PickerIntent,
        request_code: i32,
        listener: Box<dyn Fn(ActivityResult) + Send + Sync>,
    );
}

/// Installer collaborator: copies vendor binaries into the native build
/// tree on desktop/simulator runs. Invoked once, outside the scan path.
pub trait NativeInstaller: Send + Sync {
    /// Whether this environment supports installation at all.
    fn is_supported(&self) -> bool;

    /// Locate and extract the vendor artifacts. Errors here are the one
    /// path allowed to surface as a hard failure; they occur only in the
    /// developer-facing setup flow.
    fn extract_native_files(&self) -> ScanResult<()>;
}
