//! Portable scan coordinator
//!
//! [`CodeScanner`] is the single entry point applications use. It detects
//! which platform bridge is available, owns the shared re-entrancy guard,
//! delivers every outcome on the interactive thread, and asks the current
//! form to repaint afterwards (the native overlay took over the screen).

use crate::android::AndroidScanBridge;
use crate::ios::IosScanBridge;
use crate::native::{ActivityLauncher, NativeInstaller, PickerFactory};
use codescan_core::{OutcomeHandler, ScanError, ScanResult, SymbologySet};
use codescan_runtime::{HostDisplay, schedule_once};
use once_cell::sync::OnceCell;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Display property set by [`CodeScanner::install`] so the installer can
/// show a confirmation once the artifacts are in place.
pub const SHOW_INSTALLED_MESSAGE_PROPERTY: &str = "ShowScanditInstalledMessage";

/// Delay before the deferred install check fires.
const INSTALL_CHECK_DELAY: Duration = Duration::from_secs(2);

/// Process-wide coordinator instance
static INSTANCE: OnceCell<Arc<CodeScanner>> = OnceCell::new();

/// The platform seams the host wires in before first use.
///
/// On iOS the picker factory resolves; on Android the activity launcher
/// does; on desktop/simulator neither needs to, and the installer takes
/// their place.
pub struct PlatformServices {
    /// Host display surface (interactive thread, repaint, properties)
    pub display: Arc<dyn HostDisplay>,
    /// iOS picker factory, if the native interop runtime is available
    pub picker_factory: Option<Arc<dyn PickerFactory>>,
    /// Android activity launcher, if resolvable
    pub activity_launcher: Option<Arc<dyn ActivityLauncher>>,
    /// Vendor-artifact installer for desktop/simulator runs
    pub installer: Option<Arc<dyn NativeInstaller>>,
}

/// Bar code and QR code scanner backed by the vendor SDK.
///
/// Create once per process via [`CodeScanner::init`] on the interactive
/// thread, then reach it through [`CodeScanner::global`]. The license key
/// ([`codescan_core::set_license_key`]) must be set before the first scan.
pub struct CodeScanner {
    display: Arc<dyn HostDisplay>,
    ios: Option<Arc<IosScanBridge>>,
    android: Option<AndroidScanBridge>,
    installer: Option<Arc<dyn NativeInstaller>>,
    /// Shared re-entrancy guard: set while any scan is pending on either
    /// bridge, cleared immediately before the handler runs.
    in_progress: Arc<AtomicBool>,
    install_checked: AtomicBool,
}

impl CodeScanner {
    /// Build a coordinator from the host's platform services.
    ///
    /// Bridge construction failures are caught and logged; the coordinator
    /// degrades to unsupported instead of propagating them.
    pub fn new(services: PlatformServices) -> Arc<Self> {
        let PlatformServices {
            display,
            picker_factory,
            activity_launcher,
            installer,
        } = services;

        let ios = picker_factory
            .filter(|factory| factory.is_supported())
            .and_then(
                |factory| match IosScanBridge::new(factory, display.clone()) {
                    Ok(bridge) => Some(bridge),
                    Err(err) => {
                        tracing::warn!(%err, "failed to load code scanner on this platform");
                        None
                    }
                },
            );

        let android = if ios.is_none() {
            activity_launcher
                .map(|launcher| AndroidScanBridge::new(launcher, display.clone()))
        } else {
            None
        };

        Arc::new(Self {
            display,
            ios,
            android,
            installer,
            in_progress: Arc::new(AtomicBool::new(false)),
            install_checked: AtomicBool::new(false),
        })
    }

    /// Initialize the process-wide instance. The first call wins; later
    /// calls return the existing instance and ignore their argument.
    pub fn init(services: PlatformServices) -> Arc<Self> {
        INSTANCE.get_or_init(|| CodeScanner::new(services)).clone()
    }

    /// The process-wide instance, if [`CodeScanner::init`] has run.
    pub fn global() -> Option<Arc<Self>> {
        INSTANCE.get().cloned()
    }

    /// Pure capability query: is scanning available here?
    ///
    /// False on the simulator and when neither bridge constructed.
    pub fn query_capability(&self) -> bool {
        if self.display.is_simulator() {
            return false;
        }
        self.ios.is_some()
            || self
                .android
                .as_ref()
                .is_some_and(AndroidScanBridge::is_supported)
    }

    /// Run the vendor-artifact installation once, on desktop/simulator
    /// runs only. Idempotent; later calls are no-ops.
    pub fn ensure_installed(&self) -> ScanResult<()> {
        if !self.display.is_simulator() {
            return Ok(());
        }
        if self.install_checked.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        match &self.installer {
            Some(installer) if installer.is_supported() => installer.extract_native_files(),
            _ => Ok(()),
        }
    }

    /// Combined capability check: on the simulator this also triggers the
    /// one-time artifact installation before reporting unsupported.
    pub fn is_supported(&self) -> bool {
        if self.display.is_simulator() {
            if let Err(err) = self.ensure_installed() {
                tracing::error!(%err, "native artifact installation failed");
            }
            return false;
        }
        self.query_capability()
    }

    /// Schedule the deferred install check without blocking startup, and
    /// ask the installer to confirm once artifacts are in place.
    pub fn install(self: &Arc<Self>) {
        self.display
            .set_property(SHOW_INSTALLED_MESSAGE_PROPERTY, "true");
        let scanner = self.clone();
        schedule_once(INSTALL_CHECK_DELAY, move || {
            let display = scanner.display.clone();
            display.call_serially(Box::new(move || {
                let _ = scanner.is_supported();
            }));
        });
    }

    /// Open the scanning UI for a single code in the given symbologies.
    ///
    /// The handler receives exactly one outcome on the interactive thread.
    /// While a scan is pending (either platform), further calls receive an
    /// immediate `Error(ERR_SCAN_IN_PROGRESS)`. An empty symbology set is
    /// forwarded to the native layer as-is.
    pub fn scan(&self, symbologies: &SymbologySet, handler: OutcomeHandler) {
        let Some(handler) = self.arm(handler) else {
            return;
        };

        if let Some(ios) = &self.ios {
            ios.scan(symbologies, handler);
            return;
        }
        if let Some(android) = &self.android {
            android.scan(symbologies, handler);
            return;
        }

        // No bridge: deliver an error rather than leaving the handler to hang.
        self.display.call_serially(Box::new(move || {
            handler(ScanError::UnsupportedPlatform.into_outcome());
        }));
    }

    /// Open the scanning UI for QR codes.
    pub fn scan_qr_code(&self, handler: OutcomeHandler) {
        self.scan(&SymbologySet::qr_only(), handler);
    }

    /// Open the scanning UI for the standard 1D/PDF/DataMatrix bundle.
    pub fn scan_bar_code(&self, handler: OutcomeHandler) {
        self.scan(&SymbologySet::standard_barcodes(), handler);
    }

    /// Take the guard and wrap the handler so the guard clears and the
    /// screen refreshes when the outcome arrives. Returns `None` (after
    /// delivering the rejection) when a scan is already pending.
    fn arm(&self, handler: OutcomeHandler) -> Option<OutcomeHandler> {
        if self.in_progress.swap(true, Ordering::SeqCst) {
            tracing::info!("scan rejected: already in progress");
            self.display.call_serially(Box::new(move || {
                handler(ScanError::ScanInProgress.into_outcome());
            }));
            return None;
        }

        let guard = self.in_progress.clone();
        let display = self.display.clone();
        Some(Box::new(move |outcome| {
            // Clear before invoking, so the handler can start a new scan.
            guard.store(false, Ordering::SeqCst);
            handler(outcome);
            display.refresh_current_form();
        }))
    }
}
