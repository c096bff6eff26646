//! Adapter wiring the installer into the scan coordinator.

use crate::report::LEARN_MORE_URL;
use crate::ScanditInstaller;
use codescan_bridge::SHOW_INSTALLED_MESSAGE_PROPERTY;
use codescan_bridge::native::NativeInstaller;
use codescan_core::{ScanError, ScanResult};
use codescan_runtime::HostDisplay;
use std::sync::Arc;

/// [`NativeInstaller`] implementation over [`ScanditInstaller`].
///
/// Runs the extraction pass and surfaces the result through the host
/// display: a remediation warning plus the learn-more URL (opened via the
/// display) when artifacts are missing, and a confirmation when the install
/// completed and the host asked to be told (the show-installed-message
/// property).
pub struct HostInstaller {
    installer: ScanditInstaller,
    display: Arc<dyn HostDisplay>,
}

impl HostInstaller {
    pub fn new(installer: ScanditInstaller, display: Arc<dyn HostDisplay>) -> Self {
        Self { installer, display }
    }
}

impl NativeInstaller for HostInstaller {
    fn is_supported(&self) -> bool {
        true
    }

    fn extract_native_files(&self) -> ScanResult<()> {
        let report = self
            .installer
            .extract_native_files()
            .map_err(|err| ScanError::InstallationFailure(err.to_string()))?;

        if let Some(message) = report.remediation_message() {
            tracing::warn!(%message, url = LEARN_MORE_URL, "vendor SDK artifacts missing");
            self.display.execute_url(LEARN_MORE_URL);
            return Ok(());
        }

        let show = self
            .display
            .property(SHOW_INSTALLED_MESSAGE_PROPERTY, "false");
        if show == "true" {
            tracing::info!("the ScanditSDK was successfully installed");
        }
        Ok(())
    }
}
