//! Outcome of an installation pass.

use serde::{Deserialize, Serialize};

/// Where developers can read about obtaining and placing the vendor SDK.
pub const LEARN_MORE_URL: &str = "https://github.com/shannah/cn1-codescan-scandit";

/// What the installer found (and left behind) after one extraction pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallReport {
    /// The Android `.aar` is present in one of its accepted locations.
    pub android_present: bool,
    /// The iOS static library is present in one of its accepted locations.
    pub ios_present: bool,
}

impl InstallReport {
    /// True when both platforms have their artifacts in place.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.android_present && self.ios_present
    }

    /// Name of the platform(s) still missing artifacts, if any.
    #[must_use]
    pub fn missing_platforms(&self) -> Option<&'static str> {
        match (self.android_present, self.ios_present) {
            (true, true) => None,
            (false, true) => Some("Android"),
            (true, false) => Some("iOS"),
            (false, false) => Some("Android or iOS"),
        }
    }

    /// Developer-facing remediation message for an incomplete install.
    #[must_use]
    pub fn remediation_message(&self) -> Option<String> {
        self.missing_platforms().map(|platforms| {
            format!(
                "The ScanditSDK could not be found for {platforms}. Please copy the \
                 ScanditBarcodeScanner.aar file into your project's native/android \
                 directory, and the ScanditBarcodeScanner.framework file into the \
                 native/ios directory."
            )
        })
    }
}
