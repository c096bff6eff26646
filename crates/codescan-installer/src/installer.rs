//! Vendor artifact extraction.
//!
//! The [`ScanditInstaller`] locates the Android `.aar` and the iOS
//! framework/static library inside a project tree, flattens the framework
//! into the headers-plus-archive layout the native build expects, and
//! reports which platforms still lack their artifacts.

use crate::{InstallReport, InstallResult, InstallerError};
use std::fs;
use std::path::{Path, PathBuf};

/// Android archive the vendor ships.
pub const AAR_NAME: &str = "ScanditBarcodeScanner.aar";
/// iOS framework bundle the vendor ships.
pub const FRAMEWORK_NAME: &str = "ScanditBarcodeScanner.framework";
/// Binary inside the framework bundle.
const FRAMEWORK_BINARY: &str = "ScanditBarcodeScanner";
/// Static library name the native build links against.
pub const IOS_LIB_NAME: &str = "libScanditBarcodeScanner.a";

/// Extracts vendor artifacts within a project directory.
///
/// # Example
///
/// ```no_run
/// use codescan_installer::ScanditInstaller;
///
/// let installer = ScanditInstaller::new(".");
/// let report = installer.extract_native_files()?;
/// if let Some(message) = report.remediation_message() {
///     eprintln!("{message}");
/// }
/// # Ok::<(), codescan_installer::InstallerError>(())
/// ```
#[derive(Debug)]
pub struct ScanditInstaller {
    project_root: PathBuf,
}

impl ScanditInstaller {
    /// Create an installer rooted at the given project directory.
    pub fn new<P: AsRef<Path>>(project_root: P) -> Self {
        Self {
            project_root: project_root.as_ref().to_path_buf(),
        }
    }

    /// Flatten any pending framework bundle and report artifact presence.
    ///
    /// Each artifact is accepted in either its source location
    /// (`native/<platform>/`) or its build-tree location
    /// (`lib/impl/native/<platform>/`). A framework bundle found under
    /// `native/ios/` is consumed: its headers and binary are copied out and
    /// the bundle is deleted. Filesystem failures abort the pass.
    pub fn extract_native_files(&self) -> InstallResult<InstallReport> {
        let android_dir = self.project_root.join("native").join("android");
        let ios_dir = self.project_root.join("native").join("ios");

        let android_present = android_dir.join(AAR_NAME).exists()
            || self.impl_dir("android").join(AAR_NAME).exists();

        let framework = ios_dir.join(FRAMEWORK_NAME);
        if framework.is_dir() {
            self.flatten_framework(&framework, &ios_dir)?;
        }

        let ios_present = ios_dir.join(IOS_LIB_NAME).exists()
            || self.impl_dir("ios").join(IOS_LIB_NAME).exists();

        let report = InstallReport {
            android_present,
            ios_present,
        };
        tracing::info!(
            android = report.android_present,
            ios = report.ios_present,
            "artifact extraction pass finished"
        );
        Ok(report)
    }

    fn impl_dir(&self, platform: &str) -> PathBuf {
        self.project_root
            .join("lib")
            .join("impl")
            .join("native")
            .join(platform)
    }

    /// Copy `Headers/*` and the framework binary into `ios_dir`, then delete
    /// the now-redundant bundle.
    fn flatten_framework(&self, framework: &Path, ios_dir: &Path) -> InstallResult<()> {
        let headers = framework.join("Headers");
        if !headers.is_dir() {
            return Err(InstallerError::MissingHeaders(framework.to_path_buf()));
        }

        for entry in fs::read_dir(&headers)? {
            let entry = entry?;
            let dest = ios_dir.join(entry.file_name());
            tracing::debug!(
                from = %entry.path().display(),
                to = %dest.display(),
                "copying framework header"
            );
            fs::copy(entry.path(), &dest)?;
        }

        let binary = framework.join(FRAMEWORK_BINARY);
        if !binary.is_file() {
            return Err(InstallerError::MissingFrameworkBinary(binary));
        }
        let lib = ios_dir.join(IOS_LIB_NAME);
        tracing::debug!(
            from = %binary.display(),
            to = %lib.display(),
            "copying framework binary"
        );
        fs::copy(&binary, &lib)?;

        tracing::info!(path = %framework.display(), "deleting consumed framework bundle");
        fs::remove_dir_all(framework)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]
    #![allow(clippy::unwrap_used)]

    use super::*;
    use tempfile::TempDir;

    fn project_with(paths: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for path in paths {
            let full = dir.path().join(path);
            fs::create_dir_all(full.parent().unwrap()).unwrap();
            fs::write(&full, b"artifact").unwrap();
        }
        dir
    }

    #[test]
    fn ScanditInstaller___empty_project___reports_both_missing() {
        let dir = TempDir::new().unwrap();
        let report = ScanditInstaller::new(dir.path())
            .extract_native_files()
            .unwrap();

        assert!(!report.android_present);
        assert!(!report.ios_present);
        assert_eq!(report.missing_platforms(), Some("Android or iOS"));
    }

    #[test]
    fn ScanditInstaller___artifacts_in_native_dirs___reports_complete() {
        let dir = project_with(&[
            "native/android/ScanditBarcodeScanner.aar",
            "native/ios/libScanditBarcodeScanner.a",
        ]);
        let report = ScanditInstaller::new(dir.path())
            .extract_native_files()
            .unwrap();

        assert!(report.is_complete());
    }

    #[test]
    fn ScanditInstaller___artifacts_in_build_tree___also_count() {
        let dir = project_with(&[
            "lib/impl/native/android/ScanditBarcodeScanner.aar",
            "lib/impl/native/ios/libScanditBarcodeScanner.a",
        ]);
        let report = ScanditInstaller::new(dir.path())
            .extract_native_files()
            .unwrap();

        assert!(report.is_complete());
    }

    #[test]
    fn ScanditInstaller___framework_bundle___is_flattened_and_deleted() {
        let dir = project_with(&[
            "native/android/ScanditBarcodeScanner.aar",
            "native/ios/ScanditBarcodeScanner.framework/Headers/SBSBarcodePicker.h",
            "native/ios/ScanditBarcodeScanner.framework/Headers/SBSScanSession.h",
            "native/ios/ScanditBarcodeScanner.framework/ScanditBarcodeScanner",
        ]);
        let report = ScanditInstaller::new(dir.path())
            .extract_native_files()
            .unwrap();

        assert!(report.is_complete());
        let ios = dir.path().join("native/ios");
        assert!(ios.join("SBSBarcodePicker.h").is_file());
        assert!(ios.join("SBSScanSession.h").is_file());
        assert!(ios.join(IOS_LIB_NAME).is_file());
        assert!(!ios.join(FRAMEWORK_NAME).exists());
    }

    #[test]
    fn ScanditInstaller___framework_without_headers___fails_loudly() {
        let dir = project_with(&[
            "native/ios/ScanditBarcodeScanner.framework/ScanditBarcodeScanner",
        ]);
        // Headers/ is a required directory, not a file.
        let err = ScanditInstaller::new(dir.path())
            .extract_native_files()
            .unwrap_err();

        assert!(matches!(err, InstallerError::MissingHeaders(_)));
    }

    #[test]
    fn ScanditInstaller___framework_without_binary___fails_loudly() {
        let dir = project_with(&[
            "native/ios/ScanditBarcodeScanner.framework/Headers/SBSBarcodePicker.h",
        ]);
        let err = ScanditInstaller::new(dir.path())
            .extract_native_files()
            .unwrap_err();

        assert!(matches!(err, InstallerError::MissingFrameworkBinary(_)));
    }

    #[test]
    fn ScanditInstaller___second_pass___is_a_clean_no_op() {
        let dir = project_with(&[
            "native/android/ScanditBarcodeScanner.aar",
            "native/ios/ScanditBarcodeScanner.framework/Headers/SBSBarcodePicker.h",
            "native/ios/ScanditBarcodeScanner.framework/ScanditBarcodeScanner",
        ]);
        let installer = ScanditInstaller::new(dir.path());
        installer.extract_native_files().unwrap();

        // The framework is gone; the flattened artifacts keep counting.
        let report = installer.extract_native_files().unwrap();
        assert!(report.is_complete());
    }
}
