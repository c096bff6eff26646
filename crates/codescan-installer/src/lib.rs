//! codescan-installer - vendor artifact installer for the codescan bridge
//!
//! Desktop and simulator runs have no vendor SDK on the device; what they
//! can do is make sure the project tree carries the artifacts the native
//! builds need:
//!
//! ```text
//! project/
//! ├── native/
//! │   ├── android/
//! │   │   └── ScanditBarcodeScanner.aar
//! │   └── ios/
//! │       ├── *.h                          # flattened framework headers
//! │       └── libScanditBarcodeScanner.a   # flattened framework binary
//! └── lib/impl/native/...                  # build-tree copies, also accepted
//! ```
//!
//! [`ScanditInstaller`] performs the flattening pass and reports which
//! platforms still lack artifacts; [`HostInstaller`] adapts it to the scan
//! coordinator's installer seam.

mod error;
mod host;
mod report;

pub mod installer;

pub use error::InstallerError;
pub use host::HostInstaller;
pub use installer::ScanditInstaller;
pub use report::{InstallReport, LEARN_MORE_URL};

/// Result type for installer operations.
pub type InstallResult<T> = Result<T, InstallerError>;
