//! Process-wide vendor license key store and debug flag

use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

/// Global license store instance
static LICENSE_STORE: OnceCell<LicenseStore> = OnceCell::new();

/// Holds the vendor license key and the debug flag for the whole process.
///
/// The key is write-once-before-use by convention: it must be set before
/// the first scan attempt, and both bridges read it at construction time.
/// No local validation is performed; the vendor SDK validates the key.
pub struct LicenseStore {
    key: RwLock<Option<String>>,
    debug: AtomicBool,
}

impl LicenseStore {
    /// Create a new license store
    pub fn new() -> Self {
        Self {
            key: RwLock::new(None),
            debug: AtomicBool::new(false),
        }
    }

    /// Get the global license store instance
    pub fn global() -> &'static LicenseStore {
        LICENSE_STORE.get_or_init(LicenseStore::new)
    }

    /// Set the license key
    pub fn set_key(&self, key: impl Into<String>) {
        let mut guard = self.key.write();
        *guard = Some(key.into());
    }

    /// Get the license key, if one has been set
    pub fn key(&self) -> Option<String> {
        self.key.read().clone()
    }

    /// Set the debug flag. When enabled, recognition faults are logged
    /// with full detail instead of just the delivered error message.
    pub fn set_debug(&self, debug: bool) {
        self.debug.store(debug, Ordering::SeqCst);
    }

    /// Get the debug flag
    pub fn debug(&self) -> bool {
        self.debug.load(Ordering::SeqCst)
    }
}

impl Default for LicenseStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Set the vendor license key. Must be called before the first scan
/// attempt; has no effect on a scan already in flight.
pub fn set_license_key(key: impl Into<String>) {
    LicenseStore::global().set_key(key);
}

/// Get the vendor license key, if one has been set.
pub fn license_key() -> Option<String> {
    LicenseStore::global().key()
}

/// Enable or disable extra fault detail in logs.
pub fn set_debug(debug: bool) {
    LicenseStore::global().set_debug(debug);
}

/// Check whether extra fault detail is enabled.
pub fn debug_enabled() -> bool {
    LicenseStore::global().debug()
}
