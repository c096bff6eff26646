//! Host display abstraction
//!
//! The scan bridges never talk to the host UI toolkit directly; they go
//! through [`HostDisplay`], which captures the handful of primitives the
//! scan flow needs: serialized dispatch onto the interactive
//! thread, a repaint request after the native overlay goes away, simulator
//! detection, shared string properties, and opening an external URL.

use crate::queue::{DispatchResult, SerialQueue};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// The host framework's display surface, seen from the scan bridge.
///
/// Implementations must guarantee that jobs passed to
/// [`call_serially`](HostDisplay::call_serially) run one at a time on the
/// interactive thread, in submission order. Every outcome delivery and every
/// UI-observable call goes through that contract; the bridges use no other
/// synchronization for it.
pub trait HostDisplay: Send + Sync {
    /// Run a job on the interactive thread, serialized with all other jobs.
    fn call_serially(&self, job: Box<dyn FnOnce() + Send + 'static>);

    /// Ask the current form to revalidate and repaint itself. Called after
    /// each delivered outcome, since the native overlay took over the
    /// screen.
    fn refresh_current_form(&self);

    /// Whether this is a simulated/desktop environment rather than a
    /// device. On the simulator the scan bridges are unavailable and the
    /// installer may run instead.
    fn is_simulator(&self) -> bool;

    /// Set a shared display property.
    fn set_property(&self, key: &str, value: &str);

    /// Read a shared display property, with a default for unset keys.
    fn property(&self, key: &str, default: &str) -> String;

    /// Open an external URL in the host's browser.
    fn execute_url(&self, url: &str);
}

/// [`HostDisplay`] backed by a plain [`SerialQueue`], with no real screen.
///
/// This is the implementation used on desktop/simulator runs and in tests.
/// Repaint requests are counted rather than drawn, and URLs are logged
/// rather than opened.
pub struct HeadlessDisplay {
    queue: SerialQueue,
    simulator: bool,
    properties: RwLock<HashMap<String, String>>,
    refreshes: AtomicUsize,
}

impl HeadlessDisplay {
    /// Create a headless display. `simulator` controls what
    /// [`HostDisplay::is_simulator`] reports.
    pub fn new(simulator: bool) -> DispatchResult<Arc<Self>> {
        Ok(Arc::new(Self {
            queue: SerialQueue::new("codescan-ui")?,
            simulator,
            properties: RwLock::new(HashMap::new()),
            refreshes: AtomicUsize::new(0),
        }))
    }

    /// The serial queue standing in for the interactive thread.
    #[must_use]
    pub fn queue(&self) -> &SerialQueue {
        &self.queue
    }

    /// Number of repaint requests received so far.
    #[must_use]
    pub fn refresh_count(&self) -> usize {
        self.refreshes.load(Ordering::SeqCst)
    }

    /// Block until every job submitted to the interactive thread so far
    /// has run.
    pub fn drain(&self) -> DispatchResult<()> {
        self.queue.barrier()
    }
}

impl HostDisplay for HeadlessDisplay {
    fn call_serially(&self, job: Box<dyn FnOnce() + Send + 'static>) {
        self.queue.dispatch_async(job);
    }

    fn refresh_current_form(&self) {
        self.refreshes.fetch_add(1, Ordering::SeqCst);
    }

    fn is_simulator(&self) -> bool {
        self.simulator
    }

    fn set_property(&self, key: &str, value: &str) {
        self.properties
            .write()
            .insert(key.to_string(), value.to_string());
    }

    fn property(&self, key: &str, default: &str) -> String {
        self.properties
            .read()
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    fn execute_url(&self, url: &str) {
        tracing::info!(%url, "headless display: execute URL");
    }
}

#[cfg(test)]
#[path = "display/display_tests.rs"]
mod display_tests;
