//! codescan-runtime - Execution-context plumbing for the codescan bridge
//!
//! Provides the serialized dispatch contexts the scan contract is built on:
//! - [`SerialQueue`] - a named single-threaded dispatch context, modeling
//!   both the host's UI-thread-equivalent and the native main context
//! - [`HostDisplay`] - the seam to the host framework's display, with a
//!   [`HeadlessDisplay`] implementation for desktop and tests
//! - [`schedule_once`] - deferred one-shot background work (the delayed
//!   install check)

mod display;
mod queue;
mod scheduler;

pub use display::{HeadlessDisplay, HostDisplay};
pub use queue::{DispatchError, DispatchResult, Job, SerialQueue};
pub use scheduler::{Scheduler, schedule_once};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{HeadlessDisplay, HostDisplay, SerialQueue, schedule_once};
}
