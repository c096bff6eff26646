//! Deferred one-shot background work
//!
//! The coordinator's `install()` path schedules a single capability check a
//! couple of seconds after startup, off the interactive thread. That is the
//! only consumer; the scheduler stays deliberately tiny.

use once_cell::sync::OnceCell;
use std::time::Duration;
use tokio::runtime::{Builder, Runtime};

static SCHEDULER: OnceCell<Scheduler> = OnceCell::new();

/// Background timer runtime for deferred one-shot jobs.
pub struct Scheduler {
    runtime: Runtime,
}

impl Scheduler {
    fn new() -> std::io::Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("codescan-timer")
            .enable_time()
            .build()?;
        Ok(Self { runtime })
    }

    /// Get the global scheduler, starting its runtime on first use.
    pub fn global() -> Option<&'static Scheduler> {
        match SCHEDULER.get_or_try_init(Scheduler::new) {
            Ok(scheduler) => Some(scheduler),
            Err(err) => {
                tracing::error!(%err, "background scheduler failed to start");
                None
            }
        }
    }

    /// Run `job` once after `delay`, on a background thread.
    pub fn schedule_once(&self, delay: Duration, job: impl FnOnce() + Send + 'static) {
        self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            job();
        });
    }
}

/// Run `job` once after `delay` on the global background scheduler.
///
/// If the scheduler cannot start (already logged), the job is dropped;
/// callers use this only for the non-critical deferred install check.
pub fn schedule_once(delay: Duration, job: impl FnOnce() + Send + 'static) {
    if let Some(scheduler) = Scheduler::global() {
        scheduler.schedule_once(delay, job);
    }
}
