//! Serial dispatch contexts
//!
//! A [`SerialQueue`] models the host platform's "run on this thread"
//! primitives: the portable UI-thread-equivalent (deliver outcomes, repaint)
//! and the native main context (picker lifecycle calls). Jobs submitted to
//! one queue run strictly one at a time, in submission order, on a single
//! named thread.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::thread;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};

/// A unit of work submitted to a queue
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// Result type alias for dispatch operations
pub type DispatchResult<T> = Result<T, DispatchError>;

/// Errors from queue construction and dispatch
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The worker thread could not be spawned
    #[error("failed to spawn queue thread: {0}")]
    SpawnFailed(String),

    /// The queue has shut down and no longer accepts work
    #[error("queue is closed")]
    QueueClosed,

    /// A synchronous job panicked before producing its result
    #[error("dispatched job panicked")]
    JobPanicked,
}

struct QueueInner {
    name: String,
    sender: mpsc::UnboundedSender<Job>,
}

/// A named single-threaded dispatch context.
///
/// Cloning is cheap; all clones submit to the same worker thread. The
/// worker runs a tokio current-thread runtime so timed work can share it.
///
/// # Example
///
/// ```
/// use codescan_runtime::SerialQueue;
///
/// let queue = SerialQueue::new("example-queue")?;
/// queue.dispatch_async(|| {
///     // runs on the queue thread
/// });
/// let answer = queue.dispatch_sync(|| 42)?;
/// assert_eq!(answer, 42);
/// # Ok::<(), codescan_runtime::DispatchError>(())
/// ```
#[derive(Clone)]
pub struct SerialQueue {
    inner: Arc<QueueInner>,
}

impl SerialQueue {
    /// Create a queue backed by a new worker thread with the given name.
    pub fn new(name: impl Into<String>) -> DispatchResult<Self> {
        let name = name.into();
        let (sender, mut receiver) = mpsc::unbounded_channel::<Job>();

        let thread_name = name.clone();
        thread::Builder::new()
            .name(thread_name.clone())
            .spawn(move || {
                let runtime = match tokio::runtime::Builder::new_current_thread()
                    .enable_time()
                    .build()
                {
                    Ok(rt) => rt,
                    Err(err) => {
                        tracing::error!(queue = %thread_name, %err, "queue runtime failed to start");
                        return;
                    }
                };
                runtime.block_on(async move {
                    while let Some(job) = receiver.recv().await {
                        // A panicking job must not take the queue down with it.
                        if catch_unwind(AssertUnwindSafe(job)).is_err() {
                            tracing::error!(queue = %thread_name, "dispatched job panicked");
                        }
                    }
                });
            })
            .map_err(|err| DispatchError::SpawnFailed(err.to_string()))?;

        Ok(Self {
            inner: Arc::new(QueueInner { name, sender }),
        })
    }

    /// The queue's thread name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Check whether the calling thread is this queue's worker thread.
    #[must_use]
    pub fn is_current(&self) -> bool {
        thread::current().name() == Some(self.inner.name.as_str())
    }

    /// Submit a job to run later on the queue thread. Returns immediately.
    ///
    /// Jobs submitted after the queue has shut down are dropped with a
    /// warning; nothing at scan time tears queues down, so this only
    /// happens during process exit.
    pub fn dispatch_async(&self, job: impl FnOnce() + Send + 'static) {
        if self.inner.sender.send(Box::new(job)).is_err() {
            tracing::warn!(queue = %self.inner.name, "job dropped: queue is closed");
        }
    }

    /// Run a job on the queue thread and block until it returns.
    ///
    /// Calling from the queue's own thread runs the job inline instead of
    /// deadlocking on a self-dispatch.
    pub fn dispatch_sync<R, F>(&self, job: F) -> DispatchResult<R>
    where
        R: Send + 'static,
        F: FnOnce() -> R + Send + 'static,
    {
        if self.is_current() {
            return Ok(job());
        }

        let (reply, response) = oneshot::channel();
        let wrapped: Job = Box::new(move || {
            // Receiver may be gone if the caller was dropped; ignore.
            let _ = reply.send(job());
        });
        self.inner
            .sender
            .send(wrapped)
            .map_err(|_| DispatchError::QueueClosed)?;

        // The sender side is dropped without a value only if the job
        // panicked inside the worker's unwind guard.
        response.blocking_recv().map_err(|_| DispatchError::JobPanicked)
    }

    /// Block until every job submitted before this call has run.
    pub fn barrier(&self) -> DispatchResult<()> {
        self.dispatch_sync(|| ())
    }
}

impl std::fmt::Debug for SerialQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerialQueue")
            .field("name", &self.inner.name)
            .finish_non_exhaustive()
    }
}
