use std::ops::Deref;
use std::sync::Arc;

use thiserror::Error;

/// A callback handed to an [`Executor`].
pub type Callback = Box<dyn FnOnce() + Send + 'static>;

/// Reasons an executor can refuse a callback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// The executor has shut down and will never run the callback.
    #[error("executor is closed")]
    Closed,

    /// The executor is alive but declined the request.
    #[error("executor rejected the callback: {0}")]
    Rejected(String),
}

/// A single serial loop that accepts callbacks from any thread.
///
/// Implementors guarantee that every callback accepted by
/// [`schedule`](Self::schedule) runs exactly once, on the executor's own
/// thread, at some later point, and that at most one callback runs at a
/// time. `schedule` itself must be safe to call from any thread and must
/// not run the callback inline.
///
/// If the executor stops dispatching, accepted callbacks never run; this
/// is a liveness precondition that callers cannot observe.
pub trait Executor: Send + Sync + 'static {
    /// Queues `callback` for a future turn of the loop.
    fn schedule(&self, callback: Callback) -> Result<(), ScheduleError>;
}

impl<F> Executor for F
where
    F: Fn(Callback) -> Result<(), ScheduleError> + Send + Sync + 'static,
{
    fn schedule(&self, callback: Callback) -> Result<(), ScheduleError> {
        self(callback)
    }
}

/// An executor shared behind an [`Arc`].
///
/// Lets one executor value back several queues, or stay reachable from the
/// host after a queue takes it.
pub struct Shared<E>(pub Arc<E>);

impl<E> Shared<E> {
    /// Wraps `executor` in a fresh `Arc`.
    pub fn new(executor: E) -> Self {
        Self(Arc::new(executor))
    }
}

impl<E> Clone for Shared<E> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<E> From<Arc<E>> for Shared<E> {
    fn from(executor: Arc<E>) -> Self {
        Self(executor)
    }
}

impl<E> Deref for Shared<E> {
    type Target = E;

    fn deref(&self) -> &E {
        &self.0
    }
}

impl<E: Executor> Executor for Shared<E> {
    fn schedule(&self, callback: Callback) -> Result<(), ScheduleError> {
        self.0.schedule(callback)
    }
}
