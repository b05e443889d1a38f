use super::command::Command;
use super::context;
use super::waker::Waker;
use crate::dispatch::{Callback, Executor, ScheduleError};

use std::fmt;
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

use log::trace;

/// Thread-safe handle to a [`MainLoop`](super::MainLoop).
///
/// Handles are cheap to clone and can be moved to any thread. Every
/// operation sends a command to the loop and wakes it; nothing runs on the
/// calling thread.
///
/// Once the `MainLoop` is dropped, every operation fails with
/// [`ScheduleError::Closed`].
#[derive(Clone)]
pub struct LoopHandle {
    sender: Sender<Command>,
    waker: Arc<Waker>,
    name: Arc<str>,
}

impl LoopHandle {
    pub(crate) fn new(sender: Sender<Command>, waker: Arc<Waker>, name: Arc<str>) -> Self {
        Self {
            sender,
            waker,
            name,
        }
    }

    /// Returns the handle of the loop dispatching on the current thread.
    ///
    /// This is `Some` inside callbacks run by a loop and inside the
    /// closures given to [`MainLoop::run_with`](super::MainLoop::run_with)
    /// and [`MainLoop::block_on`](super::MainLoop::block_on).
    pub fn current() -> Option<LoopHandle> {
        context::current()
    }

    /// The loop name given to the builder.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs `f` on the loop's next turn.
    ///
    /// Each call costs one loop round-trip; use a
    /// [`DeferredQueue`](crate::DeferredQueue) to batch many small updates.
    pub fn idle<F>(&self, f: F) -> Result<(), ScheduleError>
    where
        F: FnOnce() + Send + 'static,
    {
        self.send(Command::Idle(Box::new(f)))
    }

    /// Runs `f` on the loop once `delay` has elapsed.
    ///
    /// Timers with the same deadline run in the order they were added.
    /// A `delay` too large for the clock to represent is rejected.
    pub fn timeout<F>(&self, delay: Duration, f: F) -> Result<(), ScheduleError>
    where
        F: FnOnce() + Send + 'static,
    {
        let deadline = Instant::now().checked_add(delay).ok_or_else(|| {
            ScheduleError::Rejected(format!("timeout of {delay:?} overflows the clock"))
        })?;

        self.send(Command::Timer {
            deadline,
            callback: Box::new(f),
        })
    }

    /// Asks the loop to stop; `run` returns `code`.
    ///
    /// Commands sent before the quit are dispatched first. Commands sent
    /// after it stay queued for the next run.
    pub fn quit(&self, code: i32) -> Result<(), ScheduleError> {
        trace!("[{}] quit requested with code {code}", self.name);
        self.send(Command::Quit(code))
    }

    fn send(&self, command: Command) -> Result<(), ScheduleError> {
        self.sender
            .send(command)
            .map_err(|_| ScheduleError::Closed)?;

        self.waker.wake();
        Ok(())
    }
}

impl Executor for LoopHandle {
    fn schedule(&self, callback: Callback) -> Result<(), ScheduleError> {
        self.send(Command::Idle(callback))
    }
}

impl fmt::Debug for LoopHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoopHandle")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
