use super::executor::{Callback, Executor};
use crate::error::Result;

use std::collections::VecDeque;
use std::mem;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{trace, warn};

/// A deferred unit of work.
pub type Action = Box<dyn FnOnce() + Send + 'static>;

/// A cross-thread queue of actions flushed on a serial executor.
///
/// Any thread may [`submit`](Self::submit) actions. The first submission
/// that finds the queue idle asks the executor to schedule one flush;
/// every submission arriving before that flush finishes joins it instead
/// of scheduling another. When the flush runs on the executor thread it
/// repeatedly takes the whole pending list and runs it, and only goes back
/// to idle once it observes an empty list under the lock. Actions added
/// while a batch is running, including from inside an action, are picked
/// up by the same flush.
///
/// Actions run in the order their submissions acquired the lock.
///
/// Cloning the queue is cheap and yields another handle to the same
/// pending list.
///
/// # Examples
///
/// ```rust,ignore
/// let queue = main_loop.idle_queue();
///
/// std::thread::spawn(move || {
///     let status = compute_status();
///     queue.defer(move || label.set_markup(&status)).unwrap();
/// });
/// ```
pub struct DeferredQueue<E: Executor> {
    shared: Arc<Inner<E>>,
}

struct Inner<E> {
    /// Pending list and dispatch flag, always accessed together.
    state: Mutex<State>,

    /// Serial executor the flush callback is scheduled on.
    executor: E,
}

#[derive(Default)]
struct State {
    /// Actions waiting for the next take.
    pending: VecDeque<Action>,

    /// `true` from the moment a flush is scheduled until that flush
    /// observes an empty list.
    scheduled: bool,
}

impl<E: Executor> DeferredQueue<E> {
    /// Creates an empty queue bound to `executor`.
    pub fn new(executor: E) -> Self {
        Self {
            shared: Arc::new(Inner {
                state: Mutex::new(State::default()),
                executor,
            }),
        }
    }

    /// Appends `actions` and makes sure a flush is scheduled.
    ///
    /// An empty batch returns immediately without touching the lock or the
    /// executor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SchedulingFailed`](crate::Error::SchedulingFailed)
    /// when the executor refuses the flush. The actions stay queued and the
    /// queue returns to idle, so the next successful `submit` runs them.
    pub fn submit<I>(&self, actions: I) -> Result<()>
    where
        I: IntoIterator<Item = Action>,
    {
        let actions: Vec<Action> = actions.into_iter().collect();
        if actions.is_empty() {
            return Ok(());
        }

        let mut state = self.shared.lock();
        state.pending.extend(actions);

        if state.scheduled {
            return Ok(());
        }

        schedule_flush(&self.shared, &mut state)
    }

    /// Submits a single action.
    pub fn defer<F>(&self, action: F) -> Result<()>
    where
        F: FnOnce() + Send + 'static,
    {
        self.submit([Box::new(action) as Action])
    }

    /// Number of actions waiting to be taken by a flush.
    pub fn pending(&self) -> usize {
        self.shared.lock().pending.len()
    }

    /// Returns `true` while a flush is scheduled or draining.
    pub fn is_scheduled(&self) -> bool {
        self.shared.lock().scheduled
    }

    /// The executor this queue flushes on.
    pub fn executor(&self) -> &E {
        &self.shared.executor
    }
}

impl<E: Executor> Clone for DeferredQueue<E> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<E> Inner<E> {
    fn lock(&self) -> MutexGuard<'_, State> {
        // Actions never run under this lock, so a poisoned guard still
        // holds a consistent list.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Marks the queue as scheduled and hands one flush to the executor.
///
/// Must be called with the lock held and the flag clear.
fn schedule_flush<E: Executor>(shared: &Arc<Inner<E>>, state: &mut State) -> Result<()> {
    state.scheduled = true;

    let flusher = Arc::clone(shared);
    let callback: Callback = Box::new(move || flush(&flusher));

    match shared.executor.schedule(callback) {
        Ok(()) => {
            trace!("flush scheduled ({} pending)", state.pending.len());
            Ok(())
        }
        Err(err) => {
            state.scheduled = false;
            warn!(
                "could not schedule flush, {} actions stay queued: {err}",
                state.pending.len()
            );
            Err(err.into())
        }
    }
}

/// Drains the queue on the executor thread.
fn flush<E: Executor>(shared: &Arc<Inner<E>>) {
    loop {
        let batch = {
            let mut state = shared.lock();
            if state.pending.is_empty() {
                state.scheduled = false;
                return;
            }
            mem::take(&mut state.pending)
        };

        trace!("running {} deferred actions", batch.len());

        let mut run = Batch {
            shared,
            rest: batch,
            armed: true,
        };

        while let Some(action) = run.rest.pop_front() {
            action();
        }

        run.armed = false;
    }
}

/// Batch being run by [`flush`].
///
/// If an action unwinds, the actions that did not run go back to the front
/// of the pending list and the queue is rescheduled, so it never stays
/// marked as scheduled with no flush left to clear it.
struct Batch<'a, E: Executor> {
    shared: &'a Arc<Inner<E>>,
    rest: VecDeque<Action>,
    armed: bool,
}

impl<E: Executor> Drop for Batch<'_, E> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }

        let mut state = self.shared.lock();

        for action in mem::take(&mut self.rest).into_iter().rev() {
            state.pending.push_front(action);
        }

        state.scheduled = false;

        if !state.pending.is_empty() {
            let _ = schedule_flush(self.shared, &mut state);
        }
    }
}
