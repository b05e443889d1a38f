use super::command::Command;
use super::context::enter_context;
use super::handle::LoopHandle;
use super::timer::TimerEntry;
use super::waker::Waker;
use crate::dispatch::DeferredQueue;
use crate::error::Result;

use std::collections::BinaryHeap;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, channel};
use std::time::Instant;

use log::{debug, trace};

/// A single-threaded dispatch loop.
///
/// `MainLoop` is the serial executor idlekit schedules onto. It does not
/// own a thread: whichever thread calls [`run`](Self::run),
/// [`run_with`](Self::run_with) or [`block_on`](Self::block_on) becomes the
/// loop thread for that call, and every idle callback and timer runs there,
/// one at a time.
///
/// Other threads talk to the loop through [`LoopHandle`]s, or batch work
/// through the loop's [`idle_queue`](Self::idle_queue).
///
/// A callback that panics unwinds out of the driving call; the loop and its
/// pending commands stay usable afterwards.
pub struct MainLoop {
    /// Receiving side of the command channel.
    receiver: Receiver<Command>,

    /// Handle kept for the idle queue and the thread-local context.
    handle: LoopHandle,

    waker: Arc<Waker>,

    /// Pending timers, earliest deadline first.
    timers: BinaryHeap<TimerEntry>,

    /// Next timer sequence number.
    next_seq: u64,

    /// Batching queue bound to this loop.
    idle: DeferredQueue<LoopHandle>,
}

impl MainLoop {
    /// Creates a loop. Called by [`MainLoopBuilder::build`](super::MainLoopBuilder::build).
    pub(crate) fn new(name: String) -> Result<Self> {
        let (sender, receiver) = channel();
        let waker = Arc::new(Waker::new()?);
        let handle = LoopHandle::new(sender, waker.clone(), name.into());
        let idle = DeferredQueue::new(handle.clone());

        debug!("[{}] main loop created", handle.name());

        Ok(Self {
            receiver,
            handle,
            waker,
            timers: BinaryHeap::new(),
            next_seq: 0,
            idle,
        })
    }

    /// Returns a new handle to this loop.
    pub fn handle(&self) -> LoopHandle {
        self.handle.clone()
    }

    /// Returns the loop's shared batching queue.
    ///
    /// All clones submit into the same pending list, so updates from many
    /// threads coalesce into as few loop turns as possible.
    pub fn idle_queue(&self) -> DeferredQueue<LoopHandle> {
        self.idle.clone()
    }

    /// The loop name given to the builder.
    pub fn name(&self) -> &str {
        self.handle.name()
    }

    /// Dispatches commands until a quit is received and returns its code.
    ///
    /// When no command is pending and no timer is due, the calling thread
    /// sleeps until a handle sends something or the next timer deadline
    /// passes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if waiting on the wake
    /// primitive fails.
    pub fn run(&mut self) -> Result<i32> {
        let handle = self.handle.clone();
        debug!("[{}] main loop running", handle.name());

        let code = enter_context(handle, || self.dispatch(true))?.unwrap_or_default();

        debug!("[{}] main loop quit with code {code}", self.name());
        Ok(code)
    }

    /// Runs `f` on the loop thread, then [`run`](Self::run)s.
    pub fn run_with<F>(&mut self, f: F) -> Result<i32>
    where
        F: FnOnce(),
    {
        enter_context(self.handle.clone(), f);
        self.run()
    }

    /// Runs `f` on the loop thread, then dispatches everything already
    /// pending before returning `f`'s output.
    ///
    /// Dispatching stops once no command is queued and no timer is due, or
    /// when a quit is received. Timers that are not due yet stay queued for
    /// a later run. Work that other threads submit after that point is not
    /// waited for.
    pub fn block_on<F, T>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce() -> T,
    {
        let handle = self.handle.clone();

        let out = enter_context(handle.clone(), f);
        enter_context(handle, || self.dispatch(false))?;

        Ok(out)
    }

    /// Core dispatch loop.
    ///
    /// With `block` set, sleeps when idle and only returns on quit.
    /// Otherwise returns `Ok(None)` as soon as a full pass finds nothing to
    /// do. Returns `Ok(Some(code))` when a quit is dispatched.
    fn dispatch(&mut self, block: bool) -> Result<Option<i32>> {
        loop {
            let mut dispatched = false;

            while let Ok(command) = self.receiver.try_recv() {
                dispatched = true;

                match command {
                    Command::Idle(callback) => callback(),
                    Command::Timer { deadline, callback } => {
                        let seq = self.next_seq;
                        self.next_seq += 1;
                        self.timers.push(TimerEntry {
                            deadline,
                            seq,
                            callback,
                        });
                    }
                    Command::Quit(code) => return Ok(Some(code)),
                }
            }

            dispatched |= self.fire_due_timers();

            if dispatched {
                continue;
            }

            if !block {
                return Ok(None);
            }

            let timeout = self
                .timers
                .peek()
                .map(|t| t.deadline.saturating_duration_since(Instant::now()));

            self.waker.wait(timeout)?;
        }
    }

    /// Runs every timer whose deadline has passed.
    ///
    /// Returns `true` if at least one timer fired.
    fn fire_due_timers(&mut self) -> bool {
        let now = Instant::now();
        let mut fired = false;

        while self.timers.peek().is_some_and(|t| t.deadline <= now) {
            let Some(timer) = self.timers.pop() else {
                break;
            };

            trace!("[{}] timer {} fired", self.name(), timer.seq);
            (timer.callback)();
            fired = true;
        }

        fired
    }
}
