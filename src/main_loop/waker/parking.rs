use std::io;
use std::sync::{Condvar, Mutex, PoisonError};
use std::time::Duration;

/// Condvar-based wake signal for targets without a Unix poller.
pub(crate) struct Waker {
    notified: Mutex<bool>,
    condvar: Condvar,
}

impl Waker {
    pub(crate) fn new() -> io::Result<Self> {
        Ok(Self {
            notified: Mutex::new(false),
            condvar: Condvar::new(),
        })
    }

    /// Signals the sleeping loop.
    pub(crate) fn wake(&self) {
        *self.notified.lock().unwrap_or_else(PoisonError::into_inner) = true;
        self.condvar.notify_one();
    }

    /// Blocks until woken or until `timeout` elapses.
    pub(crate) fn wait(&self, timeout: Option<Duration>) -> io::Result<()> {
        let notified = self.notified.lock().unwrap_or_else(PoisonError::into_inner);

        let mut notified = match timeout {
            None => self
                .condvar
                .wait_while(notified, |n| !*n)
                .unwrap_or_else(PoisonError::into_inner),
            Some(t) => {
                self.condvar
                    .wait_timeout_while(notified, t, |n| !*n)
                    .unwrap_or_else(PoisonError::into_inner)
                    .0
            }
        };

        *notified = false;
        Ok(())
    }
}
