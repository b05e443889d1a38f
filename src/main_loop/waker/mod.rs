//! Wake primitive used by the main loop to sleep.
//!
//! The loop sleeps in [`Waker::wait`] until another thread calls
//! [`Waker::wake`] or the timeout expires. A wake issued while the loop is
//! busy stays pending until the next `wait`, so a command sent between the
//! loop's last channel check and its sleep is never missed.
//!
//! The implementation is selected at compile time:
//! - Linux: an `eventfd`,
//! - other Unix targets: a non-blocking pipe,
//! - everything else: a mutex/condvar pair.

#[cfg(unix)]
mod unix;

#[cfg(not(unix))]
mod parking;

#[cfg(unix)]
pub(crate) use unix::Waker;

#[cfg(not(unix))]
pub(crate) use parking::Waker;
