//! Cross-thread deferred execution.
//!
//! This module contains the batching dispatcher used to hand work from
//! arbitrary threads to a single serial executor (a UI loop, a reactor,
//! an actor mailbox).
//!
//! It is composed of:
//! - [`Executor`]: the contract a serial loop fulfils to accept callbacks,
//!   with [`Shared`] for executors held behind an `Arc`,
//! - [`DeferredQueue`]: a lock-protected pending list with a single
//!   "flush scheduled" flag, which coalesces many submissions into one
//!   executor round-trip and drains work added while it is flushing.

mod executor;
mod queue;

pub use executor::{Callback, Executor, ScheduleError, Shared};
pub use queue::{Action, DeferredQueue};
