//! A minimal serial executor.
//!
//! This module provides [`MainLoop`], a single-threaded loop that runs idle
//! callbacks and timers sent from any thread through [`LoopHandle`]s. It is
//! the executor a [`DeferredQueue`](crate::DeferredQueue) flushes on when no
//! host toolkit loop is available, and what the `#[idlekit::main]` and
//! `#[idlekit::test]` attributes drive.
//!
//! It is composed of:
//! - `core`: the loop itself and its dispatch cycle,
//! - `handle`: the cloneable, thread-safe sending side,
//! - `builder`: loop configuration,
//! - `waker`: the OS primitive the loop sleeps on,
//! - `context`: the thread-local "current loop".

mod command;
mod context;
mod timer;
mod waker;

mod builder;
mod core;
mod handle;

pub use self::builder::MainLoopBuilder;
pub use self::core::MainLoop;
pub use self::handle::LoopHandle;
