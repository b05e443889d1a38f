//! # idlekit
//!
//! **idlekit** helps background threads talk to a single-threaded UI loop.
//!
//! Toolkits such as GTK only allow their objects to be touched from the
//! thread running the main loop. Worker threads therefore have to hand
//! their updates over as callbacks, and scheduling one loop callback per
//! update quickly floods the loop. idlekit's [`DeferredQueue`] collects
//! those callbacks from any number of threads and runs them in a single
//! loop turn, draining whatever gets added while it is flushing.
//!
//! The crate provides:
//!
//! - a **batching dispatcher** ([`DeferredQueue`]) over any serial
//!   [`Executor`],
//! - a small **main loop** ([`MainLoop`], [`LoopHandle`]) with idle
//!   callbacks and timers, usable as that executor,
//! - **markup** helpers for Pango-formatted labels,
//! - typed **lookup** of named objects with accumulated errors,
//! - `#[idlekit::main]` and `#[idlekit::test]` attributes.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use idlekit::LoopHandle;
//! use std::thread;
//!
//! #[idlekit::main]
//! fn main() {
//!     let handle = LoopHandle::current().unwrap();
//!     let queue = idlekit::DeferredQueue::new(handle.clone());
//!
//!     thread::spawn(move || {
//!         for i in 0..1000 {
//!             queue.defer(move || println!("progress {i}")).unwrap();
//!         }
//!         queue.defer(move || handle.quit(0).unwrap()).unwrap();
//!     });
//! }
//! ```
//!
//! ## Modules
//!
//! - [`dispatch`] — the deferred queue and the executor contract
//! - [`main_loop`] — the built-in serial executor
//! - [`markup`] — Pango markup formatting
//! - [`lookup`] — typed object lookup
//! - [`logging`] — `env_logger` setup

mod error;

pub mod dispatch;
pub mod logging;
pub mod lookup;
pub mod main_loop;
pub mod markup;

pub use dispatch::{Action, Callback, DeferredQueue, Executor, ScheduleError, Shared};
pub use error::{Error, Result};
pub use main_loop::{LoopHandle, MainLoop, MainLoopBuilder};

pub use idlekit_macros::*;
