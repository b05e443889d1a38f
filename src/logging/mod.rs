//! Logging setup.
//!
//! idlekit emits records through the `log` facade under the `idlekit`
//! target: `debug` for the main loop lifecycle, `trace` for flushes,
//! timers and quit requests, and `warn` when an executor refuses a flush.
//! [`init_logging`] installs `env_logger` so binaries and demos can see
//! them, e.g. with `RUST_LOG=idlekit=trace`.

mod init;

pub use init::{LoggingConfig, init_logging};
