use crate::dispatch::ScheduleError;

use std::io;

use thiserror::Error;

/// Errors reported by idlekit.
#[derive(Error, Debug)]
pub enum Error {
    /// The executor refused to schedule a flush or callback.
    #[error("scheduling failed: {0}")]
    SchedulingFailed(#[from] ScheduleError),

    /// The main loop's wake primitive could not be created or waited on.
    #[error("main loop I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
