use crate::dispatch::Callback;

use std::time::Instant;

/// Message sent from a [`LoopHandle`](super::LoopHandle) to its loop.
pub(crate) enum Command {
    /// Run the callback on the next turn.
    Idle(Callback),

    /// Run the callback once `deadline` has passed.
    Timer {
        deadline: Instant,
        callback: Callback,
    },

    /// Stop the current `run` with the given code.
    Quit(i32),
}
