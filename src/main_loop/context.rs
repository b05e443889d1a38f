use super::handle::LoopHandle;

use std::cell::RefCell;

thread_local! {
    /// Handle of the loop currently dispatching on this thread.
    pub(crate) static CURRENT_LOOP: RefCell<Option<LoopHandle>> =
        const { RefCell::new(None) };
}

/// Installs `handle` as the current loop for the duration of `f`.
///
/// The previous value is restored afterwards, also when `f` unwinds, so
/// nested loops on one thread see their own handle.
pub(crate) fn enter_context<R>(handle: LoopHandle, f: impl FnOnce() -> R) -> R {
    struct Restore(Option<LoopHandle>);

    impl Drop for Restore {
        fn drop(&mut self) {
            let prev = self.0.take();
            CURRENT_LOOP.with(|c| *c.borrow_mut() = prev);
        }
    }

    let prev = CURRENT_LOOP.with(|c| c.replace(Some(handle)));
    let _restore = Restore(prev);

    f()
}

/// Returns a clone of the current loop handle, if any.
pub(crate) fn current() -> Option<LoopHandle> {
    CURRENT_LOOP.with(|c| c.borrow().clone())
}
