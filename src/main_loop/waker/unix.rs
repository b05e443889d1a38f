use libc::{POLLIN, c_int, c_void, close, poll, pollfd, read, write};
use std::io;
use std::os::fd::RawFd;
use std::time::Duration;

/// Number of bytes written per wake.
///
/// An `eventfd` only accepts 8-byte writes; a pipe just needs one byte.
#[cfg(target_os = "linux")]
const WAKE_LEN: usize = 8;

#[cfg(not(target_os = "linux"))]
const WAKE_LEN: usize = 1;

/// File-descriptor based wake signal.
///
/// On Linux `read` and `write` are the same `eventfd`; elsewhere they are
/// the two ends of a pipe. Both ends are non-blocking.
pub(crate) struct Waker {
    read: RawFd,
    write: RawFd,
}

impl Waker {
    #[cfg(target_os = "linux")]
    pub(crate) fn new() -> io::Result<Self> {
        let fd = unsafe { libc::eventfd(0, libc::EFD_NONBLOCK | libc::EFD_CLOEXEC) };
        if fd < 0 {
            return Err(io::Error::last_os_error());
        }

        Ok(Self { read: fd, write: fd })
    }

    #[cfg(not(target_os = "linux"))]
    pub(crate) fn new() -> io::Result<Self> {
        let mut fds: [c_int; 2] = [-1; 2];

        if unsafe { libc::pipe(fds.as_mut_ptr()) } < 0 {
            return Err(io::Error::last_os_error());
        }

        let waker = Self {
            read: fds[0],
            write: fds[1],
        };

        for fd in fds {
            sys_set_flags(fd)?;
        }

        Ok(waker)
    }

    /// Signals the sleeping loop.
    ///
    /// A full pipe or a saturated counter already means "woken", so write
    /// errors are ignored.
    pub(crate) fn wake(&self) {
        let buf: u64 = 1;
        unsafe {
            write(self.write, &buf as *const u64 as *const c_void, WAKE_LEN);
        }
    }

    /// Blocks until woken or until `timeout` elapses.
    ///
    /// `None` waits indefinitely. A pending wake is consumed.
    pub(crate) fn wait(&self, timeout: Option<Duration>) -> io::Result<()> {
        let mut fd = pollfd {
            fd: self.read,
            events: POLLIN,
            revents: 0,
        };

        let rc = unsafe { poll(&mut fd, 1, timeout_ms(timeout)) };

        if rc < 0 {
            let err = io::Error::last_os_error();
            if err.kind() == io::ErrorKind::Interrupted {
                return Ok(());
            }
            return Err(err);
        }

        if rc > 0 {
            self.drain();
        }

        Ok(())
    }

    fn drain(&self) {
        let mut buf = [0u8; 64];
        loop {
            let n = unsafe { read(self.read, buf.as_mut_ptr() as *mut c_void, buf.len()) };
            if n <= 0 {
                break;
            }
        }
    }
}

impl Drop for Waker {
    fn drop(&mut self) {
        unsafe {
            close(self.read);
            if self.write != self.read {
                close(self.write);
            }
        }
    }
}

/// Converts a timeout to `poll(2)` milliseconds, rounding up so the loop
/// never wakes just before a deadline and spins.
fn timeout_ms(timeout: Option<Duration>) -> c_int {
    match timeout {
        None => -1,
        Some(t) => {
            let ms = t.as_nanos().div_ceil(1_000_000);
            ms.min(c_int::MAX as u128) as c_int
        }
    }
}

/// Sets `O_NONBLOCK` and `FD_CLOEXEC` on a pipe end.
#[cfg(not(target_os = "linux"))]
fn sys_set_flags(fd: RawFd) -> io::Result<()> {
    use libc::{F_GETFD, F_GETFL, F_SETFD, F_SETFL, FD_CLOEXEC, O_NONBLOCK, fcntl};

    let flags = unsafe { fcntl(fd, F_GETFL) };
    if flags < 0 || unsafe { fcntl(fd, F_SETFL, flags | O_NONBLOCK) } < 0 {
        return Err(io::Error::last_os_error());
    }

    let flags = unsafe { fcntl(fd, F_GETFD) };
    if flags < 0 || unsafe { fcntl(fd, F_SETFD, flags | FD_CLOEXEC) } < 0 {
        return Err(io::Error::last_os_error());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;
    use std::thread;
    use std::time::Instant;

    #[test]
    fn wake_before_wait_is_not_lost() {
        let waker = Waker::new().unwrap();
        waker.wake();

        let start = Instant::now();
        waker.wait(Some(Duration::from_secs(5))).unwrap();
        assert!(start.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn wait_consumes_pending_wakes() {
        let waker = Waker::new().unwrap();
        waker.wake();
        waker.wake();
        waker.wait(None).unwrap();

        let start = Instant::now();
        waker.wait(Some(Duration::from_millis(20))).unwrap();
        assert!(start.elapsed() >= Duration::from_millis(15));
    }

    #[test]
    fn wake_from_another_thread() {
        let waker = Arc::new(Waker::new().unwrap());
        let remote = waker.clone();

        let t = thread::spawn(move || {
            thread::sleep(Duration::from_millis(10));
            remote.wake();
        });

        waker.wait(None).unwrap();
        t.join().unwrap();
    }

    #[test]
    fn timeout_rounds_up() {
        assert_eq!(timeout_ms(None), -1);
        assert_eq!(timeout_ms(Some(Duration::from_micros(1))), 1);
        assert_eq!(timeout_ms(Some(Duration::from_millis(3))), 3);
    }
}
