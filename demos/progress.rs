//! Worker threads reporting progress to a main loop.
//!
//! Run with `RUST_LOG=idlekit=trace` to watch updates coalesce into a few
//! flushes.

use idlekit::logging::{LoggingConfig, init_logging};
use idlekit::{LoopHandle, markup};

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

const WORKERS: usize = 4;
const STEPS: usize = 250;

#[idlekit::main(name = "progress")]
fn main() {
    init_logging(LoggingConfig::default());

    let handle = LoopHandle::current().expect("running inside the main loop");
    let queue = idlekit::DeferredQueue::new(handle.clone());
    let finished = Arc::new(AtomicUsize::new(0));

    for worker in 0..WORKERS {
        let queue = queue.clone();
        let handle = handle.clone();
        let finished = finished.clone();

        thread::spawn(move || {
            for step in 1..=STEPS {
                if step % 50 == 0 {
                    let line = format!("worker {worker}: {step}/{STEPS}");
                    queue
                        .defer(move || println!("{}", markup::mono(&markup::escape(&line))))
                        .expect("main loop closed");
                }
                thread::sleep(Duration::from_micros(200));
            }

            queue
                .defer(move || {
                    if finished.fetch_add(1, Ordering::SeqCst) + 1 == WORKERS {
                        println!("{}", markup::bold("all workers done"));
                        let _ = handle.quit(0);
                    }
                })
                .expect("main loop closed");
        });
    }

    handle
        .timeout(Duration::from_secs(30), || {
            eprintln!("workers stalled");
            std::process::exit(1);
        })
        .expect("main loop closed");
}
