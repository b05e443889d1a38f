use idlekit::{DeferredQueue, Error, LoopHandle, MainLoopBuilder, ScheduleError};
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

#[test]
fn test_block_on_returns_value() {
    let mut main_loop = MainLoopBuilder::new().build().unwrap();

    let result = main_loop.block_on(|| 42).unwrap();
    assert_eq!(result, 42);
}

#[test]
fn test_current_handle_only_inside_loop() {
    let mut main_loop = MainLoopBuilder::new().name("ui").build().unwrap();

    assert!(LoopHandle::current().is_none());

    let name = main_loop
        .block_on(|| LoopHandle::current().map(|h| h.name().to_string()))
        .unwrap();

    assert_eq!(name.as_deref(), Some("ui"));
    assert!(LoopHandle::current().is_none());
}

#[test]
fn test_idle_callbacks_run_in_order() {
    let mut main_loop = MainLoopBuilder::new().build().unwrap();
    let handle = main_loop.handle();
    let order = Arc::new(Mutex::new(Vec::new()));

    main_loop
        .block_on(|| {
            for i in 0..5 {
                let order = order.clone();
                handle.idle(move || order.lock().unwrap().push(i)).unwrap();
            }
        })
        .unwrap();

    assert_eq!(*order.lock().unwrap(), vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_idle_queue_from_many_threads() {
    const THREADS: usize = 4;
    const PER_THREAD: usize = 500;

    let mut main_loop = MainLoopBuilder::new().build().unwrap();
    let handle = main_loop.handle();
    let queue = main_loop.idle_queue();

    let loop_thread = thread::current().id();
    let counter = Arc::new(AtomicUsize::new(0));
    let off_thread = Arc::new(AtomicUsize::new(0));

    let mut workers = Vec::new();
    for _ in 0..THREADS {
        let queue = queue.clone();
        let handle = handle.clone();
        let counter = counter.clone();
        let off_thread = off_thread.clone();

        workers.push(thread::spawn(move || {
            for _ in 0..PER_THREAD {
                let counter = counter.clone();
                let off_thread = off_thread.clone();
                let handle = handle.clone();

                queue
                    .defer(move || {
                        if thread::current().id() != loop_thread {
                            off_thread.fetch_add(1, Ordering::SeqCst);
                        }
                        if counter.fetch_add(1, Ordering::SeqCst) + 1 == THREADS * PER_THREAD {
                            handle.quit(0).unwrap();
                        }
                    })
                    .unwrap();
            }
        }));
    }

    let code = main_loop.run().unwrap();

    for worker in workers {
        worker.join().unwrap();
    }

    assert_eq!(code, 0);
    assert_eq!(counter.load(Ordering::SeqCst), THREADS * PER_THREAD);
    assert_eq!(off_thread.load(Ordering::SeqCst), 0);
    assert!(!queue.is_scheduled());
}

#[test]
fn test_idle_queue_drains_reentrant_work() {
    let mut main_loop = MainLoopBuilder::new().build().unwrap();
    let queue = main_loop.idle_queue();
    let log = Arc::new(Mutex::new(Vec::new()));

    main_loop
        .block_on(|| {
            let inner = queue.clone();
            let log_a = log.clone();
            let log_c = log.clone();

            queue
                .defer(move || {
                    log_a.lock().unwrap().push("A");
                    inner
                        .defer(move || log_c.lock().unwrap().push("C"))
                        .unwrap();
                })
                .unwrap();

            let log_b = log.clone();
            queue.defer(move || log_b.lock().unwrap().push("B")).unwrap();
        })
        .unwrap();

    assert_eq!(*log.lock().unwrap(), vec!["A", "B", "C"]);
    assert!(!queue.is_scheduled());
}

#[test]
fn test_timers_fire_in_deadline_order() {
    let mut main_loop = MainLoopBuilder::new().build().unwrap();
    let handle = main_loop.handle();
    let order = Arc::new(Mutex::new(Vec::new()));

    let code = main_loop
        .run_with(|| {
            for (delay, name) in [(30, "c"), (10, "a"), (20, "b")] {
                let order = order.clone();
                handle
                    .timeout(Duration::from_millis(delay), move || {
                        order.lock().unwrap().push(name)
                    })
                    .unwrap();
            }

            let quitter = handle.clone();
            handle
                .timeout(Duration::from_millis(40), move || quitter.quit(3).unwrap())
                .unwrap();
        })
        .unwrap();

    assert_eq!(code, 3);
    assert_eq!(*order.lock().unwrap(), vec!["a", "b", "c"]);
}

#[test]
fn test_timer_waits_for_deadline() {
    let mut main_loop = MainLoopBuilder::new().build().unwrap();
    let handle = main_loop.handle();

    let start = Instant::now();
    main_loop
        .run_with(|| {
            let quitter = handle.clone();
            handle
                .timeout(Duration::from_millis(25), move || quitter.quit(0).unwrap())
                .unwrap();
        })
        .unwrap();

    assert!(start.elapsed() >= Duration::from_millis(25));
}

#[test]
fn test_block_on_keeps_future_timers() {
    let mut main_loop = MainLoopBuilder::new().build().unwrap();
    let handle = main_loop.handle();
    let fired = Arc::new(AtomicUsize::new(0));

    let start = Instant::now();
    let counter = fired.clone();
    main_loop
        .block_on(|| {
            handle
                .timeout(Duration::from_secs(3600), move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                })
                .unwrap();
        })
        .unwrap();

    assert!(start.elapsed() < Duration::from_secs(5));
    assert_eq!(fired.load(Ordering::SeqCst), 0);
}

#[test]
fn test_unrepresentable_timeout_is_rejected() {
    let mut main_loop = MainLoopBuilder::new().build().unwrap();
    let handle = main_loop.handle();
    let fired = Arc::new(AtomicUsize::new(0));

    let counter = fired.clone();
    let result = handle.timeout(Duration::MAX, move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    assert!(matches!(result, Err(ScheduleError::Rejected(_))));

    assert_eq!(main_loop.block_on(|| 7).unwrap(), 7);
    assert_eq!(fired.load(Ordering::SeqCst), 0);
}

#[test]
fn test_commands_after_quit_wait_for_next_run() {
    let mut main_loop = MainLoopBuilder::new().build().unwrap();
    let handle = main_loop.handle();
    let ran = Arc::new(AtomicUsize::new(0));

    let counter = ran.clone();
    let code = main_loop
        .run_with(|| {
            handle.quit(1).unwrap();
            handle
                .idle(move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                })
                .unwrap();
        })
        .unwrap();

    assert_eq!(code, 1);
    assert_eq!(ran.load(Ordering::SeqCst), 0);

    main_loop.block_on(|| ()).unwrap();
    assert_eq!(ran.load(Ordering::SeqCst), 1);
}

#[test]
fn test_handle_closed_after_drop() {
    let main_loop = MainLoopBuilder::new().build().unwrap();
    let handle = main_loop.handle();
    let queue = DeferredQueue::new(handle.clone());

    drop(main_loop);

    assert_eq!(handle.idle(|| {}), Err(ScheduleError::Closed));
    assert_eq!(handle.quit(0), Err(ScheduleError::Closed));

    let err = queue.defer(|| {}).unwrap_err();
    assert!(matches!(
        err,
        Error::SchedulingFailed(ScheduleError::Closed)
    ));
    assert!(!queue.is_scheduled());
}

#[test]
fn test_panicking_callback_unwinds_to_driver() {
    let mut main_loop = MainLoopBuilder::new().build().unwrap();
    let handle = main_loop.handle();

    let result = catch_unwind(AssertUnwindSafe(|| {
        main_loop.block_on(|| handle.idle(|| panic!("callback failed")).unwrap())
    }));
    assert!(result.is_err());
    assert!(LoopHandle::current().is_none());

    assert_eq!(main_loop.block_on(|| 5).unwrap(), 5);
}

#[idlekit::test]
fn test_attribute_runs_on_loop() {
    let handle = LoopHandle::current().expect("inside main loop");
    assert_eq!(handle.name(), "main");
}

#[idlekit::test(name = "named")]
fn test_attribute_with_name() {
    let handle = LoopHandle::current().expect("inside main loop");
    assert_eq!(handle.name(), "named");
}
