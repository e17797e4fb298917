#![cfg(feature = "async")]
//! Decorators driven by the tokio timer with paused time.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::{advance, sleep};
use underbar::decorator::{
    Clock, SchedulerError, ThrottleOutcome, TokioScheduler, delay, throttle,
};

#[tokio::test(start_paused = true)]
async fn throttle_leading_and_trailing_on_tokio_time() {
    let scheduler = Arc::new(TokioScheduler::try_current().unwrap());
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    let clock = Arc::clone(&scheduler);
    let throttled = throttle(
        move |label: &'static str| sink.lock().push((label, clock.now())),
        Duration::from_millis(100),
        Arc::clone(&scheduler),
    );

    assert_eq!(throttled.call("t0"), ThrottleOutcome::Executed);
    advance(Duration::from_millis(30)).await;
    assert!(matches!(
        throttled.call("t30"),
        ThrottleOutcome::Deferred { .. }
    ));
    advance(Duration::from_millis(20)).await;
    assert_eq!(throttled.call("t50"), ThrottleOutcome::Dropped);

    sleep(Duration::from_millis(100)).await;
    let log = log.lock();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].0, "t0");
    assert_eq!(log[1].0, "t30");
    assert!(log[1].1 >= Duration::from_millis(101));
}

#[tokio::test(start_paused = true)]
async fn delay_fires_on_tokio_time() {
    let scheduler = TokioScheduler::try_current().unwrap();
    let (sender, receiver) = tokio::sync::oneshot::channel();
    delay(
        &scheduler,
        Duration::from_secs(5),
        move |value: u32| sender.send(value),
        7,
    );
    assert_eq!(receiver.await, Ok(7));
    assert!(scheduler.now() >= Duration::from_secs(5));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn throttle_trailing_call_runs_on_worker() {
    let scheduler = Arc::new(TokioScheduler::try_current().unwrap());
    let (sender, mut receiver) = tokio::sync::mpsc::unbounded_channel();
    let throttled = throttle(
        move |value: u8| {
            let _ = sender.send(value);
        },
        Duration::from_millis(20),
        scheduler,
    );

    throttled.call(1);
    throttled.call(2);
    assert_eq!(receiver.recv().await, Some(1));
    assert_eq!(receiver.recv().await, Some(2));
}

#[test]
fn scheduler_requires_a_runtime() {
    assert_eq!(
        TokioScheduler::try_current().unwrap_err(),
        SchedulerError::NoRuntime
    );
    assert_eq!(
        SchedulerError::NoRuntime.to_string(),
        "no tokio runtime is running on this thread"
    );
}
