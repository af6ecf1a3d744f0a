//! Integration tests for debounce.
//!
//! Timings run on `ManualScheduler`, whose virtual clock only moves when a
//! test advances it.

#![cfg(feature = "timing")]

use fnutils::timing::{ManualScheduler, debounce};
use rstest::rstest;
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn recorder<T: Send + 'static>() -> (Arc<Mutex<Vec<T>>>, impl Fn(T) + Send + Sync + 'static) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    (log, move |value| sink.lock().unwrap().push(value))
}

const fn millis(value: u64) -> Duration {
    Duration::from_millis(value)
}

// =============================================================================
// Trailing edge
// =============================================================================

#[rstest]
fn debounce_fires_once_with_last_arguments_after_quiet_period() {
    let scheduler = ManualScheduler::new();
    let (log, record) = recorder();
    let debounced = debounce(record, millis(50), scheduler.clone());

    debounced.call(0);
    scheduler.advance(millis(10));
    debounced.call(10);
    scheduler.advance(millis(10));
    debounced.call(20);

    // t = 69: still quiet for less than the delay
    scheduler.advance(millis(49));
    assert!(log.lock().unwrap().is_empty());

    // t = 70: fires with the last arguments
    scheduler.advance(millis(1));
    assert_eq!(*log.lock().unwrap(), vec![20]);
    assert_eq!(scheduler.now(), millis(70));
}

#[rstest]
fn debounce_fires_again_after_a_new_burst() {
    let scheduler = ManualScheduler::new();
    let (log, record) = recorder();
    let debounced = debounce(record, millis(30), scheduler.clone());

    debounced.call("first");
    scheduler.advance(millis(30));
    debounced.call("second");
    scheduler.advance(millis(30));

    assert_eq!(*log.lock().unwrap(), vec!["first", "second"]);
}

#[rstest]
#[case(1)]
#[case(5)]
#[case(100)]
fn debounce_keeps_a_single_pending_invocation(#[case] calls: u32) {
    let scheduler = ManualScheduler::new();
    let (log, record) = recorder();
    let debounced = debounce(record, millis(20), scheduler.clone());

    for call in 0..calls {
        debounced.call(call);
    }

    assert_eq!(scheduler.pending(), 1);
    scheduler.advance(millis(20));
    assert_eq!(*log.lock().unwrap(), vec![calls - 1]);
    assert!(!debounced.is_pending());
}

#[rstest]
fn debounce_passes_tuple_arguments() {
    let scheduler = ManualScheduler::new();
    let (log, record) = recorder();
    let debounced = debounce(record, millis(5), scheduler.clone());

    debounced.call(("query", 2));
    scheduler.advance(millis(5));

    assert_eq!(*log.lock().unwrap(), vec![("query", 2)]);
}

// =============================================================================
// Cancellation
// =============================================================================

#[rstest]
fn cancel_drops_the_pending_invocation() {
    let scheduler = ManualScheduler::new();
    let (log, record) = recorder();
    let debounced = debounce(record, millis(50), scheduler.clone());

    debounced.call(1);
    assert!(debounced.is_pending());
    assert!(debounced.cancel());
    assert!(!debounced.cancel());

    scheduler.advance(millis(100));
    assert!(log.lock().unwrap().is_empty());
}

#[rstest]
fn debounce_still_fires_after_wrapper_is_dropped() {
    let scheduler = ManualScheduler::new();
    let (log, record) = recorder();

    {
        let debounced = debounce(record, millis(10), scheduler.clone());
        debounced.call(7);
    }

    scheduler.advance(millis(10));
    assert_eq!(*log.lock().unwrap(), vec![7]);
}

// =============================================================================
// Failure isolation
// =============================================================================

#[rstest]
fn panicking_invocation_does_not_break_later_calls() {
    let scheduler = ManualScheduler::new();
    let (log, record) = recorder();
    let debounced = debounce(
        move |value: i32| {
            assert!(value >= 0, "negative input");
            record(value);
        },
        millis(10),
        scheduler.clone(),
    );

    debounced.call(-1);
    assert_eq!(scheduler.advance(millis(10)), 1);
    assert!(!debounced.is_pending());

    debounced.call(3);
    scheduler.advance(millis(10));
    assert_eq!(*log.lock().unwrap(), vec![3]);
}
