//! Integration tests for memoize.

#![cfg(feature = "cache")]

use fnutils::cache::{CacheKey, memoize};
use rstest::rstest;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::error::Error;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

/// A value whose serialization always fails, as a live handle's would.
struct Unserializable;

impl Serialize for Unserializable {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        Err(serde::ser::Error::custom("handle cannot be serialized"))
    }
}

/// A linked node that can be made to point back at itself.
struct Node {
    value: i32,
    next: RefCell<Option<Rc<Node>>>,
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Node", 2)?;
        state.serialize_field("value", &self.value)?;
        match &*self.next.borrow() {
            Some(next) => state.serialize_field("next", next.as_ref())?,
            None => state.serialize_field("next", &())?,
        }
        state.end()
    }
}

#[rstest]
fn memoize_runs_once_per_distinct_arguments() {
    let evaluations = Cell::new(0);
    let add = memoize(|(left, right): (i32, i32)| {
        evaluations.set(evaluations.get() + 1);
        left + right
    });

    assert_eq!(add.call((1, 2)).unwrap(), 3);
    assert_eq!(add.call((1, 2)).unwrap(), 3);
    assert_eq!(evaluations.get(), 1);

    // Argument order is part of the key.
    assert_eq!(add.call((2, 1)).unwrap(), 3);
    assert_eq!(evaluations.get(), 2);
    assert_eq!(add.len(), 2);
}

#[rstest]
#[case(vec![1, 2, 3], 3)]
#[case(vec![], 0)]
fn memoize_keys_structured_arguments(#[case] values: Vec<u32>, #[case] expected: usize) {
    let evaluations = Cell::new(0);
    let count = memoize(|values: Vec<u32>| {
        evaluations.set(evaluations.get() + 1);
        values.len()
    });

    assert_eq!(count.call(values.clone()).unwrap(), expected);
    assert_eq!(count.call(values.clone()).unwrap(), expected);
    assert!(count.contains(&values).unwrap());
    assert_eq!(evaluations.get(), 1);
}

#[rstest]
fn memoize_returns_clones_of_cached_results() {
    let build = memoize(|size: usize| vec![0_u8; size]);

    let mut first = build.call(4).unwrap();
    first.push(1);

    assert_eq!(build.call(4).unwrap(), vec![0; 4]);
}

#[rstest]
fn memoize_reports_unserializable_arguments_without_running() {
    let ran = Cell::new(false);
    let inspect = memoize(|_: Unserializable| ran.set(true));

    let error = inspect.call(Unserializable).unwrap_err();

    assert!(!ran.get());
    assert!(inspect.is_empty());
    assert!(error.to_string().contains("handle cannot be serialized"));
    assert!(error.source().is_some());
}

#[rstest]
fn memoize_rejects_self_referencing_arguments() {
    let node = Rc::new(Node {
        value: 7,
        next: RefCell::new(None),
    });
    *node.next.borrow_mut() = Some(Rc::clone(&node));

    let ran = Cell::new(false);
    let read = memoize(|node: &Node| {
        ran.set(true);
        node.value
    });

    let error = read.call(&*node).unwrap_err();

    assert!(!ran.get());
    assert!(read.is_empty());
    assert!(error.to_string().contains("recursion limit"));

    node.next.borrow_mut().take();
}

#[rstest]
fn memoize_rejects_maps_with_non_string_keys() {
    let size = memoize(|map: HashMap<(u8, u8), u8>| map.len());
    assert!(size.call(HashMap::from([((0, 0), 1)])).is_err());
}

#[rstest]
fn clear_forces_recomputation() {
    let evaluations = Cell::new(0);
    let square = memoize(|x: i64| {
        evaluations.set(evaluations.get() + 1);
        x * x
    });

    square.call(9).unwrap();
    square.clear();
    assert!(square.is_empty());
    assert!(!square.contains(&9).unwrap());

    square.call(9).unwrap();
    assert_eq!(evaluations.get(), 2);
}

#[rstest]
fn memoize_computes_once_under_contention() {
    let evaluations = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&evaluations);
    let slow_square = Arc::new(memoize(move |x: u64| {
        counter.fetch_add(1, Ordering::SeqCst);
        thread::sleep(std::time::Duration::from_millis(5));
        x * x
    }));

    let workers: Vec<_> = (0..8)
        .map(|_| {
            let slow_square = Arc::clone(&slow_square);
            thread::spawn(move || slow_square.call(12).unwrap())
        })
        .collect();

    for worker in workers {
        assert_eq!(worker.join().unwrap(), 144);
    }
    assert_eq!(evaluations.load(Ordering::SeqCst), 1);
}

#[rstest]
fn cache_key_matches_the_serialized_arguments() {
    let key = CacheKey::derive(&("users", 10)).unwrap();
    assert_eq!(key.to_string(), r#"["users",10]"#);
}
