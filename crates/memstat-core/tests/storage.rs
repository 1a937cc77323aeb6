//! MemStorage semantics: overwrite, accumulate, and concurrent writers.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::thread;

use memstat_core::protocol::MetricUpdate;
use memstat_core::MemStorage;

#[test]
fn unknown_names_are_absent() {
    let s = MemStorage::new();
    assert_eq!(s.get_gauge("temp"), None);
    assert_eq!(s.get_counter("hits"), None);
}

#[test]
fn gauge_last_write_wins() {
    let s = MemStorage::new();
    for v in [1.0, -2.5, 36.6] {
        s.set_gauge("temp", v);
    }
    s.set_gauge("other", 100.0);
    assert_eq!(s.get_gauge("temp"), Some(36.6));

    // repeated identical writes leave the same final state
    s.set_gauge("temp", 36.6);
    assert_eq!(s.get_gauge("temp"), Some(36.6));
}

#[test]
fn counter_accumulates() {
    let s = MemStorage::new();
    s.add_counter("hits", 5);
    s.add_counter("hits", 5);
    assert_eq!(s.get_counter("hits"), Some(10));

    s.add_counter("hits", -12);
    assert_eq!(s.get_counter("hits"), Some(-2));
}

#[test]
fn zero_delta_creates_counter() {
    let s = MemStorage::new();
    s.add_counter("idle", 0);
    assert_eq!(s.get_counter("idle"), Some(0));
}

#[test]
fn counter_overflow_wraps() {
    let s = MemStorage::new();
    s.add_counter("big", i64::MAX);
    s.add_counter("big", 1);
    assert_eq!(s.get_counter("big"), Some(i64::MIN));
}

#[test]
fn gauge_and_counter_namespaces_are_independent() {
    let s = MemStorage::new();
    s.set_gauge("x", 1.5);
    s.add_counter("x", 7);
    assert_eq!(s.get_gauge("x"), Some(1.5));
    assert_eq!(s.get_counter("x"), Some(7));
}

#[test]
fn apply_dispatches_by_kind() {
    let s = MemStorage::new();
    s.apply(&MetricUpdate::Gauge { name: "temp".into(), value: 20.0 });
    s.apply(&MetricUpdate::Counter { name: "hits".into(), delta: 3 });
    s.apply(&MetricUpdate::Counter { name: "hits".into(), delta: 4 });
    assert_eq!(s.get_gauge("temp"), Some(20.0));
    assert_eq!(s.get_counter("hits"), Some(7));
}

#[test]
fn concurrent_counter_adds_are_not_lost() {
    let s = Arc::new(MemStorage::new());
    let threads: Vec<_> = (0..8)
        .map(|t| {
            let s = Arc::clone(&s);
            thread::spawn(move || {
                for i in 0..1000 {
                    s.add_counter("hits", 1);
                    s.set_gauge(&format!("g{t}"), i as f64);
                }
            })
        })
        .collect();
    for t in threads {
        t.join().unwrap();
    }

    assert_eq!(s.get_counter("hits"), Some(8000));
    for t in 0..8 {
        assert_eq!(s.get_gauge(&format!("g{t}")), Some(999.0));
    }
}
