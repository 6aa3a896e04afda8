//! Concurrency tests
//!
//! Collections are shared across threads through `Shared`; each call runs
//! under the instance's lock.

use crate::test_utils::*;
use std::collections::HashMap;
use std::sync::{Arc, Barrier};
use std::thread;

const THREADS: usize = 8;

#[test]
fn test_concurrent_appends_respect_capacity() {
    let shared = Shared::new(BoundedRankedContainer::new(50).unwrap());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let shared = shared.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                (0..10)
                    .filter(|i| shared.with(|c| c.append(t * 10 + i)).is_ok())
                    .count()
            })
        })
        .collect();

    let accepted: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
    assert_eq!(accepted, 50);
    assert_eq!(shared.with(|c| c.len()), 50);
    assert!(shared.with(|c| c.is_full()));
}

#[test]
fn test_ranking_lock_visible_across_threads() {
    let shared = Shared::new(FixedOrderRanking::from_order(["low", "mid", "high"]));

    let comparer = {
        let shared = shared.clone();
        thread::spawn(move || shared.with(|r| r.compare(&"low", &"high")))
    };
    let ordering = comparer.join().unwrap().unwrap();
    assert_eq!(ordering, std::cmp::Ordering::Less);

    let registrar = {
        let shared = shared.clone();
        thread::spawn(move || shared.with(|r| r.register("top")))
    };
    assert_eq!(
        registrar.join().unwrap(),
        Err(CollectionError::LockedRanking)
    );
    assert!(shared.with(|r| r.is_locked()));
}

#[test]
fn test_validating_map_shared_between_writers() {
    let map = ValidatingMap::builder(HashMap::<usize, String>::new())
        .key_predicate(|k: &usize| k % 2 == 0)
        .build()
        .unwrap();
    let shared = Shared::new(map);

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let shared = shared.clone();
            thread::spawn(move || {
                for i in 0..10 {
                    let key = t * 10 + i;
                    let _ = shared.with(|m| m.put(key, key.to_string()));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let map = shared.try_unwrap().unwrap();
    assert_eq!(map.len(), THREADS * 10 / 2);
    assert!(map.keys().all(|k| k % 2 == 0));
}

#[test]
fn test_filtering_cursor_drained_by_many_threads() {
    let source: Vec<i32> = (0..1000).collect();
    let cursor = FilteringCursor::with_predicate(source.into_iter(), is_even);
    let shared = Shared::new(cursor);

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let shared = shared.clone();
            thread::spawn(move || {
                let mut taken = Vec::new();
                while let Ok(n) = shared.with(|c| c.try_next()) {
                    taken.push(n);
                }
                taken
            })
        })
        .collect();

    let mut all: Vec<i32> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    all.sort_unstable();
    let expected: Vec<i32> = (0..1000).filter(|n| n % 2 == 0).collect();
    assert_eq!(all, expected);
}
