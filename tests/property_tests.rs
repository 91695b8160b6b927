//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and check the heap
//! against a plain multiset model after every step.

use proptest::prelude::*;
use rust_fibonacci_heap::fibonacci::{FibonacciHandle, FibonacciHeap};
use rust_fibonacci_heap::HeapError;
use std::collections::HashMap;

#[derive(Debug, Clone)]
enum Op {
    Insert(i32),
    ExtractMin,
    DecreaseKey(usize, i32),
    Erase(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (-1000i32..1000).prop_map(Op::Insert),
        2 => Just(Op::ExtractMin),
        2 => (any::<usize>(), -2000i32..1000).prop_map(|(i, k)| Op::DecreaseKey(i, k)),
        1 => any::<usize>().prop_map(Op::Erase),
    ]
}

fn sorted(mut keys: Vec<i32>) -> Vec<i32> {
    keys.sort_unstable();
    keys
}

proptest! {
    #[test]
    fn prop_drain_is_sorted_input(keys in prop::collection::vec(any::<i32>(), 0..300)) {
        let heap: FibonacciHeap<i32> = keys.iter().copied().collect();
        prop_assert_eq!(heap.len(), keys.len());
        prop_assert_eq!(heap.into_sorted_vec(), sorted(keys));
    }

    #[test]
    fn prop_len_tracks_inserts_and_extracts(ops in prop::collection::vec(any::<Option<i16>>(), 0..300)) {
        let mut heap = FibonacciHeap::new();
        let mut expected = 0usize;
        for op in ops {
            match op {
                Some(key) => {
                    heap.insert(key);
                    expected += 1;
                }
                None => {
                    let extracted = heap.extract_min();
                    if expected == 0 {
                        prop_assert_eq!(extracted, Err(HeapError::EmptyHeap));
                    } else {
                        prop_assert!(extracted.is_ok());
                        expected -= 1;
                    }
                }
            }
            prop_assert_eq!(heap.len(), expected);
            prop_assert_eq!(heap.is_empty(), expected == 0);
            prop_assert_eq!(heap.get_min().is_err(), expected == 0);
        }
    }

    #[test]
    fn prop_mixed_operations_match_model(ops in prop::collection::vec(op_strategy(), 1..200)) {
        let mut heap = FibonacciHeap::new();
        let mut handles: Vec<FibonacciHandle> = Vec::new();
        // live handle index -> current key
        let mut model: HashMap<usize, i32> = HashMap::new();

        for op in ops {
            match op {
                Op::Insert(key) => {
                    model.insert(handles.len(), key);
                    handles.push(heap.insert(key));
                }
                Op::ExtractMin => {
                    let expected = model.values().min().copied();
                    match expected {
                        None => prop_assert_eq!(heap.extract_min(), Err(HeapError::EmptyHeap)),
                        Some(min) => {
                            prop_assert_eq!(heap.extract_min(), Ok(min));
                            // ties may leave any of the equal keys behind
                            let gone = model
                                .iter()
                                .find(|&(&i, &k)| k == min && !heap.contains(&handles[i]))
                                .map(|(&i, _)| i);
                            prop_assert!(gone.is_some());
                            if let Some(i) = gone {
                                model.remove(&i);
                            }
                        }
                    }
                }
                Op::DecreaseKey(i, key) if !handles.is_empty() => {
                    let idx = i % handles.len();
                    let result = heap.decrease_key(&handles[idx], key);
                    let current = model.get(&idx).copied();
                    match current {
                        None => prop_assert_eq!(result, Err(HeapError::InvalidHandle)),
                        Some(current) if key > current => {
                            prop_assert_eq!(result, Err(HeapError::InvalidArgument));
                            prop_assert_eq!(heap.key_of(&handles[idx]), Ok(&current));
                        }
                        Some(_) => {
                            prop_assert_eq!(result, Ok(()));
                            model.insert(idx, key);
                        }
                    }
                }
                Op::Erase(i) if !handles.is_empty() => {
                    let idx = i % handles.len();
                    match model.remove(&idx) {
                        None => prop_assert_eq!(heap.erase(&handles[idx]), Err(HeapError::InvalidHandle)),
                        Some(key) => prop_assert_eq!(heap.erase(&handles[idx]), Ok(key)),
                    }
                }
                _ => {}
            }

            prop_assert_eq!(heap.len(), model.len());
            prop_assert_eq!(heap.get_min().ok().copied(), model.values().min().copied());
            prop_assert!(heap.verify_internal_structure());
        }

        prop_assert_eq!(heap.into_sorted_vec(), sorted(model.into_values().collect()));
    }

    #[test]
    fn prop_rejected_decrease_key_is_noop(
        keys in prop::collection::vec(-100i32..100, 1..60),
        pick in any::<usize>(),
        bump in 1i32..50,
    ) {
        let mut heap = FibonacciHeap::new();
        let handles: Vec<_> = keys.iter().map(|&k| heap.insert(k)).collect();
        // force some tree structure first
        heap.insert(i32::MIN);
        heap.extract_min().unwrap();

        let idx = pick % handles.len();
        let roots = heap.root_count();
        let min = heap.get_min().ok().copied();

        prop_assert_eq!(heap.decrease_key(&handles[idx], keys[idx] + bump), Err(HeapError::InvalidArgument));
        prop_assert_eq!(heap.root_count(), roots);
        prop_assert_eq!(heap.get_min().ok().copied(), min);
        prop_assert_eq!(heap.len(), keys.len());
        prop_assert_eq!(heap.into_sorted_vec(), sorted(keys));
    }

    #[test]
    fn prop_erase_removes_exactly_one(
        keys in prop::collection::vec(-50i32..50, 1..80),
        pick in any::<usize>(),
        warmup in 0usize..10,
    ) {
        let mut heap = FibonacciHeap::new();
        let handles: Vec<_> = keys.iter().map(|&k| heap.insert(k)).collect();
        let mut remaining = keys.clone();

        // extracting a few first turns the handles into interior nodes
        let idx = pick % handles.len();
        for _ in 0..warmup {
            let min = heap.get_min().copied().unwrap();
            if heap.key_of(&handles[idx]) == Ok(&min) {
                break;
            }
            heap.extract_min().unwrap();
            let pos = remaining.iter().position(|&k| k == min).unwrap();
            remaining.swap_remove(pos);
        }

        prop_assert!(heap.contains(&handles[idx]));
        prop_assert_eq!(heap.erase(&handles[idx]), Ok(keys[idx]));
        let pos = remaining.iter().position(|&k| k == keys[idx]).unwrap();
        remaining.swap_remove(pos);

        prop_assert!(heap.verify_internal_structure());
        prop_assert_eq!(heap.into_sorted_vec(), sorted(remaining));
    }

    #[test]
    fn prop_merge_equals_union(
        left in prop::collection::vec(any::<i32>(), 0..100),
        right in prop::collection::vec(any::<i32>(), 0..100),
        extract_first in any::<bool>(),
    ) {
        let mut a: FibonacciHeap<i32> = left.iter().copied().collect();
        let mut b: FibonacciHeap<i32> = right.iter().copied().collect();
        let mut expected: Vec<i32> = left.iter().chain(right.iter()).copied().collect();

        if extract_first {
            // consolidated forests on both sides
            if let Ok(k) = a.extract_min() {
                expected.remove(expected.iter().position(|&x| x == k).unwrap());
            }
            if let Ok(k) = b.extract_min() {
                expected.remove(expected.iter().position(|&x| x == k).unwrap());
            }
        }

        a.append(&mut b);
        prop_assert!(b.is_empty());
        prop_assert_eq!(b.len(), 0);
        prop_assert_eq!(a.len(), expected.len());
        prop_assert!(a.verify_internal_structure());
        prop_assert_eq!(a.into_sorted_vec(), sorted(expected));
    }
}
