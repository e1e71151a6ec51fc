/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_atomic64::{
    Atomic64,
    AtomicBackend,
    Combine,
    Ordering,
};
use std::collections::VecDeque;
use std::sync::atomic::{
    AtomicI64,
    AtomicUsize,
};
use std::sync::Mutex;

/// Backend that lets a "concurrent writer" store scripted values right
/// before each compare-exchange attempt, forcing the interleaving where
/// another thread wins between the loop's read and its CAS.
struct InterleavingBackend {
    cell: AtomicI64,
    interference: Mutex<VecDeque<i64>>,
    cas_attempts: AtomicUsize,
}

impl InterleavingBackend {
    fn new(value: i64, interference: &[i64]) -> Self {
        Self {
            cell: AtomicI64::new(value),
            interference: Mutex::new(interference.iter().copied().collect()),
            cas_attempts: AtomicUsize::new(0),
        }
    }

    fn attempts(&self) -> usize {
        self.cas_attempts.load(Ordering::SeqCst)
    }
}

impl AtomicBackend for InterleavingBackend {
    fn atomic_load(&self, order: Ordering) -> i64 {
        self.cell.load(order)
    }

    fn atomic_store(&self, value: i64, order: Ordering) {
        self.cell.store(value, order);
    }

    fn atomic_swap(&self, value: i64, order: Ordering) -> i64 {
        self.cell.swap(value, order)
    }

    fn atomic_fetch_combine(&self, op: Combine, operand: i64, order: Ordering) -> i64 {
        self.cell.atomic_fetch_combine(op, operand, order)
    }

    fn atomic_compare_exchange(
        &self,
        current: i64,
        new: i64,
        success: Ordering,
        failure: Ordering,
    ) -> Result<i64, i64> {
        if let Some(value) = self.interference.lock().unwrap().pop_front() {
            self.cell.store(value, Ordering::SeqCst);
        }
        self.cas_attempts.fetch_add(1, Ordering::SeqCst);
        self.cell.compare_exchange(current, new, success, failure)
    }
}

#[test]
fn test_add_unless_rechecks_forbidden_after_lost_race() {
    let atomic = Atomic64::with_backend(InterleavingBackend::new(5, &[0]));
    assert!(!atomic.add_unless(1, 0));
    assert_eq!(atomic.read(), 0);
    assert_eq!(atomic.backend().attempts(), 1);
}

#[test]
fn test_add_unless_retries_with_observed_value() {
    let atomic = Atomic64::with_backend(InterleavingBackend::new(5, &[7, 9]));
    assert!(atomic.add_unless(10, 0));
    assert_eq!(atomic.read(), 19);
    assert_eq!(atomic.backend().attempts(), 3);
}

#[test]
fn test_inc_not_zero_loses_to_final_release() {
    let atomic = Atomic64::with_backend(InterleavingBackend::new(1, &[0]));
    assert!(!atomic.inc_not_zero());
    assert_eq!(atomic.read(), 0);
}

#[test]
fn test_dec_if_positive_aborts_when_drained_concurrently() {
    let atomic = Atomic64::with_backend(InterleavingBackend::new(1, &[0]));
    assert_eq!(atomic.dec_if_positive(), -1);
    assert_eq!(atomic.read(), 0);
}

#[test]
fn test_dec_if_positive_retries_when_refilled_concurrently() {
    let atomic = Atomic64::with_backend(InterleavingBackend::new(1, &[4]));
    assert_eq!(atomic.dec_if_positive(), 3);
    assert_eq!(atomic.read(), 3);
    assert_eq!(atomic.backend().attempts(), 2);
}

#[test]
fn test_fetch_or_returns_value_of_winning_attempt() {
    let atomic = Atomic64::with_backend(InterleavingBackend::new(0b0001, &[0b0010]));
    assert_eq!(atomic.fetch_or(0b1000), 0b0010);
    assert_eq!(atomic.read(), 0b1010);
    assert_eq!(atomic.backend().attempts(), 2);
}

#[test]
fn test_fetch_and_keeps_concurrent_bits() {
    let atomic = Atomic64::with_backend(InterleavingBackend::new(0b1111, &[0b0111_0000]));
    assert_eq!(atomic.fetch_and(0b0101_0101), 0b0111_0000);
    assert_eq!(atomic.read(), 0b0101_0000);
}

#[test]
fn test_try_cmpxchg_reports_interfering_value() {
    let atomic = Atomic64::with_backend(InterleavingBackend::new(10, &[11]));
    let mut expected = 10;
    assert!(!atomic.try_cmpxchg(&mut expected, 20));
    assert_eq!(expected, 11);
    assert!(atomic.try_cmpxchg(&mut expected, 20));
    assert_eq!(atomic.read(), 20);
}

#[test]
fn test_cmpxchg_returns_interfering_value() {
    let atomic = Atomic64::with_backend(InterleavingBackend::new(10, &[12]));
    assert_eq!(atomic.cmpxchg(10, 20), 12);
    assert_eq!(atomic.read(), 12);
}

#[test]
fn test_fetch_update_closure_sees_each_observed_value() {
    let atomic = Atomic64::with_backend(InterleavingBackend::new(1, &[2, 3]));
    let mut seen = Vec::new();
    let result = atomic.fetch_update(|v| {
        seen.push(v);
        Some(v * 10)
    });
    assert_eq!(result, Ok(3));
    assert_eq!(seen, vec![1, 2, 3]);
    assert_eq!(atomic.read(), 30);
}

#[test]
fn test_direct_arithmetic_never_retries() {
    let atomic = Atomic64::with_backend(InterleavingBackend::new(0, &[]));
    atomic.add(3);
    assert!(!atomic.sub_and_test(1));
    assert_eq!(atomic.fetch_add(1), 2);
    atomic.bitwise_or(0b100);
    assert_eq!(atomic.read(), 0b111);
    assert_eq!(atomic.backend().attempts(), 0);
}

#[test]
fn test_borrowed_backend_operates_on_external_storage() {
    let storage = AtomicI64::new(41);
    {
        let cell = Atomic64::with_backend(&storage);
        assert_eq!(cell.inc_return(), 42);
        assert!(cell.add_unless(1, 0));
    }
    assert_eq!(storage.load(Ordering::Relaxed), 43);
}
