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
    Ordering,
};

static GLOBAL: Atomic64 = Atomic64::new(100);

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_new() {
    let atomic = Atomic64::new(42);
    assert_eq!(atomic.read(), 42);
}

#[test]
fn test_default() {
    let atomic = Atomic64::default();
    assert_eq!(atomic.read(), 0);
}

#[test]
fn test_from() {
    let atomic = Atomic64::from(-100);
    assert_eq!(atomic.read(), -100);
}

#[test]
fn test_static_initialization() {
    GLOBAL.add(5);
    assert!(GLOBAL.read() >= 105);
}

#[test]
fn test_into_inner() {
    let atomic = Atomic64::new(9);
    atomic.inc();
    assert_eq!(atomic.into_inner(), 10);
}

#[test]
fn test_send_sync() {
    assert_send_sync::<Atomic64>();
}

#[test]
fn test_size_matches_native_atomic() {
    assert_eq!(std::mem::size_of::<Atomic64>(), 8);
    assert_eq!(
        std::mem::align_of::<Atomic64>(),
        std::mem::align_of::<std::sync::atomic::AtomicI64>()
    );
}

#[test]
fn test_read_write() {
    let atomic = Atomic64::new(0);
    atomic.write(42);
    assert_eq!(atomic.read(), 42);
    atomic.write_with(i64::MIN, Ordering::Release);
    assert_eq!(atomic.read_with(Ordering::Acquire), i64::MIN);
}

#[test]
#[should_panic]
fn test_read_with_release_panics() {
    let atomic = Atomic64::new(0);
    atomic.read_with(Ordering::Release);
}

#[test]
fn test_inc_scenario() {
    let atomic = Atomic64::new(5);
    atomic.inc();
    assert_eq!(atomic.read(), 6);
}

#[test]
fn test_add_sub() {
    let atomic = Atomic64::new(10);
    atomic.add(5);
    assert_eq!(atomic.read(), 15);
    atomic.sub(20);
    assert_eq!(atomic.read(), -5);
    atomic.dec();
    assert_eq!(atomic.read(), -6);
    atomic.add_with(6, Ordering::SeqCst);
    assert_eq!(atomic.read(), 0);
}

#[test]
fn test_add_wraps_on_overflow() {
    let atomic = Atomic64::new(i64::MAX);
    atomic.add(1);
    assert_eq!(atomic.read(), i64::MIN);
    atomic.sub(1);
    assert_eq!(atomic.read(), i64::MAX);
    assert_eq!(atomic.inc_return(), i64::MIN);
}

#[test]
fn test_sub_and_test() {
    let atomic = Atomic64::new(10);
    assert!(!atomic.sub_and_test(3));
    assert_eq!(atomic.read(), 7);
    assert!(atomic.sub_and_test(7));
    assert_eq!(atomic.read(), 0);
    // Decremented even though the result is not zero.
    assert!(!atomic.sub_and_test(1));
    assert_eq!(atomic.read(), -1);
}

#[test]
fn test_dec_and_test_scenario() {
    let atomic = Atomic64::new(1);
    assert!(atomic.dec_and_test());
    assert_eq!(atomic.read(), 0);
    assert!(!atomic.dec_and_test_with(Ordering::AcqRel));
    assert_eq!(atomic.read(), -1);
}

#[test]
fn test_inc_and_test() {
    let atomic = Atomic64::new(-2);
    assert!(!atomic.inc_and_test());
    assert!(atomic.inc_and_test());
    assert!(!atomic.inc_and_test());
    assert_eq!(atomic.read(), 1);
}

#[test]
fn test_add_negative() {
    let atomic = Atomic64::new(3);
    assert!(!atomic.add_negative(-3));
    assert_eq!(atomic.read(), 0);
    assert!(atomic.add_negative(-1));
    assert!(!atomic.add_negative(1));
    // Wrapping past MAX lands on a negative value.
    atomic.write(i64::MAX);
    assert!(atomic.add_negative(1));
}

#[test]
fn test_add_return_and_sub_return() {
    let atomic = Atomic64::new(10);
    assert_eq!(atomic.add_return(5), 15);
    assert_eq!(atomic.sub_return(20), -5);
    assert_eq!(atomic.inc_return(), -4);
    assert_eq!(atomic.dec_return(), -5);
    assert_eq!(atomic.read(), -5);
}

#[test]
fn test_add_return_equals_fetch_add_plus_delta() {
    for delta in [-7, 0, 1, 13, i64::MAX] {
        let a = Atomic64::new(40);
        let b = Atomic64::new(40);
        assert_eq!(a.add_return(delta), b.fetch_add(delta).wrapping_add(delta));
        assert_eq!(a.read(), b.read());
    }
}

#[test]
fn test_fetch_add_fetch_sub() {
    let atomic = Atomic64::new(10);
    assert_eq!(atomic.fetch_add(5), 10);
    assert_eq!(atomic.fetch_sub(3), 15);
    assert_eq!(atomic.read(), 12);
    assert_eq!(atomic.fetch_sub_with(12, Ordering::Release), 12);
    assert_eq!(atomic.read(), 0);
}

#[test]
fn test_xchg() {
    let atomic = Atomic64::new(10);
    assert_eq!(atomic.xchg(20), 10);
    assert_eq!(atomic.xchg_with(-1, Ordering::SeqCst), 20);
    assert_eq!(atomic.read(), -1);
}

#[test]
fn test_cmpxchg_scenario() {
    let atomic = Atomic64::new(10);
    assert_eq!(atomic.cmpxchg(10, 20), 10);
    assert_eq!(atomic.read(), 20);
    assert_eq!(atomic.cmpxchg(10, 99), 20);
    assert_eq!(atomic.read(), 20);
}

#[test]
fn test_cmpxchg_with_orderings() {
    let atomic = Atomic64::new(1);
    assert_eq!(atomic.cmpxchg_with(1, 2, Ordering::SeqCst, Ordering::SeqCst), 1);
    assert_eq!(atomic.cmpxchg_with(1, 3, Ordering::Relaxed, Ordering::Relaxed), 2);
    assert_eq!(atomic.read(), 2);
}

#[test]
fn test_try_cmpxchg_success_leaves_expected() {
    let atomic = Atomic64::new(10);
    let mut expected = 10;
    assert!(atomic.try_cmpxchg(&mut expected, 20));
    assert_eq!(expected, 10);
    assert_eq!(atomic.read(), 20);
}

#[test]
fn test_try_cmpxchg_failure_writes_back_observed() {
    let atomic = Atomic64::new(10);
    let mut expected = 5;
    assert!(!atomic.try_cmpxchg(&mut expected, 20));
    assert_eq!(expected, 10);
    assert_eq!(atomic.read(), 10);
    // The written-back value is enough to retry without a read.
    assert!(atomic.try_cmpxchg_with(&mut expected, 20, Ordering::AcqRel, Ordering::Relaxed));
    assert_eq!(atomic.read(), 20);
}

#[test]
fn test_try_cmpxchg_weak_in_loop() {
    let atomic = Atomic64::new(10);
    let mut current = atomic.read();
    loop {
        let new = current * 3;
        if atomic.try_cmpxchg_weak(&mut current, new) {
            break;
        }
    }
    assert_eq!(atomic.read(), 30);
}

#[test]
fn test_fetch_update() {
    let atomic = Atomic64::new(7);
    assert_eq!(atomic.fetch_update(|v| Some(v * 2)), Ok(7));
    assert_eq!(atomic.read(), 14);
    assert_eq!(atomic.fetch_update(|v| (v < 10).then_some(0)), Err(14));
    assert_eq!(atomic.read(), 14);
    assert_eq!(
        atomic.fetch_update_with(Ordering::Release, |v| Some(v - 4)),
        Ok(14)
    );
    assert_eq!(atomic.read(), 10);
}

#[test]
fn test_fetch_and_or_xor() {
    let atomic = Atomic64::new(0b1111);
    assert_eq!(atomic.fetch_and(0b1100), 0b1111);
    assert_eq!(atomic.read(), 0b1100);
    assert_eq!(atomic.fetch_or(0b0011), 0b1100);
    assert_eq!(atomic.read(), 0b1111);
    assert_eq!(atomic.fetch_xor(0b0110), 0b1111);
    assert_eq!(atomic.read(), 0b1001);
    assert_eq!(atomic.fetch_xor_with(-1, Ordering::Relaxed), 0b1001);
    assert_eq!(atomic.read(), !0b1001);
}

#[test]
fn test_add_unless() {
    let atomic = Atomic64::new(5);
    assert!(atomic.add_unless(3, 0));
    assert_eq!(atomic.read(), 8);
    assert!(!atomic.add_unless(3, 8));
    assert_eq!(atomic.read(), 8);
    assert!(atomic.add_unless_with(-8, 7, Ordering::SeqCst));
    assert_eq!(atomic.read(), 0);
}

#[test]
fn test_inc_not_zero() {
    let atomic = Atomic64::new(0);
    assert!(!atomic.inc_not_zero());
    assert_eq!(atomic.read(), 0);
    atomic.write(-1);
    assert!(atomic.inc_not_zero());
    assert_eq!(atomic.read(), 0);
    assert!(!atomic.inc_not_zero_with(Ordering::Acquire));
}

#[test]
fn test_dec_if_positive_sequence() {
    let atomic = Atomic64::new(3);
    let results: Vec<i64> = (0..6).map(|_| atomic.dec_if_positive()).collect();
    assert_eq!(results, vec![2, 1, 0, -1, -1, -1]);
    assert_eq!(atomic.read(), 0);
}

#[test]
fn test_dec_if_positive_on_negative_value() {
    let atomic = Atomic64::new(-10);
    assert_eq!(atomic.dec_if_positive_with(Ordering::Relaxed), -11);
    assert_eq!(atomic.read(), -10);
}

#[test]
fn test_dec_if_positive_wraps_at_min() {
    // MIN - 1 wraps to MAX, which is non-negative, so the decrement applies.
    let atomic = Atomic64::new(i64::MIN);
    assert_eq!(atomic.dec_if_positive(), i64::MAX);
    assert_eq!(atomic.read(), i64::MAX);
}

#[test]
fn test_bitwise_ops() {
    let atomic = Atomic64::new(0b1100);
    atomic.bitwise_or(0b0011);
    assert_eq!(atomic.read(), 0b1111);
    atomic.bitwise_and(0b1010);
    assert_eq!(atomic.read(), 0b1010);
    atomic.bitwise_xor(0b1111);
    assert_eq!(atomic.read(), 0b0101);
    atomic.bitwise_or_with(i64::MIN, Ordering::Release);
    assert_eq!(atomic.read(), i64::MIN | 0b0101);
}

#[test]
fn test_debug_display() {
    let atomic = Atomic64::new(42);
    assert_eq!(format!("{:?}", atomic), "Atomic64 { value: 42 }");
    assert_eq!(format!("{}", atomic), "42");
}

#[test]
fn test_backend_access() {
    let atomic = Atomic64::new(1);
    atomic
        .backend()
        .store(77, std::sync::atomic::Ordering::Relaxed);
    assert_eq!(atomic.read(), 77);
}
