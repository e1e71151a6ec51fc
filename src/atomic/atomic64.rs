/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 64-bit Integer Cell
//!
//! Provides `Atomic64`, a lock-free signed 64-bit integer cell with the full
//! read / arithmetic / exchange / bitwise operation set.
//!
//! Operations fall into four families:
//!
//! - **Cell storage**: `read`, `write`.
//! - **Direct arithmetic**: one indivisible fetch-and-combine each, with
//!   the boolean of the fused tests (`dec_and_test`, `add_negative`, ...)
//!   derived from the value that same step returned.
//! - **Exchange primitives**: `xchg`, `cmpxchg`, `try_cmpxchg`.
//! - **Retry-loop compounds**: `fetch_and`, `fetch_or`, `fetch_xor`,
//!   `add_unless`, `inc_not_zero` and `dec_if_positive`, all instantiating
//!   the single read-compute-CAS loop in `fetch_update_with`.
//!
//! Every operation has a `*_with` twin taking explicit memory orderings.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;

use crate::atomic::contention::Contention;
use crate::atomic::sync::{
    failure_ordering,
    AtomicI64,
    Ordering,
};
use crate::atomic::traits::{
    AtomicBackend,
    Combine,
};

/// Lock-free atomic signed 64-bit integer.
///
/// All arithmetic wraps on overflow (two's complement); no operation ever
/// fails or blocks. The retry-loop compounds are lock-free but not
/// wait-free: a single call may retry for as long as other threads keep
/// winning the compare-exchange race.
///
/// # Memory Ordering Strategy
///
/// Each operation documents its default ordering and has a `*_with`
/// variant to override it:
///
/// - **Storage** (`read`, `write`): `Relaxed`. Only atomicity is
///   guaranteed.
/// - **Direct arithmetic** (`add`, `sub_and_test`, `fetch_add`, ...):
///   `Relaxed`, suited to counters that publish nothing else.
/// - **Exchange** (`xchg`, `cmpxchg`, `try_cmpxchg`): `AcqRel`, with
///   `Acquire` on compare-exchange failure. A successful exchange can
///   publish and consume data stored alongside the cell.
/// - **Retry-loop compounds** (`fetch_or`, `add_unless`, ...): `AcqRel`,
///   inherited from the compare-exchange they are built on.
/// - **Whole bitwise ops** (`bitwise_or`, ...): `AcqRel`, since flag bits
///   usually guard related state.
///
/// # Backends
///
/// The cell is generic over an [`AtomicBackend`]. The default is the
/// native `AtomicI64`; a borrowed `&AtomicI64` lets the cell operate on
/// memory owned elsewhere, and tests may inject instrumented backends.
///
/// # Example
///
/// ```rust
/// use prism3_atomic64::Atomic64;
/// use std::sync::Arc;
/// use std::thread;
///
/// let counter = Arc::new(Atomic64::new(0));
/// let mut handles = vec![];
///
/// for _ in 0..10 {
///     let counter = counter.clone();
///     handles.push(thread::spawn(move || {
///         for _ in 0..100 {
///             counter.inc();
///         }
///     }));
/// }
///
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// assert_eq!(counter.read(), 1000);
/// ```
///
/// # Author
///
/// Haixing Hu
#[repr(transparent)]
pub struct Atomic64<B = AtomicI64> {
    backend: B,
}

#[cfg(not(all(feature = "loom", loom)))]
impl Atomic64 {
    /// Creates a new cell holding `value`.
    ///
    /// This is a `const fn`, so cells can be placed in `static`s.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic64::Atomic64;
    ///
    /// static HITS: Atomic64 = Atomic64::new(0);
    /// HITS.inc();
    /// assert_eq!(HITS.read(), 1);
    /// ```
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self {
            backend: AtomicI64::new(value),
        }
    }

    /// Consumes the cell and returns the value it holds.
    #[inline]
    pub fn into_inner(self) -> i64 {
        self.backend.into_inner()
    }
}

#[cfg(all(feature = "loom", loom))]
impl Atomic64 {
    /// Creates a new cell holding `value` on the loom model backend.
    #[inline]
    pub fn new(value: i64) -> Self {
        Self {
            backend: AtomicI64::new(value),
        }
    }
}

impl<B: AtomicBackend> Atomic64<B> {
    /// Creates a cell over an explicit backend.
    ///
    /// # Parameters
    ///
    /// * `backend` - The atomic location the cell operates on. Its current
    ///   value becomes the cell's value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic64::Atomic64;
    /// use std::sync::atomic::AtomicI64;
    ///
    /// let storage = AtomicI64::new(7);
    /// let cell = Atomic64::with_backend(&storage);
    /// cell.inc();
    /// assert_eq!(cell.read(), 8);
    /// ```
    #[inline]
    pub const fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// Gets a reference to the underlying backend.
    ///
    /// For the default backend this is the standard library
    /// `AtomicI64`, giving access to operations this type does not wrap.
    #[inline]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    // ---------------------------------------------------------------------
    // Cell storage
    // ---------------------------------------------------------------------

    /// Atomically reads the current value.
    ///
    /// # Memory Ordering
    ///
    /// Uses `Relaxed` ordering: the value is never torn, but no ordering
    /// relative to other memory locations is implied. Use
    /// [`read_with`](Self::read_with) with `Acquire` to consume data
    /// published by a `Release` write.
    ///
    /// # Returns
    ///
    /// The current value.
    #[inline]
    pub fn read(&self) -> i64 {
        self.read_with(Ordering::Relaxed)
    }

    /// Atomically reads the current value with an explicit ordering.
    ///
    /// # Panics
    ///
    /// Panics if `order` is `Release` or `AcqRel`.
    #[inline]
    pub fn read_with(&self, order: Ordering) -> i64 {
        self.backend.atomic_load(order)
    }

    /// Atomically writes a new value.
    ///
    /// # Memory Ordering
    ///
    /// Uses `Relaxed` ordering. Use [`write_with`](Self::write_with) with
    /// `Release` to publish data written before this call.
    ///
    /// # Parameters
    ///
    /// * `value` - The value to store.
    #[inline]
    pub fn write(&self, value: i64) {
        self.write_with(value, Ordering::Relaxed);
    }

    /// Atomically writes a new value with an explicit ordering.
    ///
    /// # Panics
    ///
    /// Panics if `order` is `Acquire` or `AcqRel`.
    #[inline]
    pub fn write_with(&self, value: i64, order: Ordering) {
        self.backend.atomic_store(value, order);
    }

    // ---------------------------------------------------------------------
    // Direct arithmetic
    // ---------------------------------------------------------------------

    /// Atomically adds `delta`, wrapping on overflow.
    ///
    /// Uses `Relaxed` ordering.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic64::Atomic64;
    ///
    /// let atomic = Atomic64::new(i64::MAX);
    /// atomic.add(1);
    /// assert_eq!(atomic.read(), i64::MIN);
    /// ```
    #[inline]
    pub fn add(&self, delta: i64) {
        self.add_with(delta, Ordering::Relaxed);
    }

    /// Like [`add`](Self::add) with an explicit ordering.
    #[inline]
    pub fn add_with(&self, delta: i64, order: Ordering) {
        self.backend.atomic_fetch_combine(Combine::Add, delta, order);
    }

    /// Atomically subtracts `delta`, wrapping on overflow.
    ///
    /// Uses `Relaxed` ordering.
    #[inline]
    pub fn sub(&self, delta: i64) {
        self.sub_with(delta, Ordering::Relaxed);
    }

    /// Like [`sub`](Self::sub) with an explicit ordering.
    #[inline]
    pub fn sub_with(&self, delta: i64, order: Ordering) {
        self.backend.atomic_fetch_combine(Combine::Sub, delta, order);
    }

    /// Atomically increments the value by 1. Uses `Relaxed` ordering.
    #[inline]
    pub fn inc(&self) {
        self.add_with(1, Ordering::Relaxed);
    }

    /// Like [`inc`](Self::inc) with an explicit ordering.
    #[inline]
    pub fn inc_with(&self, order: Ordering) {
        self.add_with(1, order);
    }

    /// Atomically decrements the value by 1. Uses `Relaxed` ordering.
    #[inline]
    pub fn dec(&self) {
        self.sub_with(1, Ordering::Relaxed);
    }

    /// Like [`dec`](Self::dec) with an explicit ordering.
    #[inline]
    pub fn dec_with(&self, order: Ordering) {
        self.sub_with(1, order);
    }

    /// Atomically subtracts `delta` and tests the result for zero.
    ///
    /// The subtraction and the test are one indivisible step: the test
    /// looks at the value this call produced, never at a later value
    /// written by another thread. The cell is decremented whatever the
    /// outcome.
    ///
    /// # Memory Ordering
    ///
    /// Uses `Relaxed` ordering. Reference-count style release paths
    /// usually want [`sub_and_test_with`](Self::sub_and_test_with) with
    /// `AcqRel`.
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to subtract.
    ///
    /// # Returns
    ///
    /// `true` if the resulting value is exactly zero.
    #[inline]
    pub fn sub_and_test(&self, delta: i64) -> bool {
        self.sub_and_test_with(delta, Ordering::Relaxed)
    }

    /// Like [`sub_and_test`](Self::sub_and_test) with an explicit ordering.
    #[inline]
    pub fn sub_and_test_with(&self, delta: i64, order: Ordering) -> bool {
        self.sub_return_with(delta, order) == 0
    }

    /// Atomically decrements by 1 and tests the result for zero.
    ///
    /// Uses `Relaxed` ordering.
    ///
    /// # Returns
    ///
    /// `true` if the resulting value is exactly zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic64::Atomic64;
    ///
    /// let refs = Atomic64::new(1);
    /// assert!(refs.dec_and_test());
    /// assert_eq!(refs.read(), 0);
    /// ```
    #[inline]
    pub fn dec_and_test(&self) -> bool {
        self.sub_and_test_with(1, Ordering::Relaxed)
    }

    /// Like [`dec_and_test`](Self::dec_and_test) with an explicit ordering.
    #[inline]
    pub fn dec_and_test_with(&self, order: Ordering) -> bool {
        self.sub_and_test_with(1, order)
    }

    /// Atomically increments by 1 and tests the result for zero.
    ///
    /// Uses `Relaxed` ordering.
    ///
    /// # Returns
    ///
    /// `true` if the resulting value is exactly zero.
    #[inline]
    pub fn inc_and_test(&self) -> bool {
        self.inc_and_test_with(Ordering::Relaxed)
    }

    /// Like [`inc_and_test`](Self::inc_and_test) with an explicit ordering.
    #[inline]
    pub fn inc_and_test_with(&self, order: Ordering) -> bool {
        self.add_return_with(1, order) == 0
    }

    /// Atomically adds `delta` and tests whether the result is negative.
    ///
    /// Uses `Relaxed` ordering.
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to add.
    ///
    /// # Returns
    ///
    /// `true` if the resulting value is below zero.
    #[inline]
    pub fn add_negative(&self, delta: i64) -> bool {
        self.add_negative_with(delta, Ordering::Relaxed)
    }

    /// Like [`add_negative`](Self::add_negative) with an explicit ordering.
    #[inline]
    pub fn add_negative_with(&self, delta: i64, order: Ordering) -> bool {
        self.add_return_with(delta, order) < 0
    }

    /// Atomically adds `delta`, returning the new value.
    ///
    /// Uses `Relaxed` ordering.
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to add.
    ///
    /// # Returns
    ///
    /// The value after the addition.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic64::Atomic64;
    ///
    /// let atomic = Atomic64::new(10);
    /// assert_eq!(atomic.add_return(5), 15);
    /// ```
    #[inline]
    pub fn add_return(&self, delta: i64) -> i64 {
        self.add_return_with(delta, Ordering::Relaxed)
    }

    /// Like [`add_return`](Self::add_return) with an explicit ordering.
    #[inline]
    pub fn add_return_with(&self, delta: i64, order: Ordering) -> i64 {
        Combine::Add.apply(self.fetch_add_with(delta, order), delta)
    }

    /// Atomically subtracts `delta`, returning the new value.
    ///
    /// Uses `Relaxed` ordering.
    #[inline]
    pub fn sub_return(&self, delta: i64) -> i64 {
        self.sub_return_with(delta, Ordering::Relaxed)
    }

    /// Like [`sub_return`](Self::sub_return) with an explicit ordering.
    #[inline]
    pub fn sub_return_with(&self, delta: i64, order: Ordering) -> i64 {
        Combine::Sub.apply(self.fetch_sub_with(delta, order), delta)
    }

    /// Atomically increments by 1, returning the new value. Uses `Relaxed`
    /// ordering.
    #[inline]
    pub fn inc_return(&self) -> i64 {
        self.add_return_with(1, Ordering::Relaxed)
    }

    /// Like [`inc_return`](Self::inc_return) with an explicit ordering.
    #[inline]
    pub fn inc_return_with(&self, order: Ordering) -> i64 {
        self.add_return_with(1, order)
    }

    /// Atomically decrements by 1, returning the new value. Uses `Relaxed`
    /// ordering.
    #[inline]
    pub fn dec_return(&self) -> i64 {
        self.sub_return_with(1, Ordering::Relaxed)
    }

    /// Like [`dec_return`](Self::dec_return) with an explicit ordering.
    #[inline]
    pub fn dec_return_with(&self, order: Ordering) -> i64 {
        self.sub_return_with(1, order)
    }

    /// Atomically adds `delta`, returning the old value.
    ///
    /// Uses `Relaxed` ordering.
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to add.
    ///
    /// # Returns
    ///
    /// The value before the addition.
    #[inline]
    pub fn fetch_add(&self, delta: i64) -> i64 {
        self.fetch_add_with(delta, Ordering::Relaxed)
    }

    /// Like [`fetch_add`](Self::fetch_add) with an explicit ordering.
    #[inline]
    pub fn fetch_add_with(&self, delta: i64, order: Ordering) -> i64 {
        self.backend.atomic_fetch_combine(Combine::Add, delta, order)
    }

    /// Atomically subtracts `delta`, returning the old value.
    ///
    /// Uses `Relaxed` ordering.
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to subtract.
    ///
    /// # Returns
    ///
    /// The value before the subtraction.
    #[inline]
    pub fn fetch_sub(&self, delta: i64) -> i64 {
        self.fetch_sub_with(delta, Ordering::Relaxed)
    }

    /// Like [`fetch_sub`](Self::fetch_sub) with an explicit ordering.
    #[inline]
    pub fn fetch_sub_with(&self, delta: i64, order: Ordering) -> i64 {
        self.backend.atomic_fetch_combine(Combine::Sub, delta, order)
    }

    // ---------------------------------------------------------------------
    // Exchange primitives
    // ---------------------------------------------------------------------

    /// Atomically replaces the value, returning the one replaced.
    ///
    /// # Memory Ordering
    ///
    /// Uses `AcqRel` ordering: the read half synchronizes with earlier
    /// `Release` writes and the write half publishes this thread's prior
    /// writes.
    ///
    /// # Parameters
    ///
    /// * `new` - The value to store.
    ///
    /// # Returns
    ///
    /// The previous value.
    #[inline]
    pub fn xchg(&self, new: i64) -> i64 {
        self.xchg_with(new, Ordering::AcqRel)
    }

    /// Like [`xchg`](Self::xchg) with an explicit ordering.
    #[inline]
    pub fn xchg_with(&self, new: i64, order: Ordering) -> i64 {
        self.backend.atomic_swap(new, order)
    }

    /// Compares and exchanges the value atomically.
    ///
    /// If the cell holds `expected`, stores `new`. In every case returns
    /// the value the cell held at the moment of the attempt, so the
    /// operation succeeded exactly when the result equals `expected`.
    ///
    /// # Memory Ordering
    ///
    /// - **Success**: `AcqRel`, publishing prior writes and consuming
    ///   those of the previous writer.
    /// - **Failure**: `Acquire`, so the returned value comes with the
    ///   writes that preceded it.
    ///
    /// # Parameters
    ///
    /// * `expected` - The value the cell must hold for the store to happen.
    /// * `new` - The value to store.
    ///
    /// # Returns
    ///
    /// The value observed in the cell.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic64::Atomic64;
    ///
    /// let atomic = Atomic64::new(10);
    /// assert_eq!(atomic.cmpxchg(10, 20), 10);
    /// assert_eq!(atomic.cmpxchg(10, 99), 20);
    /// assert_eq!(atomic.read(), 20);
    /// ```
    #[inline]
    pub fn cmpxchg(&self, expected: i64, new: i64) -> i64 {
        self.cmpxchg_with(expected, new, Ordering::AcqRel, Ordering::Acquire)
    }

    /// Like [`cmpxchg`](Self::cmpxchg) with explicit success and failure
    /// orderings.
    ///
    /// # Panics
    ///
    /// Panics if `failure` is `Release` or `AcqRel`.
    #[inline]
    pub fn cmpxchg_with(
        &self,
        expected: i64,
        new: i64,
        success: Ordering,
        failure: Ordering,
    ) -> i64 {
        match self
            .backend
            .atomic_compare_exchange(expected, new, success, failure)
        {
            Ok(previous) => previous,
            Err(observed) => observed,
        }
    }

    /// Compares and exchanges the value, reporting success as a flag.
    ///
    /// On failure the value actually observed is written back into
    /// `expected`, so a retry loop can recompute its candidate without a
    /// separate read. On success `expected` is left untouched.
    ///
    /// Uses `AcqRel` ordering on success and `Acquire` on failure.
    ///
    /// # Parameters
    ///
    /// * `expected` - In: the value the cell must hold. Out (on failure):
    ///   the value found instead.
    /// * `new` - The value to store.
    ///
    /// # Returns
    ///
    /// `true` if `new` was stored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic64::Atomic64;
    ///
    /// let atomic = Atomic64::new(3);
    /// let mut expected = 5;
    /// assert!(!atomic.try_cmpxchg(&mut expected, 6));
    /// assert_eq!(expected, 3);
    /// assert!(atomic.try_cmpxchg(&mut expected, 6));
    /// assert_eq!(atomic.read(), 6);
    /// ```
    #[inline]
    pub fn try_cmpxchg(&self, expected: &mut i64, new: i64) -> bool {
        self.try_cmpxchg_with(expected, new, Ordering::AcqRel, Ordering::Acquire)
    }

    /// Like [`try_cmpxchg`](Self::try_cmpxchg) with explicit success and
    /// failure orderings.
    ///
    /// # Panics
    ///
    /// Panics if `failure` is `Release` or `AcqRel`.
    #[inline]
    pub fn try_cmpxchg_with(
        &self,
        expected: &mut i64,
        new: i64,
        success: Ordering,
        failure: Ordering,
    ) -> bool {
        match self
            .backend
            .atomic_compare_exchange(*expected, new, success, failure)
        {
            Ok(_) => true,
            Err(observed) => {
                *expected = observed;
                false
            }
        }
    }

    /// Weak version of [`try_cmpxchg`](Self::try_cmpxchg).
    ///
    /// May fail spuriously even when the cell holds `expected` (in which
    /// case `expected` is rewritten with the same value), so it should be
    /// used in a loop. Uses `AcqRel` ordering on success and `Acquire` on
    /// failure.
    #[inline]
    pub fn try_cmpxchg_weak(&self, expected: &mut i64, new: i64) -> bool {
        self.try_cmpxchg_weak_with(expected, new, Ordering::AcqRel, Ordering::Acquire)
    }

    /// Like [`try_cmpxchg_weak`](Self::try_cmpxchg_weak) with explicit
    /// orderings.
    #[inline]
    pub fn try_cmpxchg_weak_with(
        &self,
        expected: &mut i64,
        new: i64,
        success: Ordering,
        failure: Ordering,
    ) -> bool {
        match self
            .backend
            .atomic_compare_exchange_weak(*expected, new, success, failure)
        {
            Ok(_) => true,
            Err(observed) => {
                *expected = observed;
                false
            }
        }
    }

    // ---------------------------------------------------------------------
    // Retry-loop compounds
    // ---------------------------------------------------------------------

    /// Updates the value through a read-compute-CAS retry loop.
    ///
    /// `f` receives the currently observed value and returns either the
    /// candidate to store or `None` to stop without writing. When the
    /// compare-exchange loses a race, the freshly observed value is fed
    /// back to `f`, which therefore runs once per attempt and must be
    /// prepared to see a different value each time.
    ///
    /// Uses `AcqRel` ordering for the successful store.
    ///
    /// # Parameters
    ///
    /// * `f` - Computes the candidate from the observed value.
    ///
    /// # Returns
    ///
    /// `Ok(previous)` with the value that was replaced, or
    /// `Err(observed)` with the value `f` rejected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic64::Atomic64;
    ///
    /// let atomic = Atomic64::new(7);
    /// assert_eq!(atomic.fetch_update(|v| (v < 10).then(|| v * 2)), Ok(7));
    /// assert_eq!(atomic.fetch_update(|v| (v < 10).then(|| v * 2)), Err(14));
    /// ```
    #[inline]
    pub fn fetch_update<F>(&self, f: F) -> Result<i64, i64>
    where
        F: FnMut(i64) -> Option<i64>,
    {
        self.fetch_update_with(Ordering::AcqRel, f)
    }

    /// Like [`fetch_update`](Self::fetch_update) with an explicit ordering
    /// for the successful store.
    ///
    /// The initial read and every failed attempt use the failure ordering
    /// derived from `order` (`AcqRel` becomes `Acquire`, `Release`
    /// becomes `Relaxed`).
    pub fn fetch_update_with<F>(&self, order: Ordering, mut f: F) -> Result<i64, i64>
    where
        F: FnMut(i64) -> Option<i64>,
    {
        let failure = failure_ordering(order);
        let mut contention = Contention::default();
        let mut current = self.read_with(failure);
        loop {
            let Some(new) = f(current) else {
                contention.aborted(current);
                return Err(current);
            };
            if self.try_cmpxchg_weak_with(&mut current, new, order, failure) {
                contention.settled(current);
                return Ok(current);
            }
            contention.retry();
        }
    }

    /// Applies `op` through the retry loop, returning the previous value.
    #[inline]
    fn fetch_combine_loop(&self, op: Combine, operand: i64, order: Ordering) -> i64 {
        // The transform never rejects, so both arms carry the old value.
        match self.fetch_update_with(order, |current| Some(op.apply(current, operand))) {
            Ok(previous) => previous,
            Err(observed) => observed,
        }
    }

    /// Performs bitwise AND, returning the old value.
    ///
    /// Built on the compare-exchange retry loop; the stored value is the
    /// observed value ANDed with `mask`. Uses `AcqRel` ordering.
    ///
    /// # Parameters
    ///
    /// * `mask` - The value to AND with.
    ///
    /// # Returns
    ///
    /// The value before the operation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic64::Atomic64;
    ///
    /// let atomic = Atomic64::new(0b1111);
    /// assert_eq!(atomic.fetch_and(0b1100), 0b1111);
    /// assert_eq!(atomic.read(), 0b1100);
    /// ```
    #[inline]
    pub fn fetch_and(&self, mask: i64) -> i64 {
        self.fetch_and_with(mask, Ordering::AcqRel)
    }

    /// Like [`fetch_and`](Self::fetch_and) with an explicit ordering.
    #[inline]
    pub fn fetch_and_with(&self, mask: i64, order: Ordering) -> i64 {
        self.fetch_combine_loop(Combine::And, mask, order)
    }

    /// Performs bitwise OR through the retry loop, returning the old
    /// value. Uses `AcqRel` ordering.
    #[inline]
    pub fn fetch_or(&self, mask: i64) -> i64 {
        self.fetch_or_with(mask, Ordering::AcqRel)
    }

    /// Like [`fetch_or`](Self::fetch_or) with an explicit ordering.
    #[inline]
    pub fn fetch_or_with(&self, mask: i64, order: Ordering) -> i64 {
        self.fetch_combine_loop(Combine::Or, mask, order)
    }

    /// Performs bitwise XOR through the retry loop, returning the old
    /// value. Uses `AcqRel` ordering.
    #[inline]
    pub fn fetch_xor(&self, mask: i64) -> i64 {
        self.fetch_xor_with(mask, Ordering::AcqRel)
    }

    /// Like [`fetch_xor`](Self::fetch_xor) with an explicit ordering.
    #[inline]
    pub fn fetch_xor_with(&self, mask: i64, order: Ordering) -> i64 {
        self.fetch_combine_loop(Combine::Xor, mask, order)
    }

    /// Adds `delta` unless the cell holds `forbidden`.
    ///
    /// The check is repeated on every attempt of the retry loop, so a
    /// concurrent writer that drives the value to `forbidden` between this
    /// call's read and its compare-exchange makes the call return `false`
    /// without applying any part of the addition.
    ///
    /// Uses `AcqRel` ordering.
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to add.
    /// * `forbidden` - The value that vetoes the addition.
    ///
    /// # Returns
    ///
    /// `true` if the addition was performed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic64::Atomic64;
    ///
    /// let atomic = Atomic64::new(5);
    /// assert!(atomic.add_unless(2, 0));
    /// assert!(!atomic.add_unless(2, 7));
    /// assert_eq!(atomic.read(), 7);
    /// ```
    #[inline]
    pub fn add_unless(&self, delta: i64, forbidden: i64) -> bool {
        self.add_unless_with(delta, forbidden, Ordering::AcqRel)
    }

    /// Like [`add_unless`](Self::add_unless) with an explicit ordering.
    #[inline]
    pub fn add_unless_with(&self, delta: i64, forbidden: i64, order: Ordering) -> bool {
        self.fetch_update_with(order, |current| {
            (current != forbidden).then(|| current.wrapping_add(delta))
        })
        .is_ok()
    }

    /// Increments unless the value is zero.
    ///
    /// Equivalent to `add_unless(1, 0)`; the usual way to take a new
    /// reference on an object whose count may already have dropped to
    /// zero. Uses `AcqRel` ordering.
    ///
    /// # Returns
    ///
    /// `true` if the value was non-zero and has been incremented.
    #[inline]
    pub fn inc_not_zero(&self) -> bool {
        self.add_unless_with(1, 0, Ordering::AcqRel)
    }

    /// Like [`inc_not_zero`](Self::inc_not_zero) with an explicit ordering.
    #[inline]
    pub fn inc_not_zero_with(&self, order: Ordering) -> bool {
        self.add_unless_with(1, 0, order)
    }

    /// Decrements by 1 if the result would not be negative.
    ///
    /// The return value carries both the outcome and the result: a
    /// non-negative value is the new value of the cell, a negative value
    /// is the rejected candidate (observed value minus one) and means the
    /// cell was left untouched.
    ///
    /// Uses `AcqRel` ordering.
    ///
    /// # Returns
    ///
    /// The observed value minus one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic64::Atomic64;
    ///
    /// let permits = Atomic64::new(1);
    /// assert_eq!(permits.dec_if_positive(), 0);
    /// assert_eq!(permits.dec_if_positive(), -1);
    /// assert_eq!(permits.read(), 0);
    /// ```
    #[inline]
    pub fn dec_if_positive(&self) -> i64 {
        self.dec_if_positive_with(Ordering::AcqRel)
    }

    /// Like [`dec_if_positive`](Self::dec_if_positive) with an explicit
    /// ordering.
    #[inline]
    pub fn dec_if_positive_with(&self, order: Ordering) -> i64 {
        let outcome = self.fetch_update_with(order, |current| {
            let candidate = current.wrapping_sub(1);
            (candidate >= 0).then_some(candidate)
        });
        match outcome {
            Ok(previous) | Err(previous) => previous.wrapping_sub(1),
        }
    }

    // ---------------------------------------------------------------------
    // Whole-operation bitwise ops
    // ---------------------------------------------------------------------

    /// Atomically ANDs `mask` into the cell in one step, without returning
    /// anything. Uses `AcqRel` ordering.
    #[inline]
    pub fn bitwise_and(&self, mask: i64) {
        self.bitwise_and_with(mask, Ordering::AcqRel);
    }

    /// Like [`bitwise_and`](Self::bitwise_and) with an explicit ordering.
    #[inline]
    pub fn bitwise_and_with(&self, mask: i64, order: Ordering) {
        self.backend.atomic_fetch_combine(Combine::And, mask, order);
    }

    /// Atomically ORs `mask` into the cell in one step.
    ///
    /// # Memory Ordering
    ///
    /// Uses `AcqRel` ordering because flag bits typically guard other
    /// data: setting a READY bit should publish what it announces.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic64::Atomic64;
    ///
    /// let flags = Atomic64::new(0b0001);
    /// flags.bitwise_or(0b0100);
    /// assert_eq!(flags.read(), 0b0101);
    /// ```
    #[inline]
    pub fn bitwise_or(&self, mask: i64) {
        self.bitwise_or_with(mask, Ordering::AcqRel);
    }

    /// Like [`bitwise_or`](Self::bitwise_or) with an explicit ordering.
    #[inline]
    pub fn bitwise_or_with(&self, mask: i64, order: Ordering) {
        self.backend.atomic_fetch_combine(Combine::Or, mask, order);
    }

    /// Atomically XORs `mask` into the cell in one step. Uses `AcqRel`
    /// ordering.
    #[inline]
    pub fn bitwise_xor(&self, mask: i64) {
        self.bitwise_xor_with(mask, Ordering::AcqRel);
    }

    /// Like [`bitwise_xor`](Self::bitwise_xor) with an explicit ordering.
    #[inline]
    pub fn bitwise_xor_with(&self, mask: i64, order: Ordering) {
        self.backend.atomic_fetch_combine(Combine::Xor, mask, order);
    }
}

impl Default for Atomic64 {
    #[inline]
    fn default() -> Self {
        Self::new(0)
    }
}

impl From<i64> for Atomic64 {
    #[inline]
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl<B: AtomicBackend> fmt::Debug for Atomic64<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Atomic64")
            .field("value", &self.read())
            .finish()
    }
}

impl<B: AtomicBackend> fmt::Display for Atomic64<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.read())
    }
}
