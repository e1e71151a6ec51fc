/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Backend Traits
//!
//! Defines the capability interface an `Atomic64` is built on. Every
//! operation of `Atomic64` is expressed through these few indivisible
//! primitives, so the cell can run on any facility that provides them.
//!
//! # Author
//!
//! Haixing Hu

use crate::atomic::sync::{
    AtomicI64,
    Ordering,
};

/// An indivisible combine-and-store operation applied by a backend in a
/// single step.
///
/// Arithmetic variants wrap on overflow (two's complement).
///
/// # Author
///
/// Haixing Hu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combine {
    /// `value = value + operand` (wrapping).
    Add,
    /// `value = value - operand` (wrapping).
    Sub,
    /// `value = value & operand`.
    And,
    /// `value = value | operand`.
    Or,
    /// `value = value ^ operand`.
    Xor,
}

impl Combine {
    /// Applies the operation to plain values without any atomicity.
    ///
    /// Useful for deriving post-operation values from the pre-operation
    /// value a backend returned.
    ///
    /// # Parameters
    ///
    /// * `value` - The value held before the operation.
    /// * `operand` - The right-hand operand.
    ///
    /// # Returns
    ///
    /// The value the cell holds after the operation.
    #[inline]
    pub const fn apply(self, value: i64, operand: i64) -> i64 {
        match self {
            Combine::Add => value.wrapping_add(operand),
            Combine::Sub => value.wrapping_sub(operand),
            Combine::And => value & operand,
            Combine::Or => value | operand,
            Combine::Xor => value ^ operand,
        }
    }
}

/// Capability interface for a 64-bit atomic memory location.
///
/// Implementors must perform each method as one indivisible step with
/// respect to every other method called on the same location, and must
/// honor the requested memory orderings with the same rules as
/// `std::sync::atomic`.
///
/// # Author
///
/// Haixing Hu
pub trait AtomicBackend {
    /// Atomically loads the current value.
    fn atomic_load(&self, order: Ordering) -> i64;

    /// Atomically stores `value`.
    fn atomic_store(&self, value: i64, order: Ordering);

    /// Atomically replaces the value, returning the one replaced.
    fn atomic_swap(&self, value: i64, order: Ordering) -> i64;

    /// Atomically applies `op` with `operand`, returning the value held
    /// before the operation.
    fn atomic_fetch_combine(&self, op: Combine, operand: i64, order: Ordering) -> i64;

    /// Stores `new` if the location holds `current`.
    ///
    /// # Returns
    ///
    /// `Ok(previous)` on success (`previous == current`), otherwise
    /// `Err(observed)` with the value found in the location.
    fn atomic_compare_exchange(
        &self,
        current: i64,
        new: i64,
        success: Ordering,
        failure: Ordering,
    ) -> Result<i64, i64>;

    /// Like `atomic_compare_exchange`, but allowed to fail spuriously even
    /// when the location holds `current`.
    ///
    /// The default forwards to the strong form.
    #[inline]
    fn atomic_compare_exchange_weak(
        &self,
        current: i64,
        new: i64,
        success: Ordering,
        failure: Ordering,
    ) -> Result<i64, i64> {
        self.atomic_compare_exchange(current, new, success, failure)
    }
}

impl AtomicBackend for AtomicI64 {
    #[inline]
    fn atomic_load(&self, order: Ordering) -> i64 {
        self.load(order)
    }

    #[inline]
    fn atomic_store(&self, value: i64, order: Ordering) {
        self.store(value, order);
    }

    #[inline]
    fn atomic_swap(&self, value: i64, order: Ordering) -> i64 {
        self.swap(value, order)
    }

    #[inline]
    fn atomic_fetch_combine(&self, op: Combine, operand: i64, order: Ordering) -> i64 {
        match op {
            Combine::Add => self.fetch_add(operand, order),
            Combine::Sub => self.fetch_sub(operand, order),
            Combine::And => self.fetch_and(operand, order),
            Combine::Or => self.fetch_or(operand, order),
            Combine::Xor => self.fetch_xor(operand, order),
        }
    }

    #[inline]
    fn atomic_compare_exchange(
        &self,
        current: i64,
        new: i64,
        success: Ordering,
        failure: Ordering,
    ) -> Result<i64, i64> {
        self.compare_exchange(current, new, success, failure)
    }

    #[inline]
    fn atomic_compare_exchange_weak(
        &self,
        current: i64,
        new: i64,
        success: Ordering,
        failure: Ordering,
    ) -> Result<i64, i64> {
        self.compare_exchange_weak(current, new, success, failure)
    }
}

impl<B: AtomicBackend + ?Sized> AtomicBackend for &B {
    #[inline]
    fn atomic_load(&self, order: Ordering) -> i64 {
        (**self).atomic_load(order)
    }

    #[inline]
    fn atomic_store(&self, value: i64, order: Ordering) {
        (**self).atomic_store(value, order);
    }

    #[inline]
    fn atomic_swap(&self, value: i64, order: Ordering) -> i64 {
        (**self).atomic_swap(value, order)
    }

    #[inline]
    fn atomic_fetch_combine(&self, op: Combine, operand: i64, order: Ordering) -> i64 {
        (**self).atomic_fetch_combine(op, operand, order)
    }

    #[inline]
    fn atomic_compare_exchange(
        &self,
        current: i64,
        new: i64,
        success: Ordering,
        failure: Ordering,
    ) -> Result<i64, i64> {
        (**self).atomic_compare_exchange(current, new, success, failure)
    }

    #[inline]
    fn atomic_compare_exchange_weak(
        &self,
        current: i64,
        new: i64,
        success: Ordering,
        failure: Ordering,
    ) -> Result<i64, i64> {
        (**self).atomic_compare_exchange_weak(current, new, success, failure)
    }
}
