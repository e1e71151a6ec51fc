/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Synchronization Shim
//!
//! Selects the native 64-bit atomic backing `Atomic64`.
//!
//! In normal builds this re-exports `std::sync::atomic`. When the `loom`
//! feature is enabled *and* the crate is compiled with `--cfg loom`, the
//! loom model-checking atomics are used instead, so every interleaving of
//! the retry loops can be explored:
//!
//! ```bash
//! RUSTFLAGS="--cfg loom" cargo test --features loom --test loom_tests
//! ```
//!
//! # Author
//!
//! Haixing Hu

#[cfg(all(feature = "loom", loom))]
pub use loom::sync::atomic::{
    AtomicI64,
    Ordering,
};

#[cfg(not(all(feature = "loom", loom)))]
pub use std::sync::atomic::{
    AtomicI64,
    Ordering,
};

/// Derives the ordering to use when a compare-exchange fails from the
/// ordering requested for its success path.
///
/// A failed compare-exchange is a pure load, so it can neither be
/// `Release` nor `AcqRel`. The release half is dropped and the acquire half
/// (if any) is kept.
///
/// # Parameters
///
/// * `order` - The ordering requested for the successful store.
///
/// # Returns
///
/// A valid failure ordering no stronger than `order`.
#[inline]
pub const fn failure_ordering(order: Ordering) -> Ordering {
    match order {
        Ordering::Release => Ordering::Relaxed,
        Ordering::AcqRel => Ordering::Acquire,
        other => other,
    }
}
