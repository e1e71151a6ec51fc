/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # prism3-rust-atomic64
//!
//! Lock-free 64-bit atomic integer with explicit memory orderings.
//!
//! `Atomic64` is a single shared signed 64-bit cell supporting read, write,
//! arithmetic, bitwise and compare-exchange operations that stay correct
//! under arbitrary concurrent access, without any lock.
//!
//! ## Design Goals
//!
//! - **Completeness**: The full primitive set, from `read` to
//!   `dec_if_positive`
//! - **Explicit Ordering**: Every operation documents its default memory
//!   ordering and has a `*_with` variant to choose another
//! - **One Retry Loop**: All compound operations share a single
//!   read-compute-CAS loop (`fetch_update_with`)
//! - **Performance**: Zero-cost abstraction with inline methods
//!
//! ## Operation Families
//!
//! - Storage: `read`, `write`
//! - Direct arithmetic: `add`, `sub`, `inc`, `dec`, `sub_and_test`,
//!   `inc_and_test`, `dec_and_test`, `add_negative`, `add_return`,
//!   `sub_return`, `inc_return`, `dec_return`, `fetch_add`, `fetch_sub`
//! - Exchange: `xchg`, `cmpxchg`, `try_cmpxchg`, `try_cmpxchg_weak`
//! - Retry-loop compounds: `fetch_and`, `fetch_or`, `fetch_xor`,
//!   `add_unless`, `inc_not_zero`, `dec_if_positive`, `fetch_update`
//! - Whole bitwise: `bitwise_and`, `bitwise_or`, `bitwise_xor`
//!
//! ## Example
//!
//! ```rust
//! use prism3_atomic64::Atomic64;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let refs = Arc::new(Atomic64::new(1));
//!
//! let worker = {
//!     let refs = refs.clone();
//!     thread::spawn(move || {
//!         if refs.inc_not_zero() {
//!             // ... use the object ...
//!             refs.dec_and_test();
//!         }
//!     })
//! };
//! worker.join().unwrap();
//!
//! assert!(refs.dec_and_test());
//! ```
//!
//! ## Author
//!
//! Haixing Hu

#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod atomic;

// Re-export the cell and its backend interface
pub use atomic::{
    Atomic64,
    AtomicBackend,
    Combine,
    Ordering,
};
