/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Types
//!
//! Provides `Atomic64`, a lock-free 64-bit signed integer cell, and the
//! backend capability interface it is built on.
//!
//! # Features
//!
//! - Full operation set: storage, direct arithmetic with fused tests,
//!   exchange primitives, CAS retry-loop compounds, bitwise ops
//! - Documented default memory ordering per operation, plus `*_with`
//!   variants taking explicit orderings
//! - Zero-cost abstraction over `std::sync::atomic::AtomicI64`
//! - Pluggable backend for borrowed storage, instrumentation and loom
//!   model checking
//!
//! # Author
//!
//! Haixing Hu

mod atomic64;
mod contention;
mod sync;
mod traits;

pub use atomic64::Atomic64;
pub use sync::Ordering;
pub use traits::{
    AtomicBackend,
    Combine,
};
