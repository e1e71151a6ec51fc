/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Reference Count and Permit Example
//!
//! Demonstrates the conditional compounds: `inc_not_zero` / `dec_and_test`
//! for a lookup-then-get reference count, and `dec_if_positive` as a
//! non-blocking permit pool.

use prism3_atomic64::{
    Atomic64,
    Ordering,
};
use std::sync::Arc;
use std::thread;

fn main() {
    println!("=== Atomic64 Refcount Example ===\n");

    // Example 1: Reference count that cannot be revived once released
    println!("1. Reference Count:");
    let refs = Arc::new(Atomic64::new(1));

    let mut handles = vec![];
    for i in 0..4 {
        let refs = refs.clone();
        handles.push(thread::spawn(move || {
            if refs.inc_not_zero() {
                println!("   Reader {} took a reference", i);
                if refs.dec_and_test_with(Ordering::AcqRel) {
                    println!("   Reader {} dropped the last reference", i);
                }
            } else {
                println!("   Reader {} found the object released", i);
            }
        }));
    }

    if refs.dec_and_test_with(Ordering::AcqRel) {
        println!("   Owner dropped the last reference");
    }

    for handle in handles {
        handle.join().unwrap();
    }
    println!("   Final count: {}", refs.read());

    // Example 2: Permit pool
    println!("\n2. Permit Pool:");
    let permits = Arc::new(Atomic64::new(3));

    let mut handles = vec![];
    for i in 0..5 {
        let permits = permits.clone();
        handles.push(thread::spawn(move || {
            let left = permits.dec_if_positive();
            if left >= 0 {
                println!("   Worker {} got a permit ({} left)", i, left);
                true
            } else {
                println!("   Worker {} was turned away", i);
                false
            }
        }));
    }

    let granted = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|&granted| granted)
        .count();
    println!("   Granted: {}, remaining: {}", granted, permits.read());

    println!("\n=== Example completed ===");
}
