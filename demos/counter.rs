/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Atomic Counter Example
//!
//! Demonstrates using `Atomic64` as a thread-safe counter and flag word.

use prism3_atomic64::{
    Atomic64,
    Ordering,
};
use std::sync::Arc;
use std::thread;

fn main() {
    println!("=== Atomic64 Counter Example ===\n");

    // Example 1: Basic counter operations
    println!("1. Basic Counter Operations:");
    let counter = Atomic64::new(0);
    println!("   Initial value: {}", counter.read());

    counter.inc();
    println!("   After inc: {}", counter.read());

    println!("   add_return(5): {}", counter.add_return(5));
    println!("   fetch_sub(2) returned: {}", counter.fetch_sub(2));
    println!("   After fetch_sub: {}", counter.read());

    // Example 2: Multi-threaded counter
    println!("\n2. Multi-threaded Counter:");
    let counter = Arc::new(Atomic64::new(0));
    let num_threads = 10;
    let increments_per_thread = 1000;

    let mut handles = vec![];
    for i in 0..num_threads {
        let counter = counter.clone();
        let handle = thread::spawn(move || {
            for _ in 0..increments_per_thread {
                counter.inc();
            }
            println!("   Thread {} completed", i);
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    println!(
        "   Final count: {} (expected: {})",
        counter.read(),
        num_threads * increments_per_thread
    );

    // Example 3: Compare-and-exchange
    println!("\n3. Compare-and-Exchange:");
    let value = Atomic64::new(10);
    println!("   cmpxchg(10, 20) observed {}", value.cmpxchg(10, 20));
    println!("   cmpxchg(10, 99) observed {}", value.cmpxchg(10, 99));
    println!("   Value is now {}", value.read());

    let mut expected = 0;
    while !value.try_cmpxchg(&mut expected, 0) {
        println!("   try_cmpxchg failed, cell held {}", expected);
    }
    println!("   Reset with try_cmpxchg: {}", value.read());

    // Example 4: Flag word
    println!("\n4. Flag Word:");
    const READY: i64 = 0b01;
    const CLOSED: i64 = 0b10;
    let flags = Atomic64::new(0);
    flags.bitwise_or(READY);
    let before = flags.fetch_or_with(CLOSED, Ordering::SeqCst);
    println!("   Flags before close: {:#04b}, after: {:#04b}", before, flags.read());
    flags.bitwise_and(!READY);
    println!("   After clearing READY: {:#04b}", flags.read());

    // Example 5: Overflow wraps
    println!("\n5. Wrapping Arithmetic:");
    let edge = Atomic64::new(i64::MAX);
    edge.add(1);
    println!("   i64::MAX + 1 = {}", edge);

    println!("\n=== Example completed ===");
}
