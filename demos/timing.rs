//! Batch Timing
//!
//! Builds 20 random elements from random binary strings and times batches
//! of each operation, reporting elapsed microseconds per batch.
//!
//! Run with: cargo run --release --features rand --example timing

use std::time::Instant;

use gf2m173::FieldElement;
use rand::Rng;

const BATCH: usize = 100;

fn time_batch<F: FnMut(usize)>(name: &str, iterations: usize, mut op: F) {
    let start = Instant::now();
    for i in 1..=iterations {
        op(i);
    }
    println!(
        "{:<15} {:>6} calls in {:>8} microseconds",
        name,
        iterations,
        start.elapsed().as_micros()
    );
}

fn main() {
    let mut rng = rand::thread_rng();
    let numbers: Vec<FieldElement> = (0..20).map(|_| rng.gen()).collect();
    let n = numbers.len();

    // Keep results observable so the optimizer cannot drop the work.
    let mut sink = FieldElement::default();
    let mut traces = 0u32;

    time_batch("addition", BATCH, |i| {
        sink += numbers[i % n] + numbers[(i - 1) % n];
    });
    time_batch("multiplication", BATCH, |i| {
        sink += numbers[i % n] * numbers[(i - 1) % n];
    });
    time_batch("trace", BATCH, |i| {
        traces += u32::from(numbers[i % n].trace());
    });
    time_batch("square", BATCH, |i| {
        sink += numbers[i % n].square();
    });
    time_batch("pow", 1, |i| {
        sink += numbers[i % n].pow(numbers[(i - 1) % n]);
    });
    time_batch("inverse", BATCH, |i| {
        if let Ok(inv) = numbers[i % n].inverse() {
            sink += inv;
        }
    });

    println!("\nchecksum {} / {} traces set", sink, traces);
}
