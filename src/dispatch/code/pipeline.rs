//! Declarative iteration: a lazy `map` adapter drained by a single
//! `extend` pass.

use std::hint::black_box;

use crate::dispatch::{MULTIPLIER, OFFSET};

pub fn apply_without_capture(input: &[i32], output: &mut Vec<i32>) {
    output.extend(input.iter().map(|&x| x * 3 + 5));
}

pub fn apply_with_capture(input: &[i32], output: &mut Vec<i32>) {
    let multiplier = black_box(MULTIPLIER);
    let offset = black_box(OFFSET);
    output.extend(input.iter().map(move |&x| x * multiplier + offset));
}
