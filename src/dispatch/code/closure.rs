//! Stored closures, with and without captured state.
//!
//! Both flavours go through [`apply_closure`], so they differ only in the
//! closure's environment.

use std::hint::black_box;

use crate::dispatch::{MULTIPLIER, OFFSET};

/// Calls `f` once per input element, in order.
#[inline(never)]
pub fn apply_closure<F>(input: &[i32], output: &mut Vec<i32>, f: F)
where
    F: Fn(i32) -> i32,
{
    for &value in input {
        output.push(f(value));
    }
}

pub fn apply_without_capture(input: &[i32], output: &mut Vec<i32>) {
    let f = |x: i32| x * 3 + 5;
    apply_closure(input, output, f);
}

pub fn apply_with_capture(input: &[i32], output: &mut Vec<i32>) {
    let multiplier = black_box(MULTIPLIER);
    let offset = black_box(OFFSET);
    let f = move |x: i32| x * multiplier + offset;
    apply_closure(input, output, f);
}
