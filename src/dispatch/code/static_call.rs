//! Direct calls to a free function.
//!
//! The reference transform is marked `#[inline(never)]`, so every element
//! pays a plain CALL/RET.

use crate::dispatch::transform;

pub fn apply(input: &[i32], output: &mut Vec<i32>) {
    for &value in input {
        output.push(transform(value));
    }
}
