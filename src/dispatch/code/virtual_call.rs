//! Trait method resolved at runtime through a vtable.
//!
//! [`Tripler`] is the only implementation of [`Transform`]. The trait object
//! is passed through `black_box` so the compiler cannot see the concrete type
//! and devirtualise the call.

use std::hint::black_box;

use crate::dispatch::{MULTIPLIER, OFFSET};

/// Per-element transform called through dynamic dispatch.
pub trait Transform {
    fn apply(&self, x: i32) -> i32;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Tripler;

impl Transform for Tripler {
    #[inline(never)]
    fn apply(&self, x: i32) -> i32 {
        x * MULTIPLIER + OFFSET
    }
}

pub fn apply(input: &[i32], output: &mut Vec<i32>) {
    let tripler = Tripler;
    let transform: &dyn Transform = black_box(&tripler);
    for &value in input {
        output.push(transform.apply(value));
    }
}
