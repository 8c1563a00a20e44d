//! Inherent method on a concrete value.

use std::hint::black_box;

/// Holds the transform's coefficients as instance state.
#[derive(Clone, Copy, Debug)]
pub struct Transformer {
    multiplier: i32,
    offset: i32,
}

impl Transformer {
    pub const fn new(multiplier: i32, offset: i32) -> Self {
        Self { multiplier, offset }
    }

    #[inline(never)]
    pub fn apply(&self, x: i32) -> i32 {
        x * self.multiplier + self.offset
    }
}

impl Default for Transformer {
    fn default() -> Self {
        Self::new(crate::dispatch::MULTIPLIER, crate::dispatch::OFFSET)
    }
}

pub fn apply(input: &[i32], output: &mut Vec<i32>) {
    let transformer = black_box(Transformer::default());
    for &value in input {
        output.push(transformer.apply(value));
    }
}
