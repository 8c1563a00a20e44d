//! Result records produced by the runner.

use super::timer::{ticks_to_ms, Ticks, TICKS_PER_MILLISECOND};
use crate::error::{BenchError, Result};

/// Timing of a single trial.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrialResult {
    size: usize,
    elapsed_ticks: Ticks,
}

impl TrialResult {
    pub fn new(size: usize, elapsed_ticks: Ticks) -> Self {
        Self {
            size,
            elapsed_ticks,
        }
    }

    /// Number of input elements processed.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn elapsed_ticks(&self) -> Ticks {
        self.elapsed_ticks
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ticks as f64 / TICKS_PER_MILLISECOND as f64
    }
}

/// All trials of one (strategy, size) cell.
#[derive(Clone, Debug, PartialEq)]
pub struct AveragedResult {
    size: usize,
    samples: Vec<TrialResult>,
}

impl AveragedResult {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            samples: Vec::new(),
        }
    }

    pub fn with_capacity(size: usize, capacity: usize) -> Self {
        Self {
            size,
            samples: Vec::with_capacity(capacity),
        }
    }

    /// Add a trial to the cell. The trial must have the cell's size.
    pub fn push(&mut self, sample: TrialResult) -> Result<()> {
        if sample.size() != self.size {
            return Err(BenchError::SizeMismatch {
                expected: self.size,
                actual: sample.size(),
            });
        }
        self.samples.push(sample);
        Ok(())
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn samples(&self) -> &[TrialResult] {
        &self.samples
    }

    /// Arithmetic mean of the samples' ticks; 0 for an empty cell.
    pub fn elapsed_ticks(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sum: u128 = self
            .samples
            .iter()
            .map(|s| u128::from(s.elapsed_ticks()))
            .sum();
        sum as f64 / self.samples.len() as f64
    }

    pub fn elapsed_ms(&self) -> f64 {
        ticks_to_ms(self.elapsed_ticks())
    }
}
