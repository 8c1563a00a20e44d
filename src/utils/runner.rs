//! Benchmark execution: single trials, the size matrix, and the per-strategy
//! driver that feeds the reporter.

use std::hint::black_box;
use std::io::Write;

use super::bench::{AveragedResult, TrialResult};
use super::memory;
use super::timer::measure;
use super::tui::{self, Progress};
use crate::dispatch::code::Variant;
use crate::error::{BenchError, Result};
use crate::workload::WorkloadGenerator;

/// Largest input size measured by default.
pub const DEFAULT_MAX_SIZE: usize = 1_000_000_000;

/// Size of the discarded warm-up trial.
pub const WARMUP_SIZE: usize = 1;

/// Configuration for a benchmark run
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Trials per (strategy, size) cell (default: 1)
    pub repeat_count: usize,
    /// Largest input size; sizes grow by 10x from 1 (default: 1e9)
    pub max_size: usize,
    /// Trim the allocator after every trial (default: true)
    pub reclaim_between_trials: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            repeat_count: 1,
            max_size: DEFAULT_MAX_SIZE,
            reclaim_between_trials: true,
        }
    }
}

impl RunConfig {
    pub fn validate(&self) -> Result<()> {
        if self.repeat_count < 1 {
            return Err(BenchError::InvalidRepeatCount(self.repeat_count));
        }
        if self.max_size < 1 {
            return Err(BenchError::InvalidMaxSize(self.max_size));
        }
        Ok(())
    }

    pub fn sizes(&self) -> impl Iterator<Item = usize> {
        size_sequence(self.max_size)
    }
}

/// Input sizes 1, 10, 100, ... up to and including `max_size`.
pub fn size_sequence(max_size: usize) -> impl Iterator<Item = usize> {
    std::iter::successors(Some(1usize), |&size| size.checked_mul(10))
        .take_while(move |&size| size <= max_size)
}

/// Runs trials against one shared workload generator.
#[derive(Debug)]
pub struct BenchmarkRunner {
    config: RunConfig,
    generator: WorkloadGenerator,
    trials_executed: usize,
}

impl BenchmarkRunner {
    /// Create a runner; fails if the configuration is invalid.
    pub fn new(config: RunConfig, generator: WorkloadGenerator) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            generator,
            trials_executed: 0,
        })
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Trials run so far, warm-ups included.
    pub fn trials_executed(&self) -> usize {
        self.trials_executed
    }

    /// Run one timed trial of `variant` over a fresh buffer of `size` values.
    pub fn run_trial(&mut self, variant: &Variant, size: usize) -> TrialResult {
        let input = self.generator.generate(size);
        let mut output: Vec<i32> = Vec::with_capacity(size);

        let (ticks, ()) = measure(|| (variant.function)(black_box(&input), &mut output));

        debug_assert_eq!(output.len(), size);
        black_box(&output);
        drop(output);
        drop(input);

        self.trials_executed += 1;
        if self.config.reclaim_between_trials {
            memory::reclaim();
        }

        log::debug!("{}: size {} took {} ticks", variant.name(), size, ticks);
        TrialResult::new(size, ticks)
    }

    /// Run the full size matrix for one variant.
    ///
    /// One warm-up trial at size 1 runs first and is not reported. The
    /// progress indicator is stepped after every trial.
    pub fn run_matrix(
        &mut self,
        variant: &Variant,
        progress: &mut dyn Progress,
    ) -> Result<Vec<AveragedResult>> {
        let warmup = self.run_trial(variant, WARMUP_SIZE);
        log::debug!(
            "{}: warm-up took {} ticks (discarded)",
            variant.name(),
            warmup.elapsed_ticks()
        );
        progress.step_progress()?;

        let repeat_count = self.config.repeat_count;
        let sizes: Vec<usize> = self.config.sizes().collect();
        let mut results = Vec::with_capacity(sizes.len());

        for size in sizes {
            let mut cell = AveragedResult::with_capacity(size, repeat_count);
            for _ in 0..repeat_count {
                let trial = self.run_trial(variant, size);
                cell.push(trial)?;
                progress.step_progress()?;
            }
            results.push(cell);
        }

        Ok(results)
    }
}

/// Run every variant in order and write one report section per variant.
///
/// Each section is a header line naming the strategy followed by its table.
pub fn run_benchmarks<W: Write>(
    variants: &[Variant],
    runner: &mut BenchmarkRunner,
    progress: &mut dyn Progress,
    out: &mut W,
) -> Result<()> {
    for variant in variants {
        writeln!(out, "Running test \"{}\"", variant.label())?;
        out.flush()?;

        progress.start_progress(variant.label())?;
        let results = runner.run_matrix(variant, progress);
        progress.stop_progress()?;
        let results = results?;

        log::info!(
            "{}: {} cells measured, {} trials so far",
            variant.name(),
            results.len(),
            runner.trials_executed()
        );

        out.write_all(tui::render(&results).as_bytes())?;
        out.flush()?;
    }
    Ok(())
}
