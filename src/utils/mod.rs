//! Utility modules for benchmarking and reporting.

pub mod bench;
pub mod memory;
pub mod runner;
pub mod timer;
pub mod tui;

// Re-export commonly used items
pub use bench::{AveragedResult, TrialResult};
pub use runner::{size_sequence, BenchmarkRunner, RunConfig};
pub use timer::{Ticks, TICKS_PER_MILLISECOND};
pub use tui::{Progress, QuietProgress, SpinnerProgress};
