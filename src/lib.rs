//! # Dispatch-Bench
//!
//! Micro-benchmarks comparing the cost of reaching the same arithmetic
//! transform through different call-dispatch mechanisms: static calls,
//! instance methods, trait objects, closures and iterator pipelines.

pub mod dispatch;
pub mod error;
pub mod registry;
pub mod utils;
pub mod workload;

/// Re-export tui from utils
pub use utils::tui;

/// Re-export run_benchmarks from utils::runner
pub use utils::runner::run_benchmarks;

pub use error::{BenchError, Result};

/// Re-export commonly used items
pub mod prelude {
    pub use crate::dispatch::code::Variant;
    pub use crate::dispatch::DispatchStrategy;
    pub use crate::registry::{build_registry, StrategyRegistry};
    pub use crate::utils::{AveragedResult, BenchmarkRunner, RunConfig, TrialResult};
    pub use crate::workload::WorkloadGenerator;
}
