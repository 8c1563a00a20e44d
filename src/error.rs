//! Error type shared by the harness.

use thiserror::Error;

/// Everything that can go wrong before or while running the benchmark matrix.
///
/// Allocation failure at very large sizes is not represented here: it aborts
/// the process like any other out-of-memory condition.
#[derive(Debug, Error)]
pub enum BenchError {
    /// Each cell needs at least one measured trial.
    #[error("repeat count must be at least 1, got {0}")]
    InvalidRepeatCount(usize),

    /// The size sequence starts at 1, so a smaller cap would yield no cells.
    #[error("maximum input size must be at least 1, got {0}")]
    InvalidMaxSize(usize),

    /// A trial was added to a cell of a different size.
    #[error("cannot add a sample of size {actual} to a cell of size {expected}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("unknown dispatch strategy '{0}'")]
    UnknownStrategy(String),

    /// A strategy produced output that differs from the reference transform.
    #[error(
        "strategy '{strategy}' diverged at index {index}: expected {expected}, got {actual}"
    )]
    VerificationFailed {
        strategy: &'static str,
        index: usize,
        expected: i32,
        actual: i32,
    },

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BenchError>;
