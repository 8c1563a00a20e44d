//! Timing primitives for trials.
//!
//! Measurements are taken with the monotonic wall clock and reported in
//! ticks. One tick is one nanosecond.

use std::time::Instant;

/// Raw timer unit.
pub type Ticks = u64;

/// Fixed divisor from ticks to milliseconds.
pub const TICKS_PER_MILLISECOND: u64 = 1_000_000;

/// Read the current timer value.
#[inline(always)]
pub fn now() -> Instant {
    Instant::now()
}

/// Ticks elapsed since `start`.
#[inline(always)]
pub fn elapsed(start: Instant) -> Ticks {
    // 2^64 ns is several centuries, saturate rather than wrap.
    u64::try_from(start.elapsed().as_nanos()).unwrap_or(u64::MAX)
}

/// Convert ticks (possibly fractional, e.g. a mean) to milliseconds.
pub fn ticks_to_ms(ticks: f64) -> f64 {
    ticks / TICKS_PER_MILLISECOND as f64
}

/// Get the measurement unit name
pub const fn unit_name() -> &'static str {
    "ticks"
}

/// Time a closure, returning elapsed ticks and its result.
#[inline(always)]
pub fn measure<F, R>(f: F) -> (Ticks, R)
where
    F: FnOnce() -> R,
{
    let start = now();
    let result = f();
    (elapsed(start), result)
}
