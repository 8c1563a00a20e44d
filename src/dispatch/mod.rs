//! # Call Dispatch Comparison
//!
//! The same arithmetic transform (`x * 3 + 5`) reached through different
//! call mechanisms. Only the dispatch varies between strategies; the output
//! of every strategy must be identical to the reference [`transform`].

pub mod code;
pub mod test;

use std::fmt;

/// Multiplier applied by the transform.
pub const MULTIPLIER: i32 = 3;

/// Offset added by the transform.
pub const OFFSET: i32 = 5;

/// Reference transform every strategy must reproduce.
#[inline(never)]
pub fn transform(x: i32) -> i32 {
    x * MULTIPLIER + OFFSET
}

/// Identifier of a dispatch mechanism under comparison.
///
/// The declaration order is the order strategies are run and reported in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DispatchStrategy {
    StaticCall,
    InstanceCall,
    VirtualCall,
    ClosureNoCapture,
    ClosureWithCapture,
    PipelineMap,
    PipelineMapWithCapture,
}

impl DispatchStrategy {
    /// All strategies in report order.
    pub const ALL: [DispatchStrategy; 7] = [
        DispatchStrategy::StaticCall,
        DispatchStrategy::InstanceCall,
        DispatchStrategy::VirtualCall,
        DispatchStrategy::ClosureNoCapture,
        DispatchStrategy::ClosureWithCapture,
        DispatchStrategy::PipelineMap,
        DispatchStrategy::PipelineMapWithCapture,
    ];

    /// Stable identifier used on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            DispatchStrategy::StaticCall => "static-call",
            DispatchStrategy::InstanceCall => "instance-call",
            DispatchStrategy::VirtualCall => "virtual-call",
            DispatchStrategy::ClosureNoCapture => "closure",
            DispatchStrategy::ClosureWithCapture => "closure-capture",
            DispatchStrategy::PipelineMap => "pipeline",
            DispatchStrategy::PipelineMapWithCapture => "pipeline-capture",
        }
    }

    /// Label printed above the strategy's result table.
    pub const fn label(self) -> &'static str {
        match self {
            DispatchStrategy::StaticCall => "Loop, static function call",
            DispatchStrategy::InstanceCall => "Loop, instance method call",
            DispatchStrategy::VirtualCall => "Loop, virtual method call",
            DispatchStrategy::ClosureNoCapture => "Loop, closure without capture",
            DispatchStrategy::ClosureWithCapture => "Loop, closure with capture",
            DispatchStrategy::PipelineMap => "Iterator map, closure without capture",
            DispatchStrategy::PipelineMapWithCapture => "Iterator map, closure with capture",
        }
    }

    /// Look a strategy up by its command-line name.
    pub fn from_name(name: &str) -> Option<DispatchStrategy> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }
}

impl fmt::Display for DispatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
