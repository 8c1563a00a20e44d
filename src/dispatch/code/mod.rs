//! Implementation variants for the dispatch comparison

pub mod closure;
pub mod instance_call;
pub mod pipeline;
pub mod static_call;
pub mod virtual_call;

use super::DispatchStrategy;

/// Applies the transform to every input element, appending results in order.
pub type UnitOfWork = fn(&[i32], &mut Vec<i32>);

/// Variant descriptor
#[derive(Clone, Copy, Debug)]
pub struct Variant {
    pub strategy: DispatchStrategy,
    pub description: &'static str,
    pub function: UnitOfWork,
}

impl Variant {
    pub fn name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn label(&self) -> &'static str {
        self.strategy.label()
    }
}

/// Returns the unit of work implementing a strategy.
pub fn unit_of_work(strategy: DispatchStrategy) -> UnitOfWork {
    match strategy {
        DispatchStrategy::StaticCall => static_call::apply,
        DispatchStrategy::InstanceCall => instance_call::apply,
        DispatchStrategy::VirtualCall => virtual_call::apply,
        DispatchStrategy::ClosureNoCapture => closure::apply_without_capture,
        DispatchStrategy::ClosureWithCapture => closure::apply_with_capture,
        DispatchStrategy::PipelineMap => pipeline::apply_without_capture,
        DispatchStrategy::PipelineMapWithCapture => pipeline::apply_with_capture,
    }
}

fn description(strategy: DispatchStrategy) -> &'static str {
    match strategy {
        DispatchStrategy::StaticCall => "Direct call to a free function (never inlined)",
        DispatchStrategy::InstanceCall => "Inherent method on a concrete value",
        DispatchStrategy::VirtualCall => "Trait method through a &dyn vtable lookup",
        DispatchStrategy::ClosureNoCapture => "Stored closure with an empty environment",
        DispatchStrategy::ClosureWithCapture => "Stored closure capturing multiplier and offset",
        DispatchStrategy::PipelineMap => "Iterator::map adapter consumed by Vec::extend",
        DispatchStrategy::PipelineMapWithCapture => {
            "Iterator::map with a capturing closure, consumed by Vec::extend"
        }
    }
}

/// Returns all available variants, in report order
pub fn get_variants() -> Vec<Variant> {
    DispatchStrategy::ALL
        .into_iter()
        .map(|strategy| Variant {
            strategy,
            description: description(strategy),
            function: unit_of_work(strategy),
        })
        .collect()
}
