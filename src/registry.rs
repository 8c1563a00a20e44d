//! Strategy registry for lookup and selection.
//!
//! The registry holds the dispatch variants in report order and resolves
//! the command-line selection against them.

use crate::dispatch::code::{get_variants, Variant};
use crate::dispatch::test::{verification_inputs, verify_variant};
use crate::error::{BenchError, Result};

/// Ordered catalog of the variants to benchmark
#[derive(Debug)]
pub struct StrategyRegistry {
    variants: Vec<Variant>,
}

impl StrategyRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            variants: Vec::new(),
        }
    }

    /// Register a variant
    pub fn register(&mut self, variant: Variant) {
        self.variants.push(variant);
    }

    /// Get all registered variants
    pub fn all(&self) -> &[Variant] {
        &self.variants
    }

    /// Find variant by name
    pub fn find(&self, name: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.name() == name)
    }

    /// List variant names
    pub fn list_names(&self) -> Vec<&'static str> {
        self.variants.iter().map(|v| v.name()).collect()
    }

    /// Resolve a selection of names, keeping catalog order.
    ///
    /// An empty selection means every variant.
    pub fn select(&self, names: &[String]) -> Result<Vec<Variant>> {
        if let Some(unknown) = names.iter().find(|n| self.find(n).is_none()) {
            return Err(BenchError::UnknownStrategy(unknown.clone()));
        }
        Ok(self
            .variants
            .iter()
            .filter(|v| names.is_empty() || names.iter().any(|n| n == v.name()))
            .copied()
            .collect())
    }

    /// Check every registered variant against the reference transform.
    pub fn verify(&self) -> Result<()> {
        let inputs = verification_inputs();
        for variant in &self.variants {
            verify_variant(variant, &inputs)?;
        }
        Ok(())
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all strategies
pub fn build_registry() -> StrategyRegistry {
    let mut registry = StrategyRegistry::new();
    for variant in get_variants() {
        registry.register(variant);
    }
    registry
}
