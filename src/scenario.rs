//! Scenario runner for batch projections
//!
//! Holds an archetype plus a base override set, then runs many variations
//! (full override maps or single-key sensitivity sweeps) without rebuilding
//! the caller's input each time. Batches run in parallel since the engine
//! shares no mutable state.

use std::collections::HashMap;

use rayon::prelude::*;

use crate::error::ModelError;
use crate::model::Archetype;
use crate::projection::{compute_model, ProjectionResult};

/// Batch scenario runner for one archetype
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    archetype: Archetype,
    base_overrides: HashMap<String, f64>,
}

impl ScenarioRunner {
    /// Create a runner over the archetype's defaults
    pub fn new(archetype: Archetype) -> Self {
        Self {
            archetype,
            base_overrides: HashMap::new(),
        }
    }

    /// Create a runner with a base override set applied to every scenario
    pub fn with_overrides(archetype: Archetype, overrides: HashMap<String, f64>) -> Self {
        Self {
            archetype,
            base_overrides: overrides,
        }
    }

    /// Run a single projection with the base overrides
    pub fn run(&self, horizon: i32, base_year: i32) -> Result<ProjectionResult, ModelError> {
        compute_model(self.archetype, &self.base_overrides, horizon, base_year)
    }

    /// Run one projection per scenario override map, in parallel
    ///
    /// Scenario values win over the base overrides per key.
    pub fn run_batch(
        &self,
        scenarios: &[HashMap<String, f64>],
        horizon: i32,
        base_year: i32,
    ) -> Vec<Result<ProjectionResult, ModelError>> {
        scenarios
            .par_iter()
            .map(|scenario| {
                let mut merged = self.base_overrides.clone();
                merged.extend(scenario.iter().map(|(k, &v)| (k.clone(), v)));
                compute_model(self.archetype, &merged, horizon, base_year)
            })
            .collect()
    }

    /// Sweep a single assumption key across a set of values
    pub fn run_sensitivity(
        &self,
        key: &str,
        values: &[f64],
        horizon: i32,
        base_year: i32,
    ) -> Vec<Result<ProjectionResult, ModelError>> {
        let scenarios: Vec<HashMap<String, f64>> = values
            .iter()
            .map(|&v| {
                let mut overrides = HashMap::new();
                overrides.insert(key.to_string(), v);
                overrides
            })
            .collect();

        self.run_batch(&scenarios, horizon, base_year)
    }

    /// Archetype this runner projects
    pub fn archetype(&self) -> Archetype {
        self.archetype
    }
}
