//! Core projection engine dispatching across model archetypes

use std::collections::HashMap;

use chrono::Utc;

use crate::assumptions::AssumptionSet;
use crate::error::ModelError;
use crate::model::Archetype;

use super::snapshot::{ProjectionResult, YearSnapshot};
use super::summary::summarize;
use super::{dcf, lbo, startup, three_statement};

/// Projection engine for one resolved assumption set
///
/// Purely functional: each call allocates its own snapshot sequence and the
/// engine holds no mutable state, so it is safe to share across threads.
/// Each year's snapshot depends only on the resolved assumptions and the
/// year index, never on a previously computed snapshot.
pub struct ProjectionEngine {
    assumptions: AssumptionSet,
}

impl ProjectionEngine {
    /// Create an engine over a resolved assumption set
    pub fn new(assumptions: AssumptionSet) -> Self {
        Self { assumptions }
    }

    /// Project one snapshot per year over the horizon
    ///
    /// A horizon of zero yields an empty sequence.
    pub fn project(&self, horizon: u32, base_year: i32) -> Vec<YearSnapshot> {
        (0..horizon)
            .map(|year_offset| self.snapshot(year_offset, base_year))
            .collect()
    }

    fn snapshot(&self, year_offset: u32, base_year: i32) -> YearSnapshot {
        match self.assumptions.archetype() {
            Archetype::ThreeStatement => {
                three_statement::snapshot(&self.assumptions, year_offset, base_year)
            }
            Archetype::Dcf => dcf::snapshot(&self.assumptions, year_offset, base_year),
            Archetype::Lbo => lbo::snapshot(&self.assumptions, year_offset, base_year),
            Archetype::Startup => startup::snapshot(&self.assumptions, year_offset, base_year),
        }
    }
}

/// Compute a full projection for an external model id
///
/// The single logical call the serving layer exposes: parse the id, validate
/// the horizon, resolve assumptions, project, and aggregate. Fails the whole
/// invocation on any error; no partial results.
pub fn compute(
    model_id: &str,
    variables: &HashMap<String, f64>,
    horizon: i32,
    base_year: i32,
) -> Result<ProjectionResult, ModelError> {
    let archetype = Archetype::from_id(model_id)?;
    compute_model(archetype, variables, horizon, base_year)
}

/// Compute a full projection for an already-dispatched archetype
pub fn compute_model(
    archetype: Archetype,
    variables: &HashMap<String, f64>,
    horizon: i32,
    base_year: i32,
) -> Result<ProjectionResult, ModelError> {
    if horizon < 0 {
        return Err(ModelError::InvalidHorizon(horizon));
    }

    let assumptions = AssumptionSet::resolve(archetype, variables);
    let engine = ProjectionEngine::new(assumptions);
    let projections = engine.project(horizon as u32, base_year);
    let summary = summarize(&projections)?;

    Ok(ProjectionResult {
        model: archetype,
        projections,
        summary,
        created_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fully_defaulted_end_to_end() {
        let result = compute("three-statement", &HashMap::new(), 1, 2024).unwrap();

        assert_eq!(result.model, Archetype::ThreeStatement);
        assert_eq!(result.projections.len(), 1);

        let s = &result.projections[0];
        assert_eq!(s.year, 2024);
        assert_relative_eq!(s.revenue, 10_000_000.0);
        assert_relative_eq!(s.cogs, 4_000_000.0);
        assert_relative_eq!(s.net_income, 1_725_000.0, max_relative = 1e-12);
        assert_relative_eq!(result.summary.total_revenue, 10_000_000.0);
    }

    #[test]
    fn test_horizon_length_and_year_labels() {
        let result = compute("lbo", &HashMap::new(), 7, 2025).unwrap();
        assert_eq!(result.projections.len(), 7);
        assert_eq!(result.projections[0].year, 2025);
        assert_eq!(result.projections[6].year, 2031);
    }

    #[test]
    fn test_negative_horizon_is_invalid() {
        let err = compute("dcf", &HashMap::new(), -1, 2024).unwrap_err();
        assert_eq!(err, ModelError::InvalidHorizon(-1));
    }

    #[test]
    fn test_zero_horizon_projects_empty_then_fails_aggregation() {
        // The engine itself yields an empty sequence for horizon 0
        let assumptions = AssumptionSet::defaults(Archetype::Dcf);
        assert!(ProjectionEngine::new(assumptions).project(0, 2024).is_empty());

        // compute() includes aggregation, which is undefined on empty input
        let err = compute("dcf", &HashMap::new(), 0, 2024).unwrap_err();
        assert!(matches!(err, ModelError::DivisionByZero(_)));
    }

    #[test]
    fn test_unknown_model_id_fails_closed() {
        let err = compute("black-scholes", &HashMap::new(), 5, 2024).unwrap_err();
        assert_eq!(
            err,
            ModelError::UnknownArchetype("black-scholes".to_string())
        );
    }

    #[test]
    fn test_zero_growth_flat_revenue_across_all_archetypes() {
        let mut overrides = HashMap::new();
        overrides.insert("revenue_growth_rate".to_string(), 0.0);

        let base_revenue = [
            (Archetype::ThreeStatement, 10_000_000.0),
            (Archetype::Dcf, 10_000_000.0),
            (Archetype::Lbo, 50_000_000.0),
            (Archetype::Startup, 1_000_000.0),
        ];

        for (archetype, expected) in base_revenue {
            let result = compute_model(archetype, &overrides, 5, 2024).unwrap();
            assert_eq!(result.projections.len(), 5);
            for s in &result.projections {
                assert_relative_eq!(s.revenue, expected);
            }
        }
    }

    #[test]
    fn test_invocations_are_independent() {
        // No shared mutable state: the same input computes the same output
        let mut overrides = HashMap::new();
        overrides.insert("revenue".to_string(), 7_500_000.0);

        let first = compute("three-statement", &overrides, 5, 2024).unwrap();
        let second = compute("three-statement", &overrides, 5, 2024).unwrap();

        for (a, b) in first.projections.iter().zip(second.projections.iter()) {
            assert_eq!(a.revenue, b.revenue);
            assert_eq!(a.equity, b.equity);
        }
    }
}
