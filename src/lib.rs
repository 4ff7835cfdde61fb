//! Financial Modeling - multi-archetype financial statement projection engine
//!
//! This library provides:
//! - Four financial model archetypes (3-statement, DCF, LBO, startup)
//! - Assumption resolution from sparse caller input against default tables
//! - Deterministic yearly statement projections over a configurable horizon
//! - Summary aggregation (totals, averages, revenue CAGR)
//! - Batch scenario running for sensitivity analysis

pub mod assumptions;
pub mod model;
pub mod projection;
pub mod scenario;

mod error;

// Re-export commonly used types
pub use assumptions::AssumptionSet;
pub use error::ModelError;
pub use model::{catalog, Archetype, ModelInfo};
pub use projection::{
    compute, compute_model, summarize, ProjectionEngine, ProjectionResult, SummaryMetrics,
    YearSnapshot,
};
pub use scenario::ScenarioRunner;
