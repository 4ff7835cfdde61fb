//! Projection engine, archetype formula sets, and summary aggregation

mod dcf;
mod engine;
mod lbo;
mod snapshot;
mod startup;
mod summary;
mod three_statement;

pub use engine::{compute, compute_model, ProjectionEngine};
pub use snapshot::{ProjectionResult, YearSnapshot};
pub use summary::{summarize, SummaryMetrics};
