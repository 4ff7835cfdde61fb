//! Error types surfaced by the projection engine

use thiserror::Error;

/// Errors produced by the core engine and aggregator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Requested horizon is negative (zero is valid and yields an empty sequence)
    #[error("invalid projection horizon {0}: must be non-negative")]
    InvalidHorizon(i32),

    /// Summary aggregation is undefined for this sequence
    #[error("division by zero in summary aggregation: {0}")]
    DivisionByZero(&'static str),

    /// Model id is not one of the four supported archetypes
    #[error("unknown model type '{0}'")]
    UnknownArchetype(String),
}
