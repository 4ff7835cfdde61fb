//! Model archetypes and the catalog served to callers

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// The four supported financial model archetypes
///
/// Closed set: adding a model means adding a new formula set and default
/// table, not extending an existing one. Dispatch on this enum is exhaustive,
/// so an unhandled archetype is a compile error rather than a silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Archetype {
    /// Integrated income statement / balance sheet / cash flow projection
    ThreeStatement,
    /// Simplified cash-generator feeding a DCF valuation
    Dcf,
    /// Leveraged buyout target with an amortizing debt schedule
    Lbo,
    /// High-growth startup with a burn-rate runway model
    Startup,
}

impl Archetype {
    /// All archetypes, in catalog order
    pub const ALL: [Archetype; 4] = [
        Archetype::ThreeStatement,
        Archetype::Dcf,
        Archetype::Lbo,
        Archetype::Startup,
    ];

    /// Canonical external identifier
    pub fn id(&self) -> &'static str {
        match self {
            Archetype::ThreeStatement => "three-statement",
            Archetype::Dcf => "dcf",
            Archetype::Lbo => "lbo",
            Archetype::Startup => "startup",
        }
    }

    /// Parse an external model id, failing closed on anything unknown
    ///
    /// Accepts `3-statement` as an alias for `three-statement` since the
    /// original API exposed the model under that id.
    pub fn from_id(id: &str) -> Result<Self, ModelError> {
        match id {
            "three-statement" | "3-statement" => Ok(Archetype::ThreeStatement),
            "dcf" => Ok(Archetype::Dcf),
            "lbo" => Ok(Archetype::Lbo),
            "startup" => Ok(Archetype::Startup),
            other => Err(ModelError::UnknownArchetype(other.to_string())),
        }
    }
}

/// Catalog entry describing one model to callers
#[derive(Debug, Clone, Serialize)]
pub struct ModelInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub model_type: Archetype,
    pub complexity: &'static str,
    #[serde(rename = "timeEstimate")]
    pub time_estimate: &'static str,
    pub color: &'static str,
}

impl Archetype {
    /// Catalog metadata for this archetype
    pub fn info(&self) -> ModelInfo {
        match self {
            Archetype::ThreeStatement => ModelInfo {
                id: "3-statement",
                name: "3-Statement Model",
                description: "Integrated Income Statement, Balance Sheet, and Cash Flow Statement projections",
                model_type: Archetype::ThreeStatement,
                complexity: "Intermediate",
                time_estimate: "15-30 min",
                color: "from-blue-500 to-cyan-500",
            },
            Archetype::Dcf => ModelInfo {
                id: "dcf",
                name: "DCF Valuation",
                description: "Discounted Cash Flow model with NPV and Terminal Value calculations",
                model_type: Archetype::Dcf,
                complexity: "Advanced",
                time_estimate: "20-40 min",
                color: "from-green-500 to-emerald-500",
            },
            Archetype::Lbo => ModelInfo {
                id: "lbo",
                name: "LBO Analysis",
                description: "Leveraged Buyout model with debt structuring and returns analysis",
                model_type: Archetype::Lbo,
                complexity: "Expert",
                time_estimate: "30-60 min",
                color: "from-purple-500 to-violet-500",
            },
            Archetype::Startup => ModelInfo {
                id: "startup",
                name: "Startup Model",
                description: "Growth-focused financial projections for early-stage companies",
                model_type: Archetype::Startup,
                complexity: "Beginner",
                time_estimate: "10-20 min",
                color: "from-orange-500 to-red-500",
            },
        }
    }
}

/// Full model catalog, one entry per archetype
pub fn catalog() -> Vec<ModelInfo> {
    Archetype::ALL.iter().map(|a| a.info()).collect()
}
