//! Business assumptions and the resolver that densifies caller input

pub mod defaults;
pub mod loader;

use std::collections::HashMap;

use crate::model::Archetype;

/// A fully-resolved assumption set for one engine invocation
///
/// Built by overlaying a caller-supplied sparse map on the archetype's
/// default table. The resolver performs no validation: negative growth,
/// zero revenue, or absurd magnitudes are all legal inputs and propagate
/// through the formulas unchanged. Range checking belongs to a caller-facing
/// layer, not here.
#[derive(Debug, Clone)]
pub struct AssumptionSet {
    archetype: Archetype,
    values: HashMap<String, f64>,
}

impl AssumptionSet {
    /// Resolve a sparse caller map against the archetype's defaults
    ///
    /// Caller values win per key. Caller keys outside the default table are
    /// carried through untouched (harmless to the formula sets, which only
    /// read known keys).
    pub fn resolve(archetype: Archetype, overrides: &HashMap<String, f64>) -> Self {
        let mut values: HashMap<String, f64> = defaults::table(archetype)
            .iter()
            .map(|&(key, value)| (key.to_string(), value))
            .collect();

        for (key, &value) in overrides {
            values.insert(key.clone(), value);
        }

        Self { archetype, values }
    }

    /// Resolve with no overrides (the pure default table)
    pub fn defaults(archetype: Archetype) -> Self {
        Self::resolve(archetype, &HashMap::new())
    }

    /// Archetype this set was resolved for
    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    /// Raw assumption value (currency amount, day count, or whole percentage)
    ///
    /// Dense by construction for every key the archetype's formula set reads;
    /// an unknown key reads as 0.0.
    pub fn get(&self, key: &str) -> f64 {
        self.values.get(key).copied().unwrap_or(0.0)
    }

    /// Percent-denominated assumption as a decimal rate (25 -> 0.25)
    pub fn rate(&self, key: &str) -> f64 {
        self.get(key) / 100.0
    }

    /// Full resolved map, for serving to callers
    pub fn values(&self) -> &HashMap<String, f64> {
        &self.values
    }
}
