use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Substance name to density in g/mL.
///
/// Densities are normalized before insertion; nothing in here knows about
/// other units.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry {
    densities: BTreeMap<String, f64>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites `name`, returning the previous density if any.
    pub fn insert(&mut self, name: impl Into<String>, grams_per_ml: f64) -> Option<f64> {
        self.densities.insert(name.into(), grams_per_ml)
    }

    pub fn density(&self, name: &str) -> Option<f64> {
        self.densities.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.densities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.densities.is_empty()
    }
}

impl FromIterator<(String, f64)> for Registry {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            densities: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume {
    pub milliliters: f64,
    pub tablespoons: f64,
}
