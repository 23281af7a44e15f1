//! Name → value mapping of one telemetry packet
//!
//! Produced by the SenML extractor and consumed by the aggregator. Keys are
//! reading names (`"pm2.5"`, `"temperature"`, ...); units and timestamps are
//! not carried. Inserting an existing name replaces its value.

use alloc::collections::btree_map::{self, BTreeMap};
use alloc::string::String;

/// Readings of a single packet, keyed by name
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Readings {
    values: BTreeMap<String, f64>,
}

impl Readings {
    /// Empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a reading, returning the value it replaced
    pub fn insert(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.values.insert(name.into(), value)
    }

    /// Value of a reading, if present
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Whether a reading is present
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of distinct readings
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no readings are present
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Readings in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Readings {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut readings = Readings::new();
        readings.extend(iter);
        readings
    }
}

impl<S: Into<String>> Extend<(S, f64)> for Readings {
    fn extend<I: IntoIterator<Item = (S, f64)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl IntoIterator for Readings {
    type Item = (String, f64);
    type IntoIter = btree_map::IntoIter<String, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
