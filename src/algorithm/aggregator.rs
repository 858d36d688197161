//! Associative aggregation of observations
//!
//! The same summation serves as the per-worker combiner and as the final
//! reduction. Merging is associative and commutative, so partial results
//! may be combined in any grouping and order, any number of times.

use std::collections::hash_map::Entry;

use itertools::Itertools;
use rustc_hash::FxHashMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::models::key::{AnalysisKey, Dimension};
use crate::models::record::AttendanceStatus;

/// Total count per analysis key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateResult {
    totals: FxHashMap<AnalysisKey, u64>,
}

impl AggregateResult {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Combiner: collapse a stream of observed keys, each counting once
    pub fn from_observations<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = AnalysisKey>,
    {
        let mut result = Self::new();
        for key in keys {
            result.add(key, 1);
        }
        result
    }

    /// Add `count` observations of `key`
    pub fn add(&mut self, key: AnalysisKey, count: u64) {
        match self.totals.entry(key) {
            Entry::Occupied(mut entry) => *entry.get_mut() += count,
            Entry::Vacant(entry) => {
                entry.insert(count);
            }
        }
    }

    /// Merge another partial result into this one
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        // Fold the smaller map into the larger one
        let (mut larger, smaller) = if self.totals.len() >= other.totals.len() {
            (self, other)
        } else {
            (other, self)
        };
        for (key, count) in smaller.totals {
            larger.add(key, count);
        }
        larger
    }

    #[must_use]
    pub fn get(&self, key: &AnalysisKey) -> u64 {
        self.totals.get(key).copied().unwrap_or(0)
    }

    /// Look up a total by its key string
    #[must_use]
    pub fn get_str(&self, key: &str) -> u64 {
        key.parse::<AnalysisKey>()
            .map(|key| self.get(&key))
            .unwrap_or(0)
    }

    /// Number of distinct keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Sum of all totals
    #[must_use]
    pub fn total_observations(&self) -> u64 {
        self.totals.values().sum()
    }

    /// Sum of totals in one dimension for one outcome
    #[must_use]
    pub fn dimension_total(&self, dimension: Dimension, status: AttendanceStatus) -> u64 {
        self.totals
            .iter()
            .filter(|(key, _)| key.dimension() == dimension && key.status() == status)
            .map(|(_, count)| count)
            .sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AnalysisKey, u64)> {
        self.totals.iter().map(|(key, count)| (key, *count))
    }

    /// Entries ordered by their key string, the order of result files
    #[must_use]
    pub fn sorted_entries(&self) -> Vec<(String, u64)> {
        self.totals
            .iter()
            .map(|(key, count)| (key.to_string(), *count))
            .sorted()
            .collect()
    }
}

/// Merge two partial results; the single function used by both stages
#[must_use]
pub fn merge(partial: AggregateResult, other: AggregateResult) -> AggregateResult {
    partial.merge(other)
}

/// Final reduction of the counts gathered for one key
pub fn reduce<I>(_key: &AnalysisKey, counts: I) -> u64
where
    I: IntoIterator<Item = u64>,
{
    counts.into_iter().sum()
}

impl FromIterator<(AnalysisKey, u64)> for AggregateResult {
    fn from_iter<T: IntoIterator<Item = (AnalysisKey, u64)>>(iter: T) -> Self {
        let mut result = Self::new();
        result.extend(iter);
        result
    }
}

impl Extend<(AnalysisKey, u64)> for AggregateResult {
    fn extend<T: IntoIterator<Item = (AnalysisKey, u64)>>(&mut self, iter: T) {
        for (key, count) in iter {
            self.add(key, count);
        }
    }
}

impl Serialize for AggregateResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = self.sorted_entries();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, count) in &entries {
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}
