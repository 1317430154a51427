use std::collections::BTreeMap;

use serde::Serialize;

use crate::scheduling::Algorithm;

/// Average elapsed time per algorithm and workload size.
///
/// Serializes as `{"FIFO": {"10": 123.4, ...}, ...}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultTable {
    averages: BTreeMap<Algorithm, BTreeMap<usize, f64>>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `value` to the cell for `(algorithm, size)`, starting from zero.
    pub fn accumulate(&mut self, algorithm: Algorithm, size: usize, value: f64) {
        *self
            .averages
            .entry(algorithm)
            .or_default()
            .entry(size)
            .or_insert(0.0) += value;
    }

    /// Fold one workload size's per-algorithm averages into the table.
    pub fn record(&mut self, size: usize, averages: BTreeMap<Algorithm, f64>) {
        for (algorithm, value) in averages {
            self.accumulate(algorithm, size, value);
        }
    }

    pub fn get(&self, algorithm: Algorithm, size: usize) -> Option<f64> {
        self.averages.get(&algorithm)?.get(&size).copied()
    }

    pub fn algorithms(&self) -> impl Iterator<Item = Algorithm> + '_ {
        self.averages.keys().copied()
    }

    /// Every workload size present in the table, ascending.
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes: Vec<usize> = self
            .averages
            .values()
            .flat_map(|row| row.keys().copied())
            .collect();
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }
}
