//! Ordered multiset of pending floors shared by the dynamic dispatcher.

use std::collections::BTreeMap;

use crate::elevator::Floor;

/// Sorted bag of floors. Duplicate floors are kept as separate entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FloorMultiset {
    counts: BTreeMap<Floor, usize>,
    len: usize,
}

impl FloorMultiset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn insert(&mut self, floor: Floor) {
        *self.counts.entry(floor).or_insert(0) += 1;
        self.len += 1;
    }

    /// Remove a single entry of `floor`. Returns false if none was pending.
    pub fn remove_one(&mut self, floor: Floor) -> bool {
        let Some(count) = self.counts.get_mut(&floor) else {
            return false;
        };
        *count -= 1;
        if *count == 0 {
            self.counts.remove(&floor);
        }
        self.len -= 1;
        true
    }

    /// Smallest pending floor `>= key`, wrapping around to the smallest overall.
    pub fn ceiling_or_first(&self, key: Floor) -> Option<Floor> {
        self.counts
            .range(key..)
            .next()
            .or_else(|| self.counts.iter().next())
            .map(|(&floor, _)| floor)
    }
}

impl FromIterator<Floor> for FloorMultiset {
    fn from_iter<I: IntoIterator<Item = Floor>>(iter: I) -> Self {
        let mut set = FloorMultiset::new();
        for floor in iter {
            set.insert(floor);
        }
        set
    }
}
