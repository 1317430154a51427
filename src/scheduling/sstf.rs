use std::collections::{BTreeMap, VecDeque};

use crate::elevator::{Elevator, Floor};

/// Shortest seek time first. Each elevator serves its own copy of the whole workload,
/// always moving to the nearest unserved floor.
///
/// When a floor below and a floor above are equally near, the one whose earliest
/// unserved request arrived first wins, which matches a linear scan over the
/// remaining requests in arrival order.
pub fn sstf(requests: &[Floor], fleet: &mut [Elevator]) {
    for elevator in fleet.iter_mut() {
        let mut pending = PendingRequests::new(requests);
        while let Some(floor) = pending.nearest(elevator.current_floor()) {
            pending.take(floor);
            elevator.move_to(floor, true);
        }
    }
}

/// Unserved requests grouped by floor, each group holding arrival indices in order.
struct PendingRequests {
    by_floor: BTreeMap<Floor, VecDeque<usize>>,
}

impl PendingRequests {
    fn new(requests: &[Floor]) -> Self {
        let mut by_floor: BTreeMap<Floor, VecDeque<usize>> = BTreeMap::new();
        for (index, &floor) in requests.iter().enumerate() {
            by_floor.entry(floor).or_default().push_back(index);
        }
        PendingRequests { by_floor }
    }

    fn nearest(&self, from: Floor) -> Option<Floor> {
        let below = self.by_floor.range(..=from).next_back();
        let above = self.by_floor.range(from..).next();
        match (below, above) {
            (Some((&low, low_arrivals)), Some((&high, high_arrivals))) => {
                let (down, up) = (from - low, high - from);
                if down < up || (down == up && low_arrivals.front() <= high_arrivals.front()) {
                    Some(low)
                } else {
                    Some(high)
                }
            }
            (Some((&floor, _)), None) | (None, Some((&floor, _))) => Some(floor),
            (None, None) => None,
        }
    }

    fn take(&mut self, floor: Floor) {
        if let Some(arrivals) = self.by_floor.get_mut(&floor) {
            arrivals.pop_front();
            if arrivals.is_empty() {
                self.by_floor.remove(&floor);
            }
        }
    }
}
