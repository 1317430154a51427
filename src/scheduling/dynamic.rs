use tracing::trace;

use crate::elevator::{Elevator, Floor};
use crate::multiset::FloorMultiset;

/// One pending queue shared by the whole fleet.
///
/// Elevators take turns in fleet order. On its turn an elevator claims the lowest
/// pending floor at or above it, or the lowest pending floor overall when nothing
/// is above. A claimed request is gone for every later elevator.
pub fn dynamic_scheduling(requests: &[Floor], fleet: &mut [Elevator]) {
    if fleet.is_empty() {
        return;
    }
    let mut pending: FloorMultiset = requests.iter().copied().collect();
    while !pending.is_empty() {
        for (id, elevator) in fleet.iter_mut().enumerate() {
            let Some(floor) = pending.ceiling_or_first(elevator.current_floor()) else {
                break;
            };
            pending.remove_one(floor);
            trace!(elevator = id, floor, remaining = pending.len(), "claimed request");
            elevator.move_to(floor, true);
        }
    }
}
