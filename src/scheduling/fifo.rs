use crate::elevator::{Elevator, Floor};

/// Round-robin by arrival index: request `i` goes to elevator `i % fleet.len()`.
pub fn fifo(requests: &[Floor], fleet: &mut [Elevator]) {
    if fleet.is_empty() {
        return;
    }
    let fleet_size = fleet.len();
    for (index, &floor) in requests.iter().enumerate() {
        fleet[index % fleet_size].move_to(floor, true);
    }
}
