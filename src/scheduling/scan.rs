use crate::elevator::{Elevator, Floor};

/// Every elevator sweeps the whole sorted workload bottom to top, wherever it starts.
pub fn scan(requests: &[Floor], fleet: &mut [Elevator]) {
    let mut floors = requests.to_vec();
    floors.sort_unstable();
    for elevator in fleet.iter_mut() {
        for &floor in &floors {
            elevator.move_to(floor, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweeps_upward_regardless_of_start() {
        let mut fleet = vec![Elevator::tracked(50), Elevator::tracked(0)];
        scan(&[8, 2, 15, 2], &mut fleet);
        for elevator in &fleet {
            assert_eq!(elevator.route(), Some(&[2, 2, 8, 15][..]));
        }
        // 48 floors down to 2, then 13 up to 15, four stops.
        assert_eq!(fleet[0].elapsed_time(), (48 + 13) as f64 * 2.0 + 4.0 * 3.0);
    }
}
