use crate::elevator::{Elevator, Floor};

/// Serve floors at or above the elevator going up, then the rest going down.
pub fn look(requests: &[Floor], fleet: &mut [Elevator]) {
    let mut floors = requests.to_vec();
    floors.sort_unstable();
    for elevator in fleet.iter_mut() {
        let pivot = floors.partition_point(|&floor| floor < elevator.current_floor());
        let (below, ahead) = floors.split_at(pivot);
        for &floor in ahead {
            elevator.move_to(floor, true);
        }
        for &floor in below.iter().rev() {
            elevator.move_to(floor, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn goes_up_then_reverses() {
        let mut fleet = vec![Elevator::tracked(10)];
        look(&[2, 8, 15], &mut fleet);
        assert_eq!(fleet[0].route(), Some(&[15, 8, 2][..]));
        // 5 up, 7 down, 6 down, three stops.
        assert_eq!(fleet[0].elapsed_time(), 18.0 * 2.0 + 9.0);
    }

    #[test]
    fn floor_equal_to_start_is_served_first() {
        let mut fleet = vec![Elevator::tracked(5)];
        look(&[1, 5, 9], &mut fleet);
        assert_eq!(fleet[0].route(), Some(&[5, 9, 1][..]));
    }

    #[test]
    fn each_elevator_uses_its_own_pivot() {
        let mut fleet = vec![Elevator::tracked(0), Elevator::tracked(99)];
        look(&[30, 10, 20], &mut fleet);
        assert_eq!(fleet[0].route(), Some(&[10, 20, 30][..]));
        assert_eq!(fleet[1].route(), Some(&[30, 20, 10][..]));
    }

    proptest! {
        #[test]
        fn ahead_ascending_then_behind_descending(
            requests in prop::collection::vec(0usize..100, 0..50),
            start in 0usize..100,
        ) {
            let mut fleet = vec![Elevator::tracked(start)];
            look(&requests, &mut fleet);

            let mut ahead: Vec<_> = requests.iter().copied().filter(|&f| f >= start).collect();
            ahead.sort_unstable();
            let mut behind: Vec<_> = requests.iter().copied().filter(|&f| f < start).collect();
            behind.sort_unstable_by(|a, b| b.cmp(a));
            ahead.extend(behind);

            prop_assert_eq!(fleet[0].route().unwrap(), &ahead[..]);
        }
    }
}
