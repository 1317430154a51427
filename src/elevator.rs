use rand::Rng;

use crate::error::{Result, SimulationError};

/// Floor index. Valid floors lie in `[0, max_floor)`.
pub type Floor = usize;

/// Time units spent travelling one floor.
pub const FLOOR_TRANSIT_TIME: f64 = 2.0;
/// Time units spent opening and closing the doors at a stop.
pub const DOOR_OPERATION_TIME: f64 = 3.0;

/// Cost of moving from `from` to `to`, plus the door cycle when `stop` is set.
pub fn move_cost(from: Floor, to: Floor, stop: bool) -> f64 {
    let travel = from.abs_diff(to) as f64 * FLOOR_TRANSIT_TIME;
    if stop {
        travel + DOOR_OPERATION_TIME
    } else {
        travel
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Elevator {
    current_floor: Floor,
    elapsed_time: f64,
    route: Option<Vec<Floor>>,
}

impl Elevator {
    pub fn new(start_floor: Floor) -> Self {
        Elevator {
            current_floor: start_floor,
            elapsed_time: 0.0,
            route: None,
        }
    }

    /// Like [`Elevator::new`], but remembers every floor it moves to.
    pub fn tracked(start_floor: Floor) -> Self {
        Elevator {
            route: Some(Vec::new()),
            ..Elevator::new(start_floor)
        }
    }

    pub fn current_floor(&self) -> Floor {
        self.current_floor
    }

    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    /// Floors visited so far, in order. `None` unless built with [`Elevator::tracked`].
    pub fn route(&self) -> Option<&[Floor]> {
        self.route.as_deref()
    }

    /// Move to `target_floor`, charging travel time and, if `stop`, a door cycle.
    ///
    /// The floor is not range checked here; dispatchers only receive validated workloads.
    pub fn move_to(&mut self, target_floor: Floor, stop: bool) {
        self.elapsed_time += move_cost(self.current_floor, target_floor, stop);
        self.current_floor = target_floor;
        if let Some(route) = self.route.as_mut() {
            route.push(target_floor);
        }
    }
}

/// A fleet is owned by exactly one trial.
pub type Fleet = Vec<Elevator>;

/// Build a fleet of `num_elevators`, each starting on an independently drawn floor.
///
/// Fails with [`SimulationError::NoFloors`] when `max_floor` is zero.
pub fn random_fleet<R: Rng + ?Sized>(
    rng: &mut R,
    num_elevators: usize,
    max_floor: Floor,
) -> Result<Fleet> {
    if max_floor == 0 {
        return Err(SimulationError::NoFloors);
    }
    Ok((0..num_elevators)
        .map(|_| Elevator::new(rng.gen_range(0..max_floor)))
        .collect())
}
