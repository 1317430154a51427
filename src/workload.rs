use rand::Rng;

use crate::elevator::Floor;
use crate::error::{Result, SimulationError};

/// Draw `num_requests` floors independently and uniformly from `[0, max_floor)`.
///
/// A building without floors is rejected with [`SimulationError::NoFloors`].
pub fn generate_requests<R: Rng + ?Sized>(
    rng: &mut R,
    num_requests: usize,
    max_floor: Floor,
) -> Result<Vec<Floor>> {
    if max_floor == 0 {
        return Err(SimulationError::NoFloors);
    }
    Ok((0..num_requests)
        .map(|_| rng.gen_range(0..max_floor))
        .collect())
}

/// Reject any request outside `[0, max_floor)`.
pub fn validate_requests(requests: &[Floor], max_floor: Floor) -> Result<()> {
    match requests.iter().find(|&&floor| floor >= max_floor) {
        Some(&floor) => Err(SimulationError::FloorOutOfRange { floor, max_floor }),
        None => Ok(()),
    }
}
