use std::collections::BTreeMap;

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info, warn};

use super::parallel;
use super::results::ResultTable;
use crate::config::{Measurement, SimulationConfig};
use crate::elevator::{random_fleet, Elevator, Floor};
use crate::error::Result;
use crate::scheduling::Algorithm;
use crate::workload::{generate_requests, validate_requests};

/// How [`Simulation::run_seeded`] spreads workload sizes over threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Execution {
    Sequential,
    /// One job per workload size on a pool of `threads` workers.
    Parallel { threads: usize },
}

#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        if measures_unequal_shares(&config) {
            warn!(
                "measuring elevator 0 only: FIFO splits requests across {} elevators, \
                 the other dispatchers give each elevator the full workload",
                config.num_elevators
            );
        }
        Ok(Simulation { config })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run every workload size in order, drawing all randomness from `rng`.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<ResultTable> {
        let mut table = ResultTable::new();
        for &size in &self.config.workload_sizes {
            table.record(size, self.run_size(size, rng)?);
        }
        Ok(table)
    }

    /// Give each workload size its own generator derived from `seed`.
    ///
    /// Both execution modes produce the same table for the same seed.
    pub fn run_seeded(&self, seed: u64, execution: Execution) -> Result<ResultTable> {
        match execution {
            Execution::Sequential => {
                let mut table = ResultTable::new();
                for (index, &size) in self.config.workload_sizes.iter().enumerate() {
                    let mut rng = size_rng(seed, index);
                    table.record(size, self.run_size(size, &mut rng)?);
                }
                Ok(table)
            }
            Execution::Parallel { threads } => parallel::run_sizes(self, seed, threads),
        }
    }

    /// Generate one workload of `size` requests and evaluate it.
    pub fn run_size<R: Rng + ?Sized>(
        &self,
        size: usize,
        rng: &mut R,
    ) -> Result<BTreeMap<Algorithm, f64>> {
        info!(size, "simulating workload");
        let requests = generate_requests(rng, size, self.config.max_floor)?;
        self.run_workload(&requests, rng)
    }

    /// Average each algorithm's measured time over `num_simulations` trials.
    ///
    /// Every trial and algorithm gets a fresh fleet with newly drawn start floors.
    pub fn run_workload<R: Rng + ?Sized>(
        &self,
        requests: &[Floor],
        rng: &mut R,
    ) -> Result<BTreeMap<Algorithm, f64>> {
        validate_requests(requests, self.config.max_floor)?;
        let trials = self.config.num_simulations as f64;
        let mut averages = BTreeMap::new();
        for trial in 0..self.config.num_simulations {
            for &algorithm in &self.config.algorithms {
                let mut fleet =
                    random_fleet(rng, self.config.num_elevators, self.config.max_floor)?;
                algorithm.dispatch(requests, &mut fleet);
                let elapsed = self.measure(&fleet);
                debug!(%algorithm, trial, requests = requests.len(), elapsed, "trial finished");
                *averages.entry(algorithm).or_insert(0.0) += elapsed / trials;
            }
        }
        Ok(averages)
    }

    fn measure(&self, fleet: &[Elevator]) -> f64 {
        match self.config.measurement {
            Measurement::FirstElevator => fleet.first().map_or(0.0, Elevator::elapsed_time),
            Measurement::SlowestElevator => fleet
                .iter()
                .map(Elevator::elapsed_time)
                .fold(0.0, f64::max),
        }
    }
}

/// FIFO splits requests over the fleet while the others hand every elevator the full
/// workload, so measuring elevator 0 compares unequal shares of work.
fn measures_unequal_shares(config: &SimulationConfig) -> bool {
    config.measurement == Measurement::FirstElevator
        && config.num_elevators > 1
        && config.algorithms.contains(&Algorithm::Fifo)
        && config.algorithms.len() > 1
}

/// Generator for the workload size at `index`.
pub(super) fn size_rng(seed: u64, index: usize) -> StdRng {
    StdRng::seed_from_u64(seed ^ (index as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}
