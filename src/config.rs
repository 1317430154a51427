//! Simulation parameters.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::elevator::Floor;
use crate::error::{Result, SimulationError};
use crate::scheduling::Algorithm;

/// Which elevator's time stands for a trial.
///
/// FIFO splits the workload across the fleet while the other dispatchers hand the
/// whole workload to each elevator, so `FirstElevator` compares one share of the
/// work against the whole job. `SlowestElevator` reports the fleet's makespan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measurement {
    #[default]
    FirstElevator,
    SlowestElevator,
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of requests in each generated workload
    pub workload_sizes: Vec<usize>,

    /// Floors are drawn from `[0, max_floor)`
    pub max_floor: Floor,

    pub num_elevators: usize,

    /// Trials averaged per workload size and algorithm
    pub num_simulations: usize,

    pub measurement: Measurement,

    /// Dispatchers to evaluate, in reporting order
    pub algorithms: Vec<Algorithm>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            workload_sizes: vec![10, 100, 1000, 10000, 100000],
            max_floor: 100,
            num_elevators: 3,
            num_simulations: 5,
            measurement: Measurement::default(),
            algorithms: Algorithm::ALL.to_vec(),
        }
    }
}

impl SimulationConfig {
    /// Load from a JSON file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| SimulationError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: SimulationConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_floor == 0 {
            return Err(SimulationError::NoFloors);
        }
        if self.num_elevators == 0 {
            return Err(SimulationError::EmptyFleet);
        }
        if self.num_simulations == 0 {
            return Err(SimulationError::NoSimulations);
        }
        if self.workload_sizes.is_empty() {
            return Err(SimulationError::NoWorkloadSizes);
        }
        for (index, size) in self.workload_sizes.iter().enumerate() {
            if self.workload_sizes[..index].contains(size) {
                return Err(SimulationError::DuplicateWorkloadSize(*size));
            }
        }
        if self.algorithms.is_empty() {
            return Err(SimulationError::NoAlgorithms);
        }
        Ok(())
    }
}
