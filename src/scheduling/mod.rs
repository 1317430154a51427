//! The five dispatch heuristics compared by the simulation.
//!
//! Every dispatcher takes the workload by shared reference and a mutable fleet.
//! Dispatchers that need to reorder or consume requests work on a private copy,
//! so one workload can be replayed against every algorithm unchanged.

mod dynamic;
mod fifo;
mod look;
mod scan;
mod sstf;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::elevator::{Elevator, Floor};
use crate::error::SimulationError;

pub use dynamic::dynamic_scheduling;
pub use fifo::fifo;
pub use look::look;
pub use scan::scan;
pub use sstf::sstf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "FIFO")]
    Fifo,
    #[serde(rename = "SCAN")]
    Scan,
    #[serde(rename = "LOOK")]
    Look,
    #[serde(rename = "SSTF")]
    Sstf,
    #[serde(rename = "DynamicScheduling")]
    DynamicScheduling,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Fifo,
        Algorithm::Scan,
        Algorithm::Look,
        Algorithm::Sstf,
        Algorithm::DynamicScheduling,
    ];

    /// Key used for this algorithm in the result table.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Fifo => "FIFO",
            Algorithm::Scan => "SCAN",
            Algorithm::Look => "LOOK",
            Algorithm::Sstf => "SSTF",
            Algorithm::DynamicScheduling => "DynamicScheduling",
        }
    }

    pub fn dispatch(self, requests: &[Floor], fleet: &mut [Elevator]) {
        match self {
            Algorithm::Fifo => fifo(requests, fleet),
            Algorithm::Scan => scan(requests, fleet),
            Algorithm::Look => look(requests, fleet),
            Algorithm::Sstf => sstf(requests, fleet),
            Algorithm::DynamicScheduling => dynamic_scheduling(requests, fleet),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(Algorithm::Fifo),
            "scan" => Ok(Algorithm::Scan),
            "look" => Ok(Algorithm::Look),
            "sstf" => Ok(Algorithm::Sstf),
            "dynamic" | "dynamicscheduling" | "dynamic_scheduling" => {
                Ok(Algorithm::DynamicScheduling)
            }
            _ => Err(SimulationError::UnknownAlgorithm(s.to_string())),
        }
    }
}
