//! Compare elevator dispatch heuristics (FIFO, SCAN, LOOK, SSTF and a shared
//! dynamic queue) by simulating them against random request workloads.

pub mod config;
pub mod elevator;
pub mod error;
pub mod multiset;
pub mod report;
pub mod scheduling;
pub mod simulations;
pub mod workload;

pub use config::{Measurement, SimulationConfig};
pub use elevator::{Elevator, Fleet, Floor, DOOR_OPERATION_TIME, FLOOR_TRANSIT_TIME};
pub use error::{Result, SimulationError};
pub use scheduling::Algorithm;
pub use simulations::{Execution, ResultTable, Simulation};
