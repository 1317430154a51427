use std::path::PathBuf;

use crate::elevator::Floor;

/// Errors raised while configuring or running a simulation.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("max_floor must be greater than zero")]
    NoFloors,

    #[error("a fleet needs at least one elevator")]
    EmptyFleet,

    #[error("num_simulations must be at least one")]
    NoSimulations,

    #[error("no workload sizes configured")]
    NoWorkloadSizes,

    #[error("workload size {0} is listed more than once")]
    DuplicateWorkloadSize(usize),

    #[error("no algorithms selected")]
    NoAlgorithms,

    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("requested floor {floor} is outside [0, {max_floor})")]
    FloorOutOfRange { floor: Floor, max_floor: Floor },

    #[error("worker thread exited before reporting workload size {size}")]
    WorkerLost { size: usize },

    #[error("nothing to plot: the result table has no positive sizes or times")]
    EmptyPlot,

    #[error("failed to draw plot: {0}")]
    Plot(String),

    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = SimulationError> = std::result::Result<T, E>;
