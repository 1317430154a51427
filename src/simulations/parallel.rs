use std::sync::Arc;

use crossbeam_channel::unbounded;
use threadpool::ThreadPool;
use tracing::debug;

use super::harness::{size_rng, Simulation};
use super::results::ResultTable;
use crate::error::{Result, SimulationError};

/// Evaluate each workload size as its own job on a thread pool.
///
/// A job owns its generator, workload and fleets, so nothing mutable crosses threads.
pub(super) fn run_sizes(simulation: &Simulation, seed: u64, threads: usize) -> Result<ResultTable> {
    let sizes = simulation.config().workload_sizes.clone();
    let pool = ThreadPool::new(threads.max(1));
    let (sender, receiver) = unbounded();
    let shared = Arc::new(simulation.clone());

    for (index, &size) in sizes.iter().enumerate() {
        let sender = sender.clone();
        let simulation = Arc::clone(&shared);
        pool.execute(move || {
            let mut rng = size_rng(seed, index);
            let outcome = simulation.run_size(size, &mut rng);
            // The receiver only goes away once every job has reported.
            let _ = sender.send((index, outcome));
        });
    }
    drop(sender);

    let mut outcomes: Vec<_> = sizes.iter().map(|_| None).collect();
    for (index, outcome) in receiver.iter() {
        debug!(size = sizes[index], "worker reported");
        outcomes[index] = Some(outcome);
    }
    pool.join();

    let mut table = ResultTable::new();
    for (&size, outcome) in sizes.iter().zip(outcomes) {
        let averages = outcome.ok_or(SimulationError::WorkerLost { size })??;
        table.record(size, averages);
    }
    Ok(table)
}
