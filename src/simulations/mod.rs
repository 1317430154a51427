//! Runs every dispatcher over generated workloads and averages the results.

mod harness;
mod parallel;
mod results;

pub use harness::{Execution, Simulation};
pub use results::ResultTable;
