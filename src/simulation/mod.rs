/*!
 * Simulation Module
 * Drives a scheduling policy cycle by cycle and reports the outcome
 */

pub mod config;
pub mod report;
pub mod simulator;

pub use config::{ProcessSpec, SimulationConfig, DEFAULT_MAX_CYCLES};
pub use report::{ProcessReport, SimulationReport};
pub use simulator::{run_config, Simulator};
