/*!
 * schedsim
 * Pluggable CPU scheduling policies and a cycle-level simulator that drives them
 */

pub mod core;
pub mod monitoring;
pub mod scheduler;
pub mod simulation;

// Re-exports
pub use crate::core::{Cycle, Pid, Quantum, SchedulerError, SchedulerResult, IDLE};
pub use monitoring::init_tracing;
pub use scheduler::{build_policy, FcfsPolicy, PolicyKind, RoundRobinPolicy, SchedulingPolicy};
pub use simulation::{
    run_config, ProcessReport, ProcessSpec, SimulationConfig, SimulationReport, Simulator,
};
