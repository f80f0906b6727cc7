/*!
 * Simulation Configuration
 *
 * JSON description of a single simulation run.
 */

use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::types::{Cycle, Pid, Quantum};
use crate::scheduler::PolicyKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Default upper bound on simulated cycles before a run is abandoned
pub const DEFAULT_MAX_CYCLES: Cycle = 1_000_000;

fn default_max_cycles() -> Cycle {
    DEFAULT_MAX_CYCLES
}

/// A simulated process submitted at cycle 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    pub pid: Pid,
    /// CPU cycles needed before the process finishes
    pub service_time: Cycle,
}

impl ProcessSpec {
    pub const fn new(pid: Pid, service_time: Cycle) -> Self {
        Self { pid, service_time }
    }
}

/// Configuration for one simulation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationConfig {
    /// Dispatch algorithm (default: round_robin)
    #[serde(default)]
    pub policy: PolicyKind,

    /// Time slice in cycles (default: 1, ignored by fcfs)
    #[serde(default)]
    pub quantum: Quantum,

    /// Abort the run after this many cycles (default: 1_000_000)
    #[serde(default = "default_max_cycles")]
    pub max_cycles: Cycle,

    /// Processes in submission order
    pub processes: Vec<ProcessSpec>,
}

impl SimulationConfig {
    /// Create configuration with default limits
    pub fn new(policy: PolicyKind, quantum: Quantum, processes: Vec<ProcessSpec>) -> Self {
        Self {
            policy,
            quantum,
            max_cycles: DEFAULT_MAX_CYCLES,
            processes,
        }
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> SchedulerResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| SchedulerError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> SchedulerResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading simulation config");

        let json = fs::read_to_string(path).map_err(|e| {
            SchedulerError::InvalidConfig(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&json)
    }

    /// Check invariants serde cannot express
    pub fn validate(&self) -> SchedulerResult<()> {
        if self.processes.is_empty() {
            return Err(SchedulerError::InvalidConfig("no processes to simulate".into()));
        }
        if self.max_cycles == 0 {
            return Err(SchedulerError::InvalidConfig("max_cycles must be positive".into()));
        }
        if let Some(spec) = self.processes.iter().find(|p| p.service_time == 0) {
            return Err(SchedulerError::InvalidConfig(format!(
                "process {} has zero service time",
                spec.pid
            )));
        }
        Ok(())
    }
}
