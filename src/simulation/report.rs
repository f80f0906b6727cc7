/*!
 * Simulation Report
 * Outcome of a finished simulation run
 */

use crate::core::types::{Cycle, Pid};
use crate::scheduler::PolicyKind;
use serde::{Deserialize, Serialize};

/// Per-process outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessReport {
    pub pid: Pid,
    pub service_time: Cycle,
    /// 1-based cycle in which the last unit of service ran
    pub finish_cycle: Cycle,
    pub turnaround: Cycle,
    pub waiting: Cycle,
}

impl ProcessReport {
    /// Build report for a process submitted at cycle 0
    pub fn new(pid: Pid, service_time: Cycle, finish_cycle: Cycle) -> Self {
        Self {
            pid,
            service_time,
            finish_cycle,
            turnaround: finish_cycle,
            waiting: finish_cycle.saturating_sub(service_time),
        }
    }
}

/// Whole-run outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationReport {
    pub policy: PolicyKind,
    pub quantum: u32,
    /// Process that ran in each cycle, `None` for idle cycles
    pub schedule: Vec<Option<Pid>>,
    pub total_cycles: Cycle,
    pub idle_cycles: Cycle,
    pub context_switches: u64,
    pub preemptions: u64,
    /// In submission order
    pub processes: Vec<ProcessReport>,
}

impl SimulationReport {
    /// Lookup a process outcome
    pub fn process(&self, pid: Pid) -> Option<&ProcessReport> {
        self.processes.iter().find(|p| p.pid == pid)
    }

    pub fn average_turnaround(&self) -> f64 {
        average(self.processes.iter().map(|p| p.turnaround))
    }

    pub fn average_waiting(&self) -> f64 {
        average(self.processes.iter().map(|p| p.waiting))
    }

    /// Render the schedule as space-separated pids, `-` for idle
    pub fn schedule_string(&self) -> String {
        self.schedule
            .iter()
            .map(|slot| match slot {
                Some(pid) => pid.to_string(),
                None => "-".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn average(values: impl ExactSizeIterator<Item = Cycle>) -> f64 {
    let count = values.len();
    if count == 0 {
        return 0.0;
    }
    values.sum::<Cycle>() as f64 / count as f64
}
