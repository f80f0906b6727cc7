/*!
 * Scheduling Simulator
 *
 * Cycle-level driver for a scheduling policy. Owns the clock and the process
 * table; the policy only decides who runs next.
 */

use super::config::{ProcessSpec, SimulationConfig, DEFAULT_MAX_CYCLES};
use super::report::{ProcessReport, SimulationReport};
use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::types::{Cycle, Pid, Quantum};
use crate::scheduler::{build_policy, SchedulingPolicy};
use ahash::RandomState;
use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

/// Process table entry
#[derive(Debug, Clone)]
struct ProcessEntry {
    pid: Pid,
    service_time: Cycle,
    remaining: Cycle,
    finish_cycle: Option<Cycle>,
}

/// Single-threaded simulator driving one policy instance
#[derive(Debug)]
pub struct Simulator {
    policy: Box<dyn SchedulingPolicy>,
    quantum: Quantum,
    max_cycles: Cycle,
    clock: Cycle,

    // Submission order
    table: Vec<ProcessEntry>,

    // Pid -> table slot
    index: HashMap<Pid, usize, RandomState>,
}

impl Simulator {
    /// Create simulator around a policy
    ///
    /// `quantum` is only recorded in the report; the policy was already built with it.
    pub fn new(policy: Box<dyn SchedulingPolicy>, quantum: Quantum) -> Self {
        Self {
            policy,
            quantum,
            max_cycles: DEFAULT_MAX_CYCLES,
            clock: 0,
            table: Vec::new(),
            index: HashMap::with_hasher(RandomState::new()),
        }
    }

    /// Build simulator from a validated config
    pub fn from_config(config: &SimulationConfig) -> SchedulerResult<Self> {
        config.validate()?;
        let policy = build_policy(config.policy, config.quantum);
        Ok(Self::new(policy, config.quantum).with_max_cycles(config.max_cycles))
    }

    /// Set cycle limit
    pub fn with_max_cycles(mut self, max_cycles: Cycle) -> Self {
        self.max_cycles = max_cycles;
        self
    }

    /// Cycles elapsed in the current (or last) run
    pub fn clock(&self) -> Cycle {
        self.clock
    }

    /// Policy being driven
    pub fn policy(&self) -> &dyn SchedulingPolicy {
        self.policy.as_ref()
    }

    /// Run every process to completion
    ///
    /// All processes are submitted at cycle 0 in the given order. The policy
    /// is reset first, so a simulator can be reused for several runs.
    #[instrument(skip_all, fields(policy = %self.policy.kind(), processes = processes.len()))]
    pub fn run(&mut self, processes: &[ProcessSpec]) -> SchedulerResult<SimulationReport> {
        self.policy.reset_policy();
        self.table.clear();
        self.index.clear();
        self.clock = 0;

        if processes.is_empty() {
            return Err(SchedulerError::InvalidConfig("no processes to simulate".into()));
        }
        if let Some(spec) = processes.iter().find(|p| p.service_time == 0) {
            return Err(SchedulerError::InvalidConfig(format!(
                "process {} has zero service time",
                spec.pid
            )));
        }

        for spec in processes {
            self.policy.new_process(spec.pid)?;
            self.index.insert(spec.pid, self.table.len());
            self.table.push(ProcessEntry {
                pid: spec.pid,
                service_time: spec.service_time,
                remaining: spec.service_time,
                finish_cycle: None,
            });
        }

        let mut schedule = Vec::new();
        let mut idle_cycles = 0;
        let mut context_switches = 0;
        let mut preemptions = 0;
        let mut previous: Option<Pid> = None;
        let mut unfinished = self.table.len();

        while unfinished > 0 {
            if self.clock >= self.max_cycles {
                warn!(
                    max_cycles = self.max_cycles,
                    unfinished, "Cycle limit reached before all processes finished"
                );
                return Err(SchedulerError::CycleLimitExceeded(self.max_cycles));
            }

            // The policy rotates on dispatch; the simulator only records the request
            if previous.is_some() && self.policy.preempt() {
                preemptions += 1;
            }

            let selected = self.policy.dispatch()?;
            self.clock += 1;

            match selected {
                None => idle_cycles += 1,
                Some(pid) => {
                    if previous.is_some_and(|prev| prev != pid) {
                        context_switches += 1;
                    }
                    if self.run_cycle(pid)? {
                        self.policy.finish_process(pid)?;
                        unfinished -= 1;
                    }
                }
            }

            schedule.push(selected);
            previous = selected;
        }

        let report = SimulationReport {
            policy: self.policy.kind(),
            quantum: self.quantum.get(),
            schedule,
            total_cycles: self.clock,
            idle_cycles,
            context_switches,
            preemptions,
            processes: self
                .table
                .iter()
                .map(|entry| {
                    ProcessReport::new(
                        entry.pid,
                        entry.service_time,
                        entry.finish_cycle.unwrap_or(self.clock),
                    )
                })
                .collect(),
        };

        info!(
            total_cycles = report.total_cycles,
            context_switches = report.context_switches,
            avg_turnaround = report.average_turnaround(),
            "Simulation complete"
        );
        Ok(report)
    }

    /// Charge one cycle to a dispatched process, returns true when it finished
    fn run_cycle(&mut self, pid: Pid) -> SchedulerResult<bool> {
        let slot = *self
            .index
            .get(&pid)
            .ok_or_else(|| SchedulerError::inconsistent(pid, "dispatched an unknown process"))?;
        let entry = &mut self.table[slot];

        if entry.finish_cycle.is_some() {
            return Err(SchedulerError::inconsistent(pid, "dispatched a finished process"));
        }

        entry.remaining -= 1;
        if entry.remaining > 0 {
            return Ok(false);
        }

        entry.finish_cycle = Some(self.clock);
        debug!(pid, cycle = self.clock, "Process finished");
        Ok(true)
    }
}

/// Build a simulator from config and run it
pub fn run_config(config: &SimulationConfig) -> SchedulerResult<SimulationReport> {
    Simulator::from_config(config)?.run(&config.processes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{FcfsPolicy, RoundRobinPolicy};

    fn rr(quantum: u32) -> Simulator {
        let quantum = Quantum::new(quantum).unwrap();
        Simulator::new(Box::new(RoundRobinPolicy::new(quantum)), quantum)
    }

    #[test]
    fn test_round_robin_run() {
        let mut sim = rr(2);
        let report = sim
            .run(&[ProcessSpec::new(1, 3), ProcessSpec::new(2, 2)])
            .unwrap();

        assert_eq!(report.schedule_string(), "1 1 2 2 1");
        assert_eq!(report.total_cycles, 5);
        assert_eq!(report.context_switches, 2);
        assert_eq!(report.idle_cycles, 0);
        assert_eq!(report.preemptions, 0);
        assert_eq!(report.process(1).unwrap().finish_cycle, 5);
        assert_eq!(report.process(2).unwrap().finish_cycle, 4);
        assert!(sim.policy().is_idle());
    }

    #[test]
    fn test_fcfs_run() {
        let quantum = Quantum::default();
        let mut sim = Simulator::new(Box::new(FcfsPolicy::new()), quantum);
        let report = sim
            .run(&[ProcessSpec::new(7, 2), ProcessSpec::new(3, 3)])
            .unwrap();

        assert_eq!(report.schedule_string(), "7 7 3 3 3");
        assert_eq!(report.process(7).unwrap().waiting, 0);
        assert_eq!(report.process(3).unwrap().waiting, 2);
    }

    #[test]
    fn test_simulator_is_reusable() {
        let mut sim = rr(1);
        let first = sim.run(&[ProcessSpec::new(1, 2), ProcessSpec::new(2, 1)]).unwrap();
        let second = sim.run(&[ProcessSpec::new(1, 2), ProcessSpec::new(2, 1)]).unwrap();
        assert_eq!(first, second);
        assert_eq!(sim.clock(), 3);
    }

    #[test]
    fn test_rejects_bad_input() {
        let mut sim = rr(2);
        assert!(matches!(sim.run(&[]), Err(SchedulerError::InvalidConfig(_))));
        assert!(matches!(
            sim.run(&[ProcessSpec::new(1, 0)]),
            Err(SchedulerError::InvalidConfig(_))
        ));
        assert_eq!(
            sim.run(&[ProcessSpec::new(1, 1), ProcessSpec::new(1, 2)]),
            Err(SchedulerError::DuplicateProcess(1))
        );
    }

    #[test]
    fn test_cycle_limit() {
        let mut sim = rr(2).with_max_cycles(3);
        assert_eq!(
            sim.run(&[ProcessSpec::new(1, 5)]),
            Err(SchedulerError::CycleLimitExceeded(3))
        );
    }
}
