/*!
 * First-Come-First-Served Policy
 * Non-preemptive FIFO dispatch
 */

use super::traits::SchedulingPolicy;
use super::types::PolicyKind;
use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::types::Pid;
use std::collections::VecDeque;
use tracing::debug;

/// FCFS scheduling policy
///
/// The head of the ready queue keeps the CPU until it finishes.
#[derive(Debug, Default)]
pub struct FcfsPolicy {
    ready_queue: VecDeque<Pid>,
}

impl FcfsPolicy {
    /// Create new, empty FCFS policy
    pub fn new() -> Self {
        let mut policy = Self::default();
        policy.reset_policy();
        policy
    }
}

impl SchedulingPolicy for FcfsPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Fcfs
    }

    fn new_process(&mut self, pid: Pid) -> SchedulerResult<()> {
        if self.ready_queue.contains(&pid) {
            return Err(SchedulerError::DuplicateProcess(pid));
        }
        self.ready_queue.push_back(pid);
        debug!(pid, queued = self.ready_queue.len(), "Process added to ready queue");
        Ok(())
    }

    fn dispatch(&mut self) -> SchedulerResult<Option<Pid>> {
        Ok(self.ready_queue.front().copied())
    }

    fn preempt(&mut self) -> bool {
        false
    }

    fn reset_policy(&mut self) {
        self.ready_queue.clear();
    }

    fn finish_process(&mut self, pid: Pid) -> SchedulerResult<()> {
        let position = self
            .ready_queue
            .iter()
            .position(|&queued| queued == pid)
            .ok_or(SchedulerError::ProcessNotFound(pid))?;
        self.ready_queue.remove(position);

        debug!(pid, queued = self.ready_queue.len(), "Process removed from ready queue");
        Ok(())
    }

    fn ready_len(&self) -> usize {
        self.ready_queue.len()
    }
}
