/*!
 * Round-Robin Policy
 * Time-sliced FIFO dispatch with in-dispatch quantum rotation
 */

use super::traits::SchedulingPolicy;
use super::types::PolicyKind;
use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::types::{Pid, Quantum};
use ahash::RandomState;
use std::collections::{HashMap, VecDeque};
use tracing::{debug, info, trace};

/// Round-robin scheduling policy
///
/// Each dispatch charges one cycle to the head of the ready queue. Once the
/// head has used its whole quantum, the next dispatch moves it to the tail,
/// refills its slice and hands the CPU to the new head within that same call.
/// `preempt` never fires: slice exhaustion is handled entirely by `dispatch`.
#[derive(Debug)]
pub struct RoundRobinPolicy {
    quantum: Quantum,

    // FIFO of ready processes, head is the one holding the CPU
    ready_queue: VecDeque<Pid>,

    // Remaining slice per queued process; only the head is ever below quantum
    time_slices: HashMap<Pid, i64, RandomState>,
}

impl RoundRobinPolicy {
    /// Create new round-robin policy with a fixed quantum
    pub fn new(quantum: Quantum) -> Self {
        let mut policy = Self {
            quantum,
            ready_queue: VecDeque::new(),
            time_slices: HashMap::with_hasher(RandomState::new()),
        };
        policy.reset_policy();

        info!(quantum = quantum.get(), "Round-robin policy initialized");
        policy
    }

    /// Configured quantum
    pub fn quantum(&self) -> Quantum {
        self.quantum
    }

    /// Remaining slice of a tracked process
    pub fn remaining_slice(&self, pid: Pid) -> Option<i64> {
        self.time_slices.get(&pid).copied()
    }

    /// Ready queue in dispatch order, head first
    pub fn queued(&self) -> impl Iterator<Item = Pid> + '_ {
        self.ready_queue.iter().copied()
    }

    fn slice_of(&self, pid: Pid) -> SchedulerResult<i64> {
        self.remaining_slice(pid)
            .ok_or_else(|| SchedulerError::inconsistent(pid, "queued without a time slice"))
    }
}

impl SchedulingPolicy for RoundRobinPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::RoundRobin
    }

    fn new_process(&mut self, pid: Pid) -> SchedulerResult<()> {
        if self.time_slices.contains_key(&pid) {
            return Err(SchedulerError::DuplicateProcess(pid));
        }

        self.ready_queue.push_back(pid);
        self.time_slices.insert(pid, self.quantum.as_slice());

        debug!(pid, queued = self.ready_queue.len(), "Process added to ready queue");
        Ok(())
    }

    fn dispatch(&mut self) -> SchedulerResult<Option<Pid>> {
        let Some(&head) = self.ready_queue.front() else {
            return Ok(None);
        };

        let pid = if self.slice_of(head)? <= 0 {
            // Validate the successor before touching any state
            let next = self.ready_queue.get(1).copied().unwrap_or(head);
            if next != head {
                self.slice_of(next)?;
            }

            self.ready_queue.rotate_left(1);
            self.time_slices.insert(head, self.quantum.as_slice());

            trace!(expired = head, next, "Quantum expired, rotating ready queue");
            next
        } else {
            head
        };

        match self.time_slices.get_mut(&pid) {
            Some(slice) => *slice -= 1,
            None => return Err(SchedulerError::inconsistent(pid, "queued without a time slice")),
        }

        Ok(Some(pid))
    }

    fn preempt(&mut self) -> bool {
        false
    }

    fn reset_policy(&mut self) {
        self.ready_queue = VecDeque::new();
        self.time_slices.clear();
    }

    fn finish_process(&mut self, pid: Pid) -> SchedulerResult<()> {
        let position = self
            .ready_queue
            .iter()
            .position(|&queued| queued == pid)
            .ok_or(SchedulerError::ProcessNotFound(pid))?;

        if self.time_slices.remove(&pid).is_none() {
            return Err(SchedulerError::inconsistent(pid, "queued without a time slice"));
        }
        self.ready_queue.remove(position);

        debug!(pid, queued = self.ready_queue.len(), "Process removed from ready queue");
        Ok(())
    }

    fn ready_len(&self) -> usize {
        self.ready_queue.len()
    }
}
