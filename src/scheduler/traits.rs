/*!
 * Scheduling Policy Traits
 * Interface every dispatch algorithm implements
 */

use super::types::PolicyKind;
use crate::core::errors::SchedulerResult;
use crate::core::types::Pid;
use std::fmt::Debug;

/// Pluggable dispatch algorithm driven by a simulator
///
/// The simulator owns the clock and the process table; a policy only keeps
/// the bookkeeping it needs to pick the next process. Calls are strictly
/// sequential, so every operation takes `&mut self`. `Send` lets independent
/// runs each own an instance on their own thread.
pub trait SchedulingPolicy: Send + Debug {
    /// Variant implemented by this policy
    fn kind(&self) -> PolicyKind;

    /// Make a newly ready process eligible for dispatch
    fn new_process(&mut self, pid: Pid) -> SchedulerResult<()>;

    /// Select the process to run for the next cycle
    ///
    /// Returns `Ok(None)` (IDLE) when nothing is eligible.
    fn dispatch(&mut self) -> SchedulerResult<Option<Pid>>;

    /// Whether the running process should be interrupted now
    fn preempt(&mut self) -> bool;

    /// Return to the empty, freshly constructed state
    fn reset_policy(&mut self);

    /// Stop tracking a process that has finished
    fn finish_process(&mut self, pid: Pid) -> SchedulerResult<()>;

    /// Number of processes currently tracked
    fn ready_len(&self) -> usize;

    /// True when a dispatch would return IDLE
    fn is_idle(&self) -> bool {
        self.ready_len() == 0
    }
}
