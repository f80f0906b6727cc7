/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::{Cycle, Pid};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scheduler-related errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("Process {0} not found in scheduler")]
    #[diagnostic(
        code(scheduler::process_not_found),
        help("Process may never have been submitted or has already finished.")
    )]
    ProcessNotFound(Pid),

    #[error("Process {0} is already scheduled")]
    #[diagnostic(
        code(scheduler::duplicate_process),
        help("Each pid may be submitted once until it finishes or the policy is reset.")
    )]
    DuplicateProcess(Pid),

    #[error("Inconsistent scheduler state for process {pid}: {reason}")]
    #[diagnostic(
        code(scheduler::inconsistent_state),
        help("This is a bug in the policy bookkeeping. Reset the policy before reuse.")
    )]
    InconsistentState { pid: Pid, reason: String },

    #[error("Invalid quantum: {0}")]
    #[diagnostic(
        code(scheduler::invalid_quantum),
        help("The quantum is a positive number of CPU cycles.")
    )]
    InvalidQuantum(String),

    #[error("Invalid scheduling policy: {0}")]
    #[diagnostic(
        code(scheduler::invalid_policy),
        help("Use round_robin or fcfs.")
    )]
    InvalidPolicy(String),

    #[error("Invalid simulation config: {0}")]
    #[diagnostic(
        code(simulation::invalid_config),
        help("Check the JSON config: a non-empty process list with positive service times.")
    )]
    InvalidConfig(String),

    #[error("Simulation did not finish within {0} cycles")]
    #[diagnostic(
        code(simulation::cycle_limit_exceeded),
        help("Raise max_cycles or check that the policy dispatches every process.")
    )]
    CycleLimitExceeded(Cycle),
}

/// Common result type for scheduler operations
pub type SchedulerResult<T> = Result<T, SchedulerError>;

impl SchedulerError {
    /// Internal consistency fault for a tracked process
    pub(crate) fn inconsistent(pid: Pid, reason: impl Into<String>) -> Self {
        Self::InconsistentState {
            pid,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            SchedulerError::ProcessNotFound(7).to_string(),
            "Process 7 not found in scheduler"
        );
        assert_eq!(
            SchedulerError::inconsistent(3, "missing time slice").to_string(),
            "Inconsistent scheduler state for process 3: missing time slice"
        );
    }

    #[test]
    fn test_error_serialization() {
        let json = serde_json::to_string(&SchedulerError::DuplicateProcess(4)).unwrap();
        assert_eq!(json, r#"{"error_type":"duplicate_process","details":4}"#);

        let back: SchedulerError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SchedulerError::DuplicateProcess(4));
    }
}
