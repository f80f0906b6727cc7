/*!
 * Scheduler Module
 * Scheduling policy contract and its concrete variants
 */

pub mod fcfs;
pub mod round_robin;
pub mod traits;
pub mod types;

use crate::core::types::Quantum;
use tracing::info;

// Re-export public API
pub use fcfs::FcfsPolicy;
pub use round_robin::RoundRobinPolicy;
pub use traits::SchedulingPolicy;
pub use types::PolicyKind;

/// Build a fresh policy instance for one simulation run
///
/// The quantum only applies to variants that time-slice.
pub fn build_policy(kind: PolicyKind, quantum: Quantum) -> Box<dyn SchedulingPolicy> {
    info!(policy = %kind, quantum = quantum.get(), "Building scheduling policy");

    match kind {
        PolicyKind::RoundRobin => Box::new(RoundRobinPolicy::new(quantum)),
        PolicyKind::Fcfs => Box::new(FcfsPolicy::new()),
    }
}
