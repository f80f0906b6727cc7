/*!
 * Core Types
 * Common types used across the simulator
 */

use super::errors::{SchedulerError, SchedulerResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::num::NonZeroU32;

/// Process ID type
pub type Pid = u32;

/// Simulated CPU cycle counter
pub type Cycle = u64;

/// Value returned by a dispatch when no process is eligible to run
pub const IDLE: Option<Pid> = None;

/// Time slice granted to a process, in dispatch calls (CPU cycles)
///
/// Always positive; fixed for the lifetime of a policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantum(NonZeroU32);

impl Quantum {
    /// Create new quantum, rejecting zero
    pub fn new(cycles: u32) -> SchedulerResult<Self> {
        NonZeroU32::new(cycles)
            .map(Self)
            .ok_or_else(|| SchedulerError::InvalidQuantum("quantum must be at least 1 cycle".into()))
    }

    /// Get cycles
    #[inline(always)]
    pub const fn get(&self) -> u32 {
        self.0.get()
    }

    /// Quantum expressed as a signed slice counter
    #[inline(always)]
    pub(crate) fn as_slice(&self) -> i64 {
        i64::from(self.0.get())
    }
}

impl Default for Quantum {
    fn default() -> Self {
        Self(NonZeroU32::MIN)
    }
}

impl fmt::Display for Quantum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Quantum {
    type Error = SchedulerError;

    fn try_from(cycles: u32) -> SchedulerResult<Self> {
        Self::new(cycles)
    }
}

impl Serialize for Quantum {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.get())
    }
}

impl<'de> Deserialize<'de> for Quantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let cycles = u32::deserialize(deserializer)?;
        Self::new(cycles).map_err(serde::de::Error::custom)
    }
}
