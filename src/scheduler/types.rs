/*!
 * Scheduler Types
 * Domain types for policy selection
 */

use crate::core::errors::SchedulerError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Scheduling policy variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PolicyKind {
    /// Round-robin with fixed time quantum
    #[default]
    RoundRobin,
    /// Non-preemptive first-come-first-served
    Fcfs,
}

impl PolicyKind {
    /// Convert to string representation
    ///
    /// # Performance
    /// Hot path - used for logging and serialization
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RoundRobin => "round_robin",
            Self::Fcfs => "fcfs",
        }
    }
}

impl FromStr for PolicyKind {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "round_robin" | "roundrobin" | "rr" => Ok(Self::RoundRobin),
            "fcfs" | "fifo" => Ok(Self::Fcfs),
            _ => Err(SchedulerError::InvalidPolicy(format!(
                "'{}' (valid: round_robin, fcfs)",
                s
            ))),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PolicyKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PolicyKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
