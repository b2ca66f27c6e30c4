// sched/process.rs

use serde::{Deserialize, Serialize};

fn default_priority() -> i64 {
    0
}

/// A simulated process: who it is, when it shows up, how much CPU it needs.
///
/// `priority` follows the lower-is-more-urgent convention and defaults to 0
/// when the input omits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    pub name: String,
    pub arrival: u64,
    pub burst: u64,
    #[serde(default = "default_priority")]
    pub priority: i64,
}

impl Process {
    pub fn new(name: impl Into<String>, arrival: u64, burst: u64) -> Self {
        Process {
            name: name.into(),
            arrival,
            burst,
            priority: 0,
        }
    }

    pub fn with_priority(name: impl Into<String>, arrival: u64, burst: u64, priority: i64) -> Self {
        Process {
            name: name.into(),
            arrival,
            burst,
            priority,
        }
    }
}

/// Lifecycle of a process within one simulation run.
///
/// Unarrived -> Ready at `arrival`; Ready -> Running on dispatch;
/// Running -> Ready on preemption (SRTF, Round-Robin); Running -> Finished
/// when the remaining burst reaches zero. Every process finishes exactly once.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ProcessState {
    Unarrived,
    Ready,
    Running,
    Finished,
}
