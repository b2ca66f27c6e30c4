// sched/timeline.rs

use serde::Serialize;
use std::collections::HashMap;

/// Name used for synthetic CPU-inactivity blocks.
pub const IDLE: &str = "Idle";

/// One half-open execution slice `[start, end)` attributed to a process
/// (or to `"Idle"` after gap insertion).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interval {
    pub name: String,
    pub start: u64,
    pub end: u64,
}

impl Interval {
    pub fn new(name: impl Into<String>, start: u64, end: u64) -> Self {
        Interval {
            name: name.into(),
            start,
            end,
        }
    }

    pub fn duration(&self) -> u64 {
        self.end - self.start
    }

    pub fn is_idle(&self) -> bool {
        self.name == IDLE
    }
}

/// Coalesce adjacent intervals that belong to the same process with no gap
/// between them. Round-Robin timelines are the usual customer; the other
/// policies already produce one interval per uninterrupted run.
pub fn merge_continuous(chart: &[Interval]) -> Vec<Interval> {
    let mut merged: Vec<Interval> = Vec::with_capacity(chart.len());
    for iv in chart {
        match merged.last_mut() {
            Some(last) if last.name == iv.name && last.end == iv.start => {
                last.end = iv.end;
            }
            _ => merged.push(iv.clone()),
        }
    }
    merged
}

/// Insert synthetic `"Idle"` intervals wherever the chart leaves the CPU
/// unaccounted for, including before the first interval, so the result
/// covers `[0, completion)` with no gaps. Presentation-side only; the engine
/// never emits idle blocks itself.
pub fn with_idle_gaps(chart: &[Interval]) -> Vec<Interval> {
    let mut fixed = Vec::with_capacity(chart.len());
    let mut cursor = 0;
    for iv in chart {
        if iv.start > cursor {
            fixed.push(Interval::new(IDLE, cursor, iv.start));
        }
        cursor = iv.end;
        fixed.push(iv.clone());
    }
    fixed
}

/// Total executed time per process, idle blocks excluded. For a valid run
/// this equals each process's original burst.
pub fn busy_time(chart: &[Interval]) -> HashMap<String, u64> {
    let mut totals = HashMap::new();
    for iv in chart.iter().filter(|iv| !iv.is_idle()) {
        *totals.entry(iv.name.clone()).or_insert(0) += iv.duration();
    }
    totals
}
