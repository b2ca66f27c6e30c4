// sched/summary.rs

use crate::sched::process::Process;
use crate::sched::timeline::Interval;
use anyhow::{Result, anyhow};
use serde::Serialize;

/// Per-process timing derived from a completed timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessStats {
    pub name: String,
    pub arrival: u64,
    pub burst: u64,
    pub completion: u64,
    /// `completion - arrival`.
    pub turnaround: u64,
    /// `turnaround - burst`: time spent ready but not running.
    pub waiting: u64,
}

/// Timing table for a whole run, derived purely from the interval list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchedSummary {
    pub rows: Vec<ProcessStats>,
    pub avg_turnaround: f64,
    pub avg_waiting: f64,
    pub completion: u64,
}

impl SchedSummary {
    /// Build the table from the processes and the engine's timeline. Rows
    /// keep the input process order. Fails if a process never appears in
    /// the chart, which valid engine output cannot produce.
    pub fn from_chart(processes: &[Process], chart: &[Interval]) -> Result<Self> {
        let mut rows = Vec::with_capacity(processes.len());
        for p in processes {
            let completion = chart
                .iter()
                .filter(|iv| iv.name == p.name)
                .map(|iv| iv.end)
                .max()
                .ok_or_else(|| anyhow!("process '{}' never executed", p.name))?;
            let turnaround = completion - p.arrival;
            rows.push(ProcessStats {
                name: p.name.clone(),
                arrival: p.arrival,
                burst: p.burst,
                completion,
                turnaround,
                waiting: turnaround - p.burst,
            });
        }
        let n = rows.len().max(1) as f64;
        let avg_turnaround = rows.iter().map(|r| r.turnaround as f64).sum::<f64>() / n;
        let avg_waiting = rows.iter().map(|r| r.waiting as f64).sum::<f64>() / n;
        let completion = chart.iter().map(|iv| iv.end).max().unwrap_or(0);
        Ok(SchedSummary {
            rows,
            avg_turnaround,
            avg_waiting,
            completion,
        })
    }
}
