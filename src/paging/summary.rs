// paging/summary.rs

use crate::paging::engine::StepRecord;
use serde::Serialize;

/// Aggregate hit/fault statistics derived from a completed run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSummary {
    pub total: usize,
    pub hits: usize,
    pub faults: usize,
    pub hit_ratio: f64,
    pub fault_ratio: f64,
}

impl PageSummary {
    /// Derive the summary from the step list. Ratios are rounded to two
    /// decimal places.
    pub fn from_steps(steps: &[StepRecord]) -> Self {
        let total = steps.len();
        let hits = steps.iter().filter(|s| s.hit).count();
        let faults = total - hits;
        let denom = total.max(1) as f64;
        PageSummary {
            total,
            hits,
            faults,
            hit_ratio: round2(hits as f64 / denom),
            fault_ratio: round2(faults as f64 / denom),
        }
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
