// paging/engine.rs

use crate::paging::policy::ReplacementPolicy;
use anyhow::{Result, bail};
use serde::Serialize;
use tracing::debug;

/// Outcome of a single page reference: the page, whether it hit, and the
/// frame table as it stood after the step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    pub page: u64,
    pub hit: bool,
    pub frames: Vec<u64>,
}

/// Run a page-replacement simulation over `refs` with `capacity` frames.
///
/// Produces exactly one `StepRecord` per reference. The frame table starts
/// empty, never holds duplicates, and never exceeds `capacity`. Fails before
/// any step executes if the inputs are invalid; steady execution cannot fail.
pub fn run(refs: &[u64], capacity: usize, policy: ReplacementPolicy) -> Result<Vec<StepRecord>> {
    if refs.is_empty() {
        bail!("reference string must not be empty");
    }
    if capacity == 0 {
        bail!("frame capacity must be at least 1");
    }

    let mut frames: Vec<u64> = Vec::with_capacity(capacity);
    let mut steps = Vec::with_capacity(refs.len());

    for (position, &page) in refs.iter().enumerate() {
        let hit = frames.contains(&page);
        if !hit {
            if frames.len() < capacity {
                frames.push(page);
                debug!(page, "fault: free frame");
            } else {
                let slot = policy.select_victim(&frames, refs, position);
                debug!(page, victim = frames[slot], slot, "fault: evicting");
                match policy {
                    // FIFO keeps the table in insertion order: drop the head,
                    // append the newcomer at the tail.
                    ReplacementPolicy::Fifo => {
                        frames.remove(slot);
                        frames.push(page);
                    }
                    // LRU/OPT replace in place so untouched slots keep their
                    // position across snapshots.
                    ReplacementPolicy::Lru | ReplacementPolicy::Opt => {
                        frames[slot] = page;
                    }
                }
            }
        }
        steps.push(StepRecord {
            page,
            hit,
            frames: frames.clone(),
        });
    }

    Ok(steps)
}
