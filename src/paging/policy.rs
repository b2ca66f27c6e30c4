// paging/policy.rs

use serde::{Deserialize, Serialize};

/// Page-replacement policies supported by the simulator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReplacementPolicy {
    /// Evict the page that has resided longest, regardless of use.
    Fifo,
    /// Evict the least recently used resident page.
    Lru,
    /// Belady's optimal: evict the page whose next use is farthest away.
    Opt,
}

impl ReplacementPolicy {
    /// Pick the frame-table slot of the victim for a fault on a full table.
    ///
    /// `position` is the index of the current reference within `refs`. LRU
    /// looks strictly before it, OPT strictly after it; FIFO ignores the
    /// reference string entirely. Ties go to the earliest frame slot.
    pub fn select_victim(&self, frames: &[u64], refs: &[u64], position: usize) -> usize {
        match self {
            // Frame table is kept in insertion order, so the head is the
            // oldest resident.
            ReplacementPolicy::Fifo => 0,
            ReplacementPolicy::Lru => {
                let mut victim = 0;
                let mut victim_last = i64::MAX;
                for (slot, &page) in frames.iter().enumerate() {
                    // Most recent occurrence strictly before `position`;
                    // a page never referenced before counts as infinitely old.
                    let last = refs[..position]
                        .iter()
                        .rposition(|&r| r == page)
                        .map(|i| i as i64)
                        .unwrap_or(-1);
                    if last < victim_last {
                        victim_last = last;
                        victim = slot;
                    }
                }
                victim
            }
            ReplacementPolicy::Opt => {
                let mut victim = 0;
                let mut victim_next = 0;
                for (slot, &page) in frames.iter().enumerate() {
                    // Next occurrence strictly after `position`; a page with
                    // no future use is infinitely far and evicted first.
                    let next = refs[position + 1..]
                        .iter()
                        .position(|&r| r == page)
                        .map(|i| position + 1 + i)
                        .unwrap_or(usize::MAX);
                    if slot == 0 || next > victim_next {
                        victim_next = next;
                        victim = slot;
                    }
                }
                victim
            }
        }
    }
}
