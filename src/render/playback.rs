// render/playback.rs

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Handle owned by one simulation run, shared with whoever renders it.
///
/// Cancelling stops a `Playback` between steps; it never alters the
/// precomputed events. Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct RunHandle {
    cancelled: Arc<AtomicBool>,
}

impl RunHandle {
    pub fn new() -> Self {
        RunHandle::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Pull-based cursor over a fully materialized event list.
///
/// The consumer advances it at its own pace (timer-driven or on user
/// input); the pace has no bearing on the events themselves. Restartable:
/// `restart` rewinds to the first event without recomputing anything.
pub struct Playback<T> {
    events: Vec<T>,
    pos: usize,
    handle: RunHandle,
}

impl<T: Clone> Playback<T> {
    pub fn new(events: Vec<T>) -> Self {
        Playback {
            events,
            pos: 0,
            handle: RunHandle::new(),
        }
    }

    pub fn handle(&self) -> RunHandle {
        self.handle.clone()
    }

    pub fn restart(&mut self) {
        self.pos = 0;
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The untouched event list, for consumers that want it all at once.
    pub fn events(&self) -> &[T] {
        &self.events
    }
}

impl<T: Clone> Iterator for Playback<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.handle.is_cancelled() || self.pos >= self.events.len() {
            return None;
        }
        let item = self.events[self.pos].clone();
        self.pos += 1;
        Some(item)
    }
}
