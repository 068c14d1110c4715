//! Keyed deferred actions.
//!
//! Delayed work (the post-training metrics reload, the metric highlight
//! expiry) is held here instead of in detached timers, so a newer action for
//! the same region supersedes a pending one deterministically.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Dashboard region a deferred action belongs to. One pending action per
/// region at most.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Region {
    Metrics,
    F1Highlight,
}

/// What to do when a deferred action comes due.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ScheduledAction {
    /// Re-fetch model metrics (scheduled after a successful training run).
    ReloadMetrics,
    /// Clear the F1 slot highlight.
    ClearHighlight,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    pending: HashMap<Region, (Instant, ScheduledAction)>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules an action for a region, replacing any pending one.
    pub fn schedule(&mut self, region: Region, delay: Duration, action: ScheduledAction) {
        self.schedule_at(region, Instant::now() + delay, action);
    }

    /// Clock-injected variant of [`Self::schedule`].
    pub fn schedule_at(&mut self, region: Region, due: Instant, action: ScheduledAction) {
        self.pending.insert(region, (due, action));
    }

    /// Cancels the pending action for a region, if any.
    pub fn cancel(&mut self, region: Region) -> Option<ScheduledAction> {
        self.pending.remove(&region).map(|(_, action)| action)
    }

    /// Removes and returns every action due at `now`.
    pub fn take_due(&mut self, now: Instant) -> Vec<ScheduledAction> {
        let due_regions: Vec<Region> = self
            .pending
            .iter()
            .filter(|(_, (due, _))| *due <= now)
            .map(|(region, _)| *region)
            .collect();

        due_regions
            .into_iter()
            .filter_map(|region| self.pending.remove(&region).map(|(_, action)| action))
            .collect()
    }

    pub fn is_pending(&self, region: Region) -> bool {
        self.pending.contains_key(&region)
    }
}
