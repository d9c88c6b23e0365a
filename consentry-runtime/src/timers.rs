//! Deterministic timer queue for UI sequencing.
//!
//! All entrance/exit class flips, node removals and the insights
//! schedule flow through this queue instead of ad-hoc sleeps, so tests
//! drive the whole animation lifecycle with a manual clock.

use chrono::{DateTime, Utc};

/// A scheduled piece of UI work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Flip the banner to its visible state (entrance transition).
    BannerEntered,
    /// The banner's exit transition finished; remove the node.
    BannerRemoval,
    /// Fade the overlay in.
    OverlayEntered,
    /// The overlay's fade-out finished; remove the node.
    OverlayRemoval,
    /// Fetch and show the insights widget.
    ShowInsights,
    /// Flip the insights widget to its visible state.
    InsightsEntered,
    /// Auto-hide the insights widget after its display window.
    HideInsights,
    /// The widget's exit transition finished; remove the node.
    InsightsRemoval,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    at: DateTime<Utc>,
    seq: u64,
    event: TimerEvent,
}

/// FIFO-stable timer queue keyed by absolute time.
#[derive(Debug, Default)]
pub struct TimerQueue {
    entries: Vec<Entry>,
    next_seq: u64,
}

impl TimerQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules an event at an absolute instant.
    pub fn schedule(&mut self, at: DateTime<Utc>, event: TimerEvent) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry { at, seq, event });
    }

    /// Removes and returns every event due at `now`, in firing order.
    /// Ties fire in scheduling order.
    pub fn due(&mut self, now: DateTime<Utc>) -> Vec<TimerEvent> {
        let mut ready: Vec<Entry> = Vec::new();
        self.entries.retain(|entry| {
            if entry.at <= now {
                ready.push(*entry);
                false
            } else {
                true
            }
        });
        ready.sort_by_key(|entry| (entry.at, entry.seq));
        ready.into_iter().map(|entry| entry.event).collect()
    }

    /// Drops every pending event.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
