//! Start timestamps for elapsed-time measurement.

use std::collections::HashMap;

use crate::domain::foundation::{ElementId, Timestamp};

type Key = (ElementId, Option<String>);

/// Open timers keyed by element and optional phase.
#[derive(Debug, Default)]
pub struct TimeTracker {
    starts: HashMap<Key, Timestamp>,
}

impl TimeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a start; restarting an open key resets it.
    pub fn start(&mut self, element_id: ElementId, phase: Option<&str>, at: Timestamp) {
        self.starts.insert((element_id, phase.map(str::to_owned)), at);
    }

    /// Closes the timer and returns whole elapsed seconds, rounded to the
    /// nearest second. Returns 0 when no matching start exists.
    pub fn stop(&mut self, element_id: ElementId, phase: Option<&str>, at: Timestamp) -> u64 {
        let key = (element_id, phase.map(str::to_owned));
        let Some(started) = self.starts.remove(&key) else {
            return 0;
        };
        let millis = at.duration_since(&started).num_milliseconds().max(0);
        ((millis + 500) / 1000) as u64
    }

    pub fn open_timers(&self) -> usize {
        self.starts.len()
    }
}
