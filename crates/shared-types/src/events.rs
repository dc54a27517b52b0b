//! Bounded buffer for subsystem events awaiting `take_events`.
//!
//! When nobody drains the buffer the oldest events are dropped, so a service
//! left running without a consumer holds at most `capacity` events.

use std::collections::VecDeque;
use tracing::warn;

/// Default number of undrained events a service keeps.
pub const MAX_BUFFERED_EVENTS: usize = 4_096;

#[derive(Clone, Debug)]
pub struct EventBuffer<E> {
    events: VecDeque<E>,
    capacity: usize,
    dropped: u64,
}

impl<E> Default for EventBuffer<E> {
    fn default() -> Self {
        Self::with_capacity(MAX_BUFFERED_EVENTS)
    }
}

impl<E> EventBuffer<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A zero capacity is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: VecDeque::new(),
            capacity: capacity.max(1),
            dropped: 0,
        }
    }

    pub fn push(&mut self, event: E) {
        if self.events.len() == self.capacity {
            self.events.pop_front();
            if self.dropped == 0 {
                warn!(capacity = self.capacity, "event buffer full, dropping oldest events");
            }
            self.dropped += 1;
        }
        self.events.push_back(event);
    }

    /// Drain the buffer, oldest first
    pub fn take(&mut self) -> Vec<E> {
        self.dropped = 0;
        std::mem::take(&mut self.events).into()
    }

    /// Events dropped since the last drain
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
