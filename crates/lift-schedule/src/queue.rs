//! `EventQueue`: the simulation's future event list.
//!
//! # Performance note
//!
//! `BTreeMap` gives O(log T) insert and O(log T) pop where T = number of
//! distinct pending timestamps.  A building day keeps at most one pending
//! event per car plus the next arrival, so T stays tiny.  Bucketing by time
//! with a `VecDeque` per bucket gives FIFO order among simultaneous events
//! for free, which a plain binary heap does not.

use std::collections::{BTreeMap, VecDeque};

use lift_core::SimTime;

use crate::Event;

/// A priority queue of events keyed by time, FIFO among equal times.
#[derive(Default)]
pub struct EventQueue {
    inner: BTreeMap<SimTime, VecDeque<Event>>,
    /// Cached total event count for O(1) `len()`.
    total: usize,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `event` at `event.time`.
    pub fn push(&mut self, event: Event) {
        self.inner.entry(event.time).or_default().push_back(event);
        self.total += 1;
    }

    /// Remove and return the earliest event, or `None` if the queue is empty.
    pub fn pop(&mut self) -> Option<Event> {
        let mut bucket = self.inner.first_entry()?;
        let event = bucket.get_mut().pop_front();
        if bucket.get().is_empty() {
            bucket.remove();
        }
        if event.is_some() {
            self.total -= 1;
        }
        event
    }

    /// Time of the earliest pending event, or `None` if empty.
    pub fn next_time(&self) -> Option<SimTime> {
        self.inner.keys().next().copied()
    }

    /// Total number of pending events.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Iterate pending events in firing order.
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.inner.values().flatten()
    }
}
