//! In-memory event store.
//!
//! The store is the working set of events for a session. It is an explicit
//! value the host passes into queries, never a hidden global, and its
//! operations never fail: adding always succeeds and removing a missing id
//! is a silent no-op.

use serde::{Deserialize, Serialize};

use crate::event::Event;

/// Insertion-ordered collection of events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventStore {
    events: Vec<Event>,
    next_id: u64,
}

impl EventStore {
    pub fn new() -> Self {
        EventStore {
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Append an event, assigning a fresh id if it doesn't carry one.
    /// Returns a reference to the stored event. No dedup check.
    pub fn add(&mut self, mut event: Event) -> &Event {
        if event.id == 0 {
            event.id = self.fresh_id();
        } else if event.id >= self.next_id {
            self.next_id = event.id + 1;
        }

        log::debug!("Stored event '{}' (id {})", event.title, event.id);

        let index = self.events.len();
        self.events.push(event);
        &self.events[index]
    }

    /// Remove the first event matching `id`. No-op if absent.
    pub fn remove(&mut self, id: u64) {
        if let Some(index) = self.events.iter().position(|e| e.id == id) {
            let removed = self.events.remove(index);
            log::debug!("Removed event '{}' (id {})", removed.title, removed.id);
        }
    }

    /// All events in insertion order.
    pub fn all(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: u64) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn fresh_id(&mut self) -> u64 {
        // Stored files may predate the counter; stay above any existing id.
        let id = self
            .next_id
            .max(self.events.iter().map(|e| e.id + 1).max().unwrap_or(1));
        self.next_id = id + 1;
        id
    }
}
