//! Event sink adapters
//!
//! Implements the EventSink port for governance events

use crate::events::{GovernanceEvent, EVENT_CATEGORY};
use crate::ports::EventSink;
use parking_lot::RwLock;

/// In-memory event sink for testing
pub struct InMemoryEventSink {
    events: RwLock<Vec<GovernanceEvent>>,
}

impl InMemoryEventSink {
    pub fn new() -> Self {
        Self {
            events: RwLock::new(Vec::new()),
        }
    }

    pub fn get_events(&self) -> Vec<GovernanceEvent> {
        self.events.read().clone()
    }

    pub fn event_count(&self) -> usize {
        self.events.read().len()
    }

    /// Event type names in publication order
    pub fn event_types(&self) -> Vec<&'static str> {
        self.events.read().iter().map(|e| e.event_type()).collect()
    }

    pub fn clear(&self) {
        self.events.write().clear();
    }
}

impl Default for InMemoryEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for InMemoryEventSink {
    fn publish(&self, event: &GovernanceEvent) {
        self.events.write().push(event.clone());
    }
}

/// Sink that only logs events
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingEventSink;

impl EventSink for LoggingEventSink {
    fn publish(&self, event: &GovernanceEvent) {
        tracing::info!(
            module = EVENT_CATEGORY,
            event_type = event.event_type(),
            ?event,
            "governance event"
        );
    }
}
