//! Domain event sink trait and implementations.

use std::sync::{Arc, Mutex};

/// Trait for receiving domain events pulled out of an entity.
///
/// Implementations translate events into whatever the runtime does with
/// them — queue them for a worker, feed projections, write an outbox.
/// Orchestrators hand events to a sink after an entity's transactional
/// boundary.
///
/// # Design Rules
///
/// - `emit()` must be fast and non-blocking (no network calls, no DB writes)
/// - Implementations should queue events for async processing
/// - Failure to emit must not affect domain operations (best-effort)
pub trait DomainEventSink<E>: Send + Sync {
    /// Emit a single domain event.
    fn emit(&self, event: E);

    /// Emit multiple domain events.
    ///
    /// Default implementation calls `emit()` for each event.
    /// Implementations may override for batch optimization.
    fn emit_batch(&self, events: Vec<E>) {
        for event in events {
            self.emit(event);
        }
    }
}

/// No-op implementation for tests or contexts that don't consume events.
#[derive(Clone, Default)]
pub struct NoOpDomainEventSink;

impl<E> DomainEventSink<E> for NoOpDomainEventSink {
    fn emit(&self, _event: E) {
        // Intentionally empty - events are discarded
    }
}

/// In-memory sink that collects emitted events for inspection.
///
/// Shipped in non-test code so downstream crates can assert on emitted
/// events in their own tests.
pub struct CollectingDomainEventSink<E> {
    events: Arc<Mutex<Vec<E>>>,
}

impl<E> CollectingDomainEventSink<E> {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns all collected events in emission order.
    pub fn events(&self) -> Vec<E>
    where
        E: Clone,
    {
        self.events.lock().unwrap().clone()
    }

    /// Clears collected events.
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    /// Returns the number of collected events.
    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Returns true if no events have been collected.
    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

impl<E> Default for CollectingDomainEventSink<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for CollectingDomainEventSink<E> {
    fn clone(&self) -> Self {
        Self {
            events: Arc::clone(&self.events),
        }
    }
}

impl<E: Send> DomainEventSink<E> for CollectingDomainEventSink<E> {
    fn emit(&self, event: E) {
        self.events.lock().unwrap().push(event);
    }
}
