//! Domain event recording for aggregate roots.
//!
//! Domain entities embed an [`EventBuffer`] in a private field and record
//! events from their own state-changing methods. After the entity's
//! transactional boundary, an orchestrator (unit of work, repository save
//! step) pulls the buffered events through [`AggregateRoot::pull_events`]
//! and hands them to whatever consumes them — an event bus, projections,
//! an outbox. This crate buffers and hands off, nothing more: it does not
//! publish, serialize, or validate events, and it imposes no shape on them.

mod aggregate;
mod buffer;
mod sink;

pub use aggregate::AggregateRoot;
pub use buffer::EventBuffer;
pub use sink::{CollectingDomainEventSink, DomainEventSink, NoOpDomainEventSink};
