//! Aggregate root capability: record privately, pull publicly.

use log::debug;

use crate::sink::DomainEventSink;

/// Capability trait for domain entities that record domain events.
///
/// The entity embeds an [`EventBuffer`](crate::EventBuffer) in a private
/// field; its own mutating methods record into it, and `pull_events` is the
/// only public way out. Field privacy carries the encapsulation contract:
/// only the entity itself may record, anyone may drain.
///
/// # Example
///
/// ```
/// use domain_events::{AggregateRoot, EventBuffer};
///
/// #[derive(Debug, Clone, PartialEq)]
/// enum AccountEvent {
///     Renamed { new_name: String },
/// }
///
/// struct Account {
///     name: String,
///     events: EventBuffer<AccountEvent>,
/// }
///
/// impl Account {
///     fn new(name: impl Into<String>) -> Self {
///         Self {
///             name: name.into(),
///             events: EventBuffer::new(),
///         }
///     }
///
///     fn rename(&mut self, new_name: impl Into<String>) {
///         let new_name = new_name.into();
///         self.name = new_name.clone();
///         self.events.record(AccountEvent::Renamed { new_name });
///     }
/// }
///
/// impl AggregateRoot for Account {
///     type Event = AccountEvent;
///
///     fn pull_events(&mut self) -> Vec<AccountEvent> {
///         self.events.drain()
///     }
/// }
///
/// let mut account = Account::new("Savings");
/// account.rename("Brokerage");
///
/// let events = account.pull_events();
/// assert_eq!(events.len(), 1);
/// assert!(account.pull_events().is_empty());
/// ```
pub trait AggregateRoot {
    /// The event type this entity records.
    type Event;

    /// Returns all events recorded since the last pull, in recorded order,
    /// and clears the entity's buffer.
    ///
    /// Orchestrators call this exactly once per completed operation; a
    /// second pull with no intervening mutation returns an empty `Vec`.
    fn pull_events(&mut self) -> Vec<Self::Event>;

    /// Pulls pending events and forwards them to `sink`.
    ///
    /// Convenience for orchestrators that consume events through a
    /// [`DomainEventSink`]. An entity with nothing pending emits nothing;
    /// the sink never observes an empty batch.
    fn release_events(&mut self, sink: &dyn DomainEventSink<Self::Event>) {
        let events = self.pull_events();
        if events.is_empty() {
            return;
        }
        debug!("Releasing {} domain events", events.len());
        sink.emit_batch(events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::EventBuffer;
    use crate::sink::{CollectingDomainEventSink, NoOpDomainEventSink};

    #[derive(Debug, Clone, PartialEq)]
    enum GoalEvent {
        Created { title: String },
        TargetChanged { target: u64 },
    }

    struct Goal {
        title: String,
        target: u64,
        events: EventBuffer<GoalEvent>,
    }

    impl Goal {
        fn create(title: &str, target: u64) -> Self {
            let mut goal = Self {
                title: title.to_string(),
                target,
                events: EventBuffer::new(),
            };
            goal.events.record(GoalEvent::Created {
                title: goal.title.clone(),
            });
            goal
        }

        fn change_target(&mut self, target: u64) {
            self.target = target;
            self.events.record(GoalEvent::TargetChanged { target });
        }
    }

    impl AggregateRoot for Goal {
        type Event = GoalEvent;

        fn pull_events(&mut self) -> Vec<GoalEvent> {
            self.events.drain()
        }
    }

    #[test]
    fn test_pull_events_returns_recorded_events_once() {
        let mut goal = Goal::create("Emergency fund", 10_000);
        goal.change_target(12_000);

        let events = goal.pull_events();
        assert_eq!(
            events,
            vec![
                GoalEvent::Created {
                    title: "Emergency fund".to_string()
                },
                GoalEvent::TargetChanged { target: 12_000 },
            ]
        );

        assert!(goal.pull_events().is_empty());
    }

    #[test]
    fn test_release_events_forwards_pending_events_to_sink() {
        let mut goal = Goal::create("House", 50_000);
        goal.change_target(60_000);

        let sink = CollectingDomainEventSink::new();
        goal.release_events(&sink);

        assert_eq!(sink.len(), 2);
        assert!(goal.pull_events().is_empty());
    }

    #[test]
    fn test_release_events_with_nothing_pending_emits_nothing() {
        let mut goal = Goal::create("Car", 20_000);
        goal.pull_events();

        let sink = CollectingDomainEventSink::new();
        goal.release_events(&sink);

        assert!(sink.is_empty());
    }

    #[test]
    fn test_release_events_into_noop_sink_discards() {
        let mut goal = Goal::create("Travel", 5_000);
        goal.release_events(&NoOpDomainEventSink);

        assert!(goal.pull_events().is_empty());
    }

    #[test]
    fn test_events_recorded_after_pull_accumulate_separately() {
        let mut goal = Goal::create("Retirement", 1_000_000);
        goal.pull_events();

        goal.change_target(1_100_000);
        goal.change_target(1_200_000);

        let events = goal.pull_events();
        assert_eq!(
            events,
            vec![
                GoalEvent::TargetChanged { target: 1_100_000 },
                GoalEvent::TargetChanged { target: 1_200_000 },
            ]
        );
    }
}
