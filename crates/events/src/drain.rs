//! Unit-of-work drain: read pending events, hand them off, then clear.

use groundwork_kernel::{AggregateId, AggregateRoot};

use crate::bus::EventBus;
use crate::envelope::EventEnvelope;
use crate::event::DomainEvent;

/// Drain an aggregate's pending events onto a bus, exactly once.
///
/// Call this after the unit of work that mutated the aggregate completes and
/// before the aggregate is released, so stale events are never re-delivered
/// on the next load.
///
/// Each pending event is wrapped in an [`EventEnvelope`] (sequence numbers
/// `0..n`, preserving recording order) and published. Only when every publish
/// succeeded is the buffer cleared; a failed publish returns the transport's
/// error with the buffer untouched, so the caller can retry the whole
/// hand-off. Subscribers own the resulting duplicates (at-least-once).
///
/// Returns the number of events delivered.
pub fn drain_pending<A, B>(
    aggregate: &mut A,
    aggregate_type: &str,
    bus: &B,
) -> Result<usize, B::Error>
where
    A: AggregateRoot,
    A::Event: DomainEvent,
    A::Id: Into<AggregateId>,
    B: EventBus<EventEnvelope<A::Event>>,
{
    let aggregate_id: AggregateId = aggregate.id().clone().into();
    let pending = aggregate.pending_events();
    let count = pending.len();

    if count == 0 {
        tracing::trace!(aggregate_type, %aggregate_id, "no pending events to drain");
        return Ok(0);
    }

    for (sequence, event) in pending.iter().enumerate() {
        tracing::trace!(
            aggregate_type,
            %aggregate_id,
            sequence,
            event_type = event.event_type(),
            "publishing pending event"
        );

        let envelope = EventEnvelope::new(
            aggregate_id,
            aggregate_type,
            sequence as u64,
            event.clone(),
        );
        bus.publish(envelope)?;
    }

    aggregate.clear_pending_events();
    tracing::debug!(aggregate_type, %aggregate_id, count, "drained pending events");

    Ok(count)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::mpsc;

    use chrono::{DateTime, Utc};
    use groundwork_kernel::{Entity, PendingEvents};

    use super::*;
    use crate::bus::Subscription;
    use crate::in_memory_bus::InMemoryEventBus;

    groundwork_kernel::entity_id!(
        pub struct TicketId
    );

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum TicketEvent {
        Opened { at: DateTime<Utc> },
        Commented { at: DateTime<Utc> },
    }

    impl DomainEvent for TicketEvent {
        fn event_type(&self) -> &'static str {
            match self {
                TicketEvent::Opened { .. } => "support.ticket.opened",
                TicketEvent::Commented { .. } => "support.ticket.commented",
            }
        }

        fn occurred_at(&self) -> DateTime<Utc> {
            match self {
                TicketEvent::Opened { at } | TicketEvent::Commented { at } => *at,
            }
        }
    }

    struct Ticket {
        id: TicketId,
        pending: PendingEvents<TicketEvent>,
    }

    impl Ticket {
        fn open(id: TicketId) -> Self {
            let mut ticket = Self {
                id,
                pending: PendingEvents::new(),
            };
            ticket.record_event(TicketEvent::Opened { at: Utc::now() });
            ticket
        }

        fn comment(&mut self) {
            self.record_event(TicketEvent::Commented { at: Utc::now() });
        }
    }

    impl Entity for Ticket {
        type Id = TicketId;

        fn id(&self) -> &TicketId {
            &self.id
        }
    }

    impl AggregateRoot for Ticket {
        type Event = TicketEvent;

        fn record_event(&mut self, event: TicketEvent) {
            self.pending.record(event);
        }

        fn pending_events(&self) -> &[TicketEvent] {
            self.pending.as_slice()
        }

        fn clear_pending_events(&mut self) {
            self.pending.clear();
        }

        fn take_pending_events(&mut self) -> Vec<TicketEvent> {
            self.pending.take()
        }
    }

    /// Bus that rejects every publish, for the retry-path tests.
    struct RejectingBus;

    impl<M> EventBus<M> for RejectingBus {
        type Error = &'static str;

        fn publish(&self, _message: M) -> Result<(), Self::Error> {
            Err("transport down")
        }

        fn subscribe(&self) -> Subscription<M> {
            let (_tx, rx) = mpsc::channel();
            Subscription::new(rx)
        }
    }

    /// Bus that accepts the first `n` publishes, then fails.
    struct FlakyBus {
        remaining: Mutex<usize>,
    }

    impl<M> EventBus<M> for FlakyBus {
        type Error = &'static str;

        fn publish(&self, _message: M) -> Result<(), Self::Error> {
            let mut remaining = self.remaining.lock().unwrap();
            if *remaining == 0 {
                return Err("transport down");
            }
            *remaining -= 1;
            Ok(())
        }

        fn subscribe(&self) -> Subscription<M> {
            let (_tx, rx) = mpsc::channel();
            Subscription::new(rx)
        }
    }

    #[test]
    fn drain_publishes_in_recording_order_and_clears() {
        let bus = InMemoryEventBus::new();
        let subscription = bus.subscribe();

        let mut ticket = Ticket::open(TicketId::new());
        ticket.comment();

        let delivered = drain_pending(&mut ticket, "ticket", &bus).unwrap();
        assert_eq!(delivered, 2);
        assert!(ticket.pending_events().is_empty());

        let first = subscription.try_recv().unwrap();
        let second = subscription.try_recv().unwrap();
        assert_eq!(first.sequence_number(), 0);
        assert_eq!(first.payload().event_type(), "support.ticket.opened");
        assert_eq!(second.sequence_number(), 1);
        assert_eq!(second.payload().event_type(), "support.ticket.commented");
        assert_eq!(first.aggregate_id(), ticket.id.into());
        assert_eq!(first.aggregate_type(), "ticket");
    }

    #[test]
    fn second_drain_delivers_nothing() {
        let bus = InMemoryEventBus::new();
        let subscription = bus.subscribe();

        let mut ticket = Ticket::open(TicketId::new());
        drain_pending(&mut ticket, "ticket", &bus).unwrap();

        let delivered = drain_pending(&mut ticket, "ticket", &bus).unwrap();
        assert_eq!(delivered, 0);

        // Only the first drain's event reached the bus.
        assert!(subscription.try_recv().is_ok());
        assert!(subscription.try_recv().is_err());
    }

    #[test]
    fn failed_publish_leaves_the_buffer_intact() {
        let mut ticket = Ticket::open(TicketId::new());
        ticket.comment();

        let err = drain_pending(&mut ticket, "ticket", &RejectingBus).unwrap_err();
        assert_eq!(err, "transport down");
        assert_eq!(ticket.pending_events().len(), 2);
    }

    #[test]
    fn partial_publish_failure_keeps_all_events_for_retry() {
        let mut ticket = Ticket::open(TicketId::new());
        ticket.comment();
        ticket.comment();

        let flaky = FlakyBus {
            remaining: Mutex::new(2),
        };
        drain_pending(&mut ticket, "ticket", &flaky).unwrap_err();

        // The whole batch stays pending; retrying re-publishes everything.
        assert_eq!(ticket.pending_events().len(), 3);

        let bus = InMemoryEventBus::new();
        let subscription = bus.subscribe();
        let delivered = drain_pending(&mut ticket, "ticket", &bus).unwrap();
        assert_eq!(delivered, 3);
        assert_eq!(subscription.try_recv().unwrap().sequence_number(), 0);
    }
}
