//! Aggregate root trait: the consistency boundary that records domain events.

use crate::entity::Entity;

/// Aggregate root: an [`Entity`] that records facts about itself for later
/// hand-off.
///
/// This is intentionally small so domain modules can decide how they model
/// state transitions without bringing in any infrastructure concerns. The one
/// obligation it adds over `Entity` is event tracking: operations performed on
/// the aggregate record events, and an external dispatching process drains
/// them (read + clear, exactly once) after the unit of work completes.
///
/// Implementers embed a [`crate::PendingEvents`] value and delegate:
///
/// ```ignore
/// struct Invoice {
///     id: InvoiceId,
///     pending: PendingEvents<InvoiceEvent>,
/// }
///
/// impl AggregateRoot for Invoice {
///     type Event = InvoiceEvent;
///
///     fn record_event(&mut self, event: InvoiceEvent) {
///         self.pending.record(event);
///     }
///
///     fn pending_events(&self) -> &[InvoiceEvent] {
///         self.pending.as_slice()
///     }
///
///     fn clear_pending_events(&mut self) {
///         self.pending.clear();
///     }
///
///     fn take_pending_events(&mut self) -> Vec<InvoiceEvent> {
///         self.pending.take()
///     }
/// }
/// ```
///
/// There is no state machine here: an aggregate is always accumulating. How
/// the recorded events are delivered is someone else's concern.
pub trait AggregateRoot: Entity {
    /// Event type this aggregate records. The kernel imposes no structure on
    /// it; delivery layers may ask for more (a stable name, a timestamp).
    type Event;

    /// Record a fact about this aggregate. Always succeeds; order of
    /// recording is preserved.
    fn record_event(&mut self, event: Self::Event);

    /// Ordered read-only view of the events recorded since construction or
    /// the last clear. Reading never mutates the buffer.
    fn pending_events(&self) -> &[Self::Event];

    /// Forget all currently pending events. Idempotent.
    fn clear_pending_events(&mut self);

    /// Read and clear in one step, for drains that take ownership of the
    /// recorded events.
    fn take_pending_events(&mut self) -> Vec<Self::Event>;
}
