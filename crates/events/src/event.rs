use chrono::{DateTime, Utc};

/// A domain event as the delivery layer sees it.
///
/// The kernel's pending-events buffer is generic over any value; this trait
/// is what a delivery mechanism additionally needs from a drained event:
///
/// - **immutable** (treat events as facts)
/// - a **stable name** for routing and logging
/// - a **business timestamp**
pub trait DomainEvent: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "billing.invoice.issued").
    fn event_type(&self) -> &'static str;

    /// When the event occurred (business time, not delivery time).
    fn occurred_at(&self) -> DateTime<Utc>;
}
