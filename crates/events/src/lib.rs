//! `groundwork-events` — delivery mechanics for recorded domain events.
//!
//! The kernel lets an aggregate accumulate events; this crate is the
//! "external dispatching process" that drains them after a unit of work:
//! an event contract, an envelope, a transport-agnostic bus, and the
//! drain-exactly-once helper.

pub mod bus;
pub mod drain;
pub mod envelope;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use drain::drain_pending;
pub use envelope::EventEnvelope;
pub use event::DomainEvent;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
