//! `groundwork-kernel` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! entity identity, the pending-events buffer aggregates embed, typed
//! identifiers, and the domain error model.

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;
pub mod pending;

pub use aggregate::AggregateRoot;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::AggregateId;
pub use pending::PendingEvents;
