//! Event publishing/subscription abstraction (mechanics only).
//!
//! A pub/sub seam between "events were drained from an aggregate" and
//! "someone acts on them". The contract is deliberately lightweight:
//!
//! - **Transport-agnostic**: in-memory channels here; a log writer or a
//!   message broker elsewhere, behind the same trait.
//! - **At-least-once**: a drain that fails mid-publish is retried whole, so
//!   subscribers must tolerate duplicates.
//! - **No persistence**: the bus distributes, it does not store. Whatever
//!   system of record exists lives behind it.

use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::Duration;

/// A subscription to an event stream.
///
/// Each subscription receives a copy of every message published after it was
/// created (broadcast semantics). Consume it from one thread; fan out further
/// yourself if needed.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Block until the next message is available.
    pub fn recv(&self) -> Result<M, std::sync::mpsc::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, std::sync::mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a message.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<M, std::sync::mpsc::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }
}

/// Domain-agnostic event bus (pub/sub abstraction).
///
/// `publish` can fail (full transport, poisoned lock, network); the failure
/// surfaces to the caller, which decides whether to retry the unit of work.
/// Implementations must be shareable across threads: publication is the one
/// concurrent edge of this crate.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, B> EventBus<M> for Arc<B>
where
    B: EventBus<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }
}
