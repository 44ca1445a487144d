//! Pending-events buffer: facts an entity has recorded but not yet handed off.

/// Insertion-ordered buffer of events awaiting hand-off.
///
/// Aggregates **embed** one of these rather than inheriting event-tracking
/// behavior; the buffer itself is a plain in-memory sequence with no
/// synchronization and no persistence. One entity instance is expected to be
/// loaded, mutated, and drained within a single unit of work owned by one
/// logical flow, so access needs no internal locking.
///
/// Events are kept in the exact order they were recorded, duplicates and all,
/// until the owner clears or takes them. Every operation is total: nothing
/// here can fail.
///
/// The buffer deliberately derives no serde traits. Pending events are
/// transient hand-off state, not part of the entity's persisted shape; a
/// rehydrated entity always starts with an empty buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingEvents<E> {
    events: Vec<E>,
}

impl<E> PendingEvents<E> {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Append an event to the end of the buffer.
    ///
    /// Order of recording is preserved; nothing is deduplicated.
    pub fn record(&mut self, event: E) {
        self.events.push(event);
    }

    /// Ordered read-only view of everything recorded since the last clear.
    ///
    /// The shared slice makes the snapshot guarantee a compile-time fact:
    /// callers cannot mutate the buffer through this view.
    pub fn as_slice(&self) -> &[E] {
        &self.events
    }

    /// Iterate the pending events in recording order.
    pub fn iter(&self) -> core::slice::Iter<'_, E> {
        self.events.iter()
    }

    /// Number of events currently pending.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Remove all currently pending events.
    ///
    /// Idempotent: clearing an empty buffer is a no-op. Events recorded after
    /// a clear are unaffected by it.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Read and clear in one step: the drain side of the unit-of-work
    /// discipline (read the pending events exactly once, then forget them).
    ///
    /// Returns the events in recording order and leaves the buffer empty.
    pub fn take(&mut self) -> Vec<E> {
        core::mem::take(&mut self.events)
    }
}

impl<E> Default for PendingEvents<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Extend<E> for PendingEvents<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.events.extend(iter);
    }
}

impl<'a, E> IntoIterator for &'a PendingEvents<E> {
    type Item = &'a E;
    type IntoIter = core::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
