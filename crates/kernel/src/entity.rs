//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// An entity is defined by its identity, not its attribute values: two
/// instances with the same `Id` are the same entity at different points in
/// time. The identifier type is left to the implementer; any `Clone + Eq`
/// value works (a typed UUID wrapper, an integer, a composite key).
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
