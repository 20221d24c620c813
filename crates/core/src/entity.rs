//! Entity trait: things compared by identity rather than by value.

/// Entity marker + minimal interface.
///
/// Catalog products are entities: two products with the same `productId` are
/// the same product even if their price differs between catalog loads.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
