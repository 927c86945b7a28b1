//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// A line item in the cart is an entity: two items with the same product id are
/// the same line, whatever their amounts.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
