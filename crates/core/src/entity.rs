//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Customers (keyed by `CustomerId`) and products (keyed by SKU) are entities:
/// two records with the same key describe the same thing.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
