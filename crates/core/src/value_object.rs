//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. Tax entries, order lines and fulfillment confirmations
//! are modelled this way.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (two with the same values are equal)
/// - **Entity**: has identity (two with the same id are the same entity)
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct TaxEntry {
///     description: String,
///     rate: Decimal,
/// }
///
/// impl ValueObject for TaxEntry {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
