//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. `Money` is a value
/// object; a `LineItem` is an entity (identified by its product id).
///
/// ```ignore
/// let a = Money::from_cents(1000);
/// let b = Money::from_f64(10.0)?;
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
