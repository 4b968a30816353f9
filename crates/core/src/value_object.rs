//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** - two value
/// objects with the same attributes are the same value. `Money` is the
/// canonical example here: `$1.50` equals `$1.50` no matter where either
/// amount came from. To "modify" a value object, construct a new one.
///
/// The bounds keep value objects cheap to copy around, comparable, and
/// debuggable in logs and tests.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
