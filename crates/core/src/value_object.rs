//! Value object trait: equality by value, not identity.
//!
//! Value objects are defined entirely by their attribute values. Two value
//! objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one from the old (e.g. `quality.raised_by(1)`), which lets the
/// constructor re-establish any bounds the type guarantees.
///
/// ## Value Object vs Item
///
/// - **Value Object**: no identity (`Quality(20) == Quality(20)`)
/// - **Item**: a stock line that changes over time and is tracked by position
///   in its inventory
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Percent(u8);
///
/// impl ValueObject for Percent {}
///
/// assert_eq!(Percent(40), Percent(40));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
