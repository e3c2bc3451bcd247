//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// A value object is defined entirely by its attribute values — two value
/// objects with the same values are the same value. Everything in this crate
/// is a value object: an identifier *is* its (entity type, value) pair.
///
/// Value objects are immutable. To "modify" one, construct a new one. This
/// makes them freely shareable across threads without synchronization.
///
/// The trait requires:
/// - **Clone**: values are copied, not referenced
/// - **PartialEq**: compared by attribute values
/// - **Debug**: usable in logs and test assertions
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
