//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects carry no identity of their own. An order line
/// `{productId: "A", price: 10, quantity: 2}` equals every other line with the
/// same three values, which is what makes payload comparisons (and the
/// "same payload twice" guarantee) meaningful.
///
/// "Modifying" a value object means building a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
