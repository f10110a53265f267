use std::ops::{Deref, Mul};
use super::FuzzyEq;

/// A wrapper that marks the underlying value as having a unit norm.
///
/// Nothing is verified at construction. Operations on a `Unit` may rely on the
/// norm being one, e.g. inverting a [`UnitComplex`](crate::UnitComplex) is a conjugation.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Unit<T> {
	unit: T,
}

impl<T> Unit<T> {
	/// Wraps the given value, assuming it is already normalized.
	pub const fn new_unchecked(unit: T) -> Self {
		Self { unit }
	}
}

impl<T: Copy> Unit<T> {
	/// Unwraps the underlying value.
	pub const fn into_inner(self) -> T {
		self.unit
	}
}

impl<T> AsRef<T> for Unit<T> {
	fn as_ref(&self) -> &T {
		&self.unit
	}
}

impl<T> Deref for Unit<T> {
	type Target = T;

	fn deref(&self) -> &Self::Target {
		&self.unit
	}
}

impl<T: Mul<U>, U> Mul<U> for Unit<T> {
	type Output = T::Output;

	fn mul(self, rhs: U) -> Self::Output {
		self.unit * rhs
	}
}

impl<T: FuzzyEq> FuzzyEq for Unit<T> {
	fn fuzzy_eq(&self, other: &Self) -> bool {
		self.unit.fuzzy_eq(&other.unit)
	}
}
