use std::ops::{Add, Neg, Sub};
use super::FuzzyEq;

/// A pair of a real part `r` and a dual part `d`.
///
/// The meaning of multiplication depends on what the parts are,
/// see [`DualComplex`](crate::DualComplex) for rigid motions in the plane.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Dual<T> {
	pub r: T,
	pub d: T,
}

impl<T> Dual<T> {
	pub const fn new(r: T, d: T) -> Self {
		Self { r, d }
	}
}

impl<T: Copy> Dual<T> {
	pub fn real(&self) -> T {
		self.r
	}

	pub fn dual(&self) -> T {
		self.d
	}
}

impl<T: Copy + Neg<Output=T>> Dual<T> {
	/// Negates the dual part, `r - εd`.
	pub fn dual_conj(&self) -> Self {
		Self::new(self.r, -self.d)
	}
}

impl<T: Add<Output=T>> Add for Dual<T> {
	type Output = Dual<T>;

	fn add(self, rhs: Dual<T>) -> Self::Output {
		Self {
			r: self.r + rhs.r,
			d: self.d + rhs.d,
		}
	}
}

impl<T: Sub<Output=T>> Sub for Dual<T> {
	type Output = Dual<T>;

	fn sub(self, rhs: Dual<T>) -> Self::Output {
		Self {
			r: self.r - rhs.r,
			d: self.d - rhs.d,
		}
	}
}

impl<T: FuzzyEq> FuzzyEq for Dual<T> {
	fn fuzzy_eq(&self, other: &Self) -> bool {
		self.r.fuzzy_eq(&other.r) && self.d.fuzzy_eq(&other.d)
	}
}
