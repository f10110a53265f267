use std::ops::Mul;
use super::matrix::Vector2;
use super::num::{Cast, Float, FloatOps, Number, SignedNumber};
use super::{DualComplex, Error, FuzzyEq, Unit, UnitComplex};

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Isometry<T, R> {
	pub translation: T,
	pub rotation: R,
}

/// A 2-dimensional direct isometry using a [`UnitComplex`] number for its rotational part.
pub type Isometry2<T = f32> = Isometry<Vector2<T>, UnitComplex<T>>;

impl<T: Number> Isometry2<T> {
	pub const fn identity() -> Self {
		Self {
			translation: Vector2::ZERO,
			rotation: UnitComplex::identity(),
		}
	}
}

impl<T: Float + FloatOps<T>> Isometry2<T> {
	pub fn inv(&self) -> Self {
		let rotation = self.rotation.inv();
		let translation = rotation * -self.translation;

		Self { translation, rotation }
	}
}

impl<T: SignedNumber> Isometry2<T> {
	pub fn transform(&self, point: Vector2<T>) -> Vector2<T> {
		self.rotation * point + self.translation
	}
}

impl<T: Float> Mul for Isometry2<T> {
	type Output = Self;

	fn mul(self, rhs: Self) -> Self::Output {
		let rotation = self.rotation * rhs.rotation;
		let translation = self.rotation * rhs.translation + self.translation;

		Self { translation, rotation }
	}
}

impl<T: FuzzyEq, R: FuzzyEq> FuzzyEq for Isometry<T, R> {
	fn fuzzy_eq(&self, other: &Self) -> bool {
		self.translation.fuzzy_eq(&other.translation) && self.rotation.fuzzy_eq(&other.rotation)
	}
}

impl<T: Number> From<Isometry2<T>> for DualComplex<T> {
	fn from(isometry: Isometry2<T>) -> Self {
		DualComplex::from_parts(isometry.rotation.into_inner(), isometry.translation.into())
	}
}

impl<T: Float + FloatOps<T>> TryFrom<DualComplex<T>> for Isometry2<T> {
	type Error = Error;

	/// Fails if the rotation part of `motion` doesn't have unit length.
	fn try_from(motion: DualComplex<T>) -> Result<Self, Self::Error> {
		if !motion.is_normalized() {
			return Err(Error::NotNormalized { length_sq: motion.length_sq().as_f64() });
		}

		Ok(Self {
			translation: motion.translation(),
			rotation: Unit::new_unchecked(motion.rotation()),
		})
	}
}
