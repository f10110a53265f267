use std::ops::{Add, Div, Mul, Neg, Sub};

use super::matrix::Vector2;
use super::num::{Float, FloatOps, Number, SignedNumber};
use super::{FuzzyEq, Unit};

/// A complex number. See [`UnitComplex`] for a complex number that may be used to represent a 2D rotation.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Complex<T> {
	pub r: T,
	pub i: T,
}

impl<T> Complex<T> {
	pub const fn new(r: T, i: T) -> Self {
		Self { r, i }
	}
}

impl<T: Number> Complex<T> {
	/// The multiplicative identity `1 + 0i`.
	pub const fn identity() -> Self {
		Self { r: T::ONE, i: T::ZERO }
	}

	pub const fn from_real(real: T) -> Self {
		Self { r: real, i: T::ZERO }
	}

	pub const fn from_imag(imag: T) -> Self {
		Self { r: T::ZERO, i: imag }
	}

	pub fn real(&self) -> T {
		self.r
	}

	pub fn imag(&self) -> T {
		self.i
	}
}

impl<T: Float + FloatOps<T>> Complex<T> {
	/// Returns the squared length (L2 norm) of this complex number.
	pub fn length_sq(&self) -> T {
		self.r * self.r + self.i * self.i
	}

	/// Returns the length (L2 norm) of this complex number.
	pub fn length(&self) -> T {
		self.length_sq().sqrt()
	}

	/// Returns the conjugate of this complex number.
	pub fn conj(&self) -> Self {
		Self::new(self.r, -self.i)
	}

	/// Returns the inverse of this complex number, or `None` if it is zero.
	pub fn inv(&self) -> Option<Self> {
		let length_sq = self.length_sq();
		(length_sq > T::ZERO).then(|| self.conj() / length_sq)
	}

	/// Normalizes this complex number.
	pub fn normalize(&self) -> Unit<Self> {
		Unit::new_unchecked(*self / self.length())
	}

	/// The angle of this complex number in (-pi, pi].
	pub fn angle(&self) -> T {
		self.i.atan2(self.r)
	}
}

/// A unit complex number. May be used to represent a 2D rotation.
pub type UnitComplex<T> = Unit<Complex<T>>;

impl<T: Number> UnitComplex<T> {
	pub const fn identity() -> Self {
		Self::new_unchecked(Complex::identity())
	}
}

impl<T: Float + FloatOps<T>> UnitComplex<T> {
	/// Creates a counterclockwise rotation by `angle` radians.
	pub fn from_angle(angle: T) -> Self {
		let (sin, cos) = angle.sin_cos();
		Self::new_unchecked(Complex::new(cos, sin))
	}

	pub fn conj(&self) -> Self {
		Self::new_unchecked(self.as_ref().conj())
	}

	pub fn inv(&self) -> Self {
		self.conj()
	}
}

impl<T: Number> From<Vector2<T>> for Complex<T> {
	fn from(v: Vector2<T>) -> Self {
		Self::new(v.x, v.y)
	}
}

impl<T: Number> From<Complex<T>> for Vector2<T> {
	fn from(c: Complex<T>) -> Self {
		Vector2::new(c.r, c.i)
	}
}

impl<T: Add<Output=T>> Add for Complex<T> {
	type Output = Complex<T>;

	fn add(self, rhs: Self) -> Self::Output {
		Self {
			r: self.r + rhs.r,
			i: self.i + rhs.i,
		}
	}
}

impl<T: Sub<Output=T>> Sub for Complex<T> {
	type Output = Complex<T>;

	fn sub(self, rhs: Self) -> Self::Output {
		Self {
			r: self.r - rhs.r,
			i: self.i - rhs.i,
		}
	}
}

impl<T: Neg<Output=T>> Neg for Complex<T> {
	type Output = Complex<T>;

	fn neg(self) -> Self::Output {
		Self {
			r: -self.r,
			i: -self.i,
		}
	}
}

impl<T: Copy + Mul<Output=T>> Mul<T> for Complex<T> {
	type Output = Complex<T>;

	fn mul(self, rhs: T) -> Self::Output {
		Self {
			r: self.r * rhs,
			i: self.i * rhs,
		}
	}
}

impl<T: Copy + Div<Output=T>> Div<T> for Complex<T> {
	type Output = Complex<T>;

	fn div(self, rhs: T) -> Self::Output {
		Self {
			r: self.r / rhs,
			i: self.i / rhs,
		}
	}
}

impl<T: Float> Mul<Complex<T>> for Complex<T> {
	type Output = Complex<T>;

	fn mul(self, rhs: Complex<T>) -> Self::Output {
		Self {
			r: self.r * rhs.r - self.i * rhs.i,
			i: self.r * rhs.i + self.i * rhs.r,
		}
	}
}

/// Rotates and scales a vector by this complex number.
impl<T: SignedNumber> Mul<Vector2<T>> for Complex<T> {
	type Output = Vector2<T>;

	fn mul(self, rhs: Vector2<T>) -> Self::Output {
		Vector2::new(
			self.r * rhs.x - self.i * rhs.y,
			self.r * rhs.y + self.i * rhs.x,
		)
	}
}

impl<T: Float> Mul<UnitComplex<T>> for UnitComplex<T> {
	type Output = UnitComplex<T>;

	fn mul(self, rhs: UnitComplex<T>) -> Self::Output {
		UnitComplex::new_unchecked(*self * *rhs)
	}
}

impl<T: FuzzyEq> FuzzyEq for Complex<T> {
	fn fuzzy_eq(&self, other: &Self) -> bool {
		self.r.fuzzy_eq(&other.r) && self.i.fuzzy_eq(&other.i)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Vec2;
	use std::f32::consts::{FRAC_PI_2, PI};

	#[test]
	fn parts() {
		let a = Complex::from_real(2.0f32) + Complex::from_imag(-0.5);
		assert_eq!((a.real(), a.imag()), (2.0, -0.5));
		assert_eq!(-a, Complex::new(-2.0, 0.5));
		assert_eq!(a - a, Complex::new(0.0, 0.0));
		assert_eq!(a * 2.0f32, Complex::new(4.0, -1.0));
	}

	#[test]
	fn multiply() {
		let a = Complex::new(-1.5f32, 2.0);
		let b = Complex::new(2.0f32, -7.5);

		assert_eq!(a * b, Complex::new(12.0, 15.25));
		assert_eq!(a * b, b * a, "Complex multiplication must commute");
	}

	#[test]
	fn length_and_conj() {
		let a = Complex::new(-1.0f32, 3.0);

		assert_eq!(a.length_sq(), 10.0);
		assert_fuzzy_eq!(a.length(), 3.162278);
		assert_eq!(a.conj(), Complex::new(-1.0, -3.0));
		assert_fuzzy_eq!(a.normalize().length(), 1.0);
	}

	#[test]
	fn inverse() {
		let a = Complex::new(-1.0f32, 1.5);

		assert_fuzzy_eq!(a.inv().unwrap(), Complex::new(-0.307692, -0.461538));
		assert_fuzzy_eq!(a * a.inv().unwrap(), Complex::identity());
		assert!(Complex::new(0.0f32, 0.0).inv().is_none());
	}

	#[test]
	fn angle() {
		assert_fuzzy_eq!(Complex::new(0.0f32, 2.0).angle(), FRAC_PI_2);
		assert_fuzzy_eq!(Complex::new(-1.0f32, 0.0).angle(), PI);
		assert_fuzzy_eq!(UnitComplex::from_angle(120f32.to_radians()).angle(), 120f32.to_radians());
	}

	#[test]
	fn rotate_vector() {
		let rotation = UnitComplex::from_angle(FRAC_PI_2);

		assert_fuzzy_eq!(rotation * *Vec2::X, *Vec2::Y);
		assert_fuzzy_eq!(rotation * Vec2::new(1.5, -3.0), Vec2::new(3.0, 1.5));
		assert_fuzzy_eq!(rotation.inv() * (rotation * Vec2::new(1.5, -3.0)), Vec2::new(1.5, -3.0));
	}

	#[test]
	fn compose_rotations() {
		let a = UnitComplex::from_angle(0.5f32);
		let b = UnitComplex::from_angle(-1.25f32);

		assert_fuzzy_eq!((a * b).angle(), -0.75);
		assert_fuzzy_eq!(a * a.inv(), UnitComplex::identity());
	}

	#[test]
	fn vector_conversion() {
		let v = Vec2::new(-3.0, 7.5);
		assert_eq!(Complex::from(v), Complex::new(-3.0, 7.5));
		assert_eq!(Vec2::from(Complex::from(v)), v);
	}
}
