use std::ops::{Mul, MulAssign};

use super::matrix::{Matrix3, Vector2};
use super::num::{Cast, Float, FloatOps, Number};
use super::{Complex, Dual, Error, FuzzyEq, UnitComplex};

/// A dual complex number. May be used to represent a 2D rigid motion.
///
/// The real part `r` holds the rotation and the dual part `d` the translation of the map
/// `p -> r * p + d`. Only values with a unit length real part are rigid motions,
/// see [`DualComplex::is_normalized`].
///
/// Multiplication composes the maps, so `a * b` applies `b` first and then `a`:
/// `(r1, d1) * (r2, d2) = (r1 * r2, r1 * d2 + d1)`. Unlike the product of dual numbers
/// this keeps the dual part equal to the translation of the composed motion.
pub type DualComplex<T = f32> = Dual<Complex<T>>;

impl<T: Number> DualComplex<T> {
	/// The identity motion, no rotation and no translation.
	pub const fn identity() -> Self {
		Self::new(Complex::identity(), Complex::new(T::ZERO, T::ZERO))
	}

	/// Constructs a dual complex number from its rotation and translation parts without any validation.
	pub const fn from_parts(real: Complex<T>, dual: Complex<T>) -> Self {
		Self::new(real, dual)
	}

	/// A pure translation by `translation`.
	pub const fn from_translation(translation: Vector2<T>) -> Self {
		Self::new(Complex::identity(), Complex::new(translation.data[0][0], translation.data[1][0]))
	}

	/// A pure rotation around the origin.
	pub const fn from_unit_rotation(rotation: UnitComplex<T>) -> Self {
		Self::new(rotation.into_inner(), Complex::new(T::ZERO, T::ZERO))
	}
}

impl<T: Float> DualComplex<T> {
	/// Returned by [`DualComplex::inv_normalized`] when its precondition is violated.
	const INVALID: Self = Self::new(Complex::new(T::NAN, T::NAN), Complex::new(T::NAN, T::NAN));
}

impl<T: Float + FloatOps<T>> DualComplex<T> {
	/// A pure rotation around the origin by `angle` radians.
	pub fn from_rotation(angle: T) -> Self {
		Self::from_unit_rotation(UnitComplex::from_angle(angle))
	}

	/// Returns the squared length of the rotation part. The translation part does not contribute.
	pub fn length_sq(&self) -> T {
		self.r.length_sq()
	}

	/// Returns the length of the rotation part.
	pub fn length(&self) -> T {
		self.r.length()
	}

	/// Whether the rotation part has unit length, i.e. this is a rigid motion.
	pub fn is_normalized(&self) -> bool {
		self.length_sq().fuzzy_eq(&T::ONE)
	}

	/// Normalizes the rotation part. The translation part is returned unchanged.
	pub fn normalize(&self) -> Self {
		Self::new(*self.r.normalize(), self.d)
	}

	/// Conjugates both parts as complex numbers, `(conj r, conj d)`.
	pub fn complex_conj(&self) -> Self {
		Self::new(self.r.conj(), self.d.conj())
	}

	/// The dual number conjugate of the complex conjugate, `(conj r, -conj d)`.
	pub fn conj(&self) -> Self {
		Self::new(self.r.conj(), Complex::new(-self.d.r, self.d.i))
	}

	/// Returns the inverse motion.
	///
	/// The rotation part must not be zero, otherwise the result is not finite.
	pub fn inv(&self) -> Self {
		let r = self.r.conj() / self.r.length_sq();
		Self::new(r, -(r * self.d))
	}

	/// Returns the inverse of a rigid motion, skipping the division by the squared length.
	///
	/// Fails with [`Error::NotNormalized`] if the rotation part doesn't have unit length.
	pub fn checked_inv_normalized(&self) -> Result<Self, Error> {
		if !self.is_normalized() {
			return Err(Error::NotNormalized { length_sq: self.length_sq().as_f64() });
		}

		let r = self.r.conj();
		Ok(Self::new(r, -(r * self.d)))
	}

	/// Returns the inverse of a rigid motion, skipping the division by the squared length.
	///
	/// If the rotation part doesn't have unit length an error is logged and the result has
	/// all components set to NaN, so it doesn't compare equal to anything including itself.
	pub fn inv_normalized(&self) -> Self {
		self.checked_inv_normalized().unwrap_or_else(|err| {
			log::error!(target: "math::dual_complex", "DualComplex::inv_normalized(): {}", err);
			Self::INVALID
		})
	}

	/// The rotation angle in (-pi, pi]. Independent of the length of the rotation part.
	pub fn rotation_angle(&self) -> T {
		self.r.angle()
	}

	/// The rotation part.
	pub fn rotation(&self) -> Complex<T> {
		self.r
	}

	/// The translation of this motion, the dual part read as a vector.
	pub fn translation(&self) -> Vector2<T> {
		self.d.into()
	}

	/// Rotates a vector by this motion, ignoring the translation.
	pub fn transform_vector(&self, vector: Vector2<T>) -> Vector2<T> {
		self.r * vector
	}

	/// Rotates and translates a point by this motion.
	pub fn transform_point(&self, point: Vector2<T>) -> Vector2<T> {
		self.r * point + self.translation()
	}
}

impl<T: Number> Default for DualComplex<T> {
	fn default() -> Self {
		Self::identity()
	}
}

impl<T: Float> Mul for DualComplex<T> {
	type Output = Self;

	fn mul(self, rhs: Self) -> Self::Output {
		Self::new(self.r * rhs.r, self.r * rhs.d + self.d)
	}
}

impl<T: Float> MulAssign for DualComplex<T> {
	fn mul_assign(&mut self, rhs: Self) {
		*self = *self * rhs;
	}
}

impl<T: Float> From<DualComplex<T>> for Matrix3<T> {
	fn from(motion: DualComplex<T>) -> Self {
		let Dual { r, d } = motion;

		Matrix3::from_array([
			r.r, -r.i, d.r,
			r.i, r.r, d.i,
			T::ZERO, T::ZERO, T::ONE,
		])
	}
}

impl<T: Float> TryFrom<Matrix3<T>> for DualComplex<T> {
	type Error = Error;

	/// Accepts only matrices made of a rotation and a translation.
	fn try_from(matrix: Matrix3<T>) -> Result<Self, Self::Error> {
		let m = |r: usize, c: usize| matrix[(r, c)];

		let rotation = Complex::new(m(0, 0), m(1, 0));
		let length_sq = rotation.r * rotation.r + rotation.i * rotation.i;

		let rigid = length_sq.fuzzy_eq(&T::ONE)
			&& m(0, 1).fuzzy_eq(&-rotation.i)
			&& m(1, 1).fuzzy_eq(&rotation.r)
			&& m(2, 0).fuzzy_eq(&T::ZERO)
			&& m(2, 1).fuzzy_eq(&T::ZERO)
			&& m(2, 2).fuzzy_eq(&T::ONE);

		if !rigid {
			return Err(Error::NotRigid);
		}

		Ok(Self::new(rotation, Complex::new(m(0, 2), m(1, 2))))
	}
}
