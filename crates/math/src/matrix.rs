use super::num::{Float, FloatOps, Number, SignedNumber};
use std::ops::{Mul, Index, IndexMut, Add, AddAssign, Div, DivAssign, Sub, SubAssign, Neg, MulAssign};
use super::unit::Unit;
use super::FuzzyEq;

#[repr(C)]
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Matrix<T, const R: usize, const C: usize> {
	pub data: [[T; C]; R],
}

impl<T: Number, const R: usize, const C: usize> Matrix<T, R, C> {
	pub const ZERO: Self = Self::splat(T::ZERO);
	pub const ONE: Self = Self::splat(T::ONE);

	pub const fn splat(value: T) -> Self {
		Self { data: [[value; C]; R] }
	}
}

pub type Vector<T, const R: usize> = Matrix<T, R, 1>;

pub type Vector2<T> = Vector<T, 2>;
pub type Vector3<T> = Vector<T, 3>;

pub type Matrix3<T> = Matrix<T, 3, 3>;

impl<T: Number> Vector2<T> {
	pub const X: Unit<Self> = Unit::new_unchecked(Self::new(T::ONE, T::ZERO));
	pub const Y: Unit<Self> = Unit::new_unchecked(Self::new(T::ZERO, T::ONE));

	pub const fn new(x: T, y: T) -> Self {
		Self { data: [[x], [y]] }
	}

	pub fn extend(&self, z: T) -> Vector3<T> {
		Vector3::new(self.x, self.y, z)
	}

	/// The z component of the 3D cross product of both vectors extended with `z = 0`.
	pub fn cross(&self, rhs: Self) -> T {
		self.x * rhs.y - self.y * rhs.x
	}
}

impl<T: SignedNumber> Vector2<T> {
	/// This vector rotated by 90 degrees counterclockwise.
	pub fn perp(&self) -> Self {
		Self::new(-self.y, self.x)
	}
}

impl<T: Number> Vector3<T> {
	pub const fn new(x: T, y: T, z: T) -> Self {
		Self { data: [[x], [y], [z]] }
	}

	pub fn truncate(&self) -> Vector2<T> {
		Vector2::new(self.x, self.y)
	}
}

impl<T: Float + FloatOps<T>, const N: usize> Vector<T, N> {
	#[inline(always)]
	pub fn dot(&self, rhs: Self) -> T {
		let mut result = T::ZERO;
		for i in 0..N {
			result += self[i] * rhs[i];
		}
		result
	}

	pub fn normalize(&self) -> Unit<Self> {
		Unit::new_unchecked(*self / self.length())
	}

	pub fn length_sq(&self) -> T {
		self.dot(*self)
	}

	pub fn length(&self) -> T {
		self.length_sq().sqrt()
	}
}

impl<T: Number> Matrix3<T> {
	pub const IDENTITY: Self = Self::from_array([
		T::ONE, T::ZERO, T::ZERO,
		T::ZERO, T::ONE, T::ZERO,
		T::ZERO, T::ZERO, T::ONE,
	]);

	/// Creates a matrix from an array of 9 elements stored in row-major order.
	/// This allows the code to be formatted as if it were a 3x3 matrix.
	pub const fn from_array(array: [T; 9]) -> Self {
		Self { data: [
			[array[0], array[1], array[2]],
			[array[3], array[4], array[5]],
			[array[6], array[7], array[8]],
		]}
	}
}

impl<T: Number, const R: usize, const C: usize, const CR: usize> Mul<Matrix<T, CR, C>> for Matrix<T, R, CR> {
	type Output = Matrix<T, R, C>;

	fn mul(self, rhs: Matrix<T, CR, C>) -> Self::Output {
		let mut result = Matrix::ZERO;
		for row in 0..R {
			for col in 0..C {
				for i in 0..CR {
					result[(row, col)] += self[(row, i)] * rhs[(i, col)];
				}
			}
		}
		result
	}
}

impl<T: Number, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C> {
	fn mul_assign(&mut self, rhs: T) {
		for i in 0..(R * C) {
			self[i] *= rhs;
		}
	}
}

impl<T: Number, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C> {
	type Output = Self;

	fn mul(self, rhs: T) -> Self::Output {
		let mut result = self;
		result *= rhs;
		result
	}
}

impl<T: Number, const R: usize, const C: usize> DivAssign<T> for Matrix<T, R, C> {
	fn div_assign(&mut self, rhs: T) {
		for i in 0..(R * C) {
			self[i] /= rhs;
		}
	}
}

impl<T: Number, const R: usize, const C: usize> Div<T> for Matrix<T, R, C> {
	type Output = Self;

	fn div(self, rhs: T) -> Self::Output {
		let mut result = self;
		result /= rhs;
		result
	}
}

impl<T: Number, const R: usize, const C: usize> AddAssign for Matrix<T, R, C> {
	fn add_assign(&mut self, rhs: Self) {
		for i in 0..(R * C) {
			self[i] += rhs[i];
		}
	}
}

impl<T: Number, const R: usize, const C: usize> Add for Matrix<T, R, C> {
	type Output = Self;

	fn add(self, rhs: Self) -> Self::Output {
		let mut result = self;
		result += rhs;
		result
	}
}

impl<T: Number, const R: usize, const C: usize> SubAssign for Matrix<T, R, C> {
	fn sub_assign(&mut self, rhs: Self) {
		for i in 0..(R * C) {
			self[i] -= rhs[i];
		}
	}
}

impl<T: Number, const R: usize, const C: usize> Sub for Matrix<T, R, C> {
	type Output = Self;

	fn sub(self, rhs: Self) -> Self::Output {
		let mut result = self;
		result -= rhs;
		result
	}
}

impl<T: SignedNumber, const R: usize, const C: usize> Neg for Matrix<T, R, C> {
	type Output = Self;

	fn neg(self) -> Self::Output {
		let mut result = Matrix::ZERO;
		for i in 0..(R * C) {
			result[i] = -self[i];
		}
		result
	}
}

impl<T: FuzzyEq, const R: usize, const C: usize> FuzzyEq for Matrix<T, R, C> {
	fn fuzzy_eq(&self, other: &Self) -> bool {
		self.as_slice().iter().zip(other.as_slice()).all(|(a, b)| a.fuzzy_eq(b))
	}
}

pub struct XY<T> {
	pub x: T,
	pub y: T,
}

pub struct XYZ<T> {
	pub x: T,
	pub y: T,
	pub z: T,
}

impl<T> std::ops::Deref for Vector2<T> {
	type Target = XY<T>;

	#[inline]
	fn deref(&self) -> &Self::Target {
		unsafe { &*(self as *const Self as *const Self::Target) }
	}
}

impl<T> std::ops::DerefMut for Vector2<T> {
	#[inline]
	fn deref_mut(&mut self) -> &mut Self::Target {
		unsafe { &mut *(self as *mut Self as *mut Self::Target) }
	}
}

impl<T> std::ops::Deref for Vector3<T> {
	type Target = XYZ<T>;

	#[inline]
	fn deref(&self) -> &Self::Target {
		unsafe { &*(self as *const Self as *const Self::Target) }
	}
}

impl<T> std::ops::DerefMut for Vector3<T> {
	#[inline]
	fn deref_mut(&mut self) -> &mut Self::Target {
		unsafe { &mut *(self as *mut Self as *mut Self::Target) }
	}
}

impl<T, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
	type Output = T;

	fn index(&self, index: usize) -> &Self::Output {
		&self.as_slice()[index]
	}
}

impl<T, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
	fn index_mut(&mut self, index: usize) -> &mut Self::Output {
		&mut self.as_mut_slice()[index]
	}
}

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
	type Output = T;

	fn index(&self, index: (usize, usize)) -> &Self::Output {
		&self.data[index.0][index.1]
	}
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
	fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
		&mut self.data[index.0][index.1]
	}
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
	pub fn as_slice(&self) -> &[T] {
		unsafe {
			std::slice::from_raw_parts(self.data.as_ptr() as *const T, R * C)
		}
	}

	pub fn as_mut_slice(&mut self) -> &mut [T] {
		unsafe {
			std::slice::from_raw_parts_mut(self.data.as_mut_ptr() as *mut T, R * C)
		}
	}
}
