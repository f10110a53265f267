use core::ops::{Mul, Add, Sub, Div, Rem, Neg};
use core::ops::{MulAssign, AddAssign, SubAssign, DivAssign, RemAssign};
use core::cmp::{PartialEq, PartialOrd};
use super::FuzzyEq;

/// Forward a method to an inherent method or a base trait method.
macro_rules! forward {
	($( Self :: $method:ident ( self $( , $arg:ident : $ty:ty )* ) -> $ret:ty ; )*) => {$(
		#[inline]
		fn $method(self $( , $arg : $ty )* ) -> $ret {
			Self::$method(self $( , $arg )* )
		}
	)*};
}

pub trait Cast<T: Number> where Self: Sized {
	fn from_f64(v: f64) -> Self;
	fn as_f64(&self) -> f64;
}

pub trait NumOps<Rhs = Self, Output = Self>:
	Add<Rhs, Output = Output> +
	Sub<Rhs, Output = Output> +
	Mul<Rhs, Output = Output> +
	Div<Rhs, Output = Output> +
	Rem<Rhs, Output = Output>
{}

impl<T, Rhs, Output> NumOps<Rhs, Output> for T where T:
	Add<Rhs, Output = Output> +
	Sub<Rhs, Output = Output> +
	Mul<Rhs, Output = Output> +
	Div<Rhs, Output = Output> +
	Rem<Rhs, Output = Output>
{}

pub trait NumAssignOps<Rhs = Self>:
	AddAssign<Rhs> +
	SubAssign<Rhs> +
	MulAssign<Rhs> +
	DivAssign<Rhs> +
	RemAssign<Rhs>
{}

impl<T, Rhs> NumAssignOps<Rhs> for T where T:
	AddAssign<Rhs> +
	SubAssign<Rhs> +
	MulAssign<Rhs> +
	DivAssign<Rhs> +
	RemAssign<Rhs>
{}

pub trait Base<T: Number>: Copy + NumOps<T, T> + NumAssignOps<T> where Self: Sized {
	const ZERO: Self;
	const ONE: Self;
	const TWO: Self;
}

pub trait Number: Base<Self> + Cast<Self> + Default + PartialEq + PartialOrd + core::fmt::Debug {}

pub trait SignedNumber: Number + Neg<Output=Self> {
	const MINUS_ONE: Self;
}

pub trait Float: SignedNumber + FuzzyEq {
	/// Tolerance used by fuzzy comparisons, see [`crate::FuzzyEq`].
	const FUZZY_EPSILON: Self;

	const NAN: Self;
	const PI: Self;
}

pub trait FloatOps<T: Float>: where Self: Sized {
	fn abs(self) -> Self;
	fn atan2(self, x: Self) -> Self;
	fn sin_cos(self) -> (Self, Self);
	fn sqrt(self) -> Self;
}

macro_rules! float_impl {
	($t:ident, $fuzzy_epsilon:literal) => {
		impl Base<$t> for $t {
			const ZERO: Self = 0.0;
			const ONE: Self = 1.0;
			const TWO: Self = 2.0;
		}

		impl Number for $t {}

		impl Cast<$t> for $t {
			fn from_f64(v: f64) -> Self {
				v as Self
			}

			fn as_f64(&self) -> f64 {
				*self as f64
			}
		}

		impl SignedNumber for $t {
			const MINUS_ONE: Self = -1.0;
		}

		impl Float for $t {
			const FUZZY_EPSILON: Self = $fuzzy_epsilon;
			const NAN: Self = $t::NAN;
			const PI: Self = core::$t::consts::PI;
		}

		impl FloatOps<$t> for $t {
			forward! {
				Self::abs(self) -> Self;
				Self::atan2(self, x: Self) -> Self;
				Self::sin_cos(self) -> (Self, Self);
				Self::sqrt(self) -> Self;
			}
		}
	}
}

float_impl!(f32, 1.0e-5);
float_impl!(f64, 1.0e-14);
