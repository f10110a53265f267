use super::num::Float;

/// Equality with an absolute and relative tolerance.
///
/// Floating point results of this crate are never compared exactly. Two scalars
/// `a` and `b` are fuzzy-equal when:
/// * they are exactly equal, or
/// * either of them is zero, or their difference is below [`Float::FUZZY_EPSILON`],
///   and the absolute difference is below the epsilon, or
/// * the difference relative to `|a| + |b|` is below the epsilon.
///
/// NaN is never fuzzy-equal to anything, not even to itself.
pub trait FuzzyEq<Rhs: ?Sized = Self> {
	fn fuzzy_eq(&self, other: &Rhs) -> bool;

	fn fuzzy_ne(&self, other: &Rhs) -> bool {
		!self.fuzzy_eq(other)
	}
}

macro_rules! fuzzy_float_impl {
	($t:ident) => {
		impl FuzzyEq for $t {
			fn fuzzy_eq(&self, other: &Self) -> bool {
				let (a, b) = (*self, *other);

				if a == b {
					return true;
				}

				let epsilon = <$t as Float>::FUZZY_EPSILON;
				let difference = (a - b).abs();

				if a == 0.0 || b == 0.0 || difference < epsilon {
					return difference < epsilon;
				}

				difference / (a.abs() + b.abs()) < epsilon
			}
		}
	}
}

fuzzy_float_impl!(f32);
fuzzy_float_impl!(f64);

/// Asserts that two values are fuzzy-equal, see [`FuzzyEq`].
#[macro_export]
macro_rules! assert_fuzzy_eq {
	($left:expr, $right:expr $(,)?) => {
		match (&$left, &$right) {
			(left, right) => {
				if !$crate::FuzzyEq::fuzzy_eq(left, right) {
					panic!("assertion `left ≈ right` failed\n  left: {:?}\n right: {:?}", left, right);
				}
			}
		}
	};
	($left:expr, $right:expr, $($arg:tt)+) => {
		match (&$left, &$right) {
			(left, right) => {
				if !$crate::FuzzyEq::fuzzy_eq(left, right) {
					panic!("assertion `left ≈ right` failed: {}\n  left: {:?}\n right: {:?}", format_args!($($arg)+), left, right);
				}
			}
		}
	};
}
