use rand::Rng;

use super::num::{Cast, Float, FloatOps};
use super::{Complex, DualComplex, UnitComplex};

/// Uniformly sample a rotation.
pub fn rotation<T: Float + FloatOps<T>, R: Rng + ?Sized>(rng: &mut R) -> UnitComplex<T> {
	let turns = T::from_f64(rng.random_range(-1.0..=1.0));
	UnitComplex::from_angle(turns * T::PI)
}

/// Sample a rigid motion with a uniform rotation and a translation uniform in `[-extent, extent]²`.
pub fn rigid_motion<T: Float + FloatOps<T>, R: Rng + ?Sized>(rng: &mut R, extent: T) -> DualComplex<T> {
	let extent = extent.abs().as_f64();
	let x = T::from_f64(rng.random_range(-extent..=extent));
	let y = T::from_f64(rng.random_range(-extent..=extent));

	DualComplex::from_parts(*rotation(rng), Complex::new(x, y))
}
