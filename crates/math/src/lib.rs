#[macro_use]
mod fuzzy;

pub mod isometry;
pub mod matrix;
pub mod num;
pub mod sample;

mod complex;
mod dual;
mod dual_complex;
mod error;
mod unit;

#[cfg(test)]
mod test_log;

pub use complex::{Complex, UnitComplex};
pub use dual::Dual;
pub use dual_complex::DualComplex;
pub use error::Error;
pub use fuzzy::FuzzyEq;
pub use isometry::{Isometry, Isometry2};
pub use matrix::{Matrix, Matrix3, Vector, Vector2, Vector3};
pub use unit::Unit;

pub type Vec2 = Vector2<f32>;
pub type Vec3 = Vector3<f32>;

pub type Mat3 = Matrix3<f32>;
