use std::fmt;

/// Errors reported by operations that have preconditions on their input.
#[derive(Clone, Copy, PartialEq)]
pub enum Error {
	/// A rotation part was expected to have unit length.
	NotNormalized {
		/// The squared length that was found instead.
		length_sq: f64,
	},
	/// A matrix does not represent a rotation followed by a translation.
	NotRigid,
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Error::NotNormalized { length_sq } => write!(f, "rotation part must be normalized, got squared length {}", length_sq),
			Error::NotRigid => write!(f, "matrix is not a rigid transformation"),
		}
	}
}

impl fmt::Debug for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self)
	}
}

impl std::error::Error for Error {}
