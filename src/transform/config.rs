//! Configuration for the coefficient/value transforms.

use crate::types::Real;

/// Settings shared by the four transform operators.
///
/// `symmetry_tol` is relative: an entry counts as zero when its magnitude is
/// at most `symmetry_tol * max_k |v_k|` over the vector being classified.
/// The default is the machine epsilon of `T`.
///
/// # Example
///
/// ```
/// use pde_suite::transform::{Cheb2Vals2CoeffsOp, TransformConfig};
///
/// // Only treat exact zeros as symmetric structure
/// let config = TransformConfig::<f64>::default().with_symmetry_tol(0.0);
/// let op = Cheb2Vals2CoeffsOp::with_config(8, config);
/// assert_eq!(op.size(), 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformConfig<T = f64> {
    /// Relative tolerance of the even/odd parity classifier
    pub symmetry_tol: T,
}

impl<T: Real> TransformConfig<T> {
    /// Configuration with the default parity tolerance.
    pub fn new() -> Self {
        Self {
            symmetry_tol: T::epsilon(),
        }
    }

    /// Set the parity tolerance. Negative and NaN values are treated as 0.
    pub fn with_symmetry_tol(mut self, tol: T) -> Self {
        self.symmetry_tol = if tol > T::zero() { tol } else { T::zero() };
        self
    }
}

impl<T: Real> Default for TransformConfig<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tolerance() {
        assert_eq!(TransformConfig::<f64>::default().symmetry_tol, f64::EPSILON);
        assert_eq!(TransformConfig::<f32>::default().symmetry_tol, f32::EPSILON);
    }

    #[test]
    fn test_tolerance_clamped() {
        let config = TransformConfig::<f64>::new();
        assert_eq!(config.with_symmetry_tol(-1.0).symmetry_tol, 0.0);
        assert_eq!(config.with_symmetry_tol(f64::NAN).symmetry_tol, 0.0);
        assert_eq!(config.with_symmetry_tol(1e-10).symmetry_tol, 1e-10);
    }
}
