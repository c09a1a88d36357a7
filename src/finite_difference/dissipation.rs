//! Kreiss–Oliger artificial dissipation stencils.
//!
//! A scheme of accuracy order 2r-2 is paired with dissipation of order 2r,
//! whose stencil is the scaled 2r-th undivided difference
//!
//! ```text
//! w_k = (-1)^(r+1+k) C(2r, k) / 2^(2r),   k = 0, ..., 2r
//! ```
//!
//! The sign makes the operator damping when added to the right-hand side.

use crate::error::{Result, SpectralError};
use crate::types::Real;

/// Dissipation order 2r for a scheme of accuracy order `acc_order`.
///
/// The smallest even 2r with 2r - 2 ≥ `acc_order`.
///
/// # Errors
///
/// `InvalidDimension` for `acc_order == 0`.
pub fn dissipation_order(acc_order: usize) -> Result<usize> {
    if acc_order == 0 {
        return Err(SpectralError::InvalidDimension(
            "accuracy order must be at least 1".to_string(),
        ));
    }
    Ok(if acc_order % 2 == 0 {
        acc_order + 2
    } else {
        acc_order + 3
    })
}

/// Stencil weights for dissipation of order `diss_order` (length `diss_order + 1`).
///
/// # Errors
///
/// `InvalidDimension` if `diss_order` is zero or odd.
///
/// # Example
///
/// ```
/// use pde_suite::finite_difference::dissipation_wts;
///
/// let w = dissipation_wts::<f64>(4).unwrap();
/// assert_eq!(w, vec![-1.0 / 16.0, 0.25, -0.375, 0.25, -1.0 / 16.0]);
/// ```
pub fn dissipation_wts<T: Real>(diss_order: usize) -> Result<Vec<T>> {
    if diss_order == 0 || diss_order % 2 == 1 {
        return Err(SpectralError::InvalidDimension(format!(
            "dissipation order must be even and positive, got {}",
            diss_order
        )));
    }

    let r = diss_order / 2;
    let scale = T::cast(0.5).powi(diss_order as i32);
    let mut binomial = T::one();
    let mut w = Vec::with_capacity(diss_order + 1);
    for k in 0..=diss_order {
        if k > 0 {
            binomial = binomial * T::from_count(diss_order + 1 - k) / T::from_count(k);
        }
        let sign = if (r + 1 + k) % 2 == 0 { T::one() } else { -T::one() };
        w.push(sign * binomial * scale);
    }
    Ok(w)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dissipation_order() {
        assert_eq!(dissipation_order(1), Ok(4));
        assert_eq!(dissipation_order(2), Ok(4));
        assert_eq!(dissipation_order(3), Ok(6));
        assert_eq!(dissipation_order(4), Ok(6));
        assert_eq!(dissipation_order(6), Ok(8));
        assert!(dissipation_order(0).is_err());
    }

    #[test]
    fn test_order_two_stencil() {
        assert_eq!(dissipation_wts::<f64>(2).unwrap(), vec![0.25, -0.5, 0.25]);
        assert_eq!(dissipation_wts::<f32>(2).unwrap(), vec![0.25, -0.5, 0.25]);
    }

    #[test]
    fn test_weights_symmetric_and_balanced() {
        for r in 1..=6 {
            let w = dissipation_wts::<f64>(2 * r).unwrap();
            assert_eq!(w.len(), 2 * r + 1);
            let sum: f64 = w.iter().sum();
            assert!(sum.abs() < 1e-15);
            for k in 0..w.len() {
                assert_eq!(w[k], w[w.len() - 1 - k]);
            }
            assert!(w[r] < 0.0, "centre weight must damp");
        }
    }

    #[test]
    fn test_invalid_orders() {
        assert!(matches!(
            dissipation_wts::<f64>(0),
            Err(SpectralError::InvalidDimension(_))
        ));
        assert!(matches!(
            dissipation_wts::<f64>(3),
            Err(SpectralError::InvalidDimension(_))
        ));
    }
}
