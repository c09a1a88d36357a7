//! Uniform grids for finite-difference stencils.

use std::mem;


use crate::error::{Result, SpectralError};
use crate::types::Real;

/// Uniform grid from `lo` to `hi` with spacing `dx`.
///
/// n = round((hi - lo) / dx) + 1 points, x_i = lo + i·dx. When `hi` lies on
/// the grid up to rounding, the last point is set to `hi` exactly.
///
/// # Errors
///
/// `InvalidDimension` for non-finite arguments, `dx ≤ 0`, `hi < lo`, or a
/// point count too large to allocate.
///
/// # Example
///
/// ```
/// use pde_suite::finite_difference::fdm_grid;
///
/// let x = fdm_grid(0.0, 1.0, 0.1).unwrap();
/// assert_eq!(x.len(), 11);
/// assert_eq!(x[0], 0.0);
/// assert_eq!(x[10], 1.0);
/// ```
pub fn fdm_grid<T: Real>(lo: T, hi: T, dx: T) -> Result<Vec<T>> {
    if !lo.is_finite() || !hi.is_finite() || !dx.is_finite() {
        return Err(SpectralError::InvalidDimension(format!(
            "grid bounds and spacing must be finite, got [{}, {}] with dx = {}",
            lo, hi, dx
        )));
    }
    if dx <= T::zero() {
        return Err(SpectralError::InvalidDimension(format!(
            "grid spacing must be positive, got {}",
            dx
        )));
    }
    if hi < lo {
        return Err(SpectralError::InvalidDimension(format!(
            "grid upper bound {} is below lower bound {}",
            hi, lo
        )));
    }

    let steps = (hi - lo) / dx;
    let intervals = steps.round();
    let max_points = isize::MAX as usize / mem::size_of::<T>();
    let n = intervals
        .to_usize()
        .and_then(|m| m.checked_add(1))
        .filter(|&n| n <= max_points)
        .ok_or_else(|| {
            SpectralError::InvalidDimension(format!(
                "grid [{}, {}] with dx = {} needs {} intervals, too many to allocate",
                lo, hi, dx, steps
            ))
        })?;

    let mut x: Vec<T> = (0..n).map(|i| lo + T::from_count(i) * dx).collect();
    if (steps - intervals).abs() <= T::cast(64.0) * T::epsilon() * intervals.max(T::one()) {
        x[n - 1] = hi;
    }
    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing() {
        let x = fdm_grid(-1.0_f64, 1.0, 0.25).unwrap();
        assert_eq!(x.len(), 9);
        for i in 1..x.len() {
            assert!((x[i] - x[i - 1] - 0.25).abs() < 1e-15);
        }
        assert_eq!(x[8], 1.0);
    }

    #[test]
    fn test_endpoint_snapped() {
        // 0.1 is not exact in binary; the last point still equals hi
        let x = fdm_grid(0.0, 0.7, 0.1).unwrap();
        assert_eq!(x.len(), 8);
        assert_eq!(x[7], 0.7);
    }

    #[test]
    fn test_off_grid_upper_bound() {
        // 1.05 / 0.5 rounds to 2 intervals; hi is not on the grid
        let x = fdm_grid(0.0, 1.05, 0.5).unwrap();
        assert_eq!(x, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_single_point() {
        assert_eq!(fdm_grid(2.0, 2.0, 0.1).unwrap(), vec![2.0]);
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(fdm_grid(0.0, 1.0, 0.0).is_err());
        assert!(fdm_grid(0.0, 1.0, -0.1).is_err());
        assert!(fdm_grid(1.0, 0.0, 0.1).is_err());
        assert!(fdm_grid(0.0, f64::INFINITY, 0.1).is_err());
        assert!(fdm_grid(f64::NAN, 1.0, 0.1).is_err());
    }

    #[test]
    fn test_rejects_unallocatable_point_count() {
        assert!(matches!(
            fdm_grid(0.0, 1.0, 1e-300),
            Err(SpectralError::InvalidDimension(_))
        ));
        assert!(matches!(
            fdm_grid(-f64::MAX, f64::MAX, 1.0),
            Err(SpectralError::InvalidDimension(_))
        ));
        assert!(matches!(
            fdm_grid(0.0f32, 1.0, 1e-30),
            Err(SpectralError::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_single_precision() {
        let x = fdm_grid(0.0f32, 0.7, 0.1).unwrap();
        assert_eq!(x.len(), 8);
        assert_eq!(x[7], 0.7f32);
        assert!((x[3] - 0.3).abs() < 1e-6);
    }
}
