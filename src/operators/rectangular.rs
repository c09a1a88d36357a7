//! Rectangular differentiation and integration matrices.
//!
//! These are composed in coefficient space: analysis on the source grid,
//! differentiation or integration of the series, synthesis on the target
//! grid. The target of the differentiation matrices is always an m-point
//! grid of the 1st kind, so the result can be evaluated where no endpoint
//! values are stored.

use faer::Mat;

use crate::calculus::cheb_coeffs_cumsummat;
use crate::types::{Interval, PointKind, Real};

use super::differentiation::cheb_coeffs_diffmat;
use super::synthesis::{cheb1_amat, cheb2_amat, synthesis_matrix};

/// m×n matrix: values on n 1st-kind points → first derivative on m
/// 1st-kind points.
pub fn cheb_rectdiff1<T: Real>(m: usize, n: usize) -> Mat<T> {
    if m == 0 || n == 0 {
        return Mat::zeros(m, n);
    }
    let s = synthesis_matrix::<T>(PointKind::First, m, n);
    &(&s * &cheb_coeffs_diffmat::<T>(n)) * &cheb1_amat::<T>(n)
}

/// m×n matrix: values on n 2nd-kind points → first derivative on m
/// 1st-kind points.
///
/// # Example
///
/// ```
/// use pde_suite::operators::cheb_rectdiff2;
/// use pde_suite::polynomial::{cheb1_pts, cheb2_pts};
///
/// let d = cheb_rectdiff2::<f64>(4, 5);
/// let f: Vec<f64> = cheb2_pts::<f64>(5).iter().map(|&x| x * x).collect();
/// for (i, &y) in cheb1_pts::<f64>(4).iter().enumerate() {
///     let df: f64 = (0..5).map(|j| d[(i, j)] * f[j]).sum();
///     assert!((df - 2.0 * y).abs() < 1e-13);
/// }
/// ```
pub fn cheb_rectdiff2<T: Real>(m: usize, n: usize) -> Mat<T> {
    if m == 0 || n == 0 {
        return Mat::zeros(m, n);
    }
    let s = synthesis_matrix::<T>(PointKind::First, m, n);
    &(&s * &cheb_coeffs_diffmat::<T>(n)) * &cheb2_amat::<T>(n)
}

/// n×n indefinite integration matrix on 2nd-kind points.
///
/// Row i holds the weights of ∫_{-1}^{x_i} f(s) ds, so the first row is zero.
pub fn cheb_rectint<T: Real>(n: usize) -> Mat<T> {
    if n == 0 {
        return Mat::zeros(0, 0);
    }
    let s = synthesis_matrix::<T>(PointKind::Second, n, n + 1);
    &(&s * &cheb_coeffs_cumsummat::<T>(n)) * &cheb2_amat::<T>(n)
}

/// [`cheb_rectint`] on n 2nd-kind points of `interval`: ∫_lo^{x_i} f(s) ds.
pub fn cheb_rectint_mapped<T: Real>(n: usize, interval: Interval<T>) -> Mat<T> {
    let mut q = cheb_rectint::<T>(n);
    let scale = interval.half_width();
    for j in 0..q.ncols() {
        for i in 0..q.nrows() {
            q[(i, j)] = q[(i, j)] * scale;
        }
    }
    q
}
