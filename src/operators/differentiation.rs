//! Differentiation matrices.
//!
//! Nodal differentiation uses the barycentric formula
//!
//! ```text
//! D_ij = (w_j / w_i) / (x_i - x_j),   i ≠ j
//! D_ii = -Σ_{j≠i} D_ij
//! ```
//!
//! and for order m > 1 the recursion (Schneider & Werner; Welfert)
//!
//! ```text
//! D^(m)_ij = m / (x_i - x_j) · ((w_j / w_i) D^(m-1)_ii - D^(m-1)_ij)
//! ```
//!
//! again with negative-row-sum diagonals. When angles t with x = cos t are
//! available, x_i - x_j is evaluated as 2 sin((t_i + t_j)/2) sin((t_j - t_i)/2),
//! which avoids the cancellation between clustered points near ±1.
//!
//! Coefficient-space differentiation applies the recurrence
//! c'_{k-1} = c'_{k+1} + 2k c_k to a Chebyshev series.

use faer::Mat;

use crate::error::{Result, check_len};
use crate::polynomial::{bary_weights, cheb_angles, cheb_barywts, cheb1_pts, cheb2_pts};
use crate::types::{PointKind, Real};

/// Barycentric differentiation matrix of order `k` on arbitrary points.
///
/// `w` defaults to [`bary_weights`] of `x`. `t`, when given, holds angles
/// with `x[i] == cos(t[i])` and is used for the point differences.
///
/// Order 0 gives the identity; a single point gives the 1×1 zero matrix.
///
/// # Errors
///
/// `DimensionMismatch` if `w` or `t` differ in length from `x`.
///
/// # Example
///
/// ```
/// use pde_suite::operators::bary_diffmat;
///
/// let x = [-1.0_f64, 0.0, 1.0];
/// let d = bary_diffmat(&x, None, 1, None).unwrap();
/// // Centered difference in the middle row
/// assert!((d[(1, 0)] + 0.5).abs() < 1e-15);
/// assert!(d[(1, 1)].abs() < 1e-15);
/// assert!((d[(1, 2)] - 0.5).abs() < 1e-15);
/// ```
pub fn bary_diffmat<T: Real>(
    x: &[T],
    w: Option<&[T]>,
    k: usize,
    t: Option<&[T]>,
) -> Result<Mat<T>> {
    if let Some(w) = w {
        check_len(x.len(), w.len())?;
    }
    if let Some(t) = t {
        check_len(x.len(), t.len())?;
    }

    Ok(match w {
        Some(w) => bary_diffmat_unchecked(x, w, k, t),
        None => bary_diffmat_unchecked(x, &bary_weights(x), k, t),
    })
}

/// [`bary_diffmat`] for inputs whose lengths are already known to agree.
pub(crate) fn bary_diffmat_unchecked<T: Real>(
    x: &[T],
    w: &[T],
    k: usize,
    t: Option<&[T]>,
) -> Mat<T> {
    let n = x.len();
    if n == 0 {
        return Mat::zeros(0, 0);
    }
    if k == 0 {
        return Mat::identity(n, n);
    }
    if n == 1 {
        return Mat::zeros(1, 1);
    }

    let two = T::cast(2.0);
    let half = T::cast(0.5);
    let diff = |i: usize, j: usize| match t {
        Some(t) => two * ((t[i] + t[j]) * half).sin() * ((t[j] - t[i]) * half).sin(),
        None => x[i] - x[j],
    };

    // Reciprocal differences and weight ratios, zero on the diagonal
    let dxi = Mat::from_fn(n, n, |i, j| {
        if i == j { T::zero() } else { diff(i, j).recip() }
    });
    let dw = Mat::from_fn(n, n, |i, j| if i == j { T::zero() } else { w[j] / w[i] });

    let mut d = Mat::from_fn(n, n, |i, j| dw[(i, j)] * dxi[(i, j)]);
    set_negative_row_sum_diagonal(&mut d);

    for m in 2..=k {
        let order = T::from_count(m);
        let prev = d;
        d = Mat::from_fn(n, n, |i, j| {
            if i == j {
                T::zero()
            } else {
                order * dxi[(i, j)] * (dw[(i, j)] * prev[(i, i)] - prev[(i, j)])
            }
        });
        set_negative_row_sum_diagonal(&mut d);
    }

    d
}

fn set_negative_row_sum_diagonal<T: Real>(d: &mut Mat<T>) {
    for i in 0..d.nrows() {
        let mut sum = T::zero();
        for j in 0..d.ncols() {
            if j != i {
                sum = sum + d[(i, j)];
            }
        }
        d[(i, i)] = -sum;
    }
}

/// Differentiation matrix of order `k` on n 1st-kind points.
pub fn cheb1_diffmat<T: Real>(n: usize, k: usize) -> Mat<T> {
    chebyshev_diffmat(PointKind::First, n, k)
}

/// Differentiation matrix of order `k` on n 2nd-kind points.
pub fn cheb2_diffmat<T: Real>(n: usize, k: usize) -> Mat<T> {
    chebyshev_diffmat(PointKind::Second, n, k)
}

fn chebyshev_diffmat<T: Real>(kind: PointKind, n: usize, k: usize) -> Mat<T> {
    let x = match kind {
        PointKind::First => cheb1_pts(n),
        PointKind::Second => cheb2_pts(n),
    };
    let w = cheb_barywts(kind, n);
    let t = cheb_angles(kind, n);
    bary_diffmat_unchecked(&x, &w, k, Some(t.as_slice()))
}

/// Differentiate a Chebyshev series `k` times.
///
/// The output keeps the input length; the top `min(k, n)` coefficients are
/// zero.
pub fn cheb_coeffs_diff<T: Real>(c: &[T], k: usize) -> Vec<T> {
    let mut out = c.to_vec();
    let mut scratch = vec![T::zero(); c.len()];
    for _ in 0..k {
        differentiate_once(&out, &mut scratch);
        std::mem::swap(&mut out, &mut scratch);
    }
    out
}

fn differentiate_once<T: Real>(c: &[T], d: &mut [T]) {
    let n = c.len();
    if n == 0 {
        return;
    }
    d[n - 1] = T::zero();
    if n == 1 {
        return;
    }
    d[n - 2] = T::from_count(2 * (n - 1)) * c[n - 1];
    for j in (0..n.saturating_sub(2)).rev() {
        d[j] = d[j + 2] + T::from_count(2 * (j + 1)) * c[j + 1];
    }
    d[0] = d[0] * T::cast(0.5);
}

/// Matrix of first-order differentiation in coefficient space, n×n.
///
/// D[k,j] = 2j for j > k with j - k odd, and row 0 is halved.
pub fn cheb_coeffs_diffmat<T: Real>(n: usize) -> Mat<T> {
    Mat::from_fn(n, n, |k, j| {
        if j > k && (j - k) % 2 == 1 {
            if k == 0 { T::from_count(j) } else { T::from_count(2 * j) }
        } else {
            T::zero()
        }
    })
}
