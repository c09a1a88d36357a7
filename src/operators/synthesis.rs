//! Analysis and synthesis matrices.
//!
//! The synthesis matrix S maps coefficients to values, S[i,k] = T_k(x_i) =
//! cos(k θ_i). The analysis matrix A is its inverse on the same grid and is
//! written down directly from the discrete orthogonality of the cosines:
//!
//! ```text
//! 1st kind:  A[k,i] = (2/n) ε_k cos(k θ_i),             ε_0 = 1/2
//! 2nd kind:  A[k,i] = (2/(n-1)) ε_k δ_i cos(k θ_i),     ε, δ = 1/2 at both ends
//! ```
//!
//! Every angle is a rational multiple of π, so cos(k θ_i) is evaluated after
//! reducing the integer numerator. This keeps entries that should vanish
//! exactly zero and keeps the large-k rows as accurate as the small-k ones.

use std::f64::consts::PI;

use faer::Mat;

use crate::types::{PointKind, Real};

/// Synthesis matrix for 1st-kind points: n values from n coefficients.
pub fn cheb1_smat<T: Real>(n: usize) -> Mat<T> {
    synthesis_matrix(PointKind::First, n, n)
}

/// Synthesis matrix for 2nd-kind points: n values from n coefficients.
pub fn cheb2_smat<T: Real>(n: usize) -> Mat<T> {
    synthesis_matrix(PointKind::Second, n, n)
}

/// Analysis matrix for 1st-kind points: n coefficients from n values.
pub fn cheb1_amat<T: Real>(n: usize) -> Mat<T> {
    if n == 0 {
        return Mat::zeros(0, 0);
    }
    let den = 2 * n;
    let scale = T::cast(2.0) / T::from_count(n);
    Mat::from_fn(n, n, |k, i| {
        let eps = if k == 0 { T::cast(0.5) } else { T::one() };
        let m = 2 * (n - 1 - i) + 1;
        scale * eps * cos_pi_frac(k * m, den)
    })
}

/// Analysis matrix for 2nd-kind points: n coefficients from n values.
pub fn cheb2_amat<T: Real>(n: usize) -> Mat<T> {
    match n {
        0 => Mat::zeros(0, 0),
        1 => Mat::identity(1, 1),
        _ => {
            let den = n - 1;
            let scale = T::cast(2.0) / T::from_count(den);
            let end_half = |j: usize| {
                if j == 0 || j == n - 1 {
                    T::cast(0.5)
                } else {
                    T::one()
                }
            };
            Mat::from_fn(n, n, |k, i| {
                let m = n - 1 - i;
                scale * end_half(k) * end_half(i) * cos_pi_frac(k * m, den)
            })
        }
    }
}

/// Rectangular synthesis matrix: values at `n_points` points of `kind` from
/// `n_coeffs` coefficients.
pub(crate) fn synthesis_matrix<T: Real>(
    kind: PointKind,
    n_points: usize,
    n_coeffs: usize,
) -> Mat<T> {
    match kind {
        PointKind::First => {
            let den = 2 * n_points;
            Mat::from_fn(n_points, n_coeffs, |i, k| {
                cos_pi_frac(k * (2 * (n_points - 1 - i) + 1), den)
            })
        }
        PointKind::Second => {
            if n_points == 1 {
                // Single point at x = 0, T_k(0) = cos(kπ/2)
                return Mat::from_fn(1, n_coeffs, |_, k| cos_pi_frac(k, 2));
            }
            let den = n_points.saturating_sub(1);
            Mat::from_fn(n_points, n_coeffs, |i, k| {
                cos_pi_frac(k * (n_points - 1 - i), den)
            })
        }
    }
}

/// cos(num π / den) with the numerator reduced to [0, den].
///
/// Written as sin((den - 2r)π / (2 den)) so that cos(π/2) is exactly zero
/// and values at r and den - r are exact negatives.
fn cos_pi_frac<T: Real>(num: usize, den: usize) -> T {
    let period = 2 * den;
    let mut r = num % period;
    if r > den {
        r = period - r;
    }
    let arg = T::from_count(den) - T::from_count(2 * r);
    (T::cast(PI) * arg / T::from_count(2 * den)).sin()
}
