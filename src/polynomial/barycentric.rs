//! Barycentric weights and barycentric interpolation.
//!
//! The second (true) barycentric formula
//!
//! ```text
//! p(x) = Σ_j [w_j / (x - x_j)] f_j / Σ_j [w_j / (x - x_j)]
//! ```
//!
//! is invariant under a common scaling of the weights, so the Chebyshev
//! weights below drop the constant factor and keep only the sign pattern and
//! the endpoint (2nd kind) or sin θ (1st kind) correction.
//!
//! References: Berrut & Trefethen, SIAM Review 46 (2004); Salzer (1972).

use crate::error::{Result, SpectralError, check_len};
use crate::types::{PointKind, Real};

use super::points::cheb1_angles;

/// Barycentric weights for Chebyshev points of the 1st kind.
///
/// w_j = (-1)^j sin θ_j, listed in the ascending point order.
pub fn cheb1_barywts<T: Real>(n: usize) -> Vec<T> {
    match n {
        0 => Vec::new(),
        1 => vec![T::one()],
        _ => cheb1_angles::<T>(n)
            .iter()
            .enumerate()
            .map(|(i, &t)| alternating_sign::<T>(n - 1 - i) * t.sin())
            .collect(),
    }
}

/// Barycentric weights for Chebyshev points of the 2nd kind.
///
/// w_j = (-1)^j with the first and last weight halved.
pub fn cheb2_barywts<T: Real>(n: usize) -> Vec<T> {
    match n {
        0 => Vec::new(),
        1 => vec![T::one()],
        _ => {
            let half = T::cast(0.5);
            let mut w: Vec<T> = (0..n).map(|i| alternating_sign(n - 1 - i)).collect();
            w[0] = w[0] * half;
            w[n - 1] = w[n - 1] * half;
            w
        }
    }
}

/// Barycentric weights for either point kind.
pub fn cheb_barywts<T: Real>(kind: PointKind, n: usize) -> Vec<T> {
    match kind {
        PointKind::First => cheb1_barywts(n),
        PointKind::Second => cheb2_barywts(n),
    }
}

/// Barycentric weights for arbitrary distinct points.
///
/// w_j = 1 / Π_{k≠j} (x_j - x_k), rescaled so that max |w_j| = 1.
pub fn bary_weights<T: Real>(x: &[T]) -> Vec<T> {
    let n = x.len();
    if n == 0 {
        return Vec::new();
    }

    // Accumulate log-magnitudes to avoid overflow for large n
    let mut log_mag = vec![T::zero(); n];
    let mut sign = vec![T::one(); n];
    for j in 0..n {
        for k in 0..n {
            if k != j {
                let d = x[j] - x[k];
                log_mag[j] = log_mag[j] - d.abs().ln();
                if d < T::zero() {
                    sign[j] = -sign[j];
                }
            }
        }
    }

    let max_log = log_mag
        .iter()
        .fold(T::neg_infinity(), |acc, &l| acc.max(l));
    log_mag
        .iter()
        .zip(sign.iter())
        .map(|(&l, &s)| s * (l - max_log).exp())
        .collect()
}

/// Evaluate the barycentric interpolant through (x_j, f_j) at `x0`.
///
/// If `x0` coincides exactly with a node the stored value is returned, which
/// removes the 0/0 form of the quotient.
///
/// # Errors
///
/// - `InvalidDimension` if there are no nodes.
/// - `DimensionMismatch` if `w`, `x` and `f` differ in length.
pub fn bary<T: Real>(w: &[T], x: &[T], f: &[T], x0: T) -> Result<T> {
    if x.is_empty() {
        return Err(SpectralError::InvalidDimension(
            "barycentric interpolation needs at least one node".into(),
        ));
    }
    check_len(x.len(), w.len())?;
    check_len(x.len(), f.len())?;

    let mut num = T::zero();
    let mut den = T::zero();
    for j in 0..x.len() {
        let diff = x0 - x[j];
        if diff == T::zero() {
            return Ok(f[j]);
        }
        let t = w[j] / diff;
        num = num + t * f[j];
        den = den + t;
    }

    Ok(num / den)
}

#[inline]
fn alternating_sign<T: Real>(k: usize) -> T {
    if k % 2 == 0 { T::one() } else { -T::one() }
}
