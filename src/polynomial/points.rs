//! Chebyshev points of the 1st and 2nd kind.
//!
//! Points are returned in ascending order on [-1, 1]. The matching angles
//! satisfy `points[i] = cos(angles[i])`, so the angles run from close to π
//! down to close to 0.
//!
//! - 1st kind: roots of T_n, θ_k = (2k+1)π/(2n). Never includes ±1.
//! - 2nd kind: extrema of T_{n-1}, θ_k = kπ/(n-1). Includes both endpoints.
//!
//! Points are computed with the sine form x = sin(π(2i - m)/(2m')) so the
//! set is exactly antisymmetric about the origin.

use std::f64::consts::PI;

use crate::types::{Interval, PointKind, Real};

/// Angles θ for Chebyshev points of the 1st kind.
///
/// θ_k = (2k + 1)π / (2n) for k = n-1, ..., 0.
pub fn cheb1_angles<T: Real>(n: usize) -> Vec<T> {
    let pi = T::cast(PI);
    let denom = T::from_count(2 * n);
    (0..n)
        .map(|i| T::from_count(2 * (n - 1 - i) + 1) * pi / denom)
        .collect()
}

/// Angles θ for Chebyshev points of the 2nd kind.
///
/// θ_k = kπ / (n - 1) for k = n-1, ..., 0. A single point sits at θ = π/2.
pub fn cheb2_angles<T: Real>(n: usize) -> Vec<T> {
    let pi = T::cast(PI);
    match n {
        0 => Vec::new(),
        1 => vec![T::cast(0.5) * pi],
        _ => {
            let m = T::from_count(n - 1);
            (0..n).map(|i| T::from_count(n - 1 - i) * pi / m).collect()
        }
    }
}

/// Chebyshev points of the 1st kind on [-1, 1].
///
/// x_k = -cos((2k + 1)π / (2n)), k = 0, ..., n-1.
///
/// # Example
///
/// ```
/// use pde_suite::cheb1_pts;
///
/// let x = cheb1_pts::<f64>(2);
/// assert!((x[1] - 0.5_f64.sqrt()).abs() < 1e-15);
/// ```
pub fn cheb1_pts<T: Real>(n: usize) -> Vec<T> {
    let pi = T::cast(PI);
    let denom = T::from_count(2 * n);
    (0..n)
        .map(|i| {
            let num = T::from_count(2 * i + 1) - T::from_count(n);
            (pi * num / denom).sin()
        })
        .collect()
}

/// Chebyshev points of the 2nd kind on [-1, 1].
///
/// x_k = -cos(kπ / (n - 1)), k = 0, ..., n-1. For n = 1 the single point is 0.
pub fn cheb2_pts<T: Real>(n: usize) -> Vec<T> {
    let pi = T::cast(PI);
    match n {
        0 => Vec::new(),
        1 => vec![T::zero()],
        _ => {
            let m = T::from_count(n - 1);
            let denom = T::from_count(2 * (n - 1));
            (0..n)
                .map(|i| {
                    let num = T::from_count(2 * i) - m;
                    (pi * num / denom).sin()
                })
                .collect()
        }
    }
}

/// Chebyshev points of the 1st kind mapped onto `interval`.
pub fn cheb1_pts_mapped<T: Real>(n: usize, interval: Interval<T>) -> Vec<T> {
    map_points(cheb1_pts(n), interval)
}

/// Chebyshev points of the 2nd kind mapped onto `interval`.
///
/// Both endpoints of the interval are reproduced exactly.
pub fn cheb2_pts_mapped<T: Real>(n: usize, interval: Interval<T>) -> Vec<T> {
    let mut x = map_points(cheb2_pts(n), interval);
    if n >= 2 {
        x[0] = interval.lo;
        x[n - 1] = interval.hi;
    }
    x
}

/// Angles for either point kind.
pub fn cheb_angles<T: Real>(kind: PointKind, n: usize) -> Vec<T> {
    match kind {
        PointKind::First => cheb1_angles(n),
        PointKind::Second => cheb2_angles(n),
    }
}

/// Points of either kind on `interval`.
pub fn cheb_pts<T: Real>(kind: PointKind, n: usize, interval: Interval<T>) -> Vec<T> {
    match kind {
        PointKind::First => cheb1_pts_mapped(n, interval),
        PointKind::Second => cheb2_pts_mapped(n, interval),
    }
}

fn map_points<T: Real>(mut x: Vec<T>, interval: Interval<T>) -> Vec<T> {
    if !interval.is_canonical() {
        for xi in x.iter_mut() {
            *xi = interval.to_interval(*xi);
        }
    }
    x
}
