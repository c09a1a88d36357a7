//! Clenshaw–Curtis and Fejér quadrature weights by Waldvogel's method.
//!
//! The exact moments ∫_{-1}^{1} T_k(x) dx = 2/(1-k²) (k even, zero otherwise)
//! are laid out as the spectrum of an even sequence and a single inverse FFT
//! turns them into point weights.
//!
//! Reference: J. Waldvogel, "Fast construction of the Fejér and
//! Clenshaw–Curtis quadrature rules", BIT 46 (2006).

use std::f64::consts::PI;

use rustfft::num_complex::Complex;

use crate::transform::FftPlan;
use crate::types::{PointKind, Real};

/// Fejér (1st rule) weights for n 1st-kind points.
///
/// ```
/// use pde_suite::calculus::cheb1_quadwts;
///
/// let w = cheb1_quadwts::<f64>(4);
/// let total: f64 = w.iter().sum();
/// assert!((total - 2.0).abs() < 1e-14);
/// ```
pub fn cheb1_quadwts<T: Real>(n: usize) -> Vec<T> {
    match n {
        0 => return Vec::new(),
        1 => return vec![T::cast(2.0)],
        _ => {}
    }

    let moments = even_moments::<T>(n);
    let mut spectrum: Vec<Complex<T>> = moments
        .iter()
        .map(|&m| Complex::new(m, T::zero()))
        .collect();
    if n % 2 == 0 {
        spectrum.push(Complex::new(T::zero(), T::zero()));
        for k in (1..n / 2).rev() {
            spectrum.push(Complex::new(-moments[k], T::zero()));
        }
    } else {
        for k in (1..=(n - 1) / 2).rev() {
            spectrum.push(Complex::new(-moments[k], T::zero()));
        }
    }
    debug_assert_eq!(spectrum.len(), n);

    // Half-sample shift
    for (k, s) in spectrum.iter_mut().enumerate() {
        *s *= Complex::from_polar(T::one(), T::cast(PI * k as f64 / n as f64));
    }

    FftPlan::<T>::inverse(n).process(&mut spectrum);

    let scale = T::from_count(n).recip();
    spectrum.iter().map(|z| scale * z.re).collect()
}

/// Clenshaw–Curtis weights for n 2nd-kind points.
///
/// ```
/// use pde_suite::calculus::cheb2_quadwts;
///
/// // n = 3: Simpson's rule on [-1, 1]
/// let w = cheb2_quadwts::<f64>(3);
/// assert!((w[0] - 1.0 / 3.0).abs() < 1e-15);
/// assert!((w[1] - 4.0 / 3.0).abs() < 1e-15);
/// assert!((w[2] - 1.0 / 3.0).abs() < 1e-15);
/// ```
pub fn cheb2_quadwts<T: Real>(n: usize) -> Vec<T> {
    match n {
        0 => return Vec::new(),
        1 => return vec![T::cast(2.0)],
        _ => {}
    }

    let len = n - 1;
    let moments = even_moments::<T>(n);
    let mut spectrum: Vec<Complex<T>> = moments
        .iter()
        .map(|&m| Complex::new(m, T::zero()))
        .collect();
    for k in (1..n / 2).rev() {
        spectrum.push(Complex::new(moments[k], T::zero()));
    }
    debug_assert_eq!(spectrum.len(), len);

    FftPlan::<T>::inverse(len).process(&mut spectrum);

    let scale = T::from_count(len).recip();
    let mut w = Vec::with_capacity(n);
    let end = T::cast(0.5) * scale * spectrum[0].re;
    w.push(end);
    w.extend(spectrum[1..].iter().map(|z| scale * z.re));
    w.push(end);
    w
}

/// Quadrature weights for either point kind on [-1, 1].
pub fn cheb_quadwts<T: Real>(kind: PointKind, n: usize) -> Vec<T> {
    match kind {
        PointKind::First => cheb1_quadwts(n),
        PointKind::Second => cheb2_quadwts(n),
    }
}

/// ∫ T_{2j} over [-1, 1] for j = 0..=(n-1)/2.
fn even_moments<T: Real>(n: usize) -> Vec<T> {
    (0..=(n - 1) / 2)
        .map(|j| {
            let k = T::from_count(2 * j);
            T::cast(2.0) / (T::one() - k * k)
        })
        .collect()
}
