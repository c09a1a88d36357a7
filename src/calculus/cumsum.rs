//! Indefinite integration of Chebyshev series.
//!
//! For f = Σ_{k<n} c_k T_k the antiderivative F = Σ_{k≤n} b_k T_k with
//! F(-1) = 0 has
//!
//! ```text
//! b_r = (c_{r-1} - c_{r+1}) / (2r),    r = 2, ..., n
//! b_1 = c_0 - c_2 / 2
//! b_0 = Σ_{k≥1} (-1)^{k+1} b_k
//! ```
//!
//! with c_n = c_{n+1} = 0. The result has one more coefficient than the input.

use faer::Mat;

use crate::error::{Result, check_len};
use crate::types::{Interval, Real};

/// Reusable antiderivative operator for series of n coefficients.
///
/// Keeps a zero-padded copy of the input (length n+2) and the output buffer
/// (length n+1). Not for concurrent use; give each thread its own instance.
///
/// # Example
///
/// ```
/// use pde_suite::calculus::ChebCumsumOp;
///
/// let mut op = ChebCumsumOp::<f64>::new(2);
/// // ∫_{-1}^{x} (1 + s) ds = x²/2 + x + 1/2 = 3/4 T_0 + T_1 + 1/4 T_2
/// let b = op.apply(&[1.0, 1.0]).unwrap();
/// assert_eq!(b, vec![0.75, 1.0, 0.25]);
/// ```
#[derive(Clone, Debug)]
pub struct ChebCumsumOp<T: Real = f64> {
    n: usize,
    padded: Vec<T>,
    result: Vec<T>,
}

impl<T: Real> ChebCumsumOp<T> {
    /// Create an operator for `n` input coefficients.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            padded: vec![T::zero(); n + 2],
            result: vec![T::zero(); n + 1],
        }
    }

    /// Number of input coefficients.
    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    /// Coefficients of the antiderivative vanishing at x = -1 (length n+1).
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if `c.len() != self.size()`.
    pub fn apply(&mut self, c: &[T]) -> Result<Vec<T>> {
        check_len(self.n, c.len())?;
        Ok(self.execute(c))
    }

    fn execute(&mut self, c: &[T]) -> Vec<T> {
        let n = self.n;
        if n == 0 {
            return vec![T::zero()];
        }

        self.padded[..n].copy_from_slice(c);
        self.padded[n] = T::zero();
        self.padded[n + 1] = T::zero();
        let t = &self.padded;
        let b = &mut self.result;

        for r in 2..=n {
            b[r] = (t[r - 1] - t[r + 1]) / T::from_count(2 * r);
        }
        b[1] = t[0] - T::cast(0.5) * t[2];

        let mut b0 = T::zero();
        let mut sign = T::one();
        for &bk in b[1..].iter() {
            b0 += sign * bk;
            sign = -sign;
        }
        b[0] = b0;

        b.clone()
    }
}

/// One-shot antiderivative of a Chebyshev series.
///
/// Builds a temporary [`ChebCumsumOp`]; reuse an operator in loops.
pub fn cheb_cumsum<T: Real>(c: &[T]) -> Vec<T> {
    ChebCumsumOp::new(c.len()).execute(c)
}

/// The (n+1)×n matrix of [`cheb_cumsum`].
///
/// Column j is the antiderivative of T_j, so `B · c == cheb_cumsum(c)`.
pub fn cheb_coeffs_cumsummat<T: Real>(n: usize) -> Mat<T> {
    let mut b = Mat::zeros(n + 1, n);
    let mut op = ChebCumsumOp::<T>::new(n);
    let mut unit = vec![T::zero(); n];
    for j in 0..n {
        unit[j] = T::one();
        let col = op.execute(&unit);
        for (i, &v) in col.iter().enumerate() {
            b[(i, j)] = v;
        }
        unit[j] = T::zero();
    }
    b
}

/// [`cheb_coeffs_cumsummat`] for a series on `interval`.
///
/// The antiderivative is taken in the physical variable and vanishes at `lo`.
pub fn cheb_coeffs_cumsummat_mapped<T: Real>(n: usize, interval: Interval<T>) -> Mat<T> {
    let mut b = cheb_coeffs_cumsummat(n);
    let scale = interval.half_width();
    for j in 0..b.ncols() {
        for i in 0..b.nrows() {
            b[(i, j)] *= scale;
        }
    }
    b
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpectralError;
    use crate::polynomial::cheb_clenshaw;

    #[test]
    fn test_trivial_sizes() {
        assert_eq!(cheb_cumsum::<f64>(&[]), vec![0.0]);
        // ∫_{-1}^{x} 3 ds = 3 + 3x
        assert_eq!(cheb_cumsum(&[3.0]), vec![3.0, 3.0]);
    }

    #[test]
    fn test_vanishes_at_left_end() {
        for n in 1..=12 {
            let c: Vec<f64> = (0..n).map(|k| (0.7 * k as f64).sin() + 0.1).collect();
            let b = cheb_cumsum(&c);
            assert_eq!(b.len(), n + 1);
            assert!(cheb_clenshaw(&b, -1.0).abs() < 1e-14 * n as f64);
        }
    }

    #[test]
    fn test_derivative_recovers_integrand() {
        let c = [0.5_f64, -1.0, 0.25, 0.8, -0.3];
        let b = cheb_cumsum(&c);
        let h = 1e-6;
        for &x in &[-0.7, 0.0, 0.4, 0.9] {
            let fd = (cheb_clenshaw(&b, x + h) - cheb_clenshaw(&b, x - h)) / (2.0 * h);
            assert!((fd - cheb_clenshaw(&c, x)).abs() < 1e-8);
        }
    }

    #[test]
    fn test_definite_integral() {
        // ∫_{-1}^{1} T_2 = -2/3, ∫_{-1}^{1} T_4 = -2/15
        let b = cheb_cumsum(&[0.0_f64, 0.0, 1.0]);
        assert!((cheb_clenshaw(&b, 1.0) + 2.0 / 3.0).abs() < 1e-15);
        let b = cheb_cumsum(&[0.0_f64, 0.0, 0.0, 0.0, 1.0]);
        assert!((cheb_clenshaw(&b, 1.0) + 2.0 / 15.0).abs() < 1e-15);
    }

    #[test]
    fn test_operator_reuse() {
        let mut op = ChebCumsumOp::<f64>::new(3);
        let first = op.apply(&[1.0, 2.0, 3.0]).unwrap();
        let second = op.apply(&[0.0, 0.0, 0.0]).unwrap();
        assert_eq!(second, vec![0.0; 4]);
        assert_eq!(first, cheb_cumsum(&[1.0, 2.0, 3.0]));
        assert_eq!(
            op.apply(&[1.0]),
            Err(SpectralError::DimensionMismatch {
                expected: 3,
                found: 1
            })
        );
    }

    #[test]
    fn test_matrix_matches_operator() {
        let n = 6;
        let b = cheb_coeffs_cumsummat::<f64>(n);
        assert_eq!((b.nrows(), b.ncols()), (n + 1, n));

        let c: Vec<f64> = (0..n).map(|k| 1.0 - 0.3 * k as f64).collect();
        let expected = cheb_cumsum(&c);
        for i in 0..=n {
            let v: f64 = (0..n).map(|j| b[(i, j)] * c[j]).sum();
            assert!((v - expected[i]).abs() < 1e-14);
        }
    }

    #[test]
    fn test_single_precision() {
        let b = cheb_cumsum(&[1.0f32, 1.0]);
        assert_eq!(b, vec![0.75f32, 1.0, 0.25]);
        let m = cheb_coeffs_cumsummat::<f32>(4);
        assert_eq!((m.nrows(), m.ncols()), (5, 4));
        assert!((m[(2, 1)] - 0.25).abs() < 1e-7);
    }

    #[test]
    fn test_mapped_matrix() {
        // On [0, 4] the constant 1 integrates to x - 0 = 2 + 2 t
        let interval = Interval::new(0.0, 4.0).unwrap();
        let b = cheb_coeffs_cumsummat_mapped(1, interval);
        assert_eq!(b[(0, 0)], 2.0);
        assert_eq!(b[(1, 0)], 2.0);
    }
}
