//! Coefficient/value transforms on Chebyshev points of the 1st kind.
//!
//! On the 1st-kind points θ_j = (2j+1)π/(2n) the map between coefficients
//! and values is a DCT-III / DCT-II pair. Both directions are computed with a
//! zero-padded complex FFT of length 2n and a phase twist:
//!
//! ```text
//! values:  f(cos θ_j) = Re Σ_k [c_k e^{-iπk/(2n)}] e^{-2πi jk/(2n)}
//! coeffs:  c_k = (2/n) Re e^{+iπk/(2n)} Σ_j f_j e^{+2πi jk/(2n)},  c_0 halved
//! ```
//!
//! Reference: Mason & Handscomb, *Chebyshev Polynomials*, §4.7.

use std::f64::consts::PI;

use rustfft::num_complex::Complex;

use crate::error::{Result, check_len};
use crate::types::Real;

use super::ChebTransform;
use super::config::TransformConfig;
use super::parity::Parity;
use super::plan::FftPlan;

/// Phase twist e^{sign · iπk/(2n)} for k = 0..n.
fn twiddles<T: Real>(n: usize, sign: f64) -> Vec<Complex<T>> {
    let step = T::cast(sign * PI) / T::from_count(2 * n);
    (0..n)
        .map(|k| Complex::from_polar(T::one(), step * T::from_count(k)))
        .collect()
}

/// Converts Chebyshev coefficients to values at 1st-kind points.
///
/// Owns a padded complex buffer of length 2n, an output buffer of length n
/// and a forward FFT plan. Build once per size and reuse; every call
/// overwrites the internal buffers. Not safe to call from several threads at
/// once: give each worker its own operator.
///
/// # Example
///
/// ```
/// use pde_suite::transform::Cheb1Coeffs2ValsOp;
///
/// let mut op = Cheb1Coeffs2ValsOp::<f64>::new(3);
/// // f(x) = x on the points -√3/2, 0, √3/2
/// let vals = op.apply(&[0.0, 1.0, 0.0]).unwrap();
/// assert!((vals[0] + 0.75_f64.sqrt()).abs() < 1e-15);
/// assert_eq!(vals[1], 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct Cheb1Coeffs2ValsOp<T: Real = f64> {
    n: usize,
    config: TransformConfig<T>,
    tmp: Vec<Complex<T>>,
    twiddle: Vec<Complex<T>>,
    vals: Vec<T>,
    plan: Option<FftPlan<T>>,
}

impl<T: Real> Cheb1Coeffs2ValsOp<T> {
    /// Create an operator for `n` coefficients with the default config.
    pub fn new(n: usize) -> Self {
        Self::with_config(n, TransformConfig::default())
    }

    /// Create an operator with an explicit configuration.
    pub fn with_config(n: usize, config: TransformConfig<T>) -> Self {
        let plan = (n >= 2).then(|| FftPlan::forward(2 * n));
        Self {
            n,
            config,
            tmp: vec![Complex::new(T::zero(), T::zero()); 2 * n],
            twiddle: twiddles(n, -1.0),
            vals: vec![T::zero(); n],
            plan,
        }
    }

    /// Number of coefficients this operator accepts.
    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    /// Transform `coeffs` into values at the 1st-kind points.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if `coeffs.len() != self.size()`.
    pub fn apply(&mut self, coeffs: &[T]) -> Result<Vec<T>> {
        check_len(self.n, coeffs.len())?;
        Ok(self.execute(coeffs))
    }

    fn execute(&mut self, coeffs: &[T]) -> Vec<T> {
        let n = self.n;
        let Some(plan) = self.plan.as_mut() else {
            return coeffs.to_vec();
        };
        debug_assert_eq!(plan.len(), self.tmp.len());

        let parity = Parity::of_coeffs(coeffs, self.config.symmetry_tol);

        for k in 0..n {
            self.tmp[k] = self.twiddle[k] * coeffs[k];
        }
        for z in self.tmp[n..].iter_mut() {
            *z = Complex::new(T::zero(), T::zero());
        }

        plan.process(&mut self.tmp);

        // Angles descend while points ascend
        for i in 0..n {
            self.vals[i] = self.tmp[n - 1 - i].re;
        }
        parity.symmetrize_values(&mut self.vals);

        self.vals.clone()
    }
}

impl<T: Real> ChebTransform<T> for Cheb1Coeffs2ValsOp<T> {
    fn size(&self) -> usize {
        Self::size(self)
    }

    fn apply(&mut self, input: &[T]) -> Result<Vec<T>> {
        Self::apply(self, input)
    }
}

/// Converts values at 1st-kind points to Chebyshev coefficients.
///
/// Same buffer and threading model as [`Cheb1Coeffs2ValsOp`], with an
/// inverse FFT plan.
#[derive(Clone, Debug)]
pub struct Cheb1Vals2CoeffsOp<T: Real = f64> {
    n: usize,
    config: TransformConfig<T>,
    tmp: Vec<Complex<T>>,
    twiddle: Vec<Complex<T>>,
    coeffs: Vec<T>,
    plan: Option<FftPlan<T>>,
}

impl<T: Real> Cheb1Vals2CoeffsOp<T> {
    /// Create an operator for `n` values with the default config.
    pub fn new(n: usize) -> Self {
        Self::with_config(n, TransformConfig::default())
    }

    /// Create an operator with an explicit configuration.
    pub fn with_config(n: usize, config: TransformConfig<T>) -> Self {
        let plan = (n >= 2).then(|| FftPlan::inverse(2 * n));
        Self {
            n,
            config,
            tmp: vec![Complex::new(T::zero(), T::zero()); 2 * n],
            twiddle: twiddles(n, 1.0),
            coeffs: vec![T::zero(); n],
            plan,
        }
    }

    /// Number of values this operator accepts.
    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    /// Transform `vals` at the 1st-kind points into coefficients.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if `vals.len() != self.size()`.
    pub fn apply(&mut self, vals: &[T]) -> Result<Vec<T>> {
        check_len(self.n, vals.len())?;
        Ok(self.execute(vals))
    }

    fn execute(&mut self, vals: &[T]) -> Vec<T> {
        let n = self.n;
        let Some(plan) = self.plan.as_mut() else {
            return vals.to_vec();
        };
        debug_assert_eq!(plan.len(), self.tmp.len());

        let parity = Parity::of_values(vals, self.config.symmetry_tol);

        // Sample j sits at angle θ_j, i.e. at point index n-1-j
        for j in 0..n {
            self.tmp[j] = Complex::new(vals[n - 1 - j], T::zero());
        }
        for z in self.tmp[n..].iter_mut() {
            *z = Complex::new(T::zero(), T::zero());
        }

        plan.process(&mut self.tmp);

        let scale = T::cast(2.0) / T::from_count(n);
        for k in 0..n {
            self.coeffs[k] = scale * (self.twiddle[k] * self.tmp[k]).re;
        }
        self.coeffs[0] *= T::cast(0.5);
        parity.impose_on_coeffs(&mut self.coeffs);

        self.coeffs.clone()
    }
}

impl<T: Real> ChebTransform<T> for Cheb1Vals2CoeffsOp<T> {
    fn size(&self) -> usize {
        Self::size(self)
    }

    fn apply(&mut self, input: &[T]) -> Result<Vec<T>> {
        Self::apply(self, input)
    }
}

/// One-shot coefficients → values at 1st-kind points.
///
/// Builds a temporary [`Cheb1Coeffs2ValsOp`]; reuse an operator in loops.
pub fn cheb1_coeffs2vals<T: Real>(coeffs: &[T]) -> Vec<T> {
    Cheb1Coeffs2ValsOp::new(coeffs.len()).execute(coeffs)
}

/// One-shot values at 1st-kind points → coefficients.
///
/// Builds a temporary [`Cheb1Vals2CoeffsOp`]; reuse an operator in loops.
pub fn cheb1_vals2coeffs<T: Real>(vals: &[T]) -> Vec<T> {
    Cheb1Vals2CoeffsOp::new(vals.len()).execute(vals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpectralError;
    use crate::polynomial::{cheb_clenshaw, cheb1_pts};

    fn sample_coeffs(n: usize) -> Vec<f64> {
        (0..n)
            .map(|k| ((k as f64 + 1.0) * 0.7).sin() / (k as f64 + 1.0))
            .collect()
    }

    #[test]
    fn test_trivial_sizes() {
        assert!(cheb1_coeffs2vals::<f64>(&[]).is_empty());
        assert!(cheb1_vals2coeffs::<f64>(&[]).is_empty());
        assert_eq!(cheb1_coeffs2vals(&[2.5]), vec![2.5]);
        assert_eq!(cheb1_vals2coeffs(&[-1.5]), vec![-1.5]);
    }

    #[test]
    fn test_coeffs2vals_matches_clenshaw() {
        for n in 2..=12 {
            let c = sample_coeffs(n);
            let x = cheb1_pts::<f64>(n);
            let vals = cheb1_coeffs2vals(&c);
            for i in 0..n {
                let expected = cheb_clenshaw(&c, x[i]);
                assert!(
                    (vals[i] - expected).abs() < 1e-13,
                    "n = {}, i = {}: {} vs {}",
                    n,
                    i,
                    vals[i],
                    expected
                );
            }
        }
    }

    #[test]
    fn test_vals2coeffs_recovers_polynomial() {
        // f(x) = 2 - x + 3 T_3(x)
        let n = 6;
        let x = cheb1_pts::<f64>(n);
        let vals: Vec<f64> = x
            .iter()
            .map(|&xi| 2.0 - xi + 3.0 * (4.0 * xi.powi(3) - 3.0 * xi))
            .collect();
        let c = cheb1_vals2coeffs(&vals);
        let expected = [2.0, -1.0, 0.0, 3.0, 0.0, 0.0];
        for k in 0..n {
            assert!((c[k] - expected[k]).abs() < 1e-14, "c[{}] = {}", k, c[k]);
        }
    }

    #[test]
    fn test_roundtrip() {
        for n in 0..=17 {
            let c = sample_coeffs(n);
            let back = cheb1_vals2coeffs(&cheb1_coeffs2vals(&c));
            for k in 0..n {
                assert!((back[k] - c[k]).abs() < 1e-14 * (n as f64 + 1.0));
            }
        }
    }

    #[test]
    fn test_parity_preserved() {
        let n = 9;
        let even = [1.0, 0.0, -0.5, 0.0, 0.25, 0.0, 0.1, 0.0, 0.05];
        let vals = cheb1_coeffs2vals(&even);
        for i in 0..n {
            assert_eq!(vals[i], vals[n - 1 - i], "Even function values mirror");
        }
        let c = cheb1_vals2coeffs(&vals);
        for k in (1..n).step_by(2) {
            assert_eq!(c[k], 0.0, "Odd coefficients of an even function vanish");
        }

        let odd = [0.0, 1.0, 0.0, -0.3, 0.0, 0.2, 0.0, 0.1, 0.0];
        let vals = cheb1_coeffs2vals(&odd);
        assert_eq!(vals[n / 2], 0.0);
        for i in 0..n {
            assert_eq!(vals[i], -vals[n - 1 - i], "Odd function values antimirror");
        }
        let c = cheb1_vals2coeffs(&vals);
        for k in (0..n).step_by(2) {
            assert_eq!(c[k], 0.0, "Even coefficients of an odd function vanish");
        }
    }

    #[test]
    fn test_operator_reuse_returns_fresh_vectors() {
        let mut op = Cheb1Coeffs2ValsOp::<f64>::new(4);
        let first = op.apply(&[1.0, 0.0, 0.0, 0.0]).unwrap();
        let second = op.apply(&[0.0, 1.0, 0.0, 0.0]).unwrap();
        for v in &first {
            assert!((v - 1.0).abs() < 1e-15, "T_0 is identically one");
        }
        // The first result is untouched by the second call
        assert!((first[0] - second[0]).abs() > 0.5);
        assert!((second[0] - cheb1_pts::<f64>(4)[0]).abs() < 1e-15);
    }

    #[test]
    fn test_length_mismatch() {
        let mut op = Cheb1Vals2CoeffsOp::<f64>::new(5);
        assert_eq!(
            op.apply(&[1.0, 2.0]),
            Err(SpectralError::DimensionMismatch {
                expected: 5,
                found: 2
            })
        );
    }

    #[test]
    fn test_single_precision_roundtrip() {
        let n = 12;
        let c: Vec<f32> = (0..n).map(|k| 0.5f32.powi(k as i32)).collect();
        let vals = cheb1_coeffs2vals(&c);
        let x = cheb1_pts::<f32>(n);
        for i in 0..n {
            assert!((vals[i] - cheb_clenshaw(&c, x[i])).abs() < 1e-5);
        }
        let back = cheb1_vals2coeffs(&vals);
        for k in 0..n {
            assert!((back[k] - c[k]).abs() < 1e-5, "c[{}] = {}", k, back[k]);
        }
    }
}
