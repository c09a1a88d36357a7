//! Coefficient/value transforms on Chebyshev points of the 2nd kind.
//!
//! The 2nd-kind points θ_j = jπ/(n-1) turn the Chebyshev series into a
//! DCT-I, computed here through the even extension of length 2n-2:
//!
//! ```text
//! coeffs → vals:  [c_0, c_1/2, ..., c_{n-2}/2, c_{n-1}, c_{n-2}/2, ..., c_1/2]  --FFT-->
//! vals → coeffs:  [f(θ_0), ..., f(θ_{n-1}), f(θ_{n-2}), ..., f(θ_1)]  --IFFT/(2n-2)-->
//!                 then double the interior coefficients
//! ```
//!
//! For n ≤ 1 both maps are the identity and no FFT is planned.

use rustfft::num_complex::Complex;

use crate::error::{Result, check_len};
use crate::types::Real;

use super::ChebTransform;
use super::config::TransformConfig;
use super::parity::Parity;
use super::plan::FftPlan;

/// Converts Chebyshev coefficients to values at 2nd-kind points.
///
/// Owns a complex buffer of length 2n-2 for the even extension, an output
/// buffer of length n and a forward FFT plan. Build once per size, reuse
/// across calls, one instance per thread.
///
/// # Example
///
/// ```
/// use pde_suite::transform::Cheb2Coeffs2ValsOp;
///
/// let mut op = Cheb2Coeffs2ValsOp::<f64>::new(3);
/// // T_2(x) = 2x² - 1 on the points -1, 0, 1
/// let vals = op.apply(&[0.0, 0.0, 1.0]).unwrap();
/// assert!((vals[0] - 1.0).abs() < 1e-15);
/// assert!((vals[1] + 1.0).abs() < 1e-15);
/// assert!((vals[2] - 1.0).abs() < 1e-15);
/// ```
#[derive(Clone, Debug)]
pub struct Cheb2Coeffs2ValsOp<T: Real = f64> {
    n: usize,
    config: TransformConfig<T>,
    tmp: Vec<Complex<T>>,
    vals: Vec<T>,
    plan: Option<FftPlan<T>>,
}

impl<T: Real> Cheb2Coeffs2ValsOp<T> {
    /// Create an operator for `n` coefficients with the default config.
    pub fn new(n: usize) -> Self {
        Self::with_config(n, TransformConfig::default())
    }

    /// Create an operator with an explicit configuration.
    pub fn with_config(n: usize, config: TransformConfig<T>) -> Self {
        let len = extension_len(n);
        Self {
            n,
            config,
            tmp: vec![Complex::new(T::zero(), T::zero()); len],
            vals: vec![T::zero(); n],
            plan: (n >= 2).then(|| FftPlan::forward(len)),
        }
    }

    /// Number of coefficients this operator accepts.
    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    /// Transform `coeffs` into values at the 2nd-kind points.
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

        let len = self.tmp.len();
        self.tmp[0] = Complex::new(coeffs[0], T::zero());
        self.tmp[n - 1] = Complex::new(coeffs[n - 1], T::zero());
        for k in 1..n - 1 {
            let half = Complex::new(T::cast(0.5) * coeffs[k], T::zero());
            self.tmp[k] = half;
            self.tmp[len - k] = half;
        }

        plan.process(&mut self.tmp);

        for i in 0..n {
            self.vals[i] = self.tmp[n - 1 - i].re;
        }
        parity.symmetrize_values(&mut self.vals);

        self.vals.clone()
    }
}

impl<T: Real> ChebTransform<T> for Cheb2Coeffs2ValsOp<T> {
    fn size(&self) -> usize {
        Self::size(self)
    }

    fn apply(&mut self, input: &[T]) -> Result<Vec<T>> {
        Self::apply(self, input)
    }
}

/// Converts values at 2nd-kind points to Chebyshev coefficients.
///
/// # Example
///
/// ```
/// use pde_suite::transform::Cheb2Vals2CoeffsOp;
///
/// let mut op = Cheb2Vals2CoeffsOp::<f64>::new(5);
/// let vals = vec![1.0; 5];
/// for _ in 0..3 {
///     let coeffs = op.apply(&vals).unwrap();
///     assert!((coeffs[0] - 1.0).abs() < 1e-15);
///     assert_eq!(coeffs[1], 0.0);
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Cheb2Vals2CoeffsOp<T: Real = f64> {
    n: usize,
    config: TransformConfig<T>,
    tmp: Vec<Complex<T>>,
    coeffs: Vec<T>,
    plan: Option<FftPlan<T>>,
}

impl<T: Real> Cheb2Vals2CoeffsOp<T> {
    /// Create an operator for `n` values with the default config.
    pub fn new(n: usize) -> Self {
        Self::with_config(n, TransformConfig::default())
    }

    /// Create an operator with an explicit configuration.
    pub fn with_config(n: usize, config: TransformConfig<T>) -> Self {
        let len = extension_len(n);
        Self {
            n,
            config,
            tmp: vec![Complex::new(T::zero(), T::zero()); len],
            coeffs: vec![T::zero(); n],
            plan: (n >= 2).then(|| FftPlan::inverse(len)),
        }
    }

    /// Number of values this operator accepts.
    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    /// Transform `vals` at the 2nd-kind points into coefficients.
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

        // Even extension in angle: θ_0..θ_{n-1} then θ_{n-2}..θ_1
        for j in 0..n - 1 {
            self.tmp[j] = Complex::new(vals[n - 1 - j], T::zero());
            self.tmp[n - 1 + j] = Complex::new(vals[j], T::zero());
        }

        plan.process(&mut self.tmp);

        let scale = T::from_count(self.tmp.len()).recip();
        for k in 0..n {
            self.coeffs[k] = scale * self.tmp[k].re;
        }
        for ck in self.coeffs[1..n - 1].iter_mut() {
            *ck *= T::cast(2.0);
        }
        parity.impose_on_coeffs(&mut self.coeffs);

        self.coeffs.clone()
    }
}

impl<T: Real> ChebTransform<T> for Cheb2Vals2CoeffsOp<T> {
    fn size(&self) -> usize {
        Self::size(self)
    }

    fn apply(&mut self, input: &[T]) -> Result<Vec<T>> {
        Self::apply(self, input)
    }
}

/// One-shot coefficients → values at 2nd-kind points.
///
/// Builds a temporary [`Cheb2Coeffs2ValsOp`]; reuse an operator in loops.
pub fn cheb2_coeffs2vals<T: Real>(coeffs: &[T]) -> Vec<T> {
    Cheb2Coeffs2ValsOp::new(coeffs.len()).execute(coeffs)
}

/// One-shot values at 2nd-kind points → coefficients.
///
/// Builds a temporary [`Cheb2Vals2CoeffsOp`]; reuse an operator in loops.
pub fn cheb2_vals2coeffs<T: Real>(vals: &[T]) -> Vec<T> {
    Cheb2Vals2CoeffsOp::new(vals.len()).execute(vals)
}

/// Length of the even extension, 2n-2 (0 when no FFT is needed).
#[inline]
fn extension_len(n: usize) -> usize {
    if n >= 2 { 2 * n - 2 } else { 0 }
}
