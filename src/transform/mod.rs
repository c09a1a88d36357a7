//! FFT-based transforms between Chebyshev coefficients and point values.
//!
//! This module provides:
//! - `Cheb1Coeffs2ValsOp` / `Cheb1Vals2CoeffsOp` for 1st-kind points
//! - `Cheb2Coeffs2ValsOp` / `Cheb2Vals2CoeffsOp` for 2nd-kind points
//! - One-shot wrappers (`cheb1_coeffs2vals`, ...) for occasional use
//! - The `ChebTransform` trait and `apply_batch` for many vectors at once
//!
//! # Operators and buffers
//!
//! Every operator is built for one size `n`. It owns its FFT plan and its
//! scratch/output buffers, and overwrites them on each call. The vector it
//! returns is a fresh copy, so results can be kept across later calls.
//! Operators are `Send` but take `&mut self`: share one between threads only
//! behind your own lock, or give each worker a clone.
//!
//! # Example
//!
//! ```
//! use pde_suite::polynomial::cheb2_pts;
//! use pde_suite::transform::{Cheb2Coeffs2ValsOp, Cheb2Vals2CoeffsOp};
//!
//! let n = 16;
//! let x = cheb2_pts::<f64>(n);
//! let f: Vec<f64> = x.iter().map(|&xi| (2.0 * xi).exp()).collect();
//!
//! let mut analysis = Cheb2Vals2CoeffsOp::new(n);
//! let mut synthesis = Cheb2Coeffs2ValsOp::new(n);
//!
//! let c = analysis.apply(&f).unwrap();
//! let g = synthesis.apply(&c).unwrap();
//! for (a, b) in f.iter().zip(g.iter()) {
//!     assert!((a - b).abs() < 1e-12);
//! }
//! ```

mod cheb1;
mod cheb2;
mod config;
mod parity;
mod plan;

pub use cheb1::{Cheb1Coeffs2ValsOp, Cheb1Vals2CoeffsOp, cheb1_coeffs2vals, cheb1_vals2coeffs};
pub use cheb2::{Cheb2Coeffs2ValsOp, Cheb2Vals2CoeffsOp, cheb2_coeffs2vals, cheb2_vals2coeffs};
pub use config::TransformConfig;
pub use parity::Parity;

pub(crate) use plan::FftPlan;

use crate::error::{Result, check_len};
use crate::types::Real;

/// A fixed-size linear map between coefficient and value vectors.
pub trait ChebTransform<T: Real = f64> {
    /// Length of the input and output vectors.
    fn size(&self) -> usize;

    /// Apply the transform, returning a freshly allocated vector.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if `input.len() != self.size()`.
    fn apply(&mut self, input: &[T]) -> Result<Vec<T>>;
}

/// Apply a transform to many input vectors.
///
/// All lengths are validated before any transform runs. With the `parallel`
/// feature each rayon worker gets its own clone of `op`, so the operator's
/// scratch buffers are never shared.
pub fn apply_batch<T, O>(op: &mut O, inputs: &[Vec<T>]) -> Result<Vec<Vec<T>>>
where
    T: Real,
    O: ChebTransform<T> + Clone + Send + Sync,
{
    for input in inputs {
        check_len(op.size(), input.len())?;
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        let proto = op.clone();
        inputs
            .par_iter()
            .map_init(|| proto.clone(), |local, input| local.apply(input))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        inputs.iter().map(|input| op.apply(input)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpectralError;

    #[test]
    fn test_batch_matches_single() {
        let n = 7;
        let inputs: Vec<Vec<f64>> = (0..5)
            .map(|s| (0..n).map(|k| ((s * n + k) as f64 * 0.37).sin()).collect())
            .collect();

        let mut op = Cheb1Vals2CoeffsOp::<f64>::new(n);
        let batch = apply_batch(&mut op, &inputs).unwrap();
        assert_eq!(batch.len(), inputs.len());
        for (input, out) in inputs.iter().zip(batch.iter()) {
            assert_eq!(out, &cheb1_vals2coeffs(input));
        }
    }

    #[test]
    fn test_batch_validates_first() {
        let mut op = Cheb2Coeffs2ValsOp::<f64>::new(3);
        let inputs = vec![vec![1.0, 2.0, 3.0], vec![1.0]];
        assert_eq!(
            apply_batch(&mut op, &inputs),
            Err(SpectralError::DimensionMismatch {
                expected: 3,
                found: 1
            })
        );
    }

    #[test]
    fn test_trait_object_dispatch() {
        let mut ops: Vec<Box<dyn ChebTransform>> = vec![
            Box::new(Cheb1Coeffs2ValsOp::<f64>::new(4)),
            Box::new(Cheb1Vals2CoeffsOp::<f64>::new(4)),
            Box::new(Cheb2Coeffs2ValsOp::<f64>::new(4)),
            Box::new(Cheb2Vals2CoeffsOp::<f64>::new(4)),
        ];
        for op in ops.iter_mut() {
            assert_eq!(op.size(), 4);
            let out = op.apply(&[0.0; 4]).unwrap();
            assert_eq!(out, vec![0.0; 4]);
        }
    }

    #[test]
    fn test_trait_delegates_length_check() {
        let mut op = Cheb1Coeffs2ValsOp::<f32>::new(3);
        let as_trait: &mut dyn ChebTransform<f32> = &mut op;
        assert_eq!(as_trait.size(), 3);
        assert_eq!(
            as_trait.apply(&[1.0, 2.0]),
            Err(SpectralError::DimensionMismatch {
                expected: 3,
                found: 2
            })
        );
        let vals = as_trait.apply(&[1.0, 0.0, 0.0]).unwrap();
        for v in vals {
            assert!((v - 1.0).abs() < 1e-6);
        }
    }
}
