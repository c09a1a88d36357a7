//! Floating-point element type accepted by every kernel.
//!
//! `Real` ties together what the three back-ends need: `num_traits::Float`
//! for scalar math, `rustfft::FftNum` for FFT plans and
//! `faer::traits::RealField` for dense matrices. It is sealed and
//! implemented for `f32` and `f64`.

use std::fmt;
use std::iter::Sum;

use faer::traits::RealField;
use num_traits::{Float, NumAssign};
use rustfft::FftNum;

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Precision of points, weights, transforms and matrices.
///
/// Most entry points take the precision as a type parameter, e.g.
/// `cheb2_pts::<f64>(n)`, and infer it from the input slice otherwise.
///
/// # Example
///
/// ```
/// use pde_suite::{Real, cheb2_pts};
///
/// fn first_gap<T: Real>(n: usize) -> T {
///     let x = cheb2_pts::<T>(n);
///     x[1] - x[0]
/// }
///
/// let single: f32 = first_gap(9);
/// let double: f64 = first_gap(9);
/// assert!((f64::from(single) - double).abs() < 1e-6);
/// ```
pub trait Real:
    Float + NumAssign + FftNum + RealField + Sum + fmt::Display + Default + sealed::Sealed
{
    /// Round an `f64` constant to this precision.
    fn cast(x: f64) -> Self;

    /// Widen to `f64`, e.g. to compare results across precisions.
    fn widen(self) -> f64;

    /// Convert a count or index.
    #[inline]
    fn from_count(n: usize) -> Self {
        Self::cast(n as f64)
    }
}

impl Real for f32 {
    #[inline]
    fn cast(x: f64) -> Self {
        x as f32
    }

    #[inline]
    fn widen(self) -> f64 {
        f64::from(self)
    }
}

impl Real for f64 {
    #[inline]
    fn cast(x: f64) -> Self {
        x
    }

    #[inline]
    fn widen(self) -> f64 {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pi<T: Real>() -> T {
        T::cast(std::f64::consts::PI)
    }

    #[test]
    fn test_cast_rounds_to_precision() {
        assert_eq!(pi::<f32>(), std::f32::consts::PI);
        assert_eq!(pi::<f64>(), std::f64::consts::PI);
        assert_eq!(<f32 as Real>::from_count(7), 7.0f32);
        assert_eq!(0.1f32.widen(), f64::from(0.1f32));
    }

    #[test]
    fn test_float_methods_resolve() {
        fn magnitude<T: Real>(x: T) -> T {
            x.abs().sqrt()
        }
        assert_eq!(magnitude(-4.0f32), 2.0);
        assert_eq!(magnitude(-9.0f64), 3.0);
    }
}
