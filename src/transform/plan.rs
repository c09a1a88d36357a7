//! Reusable FFT plan with its own scratch space.

use std::fmt;
use std::sync::Arc;

use rustfft::num_complex::Complex;
use rustfft::{Fft, FftDirection, FftPlanner};

use crate::types::Real;

/// A planned complex FFT of fixed length.
///
/// Both directions are unnormalised: the inverse transform does not divide
/// by the length, callers apply the scale their formula needs.
#[derive(Clone)]
pub(crate) struct FftPlan<T: Real> {
    fft: Arc<dyn Fft<T>>,
    scratch: Vec<Complex<T>>,
    len: usize,
    direction: FftDirection,
}

impl<T: Real> FftPlan<T> {
    /// Plan a transform of length `len` (must be non-zero).
    pub(crate) fn new(len: usize, direction: FftDirection) -> Self {
        let mut planner = FftPlanner::<T>::new();
        let fft = planner.plan_fft(len, direction);
        let scratch = vec![Complex::new(T::zero(), T::zero()); fft.get_inplace_scratch_len()];
        Self {
            fft,
            scratch,
            len,
            direction,
        }
    }

    /// Forward transform: X_k = Σ_j x_j e^{-2πi jk/L}.
    pub(crate) fn forward(len: usize) -> Self {
        Self::new(len, FftDirection::Forward)
    }

    /// Inverse transform without the 1/L factor: x_j = Σ_k X_k e^{+2πi jk/L}.
    pub(crate) fn inverse(len: usize) -> Self {
        Self::new(len, FftDirection::Inverse)
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Transform `buffer` in place.
    #[inline]
    pub(crate) fn process(&mut self, buffer: &mut [Complex<T>]) {
        debug_assert_eq!(buffer.len(), self.len);
        self.fft.process_with_scratch(buffer, &mut self.scratch);
    }
}

impl<T: Real> fmt::Debug for FftPlan<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FftPlan")
            .field("len", &self.len)
            .field("direction", &self.direction)
            .finish()
    }
}
