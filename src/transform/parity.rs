//! Even/odd structure detection for coefficient and value vectors.
//!
//! A Chebyshev series whose odd-indexed coefficients vanish is an even
//! function, so its samples on a symmetric point set satisfy
//! v_i = v_{n-1-i}; vanishing even-indexed coefficients give an odd function
//! with v_i = -v_{n-1-i}. The transforms detect this structure on their input
//! and impose it exactly on their output, which removes the round-off that
//! the FFT would otherwise leak into slots that must be zero.

use crate::types::Real;

/// Parity class of a vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parity {
    /// Even function (odd coefficients vanish, values mirror-symmetric)
    Even,
    /// Odd function (even coefficients vanish, values mirror-antisymmetric)
    Odd,
    /// Neither even nor odd
    Neither,
}

impl Parity {
    /// Classify a coefficient vector.
    ///
    /// An all-zero vector is reported as `Even`.
    pub fn of_coeffs<T: Real>(c: &[T], tol: T) -> Self {
        let thresh = tol * max_abs(c);
        let small = |start: usize| c.iter().skip(start).step_by(2).all(|v| v.abs() <= thresh);

        if small(1) {
            Parity::Even
        } else if small(0) {
            Parity::Odd
        } else {
            Parity::Neither
        }
    }

    /// Classify samples taken on a point set symmetric about the origin.
    ///
    /// An all-zero vector is reported as `Even`.
    pub fn of_values<T: Real>(v: &[T], tol: T) -> Self {
        let n = v.len();
        let thresh = tol * max_abs(v);

        let even = (0..n / 2).all(|i| (v[i] - v[n - 1 - i]).abs() <= thresh);
        if even {
            return Parity::Even;
        }
        let odd = (0..n.div_ceil(2)).all(|i| (v[i] + v[n - 1 - i]).abs() <= thresh);
        if odd { Parity::Odd } else { Parity::Neither }
    }

    /// Force mirror (anti)symmetry on a value vector.
    pub(crate) fn symmetrize_values<T: Real>(self, v: &mut [T]) {
        let n = v.len();
        let half = T::cast(0.5);
        match self {
            Parity::Even => {
                for i in 0..n / 2 {
                    let j = n - 1 - i;
                    let avg = half * (v[i] + v[j]);
                    v[i] = avg;
                    v[j] = avg;
                }
            }
            Parity::Odd => {
                for i in 0..n / 2 {
                    let j = n - 1 - i;
                    let avg = half * (v[i] - v[j]);
                    v[i] = avg;
                    v[j] = -avg;
                }
                if n % 2 == 1 {
                    v[n / 2] = T::zero();
                }
            }
            Parity::Neither => {}
        }
    }

    /// Zero the coefficients that the parity class says must vanish.
    pub(crate) fn impose_on_coeffs<T: Real>(self, c: &mut [T]) {
        let start = match self {
            Parity::Even => 1,
            Parity::Odd => 0,
            Parity::Neither => return,
        };
        for ck in c.iter_mut().skip(start).step_by(2) {
            *ck = T::zero();
        }
    }
}

fn max_abs<T: Real>(v: &[T]) -> T {
    v.iter().fold(T::zero(), |m, x| m.max(x.abs()))
}
