//! Evaluation of Chebyshev series by Clenshaw's recurrence.
//!
//! For f(x) = Σ_{k=0}^{n-1} c_k T_k(x):
//!
//! ```text
//! b_n = b_{n+1} = 0
//! b_k = c_k + 2x b_{k+1} - b_{k+2},   k = n-1, ..., 1
//! f(x) = c_0 + x b_1 - b_2
//! ```
//!
//! Stable for |x| ≤ 1. Outside [-1, 1] the recurrence still returns the
//! polynomial value but without the stability guarantee.

use crate::types::Real;

/// Evaluate a Chebyshev series at `x` with Clenshaw's algorithm.
///
/// An empty coefficient vector evaluates to 0.
pub fn cheb_clenshaw<T: Real>(c: &[T], x: T) -> T {
    let n = c.len();
    if n == 0 {
        return T::zero();
    }

    let two_x = x + x;
    let mut bk1 = T::zero();
    let mut bk2 = T::zero();
    for k in (1..n).rev() {
        let bk = c[k] + two_x * bk1 - bk2;
        bk2 = bk1;
        bk1 = bk;
    }

    c[0] + x * bk1 - bk2
}

/// Evaluate a Chebyshev series at a point.
///
/// Entry point for series evaluation; Clenshaw's recurrence is used for every
/// degree.
#[inline]
pub fn cheb_feval<T: Real>(c: &[T], x: T) -> T {
    cheb_clenshaw(c, x)
}

/// Evaluate a Chebyshev series at many points.
pub fn cheb_feval_many<T: Real>(c: &[T], xs: &[T]) -> Vec<T> {
    xs.iter().map(|&x| cheb_clenshaw(c, x)).collect()
}
