//! Dense matrix forms of the Chebyshev operators.
//!
//! This module provides:
//! - Analysis/synthesis matrices (`cheb1_amat`, `cheb2_smat`, ...)
//! - Barycentric differentiation matrices on arbitrary points (`bary_diffmat`)
//! - Chebyshev differentiation matrices of any order (`cheb1_diffmat`, `cheb2_diffmat`)
//! - Coefficient-space differentiation (`cheb_coeffs_diff`, `cheb_coeffs_diffmat`)
//! - Rectangular differentiation/integration matrices (`cheb_rectdiff1`, `cheb_rectint`, ...)
//!
//! All matrices are `faer::Mat<T>` for `T: Real`. Multiplying them against value or
//! coefficient vectors is left to the caller.

mod differentiation;
mod rectangular;
mod synthesis;

pub use differentiation::{
    bary_diffmat, cheb_coeffs_diff, cheb_coeffs_diffmat, cheb1_diffmat, cheb2_diffmat,
};
pub use rectangular::{cheb_rectdiff1, cheb_rectdiff2, cheb_rectint, cheb_rectint_mapped};
pub use synthesis::{cheb1_amat, cheb1_smat, cheb2_amat, cheb2_smat};

pub(crate) use differentiation::bary_diffmat_unchecked;
