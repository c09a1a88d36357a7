//! # pde-suite
//!
//! Chebyshev spectral kernels and finite-difference stencils for PDE solvers.
//!
//! This crate provides the core building blocks for spectral collocation:
//! - Chebyshev points of the 1st and 2nd kind, on [-1, 1] or any interval
//! - Barycentric weights and interpolation
//! - FFT-based transforms between values and coefficients
//! - Analysis, synthesis, differentiation and integration matrices
//! - Clenshaw–Curtis and Fejér quadrature, antiderivatives of series
//! - Clenshaw evaluation of Chebyshev series
//! - Fornberg finite-difference weights and Kreiss–Oliger dissipation
//!
//! Every kernel is generic over [`Real`] (`f32` or `f64`); types default
//! to `f64`.
//!
//! ## Example
//!
//! ```
//! use pde_suite::{cheb2_diffmat, cheb2_pts, cheb2_quadwts};
//!
//! let n = 12;
//! let x = cheb2_pts::<f64>(n);
//! let f: Vec<f64> = x.iter().map(|&xi| xi.sin()).collect();
//!
//! // Derivative at the nodes
//! let d = cheb2_diffmat::<f64>(n, 1);
//! for i in 0..n {
//!     let df: f64 = (0..n).map(|j| d[(i, j)] * f[j]).sum();
//!     assert!((df - x[i].cos()).abs() < 1e-9);
//! }
//!
//! // ∫ sin = 0 on a symmetric interval
//! let w = cheb2_quadwts::<f64>(n);
//! let integral: f64 = w.iter().zip(f.iter()).map(|(w, f)| w * f).sum();
//! assert!(integral.abs() < 1e-14);
//! ```

pub mod calculus;
pub mod error;
pub mod finite_difference;
pub mod operators;
pub mod polynomial;
pub mod transform;
pub mod types;

// Re-export main types for convenience
pub use error::{Result, SpectralError};
pub use types::{ChebGrid, Interval, PointKind, Real};

// Points, weights and evaluation
pub use polynomial::{
    bary, bary_weights, cheb_angles, cheb_barywts, cheb_clenshaw, cheb_feval, cheb_feval_many,
    cheb_pts, cheb1_angles, cheb1_barywts, cheb1_pts, cheb1_pts_mapped, cheb2_angles,
    cheb2_barywts, cheb2_pts, cheb2_pts_mapped,
};

// Transforms
pub use transform::{
    Cheb1Coeffs2ValsOp, Cheb1Vals2CoeffsOp, Cheb2Coeffs2ValsOp, Cheb2Vals2CoeffsOp, ChebTransform,
    Parity, TransformConfig, apply_batch, cheb1_coeffs2vals, cheb1_vals2coeffs, cheb2_coeffs2vals,
    cheb2_vals2coeffs,
};

// Matrices
pub use operators::{
    bary_diffmat, cheb_coeffs_diff, cheb_coeffs_diffmat, cheb_rectdiff1, cheb_rectdiff2,
    cheb_rectint, cheb_rectint_mapped, cheb1_amat, cheb1_diffmat, cheb1_smat, cheb2_amat,
    cheb2_diffmat, cheb2_smat,
};

// Quadrature and integration
pub use calculus::{
    ChebCumsumOp, cheb_coeffs_cumsummat, cheb_coeffs_cumsummat_mapped, cheb_cumsum, cheb_quadwts,
    cheb1_quadwts, cheb2_quadwts,
};

// Finite differences
pub use finite_difference::{
    dissipation_order, dissipation_wts, fdm_grid, fornberg_calculate_hermite_wts,
    fornberg_calculate_wts,
};
