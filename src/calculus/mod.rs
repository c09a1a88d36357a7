//! Integration of Chebyshev interpolants.
//!
//! This module provides:
//! - Fejér and Clenshaw–Curtis quadrature weights (`cheb1_quadwts`, `cheb2_quadwts`)
//! - The antiderivative operator `ChebCumsumOp` and its wrapper `cheb_cumsum`
//! - Coefficient-space integration matrices (`cheb_coeffs_cumsummat`)
//!
//! # Example
//!
//! ```
//! use pde_suite::calculus::{cheb2_quadwts, cheb_cumsum};
//! use pde_suite::polynomial::{cheb2_pts, cheb_clenshaw};
//!
//! // ∫_{-1}^{1} x^2 dx two ways
//! let n = 5;
//! let w = cheb2_quadwts::<f64>(n);
//! let by_weights: f64 = cheb2_pts::<f64>(n).iter().zip(w.iter()).map(|(x, w)| w * x * x).sum();
//!
//! let antiderivative = cheb_cumsum(&[0.5_f64, 0.0, 0.5]);
//! let by_series = cheb_clenshaw(&antiderivative, 1.0);
//!
//! assert!((by_weights - 2.0 / 3.0).abs() < 1e-14);
//! assert!((by_series - 2.0 / 3.0).abs() < 1e-14);
//! ```

mod cumsum;
mod quadrature;

pub use cumsum::{ChebCumsumOp, cheb_coeffs_cumsummat, cheb_coeffs_cumsummat_mapped, cheb_cumsum};
pub use quadrature::{cheb_quadwts, cheb1_quadwts, cheb2_quadwts};
