//! Finite-difference stencils on arbitrary grids.
//!
//! This module provides:
//! - Fornberg weights for any derivative order (`fornberg_calculate_wts`)
//! - Hermite weights using values and first derivatives (`fornberg_calculate_hermite_wts`)
//! - Kreiss–Oliger dissipation (`dissipation_order`, `dissipation_wts`)
//! - Uniform grids (`fdm_grid`)
//!
//! # Example
//!
//! ```
//! use pde_suite::finite_difference::{fdm_grid, fornberg_calculate_wts};
//!
//! // Fourth-order central second derivative
//! let x = fdm_grid(-2.0_f64, 2.0, 1.0).unwrap();
//! let w = fornberg_calculate_wts(2, 0.0, &x).unwrap();
//! let expected = [-1.0 / 12.0, 4.0 / 3.0, -2.5, 4.0 / 3.0, -1.0 / 12.0];
//! for (a, b) in w.iter().zip(expected.iter()) {
//!     assert!((a - b).abs() < 1e-14);
//! }
//! ```

mod dissipation;
mod fornberg;
mod grid;

pub use dissipation::{dissipation_order, dissipation_wts};
pub use fornberg::{fornberg_calculate_hermite_wts, fornberg_calculate_wts};
pub use grid::fdm_grid;
