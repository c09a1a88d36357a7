//! Chebyshev point sets, barycentric weights and series evaluation.
//!
//! This module provides:
//! - Chebyshev points and angles of the 1st and 2nd kind
//! - Interval-mapped point sets
//! - Barycentric weights (closed form for Chebyshev points, generic otherwise)
//! - Barycentric interpolation
//! - Clenshaw evaluation of coefficient series

mod barycentric;
mod clenshaw;
mod points;

pub use barycentric::{bary, bary_weights, cheb_barywts, cheb1_barywts, cheb2_barywts};
pub use clenshaw::{cheb_clenshaw, cheb_feval, cheb_feval_many};
pub use points::{
    cheb_angles, cheb_pts, cheb1_angles, cheb1_pts, cheb1_pts_mapped, cheb2_angles, cheb2_pts,
    cheb2_pts_mapped,
};
