//! Value types shared across the crate.
//!
//! - [`Interval`]: a validated physical interval [lo, hi]
//! - [`PointKind`]: 1st- or 2nd-kind Chebyshev points
//! - [`ChebGrid`]: points, angles and barycentric weights of one grid
//! - [`Real`]: the `f32`/`f64` element type every kernel is generic over
//!
//! # Example
//!
//! ```
//! use pde_suite::types::{ChebGrid, Interval, PointKind};
//!
//! let interval = Interval::new(-2.0, 6.0).unwrap();
//! assert_eq!(interval.center(), 2.0);
//! assert_eq!(interval.to_interval(-1.0), -2.0);
//!
//! let grid = ChebGrid::new(PointKind::Second, 5, interval);
//! assert_eq!(grid.points[0], -2.0);
//! assert_eq!(grid.points[4], 6.0);
//! ```

mod grid;
mod interval;
mod real;

pub use grid::{ChebGrid, PointKind};
pub use interval::Interval;
pub use real::Real;
