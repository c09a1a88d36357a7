//! Chebyshev grid: point kind, interval, points, angles and weights together.

use std::fmt;

use faer::Mat;

use crate::calculus::cheb_quadwts;
use crate::error::Result;
use crate::operators::bary_diffmat_unchecked;
use crate::polynomial::{bary, cheb_angles, cheb_barywts, cheb_pts};

use super::{Interval, Real};

/// Which family of Chebyshev points a grid uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointKind {
    /// Roots of T_n; excludes the interval endpoints.
    First,
    /// Extrema of T_{n-1}; includes both interval endpoints.
    Second,
}

impl fmt::Display for PointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointKind::First => write!(f, "1st kind"),
            PointKind::Second => write!(f, "2nd kind"),
        }
    }
}

/// An n-point Chebyshev grid on an interval.
///
/// The points are mapped onto `interval`; the angles and barycentric weights
/// are those of the canonical grid on [-1, 1] (barycentric weights are
/// invariant under affine maps).
///
/// # Example
///
/// ```
/// use pde_suite::types::{ChebGrid, Interval, PointKind};
///
/// let interval = Interval::new(0.0, 2.0).unwrap();
/// let grid = ChebGrid::new(PointKind::Second, 9, interval);
///
/// // ∫_0^2 x dx = 2
/// let f: Vec<f64> = grid.points.iter().map(|&x| x).collect();
/// let w = grid.quadwts();
/// let integral: f64 = w.iter().zip(f.iter()).map(|(a, b)| a * b).sum();
/// assert!((integral - 2.0).abs() < 1e-14);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ChebGrid<T = f64> {
    /// Point family
    pub kind: PointKind,
    /// Physical interval
    pub interval: Interval<T>,
    /// Points in ascending order on `interval`
    pub points: Vec<T>,
    /// Canonical angles, `cos(angles[i])` is the canonical point i
    pub angles: Vec<T>,
    /// Barycentric weights
    pub weights: Vec<T>,
}

impl<T: Real> ChebGrid<T> {
    /// Build an n-point grid of the given kind on `interval`.
    pub fn new(kind: PointKind, n: usize, interval: Interval<T>) -> Self {
        Self {
            kind,
            interval,
            points: cheb_pts(kind, n, interval),
            angles: cheb_angles(kind, n),
            weights: cheb_barywts(kind, n),
        }
    }

    /// An n-point grid on [-1, 1].
    pub fn canonical(kind: PointKind, n: usize) -> Self {
        Self::new(kind, n, Interval::canonical())
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True for the empty grid.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Differentiation matrix of order `k` in physical coordinates.
    ///
    /// Built on the canonical points with the angle-based differences, then
    /// scaled by (2 / (hi - lo))^k.
    pub fn diffmat(&self, k: usize) -> Mat<T> {
        let canonical: Vec<T> = self.angles.iter().map(|&t| t.cos()).collect();
        let mut d = bary_diffmat_unchecked(
            &canonical,
            &self.weights,
            k,
            Some(self.angles.as_slice()),
        );

        if !self.interval.is_canonical() {
            let scale = self.interval.half_width().recip().powi(k as i32);
            for j in 0..d.ncols() {
                for i in 0..d.nrows() {
                    d[(i, j)] *= scale;
                }
            }
        }
        d
    }

    /// Quadrature weights for ∫_lo^hi f(x) dx at the grid points.
    pub fn quadwts(&self) -> Vec<T> {
        let scale = self.interval.half_width();
        cheb_quadwts::<T>(self.kind, self.len())
            .into_iter()
            .map(|w| w * scale)
            .collect()
    }

    /// Evaluate the interpolant through `values` at the physical point `x0`.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if `values.len() != self.len()`, `InvalidDimension`
    /// for the empty grid.
    pub fn interpolate(&self, values: &[T], x0: T) -> Result<T> {
        bary(&self.weights, &self.points, values, x0)
    }
}
