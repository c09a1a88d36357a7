//! Bounded 1D interval and the affine map onto [-1, 1].

use std::fmt;

use crate::error::{Result, SpectralError};
use crate::types::Real;

/// Closed interval [lo, hi] with `lo < hi`.
///
/// The canonical Chebyshev interval is [-1, 1]; `to_interval` sends -1 to
/// `lo` and +1 to `hi`.
///
/// # Example
///
/// ```
/// use pde_suite::types::Interval;
///
/// let dom = Interval::new(0.0, 2.0).unwrap();
/// assert_eq!(dom.length(), 2.0);
/// assert_eq!(dom.to_interval(-1.0), 0.0);
/// assert_eq!(dom.to_interval(1.0), 2.0);
/// assert_eq!(dom.from_interval(1.0), 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval<T = f64> {
    /// Lower bound
    pub lo: T,
    /// Upper bound
    pub hi: T,
}

impl<T: Real> Interval<T> {
    /// Create an interval.
    ///
    /// # Errors
    ///
    /// `InvalidDimension` if either bound is not finite or `hi <= lo`.
    pub fn new(lo: T, hi: T) -> Result<Self> {
        if !lo.is_finite() || !hi.is_finite() {
            return Err(SpectralError::InvalidDimension(format!(
                "interval bounds must be finite, got [{}, {}]",
                lo, hi
            )));
        }
        if hi <= lo {
            return Err(SpectralError::InvalidDimension(format!(
                "interval upper bound ({}) must exceed lower bound ({})",
                hi, lo
            )));
        }
        Ok(Self { lo, hi })
    }

    /// The canonical interval [-1, 1].
    pub fn canonical() -> Self {
        Self {
            lo: -T::one(),
            hi: T::one(),
        }
    }

    /// Interval length (hi - lo).
    #[inline]
    pub fn length(&self) -> T {
        self.hi - self.lo
    }

    /// Midpoint (hi + lo) / 2.
    #[inline]
    pub fn center(&self) -> T {
        T::cast(0.5) * (self.hi + self.lo)
    }

    /// Half-length (hi - lo) / 2, the Jacobian of the map from [-1, 1].
    #[inline]
    pub fn half_width(&self) -> T {
        T::cast(0.5) * (self.hi - self.lo)
    }

    /// Whether this is exactly [-1, 1].
    #[inline]
    pub fn is_canonical(&self) -> bool {
        self.lo == -T::one() && self.hi == T::one()
    }

    /// Map a canonical coordinate in [-1, 1] onto this interval.
    #[inline]
    pub fn to_interval(&self, x: T) -> T {
        self.center() + self.half_width() * x
    }

    /// Map a point of this interval back to [-1, 1].
    #[inline]
    pub fn from_interval(&self, x: T) -> T {
        (x - self.center()) / self.half_width()
    }

    /// Check if a point lies in the interval (inclusive).
    #[inline]
    pub fn contains(&self, x: T) -> bool {
        x >= self.lo && x <= self.hi
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}

impl<T: Real> Default for Interval<T> {
    fn default() -> Self {
        Self::canonical()
    }
}
