//! Error type shared by every kernel in the crate.
//!
//! All validation happens before any buffer is written, so an `Err` never
//! leaves an operator or a caller-visible vector half-updated.

use thiserror::Error;

/// Errors raised by point generation, transforms, matrix builders and
/// finite-difference weight generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpectralError {
    /// A size, order, spacing or interval argument makes no sense.
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    /// A vector does not have the length the operator or grid expects.
    #[error("Dimension mismatch: expected length {expected}, found {found}")]
    DimensionMismatch {
        /// Length the operator was built for
        expected: usize,
        /// Length actually supplied
        found: usize,
    },

    /// Not enough stencil points for the requested derivative order.
    #[error(
        "Insufficient points for derivative order {order}: need more than {required}, found {found}"
    )]
    InsufficientPoints {
        /// Requested derivative order
        order: usize,
        /// The point count must exceed this value
        required: usize,
        /// Number of points supplied
        found: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SpectralError>;

/// Check that `found` equals `expected`.
#[inline]
pub(crate) fn check_len(expected: usize, found: usize) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(SpectralError::DimensionMismatch { expected, found })
    }
}
