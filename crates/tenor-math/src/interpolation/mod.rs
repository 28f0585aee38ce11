//! Interpolation over sampled term structures.
//!
//! The yield curve stores one rate per quoted maturity; everything between
//! (and, by policy, beyond) those pillars is read through an interpolator.

mod linear;

pub use linear::LinearInterpolator;

use crate::error::MathResult;

/// Trait for interpolation methods.
pub trait Interpolator {
    /// Returns the interpolated value at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MathError::ExtrapolationNotAllowed`] when `x` is
    /// outside the data range and extrapolation is disabled.
    fn interpolate(&self, x: f64) -> MathResult<f64>;

    /// Returns true if extrapolation beyond the data range is allowed.
    fn allows_extrapolation(&self) -> bool {
        false
    }

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64;

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64;

    /// Checks if `x` is within the interpolation range.
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}
