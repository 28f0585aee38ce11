//! Piecewise-linear interpolation.

use crate::error::{MathError, MathResult};
use crate::interpolation::Interpolator;

/// Piecewise-linear interpolation between data points.
///
/// Connects consecutive points with straight lines. With extrapolation
/// enabled, queries beyond either endpoint extend the edge segment's slope
/// rather than failing.
///
/// # Example
///
/// ```rust
/// use tenor_math::interpolation::{Interpolator, LinearInterpolator};
///
/// let maturities = vec![1.0, 2.0, 3.0];
/// let rates = vec![0.02, 0.03, 0.035];
///
/// let interp = LinearInterpolator::new(maturities, rates).unwrap();
/// let rate = interp.interpolate(1.5).unwrap();
/// assert!((rate - 0.025).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
    allow_extrapolation: bool,
}

impl LinearInterpolator {
    /// Creates a new linear interpolator.
    ///
    /// # Arguments
    ///
    /// * `xs` - X coordinates, strictly increasing
    /// * `ys` - Y coordinates, same length as `xs`
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InsufficientData`] with fewer than 2 points and
    /// [`MathError::InvalidInput`] on mismatched lengths or unsorted `xs`.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        if xs.len() < 2 {
            return Err(MathError::insufficient_data(2, xs.len()));
        }
        if xs.len() != ys.len() {
            return Err(MathError::invalid_input(format!(
                "xs and ys must have same length: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }
        if xs.windows(2).any(|w| w[1] <= w[0]) {
            return Err(MathError::invalid_input(
                "x values must be strictly increasing",
            ));
        }

        Ok(Self {
            xs,
            ys,
            allow_extrapolation: false,
        })
    }

    /// Enables linear extrapolation beyond the data range.
    #[must_use]
    pub fn with_extrapolation(mut self) -> Self {
        self.allow_extrapolation = true;
        self
    }

    /// Finds the index i such that the segment [xs[i], xs[i+1]] covers x,
    /// clamped to the edge segments for out-of-range queries.
    fn find_segment(&self, x: f64) -> usize {
        match self
            .xs
            .binary_search_by(|probe| probe.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal))
        {
            Ok(i) => i.min(self.xs.len() - 2),
            Err(i) => i.saturating_sub(1).min(self.xs.len() - 2),
        }
    }
}

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        if !self.allow_extrapolation && !self.in_range(x) {
            return Err(MathError::ExtrapolationNotAllowed {
                x,
                min: self.min_x(),
                max: self.max_x(),
            });
        }

        let i = self.find_segment(x);
        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (y0, y1) = (self.ys[i], self.ys[i + 1]);

        let t = (x - x0) / (x1 - x0);
        Ok(y0 + t * (y1 - y0))
    }

    fn allows_extrapolation(&self) -> bool {
        self.allow_extrapolation
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exact_points() {
        let xs = vec![1.0, 2.0, 3.0];
        let ys = vec![0.02, 0.03, 0.035];

        let interp = LinearInterpolator::new(xs.clone(), ys.clone()).unwrap();

        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_relative_eq!(interp.interpolate(*x).unwrap(), *y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_midpoints() {
        let xs = vec![0.0, 1.0, 2.0];
        let ys = vec![0.0, 2.0, 4.0];

        let interp = LinearInterpolator::new(xs, ys).unwrap();

        assert_relative_eq!(interp.interpolate(0.5).unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(interp.interpolate(1.5).unwrap(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_extrapolation_disabled() {
        let xs = vec![1.0, 2.0];
        let ys = vec![0.02, 0.03];

        let interp = LinearInterpolator::new(xs, ys).unwrap();

        assert!(matches!(
            interp.interpolate(0.5),
            Err(MathError::ExtrapolationNotAllowed { .. })
        ));
        assert!(interp.interpolate(2.5).is_err());
    }

    #[test]
    fn test_extrapolation_extends_edge_slope() {
        let xs = vec![1.0, 2.0, 4.0];
        let ys = vec![0.02, 0.03, 0.05];

        let interp = LinearInterpolator::new(xs, ys).unwrap().with_extrapolation();

        // Below: slope 0.01/year from the first segment
        assert_relative_eq!(interp.interpolate(0.0).unwrap(), 0.01, epsilon = 1e-12);
        // Above: slope 0.01/year from the last segment
        assert_relative_eq!(interp.interpolate(5.0).unwrap(), 0.06, epsilon = 1e-12);
    }

    #[test]
    fn test_insufficient_points() {
        let result = LinearInterpolator::new(vec![1.0], vec![0.02]);
        assert!(matches!(result, Err(MathError::InsufficientData { .. })));
    }

    #[test]
    fn test_unsorted_rejected() {
        let result = LinearInterpolator::new(vec![2.0, 1.0], vec![0.03, 0.02]);
        assert!(matches!(result, Err(MathError::InvalidInput { .. })));
    }

    #[test]
    fn test_duplicate_x_rejected() {
        let result = LinearInterpolator::new(vec![1.0, 1.0, 2.0], vec![0.02, 0.02, 0.03]);
        assert!(result.is_err());
    }
}
