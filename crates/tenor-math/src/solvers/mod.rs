//! Root-finding algorithms.
//!
//! Two solvers cover the yield engine's needs:
//!
//! - [`newton_raphson`]: fast quadratic convergence when the derivative is
//!   available, which it always is for a discounted cash-flow objective
//! - [`bisection`]: slow but guaranteed once a sign change is bracketed,
//!   used as the fallback when Newton diverges
//!
//! Both are explicitly bounded by a [`SolverConfig`] iteration budget and
//! tolerance rather than delegating convergence policy to a library default.

mod bisection;
mod newton;

pub use bisection::bisection;
pub use newton::{newton_raphson, newton_raphson_numerical};

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_solver_config_builder() {
        let config = SolverConfig::default()
            .with_tolerance(1e-8)
            .with_max_iterations(50);

        assert!((config.tolerance - 1e-8).abs() < f64::EPSILON);
        assert_eq!(config.max_iterations, 50);
    }

    #[test]
    fn test_newton_and_bisection_agree() {
        // Par bond objective: 5% coupon over 3 years priced at par
        let f = |r: f64| {
            5.0 / (1.0 + r)
                + 5.0 / (1.0 + r).powi(2)
                + 105.0 / (1.0 + r).powi(3)
                - 100.0
        };
        let df = |r: f64| {
            -5.0 / (1.0 + r).powi(2)
                - 10.0 / (1.0 + r).powi(3)
                - 315.0 / (1.0 + r).powi(4)
        };
        let config = SolverConfig::default();

        let newton = newton_raphson(f, df, 0.03, &config).unwrap();
        let bisect = bisection(f, 0.0, 0.20, &config).unwrap();

        assert_relative_eq!(newton.root, 0.05, epsilon = 1e-9);
        assert_relative_eq!(newton.root, bisect.root, epsilon = 1e-8);
        assert!(newton.iterations <= bisect.iterations);
    }
}
