//! Newton-Raphson root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Newton-Raphson root-finding algorithm.
///
/// Uses the iteration `x_{n+1} = x_n - f(x_n) / f'(x_n)`, which converges
/// quadratically near a simple root. A discounted cash-flow objective is
/// smooth and monotonic in the rate for economically sane inputs, so this
/// is the primary solver for yield-to-maturity.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `df` - The derivative of the function
/// * `initial_guess` - Starting point for the iteration
/// * `config` - Tolerance and iteration budget
///
/// # Errors
///
/// Returns [`MathError::ZeroDerivative`] if the derivative vanishes at an
/// iterate, and [`MathError::ConvergenceFailed`] if the iteration budget is
/// exhausted before the residual or step size drops below tolerance.
///
/// # Example
///
/// ```rust
/// use tenor_math::solvers::{newton_raphson, SolverConfig};
///
/// // Zero-coupon: 100 / (1 + r)^2 = 90.70, so r is about 5%
/// let f = |r: f64| 100.0 / (1.0 + r).powi(2) - 90.70;
/// let df = |r: f64| -200.0 / (1.0 + r).powi(3);
///
/// let result = newton_raphson(f, df, 0.03, &SolverConfig::default()).unwrap();
/// assert!((result.root - 0.05).abs() < 1e-3);
/// ```
pub fn newton_raphson<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let mut x = initial_guess;

    for iteration in 0..config.max_iterations {
        let fx = f(x);

        if fx.abs() < config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
            });
        }

        let dfx = df(x);
        if dfx.abs() < 1e-15 {
            return Err(MathError::ZeroDerivative { x });
        }

        let step = fx / dfx;
        x -= step;

        if !x.is_finite() {
            return Err(MathError::convergence_failed(iteration + 1, fx.abs()));
        }

        if step.abs() < config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration + 1,
                residual: f(x),
            });
        }
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        f(x).abs(),
    ))
}

/// Newton-Raphson with a central-difference numerical derivative.
///
/// Used when the caller has no closed-form derivative; the yield engine
/// always has one, so this mainly serves ad-hoc callers.
///
/// # Errors
///
/// Same failure modes as [`newton_raphson`].
pub fn newton_raphson_numerical<F>(
    f: F,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let h = 1e-8;
    let df = |x: f64| (f(x + h) - f(x - h)) / (2.0 * h);
    newton_raphson(&f, df, initial_guess, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_one_year_bond_yield() {
        // 4.5 coupon + 100 principal quoted at 102.17:
        // 104.5 / (1 + r) = 102.17  =>  r = 104.5/102.17 - 1
        let f = |r: f64| 104.5 / (1.0 + r) - 102.17;
        let df = |r: f64| -104.5 / ((1.0 + r) * (1.0 + r));

        let result = newton_raphson(f, df, 0.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 104.5 / 102.17 - 1.0, epsilon = 1e-10);
        assert!(result.iterations < 10);
    }

    #[test]
    fn test_numerical_derivative() {
        let f = |x: f64| x * x - 2.0;

        let result = newton_raphson_numerical(f, 1.5, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-8);
    }

    #[test]
    fn test_zero_derivative_error() {
        let f = |x: f64| x * x * x - 1.0;
        let df = |x: f64| 3.0 * x * x;

        let result = newton_raphson(f, df, 0.0, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::ZeroDerivative { .. })));
    }

    #[test]
    fn test_iteration_budget_exhausted() {
        // No real root: x^2 + 1 never crosses zero
        let f = |x: f64| x * x + 1.0;
        let df = |x: f64| 2.0 * x;

        let result = newton_raphson(f, df, 3.0, &SolverConfig::new(1e-12, 20));

        assert!(matches!(
            result,
            Err(MathError::ConvergenceFailed { .. }) | Err(MathError::ZeroDerivative { .. })
        ));
    }
}
