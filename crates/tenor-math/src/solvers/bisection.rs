//! Bisection root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Bisection root-finding algorithm.
///
/// Repeatedly halves a bracketing interval, keeping the half that contains
/// the sign change. Linear convergence, but it cannot diverge, which makes
/// it the fallback when Newton-Raphson runs away from a pathological quote.
///
/// Requires `f(a)` and `f(b)` to have opposite signs.
///
/// # Errors
///
/// Returns [`MathError::InvalidBracket`] when the endpoints do not bracket
/// a root, and [`MathError::ConvergenceFailed`] if the iteration budget is
/// exhausted.
///
/// # Example
///
/// ```rust
/// use tenor_math::solvers::{bisection, SolverConfig};
///
/// let f = |r: f64| 104.5 / (1.0 + r) - 102.17;
///
/// let result = bisection(f, -0.5, 1.0, &SolverConfig::default()).unwrap();
/// assert!((f(result.root)).abs() < 1e-8);
/// ```
pub fn bisection<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let mut lo = a.min(b);
    let mut hi = a.max(b);

    let mut f_lo = f(lo);
    let f_hi = f(hi);

    if f_lo * f_hi > 0.0 {
        return Err(MathError::InvalidBracket {
            a: lo,
            b: hi,
            fa: f_lo,
            fb: f_hi,
        });
    }

    if f_lo.abs() < config.tolerance {
        return Ok(SolverResult {
            root: lo,
            iterations: 0,
            residual: f_lo,
        });
    }
    if f_hi.abs() < config.tolerance {
        return Ok(SolverResult {
            root: hi,
            iterations: 0,
            residual: f_hi,
        });
    }

    for iteration in 0..config.max_iterations {
        let mid = (lo + hi) / 2.0;
        let f_mid = f(mid);

        if f_mid.abs() < config.tolerance || (hi - lo) / 2.0 < config.tolerance {
            return Ok(SolverResult {
                root: mid,
                iterations: iteration + 1,
                residual: f_mid,
            });
        }

        if f_mid * f_lo < 0.0 {
            hi = mid;
        } else {
            lo = mid;
            f_lo = f_mid;
        }
    }

    let mid = (lo + hi) / 2.0;
    Err(MathError::convergence_failed(
        config.max_iterations,
        f(mid).abs(),
    ))
}
