//! Yield-to-maturity solver.
//!
//! Inverts the discounting engine: given an observed market price, finds
//! the flat rate whose present value reproduces it. Newton-Raphson with an
//! analytic derivative does the work; a wide bisection bracket catches the
//! quotes Newton runs away from.

use tenor_math::solvers::{bisection, newton_raphson, SolverConfig};
use tenor_math::MathError;

use crate::cashflows::CashFlowSchedule;
use crate::error::{BondError, BondResult};

/// The band of economically plausible yields. Doubles as the bisection
/// fallback bracket; a Newton root outside it is treated as divergence.
const PLAUSIBLE_YIELDS: (f64, f64) = (-0.5, 2.0);

/// How the solver seeds its initial guess.
///
/// Short-dated and long-dated bonds converge from different seeds in
/// practice, so the policy is configurable per maturity bucket rather than
/// a single global constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GuessPolicy {
    /// The same seed for every maturity.
    Fixed(f64),
    /// One seed for maturities up to `threshold_years` (inclusive),
    /// another beyond it.
    ByMaturity {
        /// Seed for maturities `<= threshold_years`.
        short: f64,
        /// Seed for maturities `> threshold_years`.
        long: f64,
        /// Bucket boundary in whole years.
        threshold_years: u32,
    },
}

impl GuessPolicy {
    /// Returns the seed for the given maturity.
    #[must_use]
    pub fn seed_for(&self, maturity_years: u32) -> f64 {
        match self {
            Self::Fixed(seed) => *seed,
            Self::ByMaturity {
                short,
                long,
                threshold_years,
            } => {
                if maturity_years <= *threshold_years {
                    *short
                } else {
                    *long
                }
            }
        }
    }
}

impl Default for GuessPolicy {
    fn default() -> Self {
        Self::Fixed(0.05)
    }
}

/// Result of a yield-to-maturity calculation.
#[derive(Debug, Clone, Copy)]
pub struct YtmResult {
    /// The solved yield (as a fraction, e.g. 0.05 for 5%).
    pub ytm: f64,
    /// Number of solver iterations used.
    pub iterations: u32,
    /// Final residual (price error at the solved yield).
    pub residual: f64,
}

/// Yield-to-maturity solver.
///
/// # Example
///
/// ```rust
/// use tenor_bonds::ytm::YtmSolver;
///
/// // 1-year bond, 4.5% coupon, quoted at 102.17:
/// // the yield solves 104.5 / (1 + r) = 102.17
/// let solver = YtmSolver::new();
/// let result = solver.solve(100.0, 0.045, 1, 102.17).unwrap();
/// assert!((result.ytm - (104.5 / 102.17 - 1.0)).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct YtmSolver {
    config: SolverConfig,
    guess: GuessPolicy,
}

impl Default for YtmSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl YtmSolver {
    /// Creates a solver with the default tolerance (1e-10), iteration
    /// budget (100), and a flat 5% initial seed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SolverConfig::default(),
            guess: GuessPolicy::default(),
        }
    }

    /// Sets the convergence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config = self.config.with_tolerance(tolerance);
        self
    }

    /// Sets the maximum iteration budget.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config = self.config.with_max_iterations(max_iterations);
        self
    }

    /// Sets the initial-guess policy.
    #[must_use]
    pub fn with_guess_policy(mut self, guess: GuessPolicy) -> Self {
        self.guess = guess;
        self
    }

    /// Returns the solver's configuration.
    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves for the flat rate `r` that reprices the bond to its market
    /// quote:
    ///
    /// `sum_t coupon / (1+r)^t + nominal / (1+r)^n = market_price`
    ///
    /// # Errors
    ///
    /// - [`BondError::InvalidInput`] when `maturity_years` is zero, the
    ///   market price is not positive, or schedule generation rejects the
    ///   bond terms — checked before any solver work
    /// - [`BondError::NoConvergence`] when Newton and the bisection
    ///   fallback both exhaust the iteration budget; callers bootstrapping
    ///   a curve should treat this as a per-bond failure, not a fatal one
    pub fn solve(
        &self,
        nominal: f64,
        coupon_rate: f64,
        maturity_years: u32,
        market_price: f64,
    ) -> BondResult<YtmResult> {
        if !market_price.is_finite() || market_price <= 0.0 {
            return Err(BondError::invalid_input(format!(
                "market_price must be positive, got {market_price}"
            )));
        }
        let schedule = CashFlowSchedule::generate(nominal, coupon_rate, maturity_years)?;
        self.solve_schedule(&schedule, market_price, self.guess.seed_for(maturity_years))
    }

    /// Solves for the flat rate repricing an arbitrary schedule, seeded
    /// with an explicit initial guess.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`YtmSolver::solve`].
    pub fn solve_schedule(
        &self,
        schedule: &CashFlowSchedule,
        market_price: f64,
        initial_guess: f64,
    ) -> BondResult<YtmResult> {
        if !market_price.is_finite() || market_price <= 0.0 {
            return Err(BondError::invalid_input(format!(
                "market_price must be positive, got {market_price}"
            )));
        }

        // PV(r) - price, and its derivative in r.
        let objective = |r: f64| {
            schedule
                .iter()
                .map(|cf| cf.amount / (1.0 + r).powi(cf.period as i32))
                .sum::<f64>()
                - market_price
        };
        let derivative = |r: f64| {
            schedule
                .iter()
                .map(|cf| {
                    -f64::from(cf.period) * cf.amount / (1.0 + r).powi(cf.period as i32 + 1)
                })
                .sum::<f64>()
        };

        let (lo, hi) = PLAUSIBLE_YIELDS;
        let newton_err = match newton_raphson(&objective, &derivative, initial_guess, &self.config)
        {
            Ok(result) if result.root > lo && result.root < hi => {
                return Ok(YtmResult {
                    ytm: result.root,
                    iterations: result.iterations,
                    residual: result.residual,
                });
            }
            // A root outside the plausible band means Newton ran off to a
            // spurious solution; fall through to the bracketed search.
            Ok(result) => MathError::convergence_failed(result.iterations, result.residual.abs()),
            Err(err) => err,
        };

        match bisection(&objective, lo, hi, &self.config) {
            Ok(result) => Ok(YtmResult {
                ytm: result.root,
                iterations: result.iterations,
                residual: result.residual,
            }),
            Err(MathError::ConvergenceFailed {
                iterations,
                residual,
            }) => Err(BondError::no_convergence(iterations, residual)),
            // No sign change in the bracket: the quote admits no
            // economically sane root. Surface the Newton failure.
            Err(_) => Err(match newton_err {
                MathError::ConvergenceFailed {
                    iterations,
                    residual,
                } => BondError::no_convergence(iterations, residual),
                _ => BondError::no_convergence(
                    self.config.max_iterations,
                    objective(initial_guess).abs(),
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::present_value_flat;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_one_year_algebraic_example() {
        // 4.5/(1+r) + 100/(1+r) = 102.17 => r = 104.5/102.17 - 1
        let solver = YtmSolver::new().with_guess_policy(GuessPolicy::Fixed(0.0));
        let result = solver.solve(100.0, 0.045, 1, 102.17).unwrap();

        assert_relative_eq!(result.ytm, 104.5 / 102.17 - 1.0, epsilon = 1e-10);
        assert!(result.residual.abs() < 1e-8);
    }

    #[test]
    fn test_par_bond_yield_equals_coupon() {
        let solver = YtmSolver::new();
        let result = solver.solve(100.0, 0.05, 10, 100.0).unwrap();

        assert_relative_eq!(result.ytm, 0.05, epsilon = 1e-9);
    }

    #[test]
    fn test_discount_bond_yield_above_coupon() {
        let solver = YtmSolver::new();
        let result = solver.solve(100.0, 0.01, 5, 93.65).unwrap();

        assert!(result.ytm > 0.01);
    }

    #[test]
    fn test_premium_bond_yield_below_coupon() {
        let solver = YtmSolver::new();
        let result = solver.solve(100.0, 0.05, 2, 105.22).unwrap();

        assert!(result.ytm < 0.05);
    }

    #[test]
    fn test_round_trip_known_rate() {
        let schedule = CashFlowSchedule::generate(100.0, 0.04, 7).unwrap();
        let price = present_value_flat(&schedule, 0.032).unwrap();

        let solver = YtmSolver::new();
        let result = solver.solve(100.0, 0.04, 7, price).unwrap();

        assert_relative_eq!(result.ytm, 0.032, epsilon = 1e-8);
    }

    #[test]
    fn test_guess_policy_buckets() {
        let policy = GuessPolicy::ByMaturity {
            short: 0.0,
            long: 0.05,
            threshold_years: 2,
        };
        assert_relative_eq!(policy.seed_for(1), 0.0);
        assert_relative_eq!(policy.seed_for(2), 0.0);
        assert_relative_eq!(policy.seed_for(3), 0.05);

        // Same answer from both buckets on a well-behaved bond
        let short_seeded = YtmSolver::new().with_guess_policy(policy);
        let long_seeded = YtmSolver::new();
        let a = short_seeded.solve(100.0, 0.03, 3, 101.96).unwrap();
        let b = long_seeded.solve(100.0, 0.03, 3, 101.96).unwrap();
        assert_relative_eq!(a.ytm, b.ytm, epsilon = 1e-8);
    }

    #[test]
    fn test_zero_maturity_rejected_before_solving() {
        let solver = YtmSolver::new();
        let result = solver.solve(100.0, 0.04, 0, 100.0);
        assert!(matches!(result, Err(BondError::InvalidInput { .. })));
    }

    #[test]
    fn test_non_positive_price_rejected() {
        let solver = YtmSolver::new();
        assert!(matches!(
            solver.solve(100.0, 0.04, 5, 0.0),
            Err(BondError::InvalidInput { .. })
        ));
        assert!(matches!(
            solver.solve(100.0, 0.04, 5, -10.0),
            Err(BondError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_pathological_quote_reports_no_convergence() {
        // Price far above any attainable PV on the fallback bracket
        let solver = YtmSolver::new().with_max_iterations(30);
        let result = solver.solve(100.0, 0.01, 1, 5000.0);

        assert!(matches!(result, Err(BondError::NoConvergence { .. })));
    }

    #[test]
    fn test_bisection_fallback_recovers_bad_seed() {
        // A seed near -100% sends Newton into the singularity; the
        // bracketed fallback still finds the root.
        let schedule = CashFlowSchedule::generate(100.0, 0.04, 5).unwrap();
        let price = present_value_flat(&schedule, 0.03).unwrap();

        let solver = YtmSolver::new();
        let result = solver.solve_schedule(&schedule, price, -0.999999).unwrap();

        assert_relative_eq!(result.ytm, 0.03, epsilon = 1e-6);
    }

    proptest! {
        /// Round-trip property: solving the yield of a schedule priced at
        /// a known flat rate recovers that rate.
        #[test]
        fn prop_solve_recovers_pricing_rate(
            nominal in 50.0f64..1000.0,
            coupon_rate in 0.0f64..0.12,
            maturity in 1u32..30,
            rate in -0.02f64..0.15,
        ) {
            let schedule = CashFlowSchedule::generate(nominal, coupon_rate, maturity).unwrap();
            let price = present_value_flat(&schedule, rate).unwrap();

            let solver = YtmSolver::new();
            let result = solver.solve_schedule(&schedule, price, 0.05).unwrap();

            prop_assert!((result.ytm - rate).abs() < 1e-6);
        }
    }
}
