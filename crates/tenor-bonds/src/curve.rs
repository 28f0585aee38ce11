//! Yield-curve bootstrapping and interpolation.
//!
//! The builder walks a set of bond records, solves each one's yield to
//! maturity, and assembles the results into a term structure keyed by
//! Act/360 years to maturity. One bad quote rejects that bond, not the
//! curve: per-bond failures are collected and reported alongside the
//! partial curve.

use serde::{Deserialize, Serialize};

use tenor_core::daycounts::{Act360, DayCount};
use tenor_core::types::Date;

use crate::cashflows::CashFlowSchedule;
use crate::error::{BondError, BondResult};
use crate::pricing::present_value_flat;
use crate::ytm::YtmSolver;

use tenor_math::interpolation::{Interpolator, LinearInterpolator};

/// A bond record as produced by the (external) data loader.
///
/// Optional fields drive the builder's filter: a record without both a
/// maturity date and an observed clean price is skipped, not errored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondRecord {
    /// Face value repaid at maturity.
    pub nominal: f64,
    /// Periodic coupon rate as a fraction.
    pub coupon_rate: f64,
    /// Maturity date, if quoted.
    pub maturity: Option<Date>,
    /// Observed clean market price, if quoted.
    pub clean_price: Option<f64>,
    /// Last coupon (or issue) date, if known. Used for accrual only.
    pub last_coupon: Option<Date>,
}

impl BondRecord {
    /// Creates a fully-quoted record.
    #[must_use]
    pub fn new(nominal: f64, coupon_rate: f64, maturity: Date, clean_price: f64) -> Self {
        Self {
            nominal,
            coupon_rate,
            maturity: Some(maturity),
            clean_price: Some(clean_price),
            last_coupon: None,
        }
    }

    /// True when the record carries everything bootstrapping needs.
    #[must_use]
    pub fn is_quotable(&self) -> bool {
        self.maturity.is_some() && self.clean_price.is_some()
    }
}

/// A single (maturity-in-years, yield) pillar of the curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Years to maturity (Act/360).
    pub maturity: f64,
    /// Solved zero/yield rate at that maturity.
    pub rate: f64,
}

/// A term structure of yields, ordered by maturity.
///
/// Built once per valuation run from the full bond set, then queried
/// read-only through [`YieldCurve::rate_at`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YieldCurve {
    points: Vec<CurvePoint>,
}

/// Two maturities closer than this are the same pillar.
const MATURITY_EPS: f64 = 1e-9;

impl YieldCurve {
    /// Creates an empty curve.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a curve from unordered points.
    ///
    /// Points are sorted by maturity; duplicate maturities follow the
    /// insert policy (last write wins).
    #[must_use]
    pub fn from_points(points: impl IntoIterator<Item = CurvePoint>) -> Self {
        let mut curve = Self::new();
        for point in points {
            curve.insert(point);
        }
        curve
    }

    /// Inserts a pillar, keeping the curve ordered by maturity.
    ///
    /// Duplicate maturities are a data-quality problem; the policy here is
    /// **last write wins**: re-quoting an existing pillar replaces its
    /// rate.
    pub fn insert(&mut self, point: CurvePoint) {
        match self
            .points
            .binary_search_by(|p| {
                p.maturity
                    .partial_cmp(&point.maturity)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
        {
            Ok(i) => self.points[i] = point,
            Err(i) => {
                // binary_search misses near-equal floats; treat anything
                // within epsilon of a neighbour as the same pillar.
                if i < self.points.len()
                    && (self.points[i].maturity - point.maturity).abs() < MATURITY_EPS
                {
                    self.points[i] = point;
                } else if i > 0
                    && (self.points[i - 1].maturity - point.maturity).abs() < MATURITY_EPS
                {
                    self.points[i - 1] = point;
                } else {
                    self.points.insert(i, point);
                }
            }
        }
    }

    /// Returns the pillars in maturity order.
    #[must_use]
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Returns the number of pillars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the curve has no pillars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the yield at an arbitrary maturity.
    ///
    /// Piecewise-linear between pillars. Queries beyond either endpoint
    /// **extrapolate** along the edge segment's slope instead of failing;
    /// rates read far outside the quoted range are correspondingly
    /// low-confidence, and it is the caller's job to care.
    ///
    /// # Errors
    ///
    /// Returns [`BondError::InsufficientData`] when the curve has fewer
    /// than two pillars.
    pub fn rate_at(&self, maturity: f64) -> BondResult<f64> {
        let (xs, ys): (Vec<f64>, Vec<f64>) =
            self.points.iter().map(|p| (p.maturity, p.rate)).unzip();
        let interp = LinearInterpolator::new(xs, ys)?.with_extrapolation();
        Ok(interp.interpolate(maturity)?)
    }

    /// Prices a bond at a non-quoted, possibly fractional maturity.
    ///
    /// Reads a flat rate off the curve at `target_years`, then prices the
    /// bond as a flat-rate instrument of `target_years` **truncated to a
    /// whole number of periods**. The truncation discards fractional
    /// years; it is inherited reference behavior, kept deliberately rather
    /// than fixed.
    ///
    /// # Errors
    ///
    /// Returns [`BondError::InsufficientData`] on a curve with fewer than
    /// two pillars and [`BondError::InvalidInput`] when the truncated
    /// maturity is zero or the bond terms are degenerate.
    pub fn price_at(&self, nominal: f64, coupon_rate: f64, target_years: f64) -> BondResult<f64> {
        let rate = self.rate_at(target_years)?;
        if !target_years.is_finite() || target_years < 1.0 {
            return Err(BondError::invalid_input(format!(
                "target maturity {target_years} truncates to zero periods"
            )));
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let periods = target_years as u32;
        let schedule = CashFlowSchedule::generate(nominal, coupon_rate, periods)?;
        present_value_flat(&schedule, rate)
    }
}

/// A bond the builder could not bootstrap, and why.
#[derive(Debug, Clone)]
pub struct RejectedBond {
    /// Index of the record in the input slice.
    pub index: usize,
    /// The per-bond failure.
    pub error: BondError,
}

/// Outcome of a curve bootstrap: the (possibly partial) curve plus every
/// per-bond failure that was collected along the way.
///
/// Nothing is silently swallowed: a bond either contributes a pillar,
/// fails the quotable filter (missing price or maturity, by design), or
/// appears in `rejected`.
#[derive(Debug, Clone)]
pub struct CurveBootstrap {
    /// The assembled curve.
    pub curve: YieldCurve,
    /// Bonds excluded by per-bond errors, in input order.
    pub rejected: Vec<RejectedBond>,
}

impl CurveBootstrap {
    /// True when every quotable bond contributed a pillar.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Bootstraps a [`YieldCurve`] from bond records.
///
/// # Example
///
/// ```rust
/// use tenor_bonds::curve::{BondRecord, CurveBuilder};
/// use tenor_core::types::Date;
///
/// let valuation = Date::from_ymd(2025, 1, 16).unwrap();
/// let bonds = vec![
///     BondRecord::new(100.0, 0.045, Date::from_ymd(2026, 1, 16).unwrap(), 102.17),
///     BondRecord::new(100.0, 0.05, Date::from_ymd(2027, 1, 16).unwrap(), 105.22),
///     BondRecord::new(100.0, 0.03, Date::from_ymd(2028, 1, 16).unwrap(), 101.96),
/// ];
///
/// let result = CurveBuilder::new(valuation).build(&bonds);
/// assert!(result.is_complete());
/// assert_eq!(result.curve.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct CurveBuilder {
    valuation_date: Date,
    solver: YtmSolver,
}

impl CurveBuilder {
    /// Creates a builder for the given valuation date with a default
    /// yield solver.
    #[must_use]
    pub fn new(valuation_date: Date) -> Self {
        Self {
            valuation_date,
            solver: YtmSolver::new(),
        }
    }

    /// Replaces the yield solver (tolerance, iteration budget, guess
    /// policy).
    #[must_use]
    pub fn with_solver(mut self, solver: YtmSolver) -> Self {
        self.solver = solver;
        self
    }

    /// Bootstraps the curve.
    ///
    /// For each record with both a maturity and a clean price, computes
    /// Act/360 years to maturity from the valuation date, truncates to
    /// whole years for the solve, and inserts the solved (maturity, yield)
    /// pillar. Records missing either quote are skipped. `InvalidInput`
    /// and `NoConvergence` failures are collected per bond and the
    /// remaining bonds still contribute; a partial curve is a valid
    /// outcome.
    #[must_use]
    pub fn build(&self, bonds: &[BondRecord]) -> CurveBootstrap {
        let day_count = Act360;
        let mut curve = YieldCurve::new();
        let mut rejected = Vec::new();

        for (index, bond) in bonds.iter().enumerate() {
            let (Some(maturity), Some(price)) = (bond.maturity, bond.clean_price) else {
                log::debug!("bond {index}: missing maturity or price, skipped");
                continue;
            };

            let years = day_count.year_fraction(self.valuation_date, maturity);
            match self.solve_pillar(bond, years, price) {
                Ok(rate) => {
                    log::debug!("bond {index}: {years:.4}y -> {rate:.6}");
                    curve.insert(CurvePoint {
                        maturity: years,
                        rate,
                    });
                }
                Err(error) => {
                    log::warn!("bond {index} rejected: {error}");
                    rejected.push(RejectedBond { index, error });
                }
            }
        }

        CurveBootstrap { curve, rejected }
    }

    fn solve_pillar(&self, bond: &BondRecord, years: f64, price: f64) -> BondResult<f64> {
        if years < 1.0 {
            return Err(BondError::invalid_input(format!(
                "maturity {years:.4}y truncates to zero coupon periods"
            )));
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let whole_years = years as u32;

        let result = self
            .solver
            .solve(bond.nominal, bond.coupon_rate, whole_years, price)?;
        Ok(result.ytm)
    }
}
