//! Discounting engine.
//!
//! One present-value contract parameterized over a [`RateSource`]: a flat
//! scalar rate or a per-period term structure. The two reference pricing
//! loops differ only in where the rate comes from, so they collapse into a
//! single function here, with named wrappers for each entry point.

use serde::{Deserialize, Serialize};

use crate::cashflows::CashFlowSchedule;
use crate::error::{BondError, BondResult};

/// Where the discount rate for each period comes from.
///
/// The engine never mutates the source; a `PerPeriod` sequence longer than
/// the schedule is fine (extra entries are ignored), a shorter one is an
/// error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RateSource {
    /// A single rate applied to every period.
    Flat(f64),
    /// One rate per period, aligned to the schedule's 1-based indices.
    PerPeriod(Vec<f64>),
}

impl RateSource {
    /// Returns the rate for the given 1-based period, or `None` when a
    /// per-period source is too short.
    fn rate_for(&self, period: u32) -> Option<f64> {
        match self {
            Self::Flat(rate) => Some(*rate),
            Self::PerPeriod(rates) => rates.get(period as usize - 1).copied(),
        }
    }
}

/// Computes the present value of a schedule against a rate source.
///
/// Flow `t` (1-based) is discounted at `(1 + r_t)^t`. Pure function:
/// identical inputs produce identical output.
///
/// Rates at or below -100% make the discount factor blow up or change
/// sign; supplying economically sane rates is the caller's responsibility
/// and is not checked here.
///
/// # Errors
///
/// Returns [`BondError::InvalidInput`] when a per-period source has fewer
/// entries than the schedule has periods.
///
/// # Example
///
/// ```rust
/// use tenor_bonds::cashflows::CashFlowSchedule;
/// use tenor_bonds::pricing::{present_value, RateSource};
///
/// let schedule = CashFlowSchedule::generate(100.0, 0.04, 5).unwrap();
/// let price = present_value(&schedule, &RateSource::Flat(0.03)).unwrap();
/// assert!((price - 104.58).abs() < 0.01);
/// ```
pub fn present_value(schedule: &CashFlowSchedule, rates: &RateSource) -> BondResult<f64> {
    if let RateSource::PerPeriod(seq) = rates {
        if seq.len() < schedule.len() {
            return Err(BondError::invalid_input(format!(
                "rate sequence has {} entries for {} periods",
                seq.len(),
                schedule.len()
            )));
        }
    }

    let mut pv = 0.0;
    for cf in schedule {
        // Checked above for PerPeriod; Flat always yields a rate.
        let rate = rates
            .rate_for(cf.period)
            .ok_or_else(|| BondError::invalid_input("rate sequence shorter than schedule"))?;
        pv += cf.amount / (1.0 + rate).powi(cf.period as i32);
    }
    Ok(pv)
}

/// Discounts every cash flow at a single flat rate.
///
/// # Errors
///
/// Propagates [`BondError::InvalidInput`] from [`present_value`].
pub fn present_value_flat(schedule: &CashFlowSchedule, rate: f64) -> BondResult<f64> {
    present_value(schedule, &RateSource::Flat(rate))
}

/// Discounts flow `t` at its own per-period rate `rates[t-1]`.
///
/// # Errors
///
/// Returns [`BondError::InvalidInput`] when `rates` is shorter than the
/// schedule.
pub fn present_value_curve(schedule: &CashFlowSchedule, rates: &[f64]) -> BondResult<f64> {
    present_value(schedule, &RateSource::PerPeriod(rates.to_vec()))
}

/// Prices a bond off the first `maturity_years` rates of a market strip.
///
/// Generates the schedule and discounts it per-period against the strip's
/// leading entries.
///
/// # Errors
///
/// Returns [`BondError::InvalidInput`] on degenerate bond terms or when the
/// strip is shorter than the maturity.
pub fn price_from_market_rates(
    nominal: f64,
    coupon_rate: f64,
    maturity_years: u32,
    market_rates: &[f64],
) -> BondResult<f64> {
    let schedule = CashFlowSchedule::generate(nominal, coupon_rate, maturity_years)?;
    present_value_curve(&schedule, market_rates)
}
