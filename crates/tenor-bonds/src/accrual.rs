//! Accrued interest and dirty-price calculation.

use serde::{Deserialize, Serialize};

use tenor_core::types::Date;

use crate::cashflows::CashFlowSchedule;
use crate::error::{BondError, BondResult};
use crate::pricing::present_value_flat;

/// Accrued interest and the resulting dirty price for a bond.
///
/// Ephemeral: computed on demand from a bond's terms and a valuation date,
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccrualResult {
    /// Interest accrued since the last coupon date.
    pub accrued: f64,
    /// Clean present value plus accrued interest.
    pub dirty_price: f64,
}

/// Calculates interest accrued between the last coupon date and `as_of`.
///
/// The accrual fraction uses the period length
/// `days_in_period = 360 / (1 / coupon_rate)`, i.e. the coupon rate acts
/// as a frequency divisor. This is **not** the standard Actual/360 coupon
/// accrual; it is carried over verbatim from the reference system, and
/// replacing it with the par convention would silently change every dirty
/// price. A zero coupon accrues nothing.
///
/// # Errors
///
/// Returns [`BondError::InvalidInput`] when the nominal is not positive,
/// the coupon rate is negative, or `as_of` precedes `last_coupon`.
pub fn accrued_interest(
    coupon_rate: f64,
    nominal: f64,
    last_coupon: Date,
    as_of: Date,
) -> BondResult<f64> {
    if !nominal.is_finite() || nominal <= 0.0 {
        return Err(BondError::invalid_input(format!(
            "nominal must be positive, got {nominal}"
        )));
    }
    if !coupon_rate.is_finite() || coupon_rate < 0.0 {
        return Err(BondError::invalid_input(format!(
            "coupon_rate must be non-negative, got {coupon_rate}"
        )));
    }
    let days_elapsed = last_coupon.days_between(&as_of);
    if days_elapsed < 0 {
        return Err(BondError::invalid_input(format!(
            "as_of {as_of} precedes last coupon date {last_coupon}"
        )));
    }
    if coupon_rate == 0.0 {
        return Ok(0.0);
    }

    // 360 / (1 / coupon_rate): the reference's day-count quirk.
    let days_in_period = 360.0 * coupon_rate;
    Ok((days_elapsed as f64 / days_in_period) * (coupon_rate * nominal))
}

/// Prices a bond dirty: flat-rate present value plus accrued interest.
///
/// # Errors
///
/// Propagates [`BondError::InvalidInput`] from schedule generation and
/// from [`accrued_interest`].
pub fn dirty_price(
    nominal: f64,
    coupon_rate: f64,
    maturity_years: u32,
    rate: f64,
    last_coupon: Date,
    as_of: Date,
) -> BondResult<AccrualResult> {
    let schedule = CashFlowSchedule::generate(nominal, coupon_rate, maturity_years)?;
    let clean = present_value_flat(&schedule, rate)?;
    let accrued = accrued_interest(coupon_rate, nominal, last_coupon, as_of)?;

    Ok(AccrualResult {
        accrued,
        dirty_price: clean + accrued,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_accrual_reference_formula() {
        // 4% coupon: days_in_period = 360 * 0.04 = 14.4
        // 90 days elapsed: (90 / 14.4) * 4 = 25.0
        let accrued =
            accrued_interest(0.04, 100.0, date(2025, 1, 1), date(2025, 4, 1)).unwrap();

        assert_relative_eq!(accrued, (90.0 / 14.4) * 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_accrual_zero_on_coupon_date() {
        let accrued =
            accrued_interest(0.04, 100.0, date(2025, 1, 1), date(2025, 1, 1)).unwrap();

        assert_relative_eq!(accrued, 0.0);
    }

    #[test]
    fn test_zero_coupon_accrues_nothing() {
        let accrued =
            accrued_interest(0.0, 100.0, date(2025, 1, 1), date(2025, 7, 1)).unwrap();

        assert_relative_eq!(accrued, 0.0);
    }

    #[test]
    fn test_as_of_before_last_coupon_rejected() {
        let result = accrued_interest(0.04, 100.0, date(2025, 4, 1), date(2025, 1, 1));
        assert!(matches!(result, Err(BondError::InvalidInput { .. })));
    }

    #[test]
    fn test_non_positive_nominal_rejected() {
        let result = accrued_interest(0.04, 0.0, date(2025, 1, 1), date(2025, 4, 1));
        assert!(matches!(result, Err(BondError::InvalidInput { .. })));
    }

    #[test]
    fn test_dirty_price_composition() {
        let result =
            dirty_price(100.0, 0.04, 5, 0.03, date(2025, 1, 1), date(2025, 4, 1)).unwrap();

        let schedule = CashFlowSchedule::generate(100.0, 0.04, 5).unwrap();
        let clean = present_value_flat(&schedule, 0.03).unwrap();
        let accrued =
            accrued_interest(0.04, 100.0, date(2025, 1, 1), date(2025, 4, 1)).unwrap();

        assert_relative_eq!(result.accrued, accrued, epsilon = 1e-12);
        assert_relative_eq!(result.dirty_price, clean + accrued, epsilon = 1e-12);
        assert!(result.dirty_price > clean);
    }
}
