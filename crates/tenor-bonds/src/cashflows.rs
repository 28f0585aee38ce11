//! Cash-flow schedule generation for fixed-coupon bonds.

use serde::{Deserialize, Serialize};

use crate::error::{BondError, BondResult};

/// A single bond cash flow: a 1-based period index and an amount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    /// 1-based coupon period index.
    pub period: u32,
    /// Cash amount paid at the end of the period.
    pub amount: f64,
}

/// The periodic cash-flow schedule of a fixed-coupon bond.
///
/// One entry per coupon period, with the repaid nominal added to the final
/// entry. Period indices are consecutive integers starting at 1, and every
/// amount is positive. Schedules are value types: generated once per bond
/// at pricing or solving time and never mutated.
///
/// # Example
///
/// ```rust
/// use tenor_bonds::cashflows::CashFlowSchedule;
///
/// let schedule = CashFlowSchedule::generate(100.0, 0.04, 5).unwrap();
/// assert_eq!(schedule.len(), 5);
/// assert_eq!(schedule.flows()[0].amount, 4.0);
/// assert_eq!(schedule.flows()[4].amount, 104.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowSchedule {
    flows: Vec<CashFlow>,
}

impl CashFlowSchedule {
    /// Generates the schedule for a fixed-coupon bond.
    ///
    /// Produces `maturity_years` coupons of `nominal * coupon_rate`, with
    /// the nominal added to the last payment.
    ///
    /// # Arguments
    ///
    /// * `nominal` - Face value repaid at maturity, must be positive
    /// * `coupon_rate` - Periodic coupon rate as a fraction, must be
    ///   non-negative (typically in `[0, 1]`)
    /// * `maturity_years` - Number of annual coupon periods, must be >= 1
    ///
    /// # Errors
    ///
    /// Returns [`BondError::InvalidInput`] when `maturity_years` is zero,
    /// the nominal is not positive, the coupon rate is negative, or either
    /// is not finite.
    pub fn generate(nominal: f64, coupon_rate: f64, maturity_years: u32) -> BondResult<Self> {
        if maturity_years == 0 {
            return Err(BondError::invalid_input("maturity_years must be >= 1"));
        }
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

        let coupon = nominal * coupon_rate;
        let mut flows: Vec<CashFlow> = (1..=maturity_years)
            .map(|period| CashFlow {
                period,
                amount: coupon,
            })
            .collect();
        flows[maturity_years as usize - 1].amount += nominal;

        Ok(Self { flows })
    }

    /// Returns the schedule's cash flows in period order.
    #[must_use]
    pub fn flows(&self) -> &[CashFlow] {
        &self.flows
    }

    /// Returns the number of coupon periods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flows.len()
    }

    /// Returns true if the schedule has no flows.
    ///
    /// Never true for a generated schedule; present for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    /// Returns an iterator over the cash flows.
    pub fn iter(&self) -> std::slice::Iter<'_, CashFlow> {
        self.flows.iter()
    }
}

impl<'a> IntoIterator for &'a CashFlowSchedule {
    type Item = &'a CashFlow;
    type IntoIter = std::slice::Iter<'a, CashFlow>;

    fn into_iter(self) -> Self::IntoIter {
        self.flows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_generate_five_year() {
        let schedule = CashFlowSchedule::generate(100.0, 0.04, 5).unwrap();

        assert_eq!(schedule.len(), 5);
        for (i, cf) in schedule.iter().enumerate() {
            assert_eq!(cf.period, i as u32 + 1);
        }
        assert_relative_eq!(schedule.flows()[0].amount, 4.0);
        assert_relative_eq!(schedule.flows()[3].amount, 4.0);
        assert_relative_eq!(schedule.flows()[4].amount, 104.0);
    }

    #[test]
    fn test_generate_one_year() {
        // Single period: coupon and nominal in one flow
        let schedule = CashFlowSchedule::generate(100.0, 0.045, 1).unwrap();

        assert_eq!(schedule.len(), 1);
        assert_relative_eq!(schedule.flows()[0].amount, 104.5);
    }

    #[test]
    fn test_zero_coupon() {
        let schedule = CashFlowSchedule::generate(100.0, 0.0, 3).unwrap();

        assert_relative_eq!(schedule.flows()[0].amount, 0.0);
        assert_relative_eq!(schedule.flows()[2].amount, 100.0);
    }

    #[test]
    fn test_zero_maturity_rejected() {
        let result = CashFlowSchedule::generate(100.0, 0.04, 0);
        assert!(matches!(result, Err(BondError::InvalidInput { .. })));
    }

    #[test]
    fn test_non_positive_nominal_rejected() {
        assert!(CashFlowSchedule::generate(0.0, 0.04, 5).is_err());
        assert!(CashFlowSchedule::generate(-100.0, 0.04, 5).is_err());
    }

    #[test]
    fn test_negative_coupon_rejected() {
        assert!(CashFlowSchedule::generate(100.0, -0.01, 5).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(CashFlowSchedule::generate(f64::NAN, 0.04, 5).is_err());
        assert!(CashFlowSchedule::generate(100.0, f64::INFINITY, 5).is_err());
    }
}
