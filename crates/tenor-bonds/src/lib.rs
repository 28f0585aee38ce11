//! # Tenor Bonds
//!
//! Fixed-coupon bond valuation and yield-curve bootstrapping.
//!
//! The crate is four composable stages, each depending only on the ones
//! before it:
//!
//! 1. **Cash flows** ([`cashflows`]): nominal + coupon rate + maturity
//!    produce a bond's periodic schedule
//! 2. **Discounting** ([`pricing`]): present value of a schedule against a
//!    flat rate or a per-period term structure
//! 3. **Yield solving** ([`ytm`]): invert the discounting engine to
//!    recover the flat rate reproducing an observed market price
//! 4. **Curve building** ([`curve`]): collect per-bond yields into a term
//!    structure and interpolate it at arbitrary horizons
//!
//! Everything is synchronous and purely computational; the only
//! variable-cost operation is root-finding, which is capped by an explicit
//! iteration budget.
//!
//! ## Quick Start
//!
//! ```rust
//! use tenor_bonds::prelude::*;
//! use tenor_core::types::Date;
//!
//! let valuation = Date::from_ymd(2025, 1, 16).unwrap();
//! let bonds = vec![
//!     BondRecord::new(100.0, 0.045, Date::from_ymd(2026, 1, 16).unwrap(), 102.17),
//!     BondRecord::new(100.0, 0.05, Date::from_ymd(2027, 1, 16).unwrap(), 105.22),
//!     BondRecord::new(100.0, 0.03, Date::from_ymd(2028, 1, 16).unwrap(), 101.96),
//! ];
//!
//! let result = CurveBuilder::new(valuation).build(&bonds);
//! assert!(result.is_complete());
//!
//! // Read the curve anywhere, including beyond the last pillar
//! let rate = result.curve.rate_at(2.5).unwrap();
//! assert!(rate.is_finite());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod accrual;
pub mod cashflows;
pub mod curve;
pub mod error;
pub mod pricing;
pub mod ytm;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::accrual::{accrued_interest, dirty_price, AccrualResult};
    pub use crate::cashflows::{CashFlow, CashFlowSchedule};
    pub use crate::curve::{
        BondRecord, CurveBootstrap, CurveBuilder, CurvePoint, RejectedBond, YieldCurve,
    };
    pub use crate::error::{BondError, BondResult};
    pub use crate::pricing::{
        present_value, present_value_curve, present_value_flat, price_from_market_rates,
        RateSource,
    };
    pub use crate::ytm::{GuessPolicy, YtmResult, YtmSolver};
}

pub use error::{BondError, BondResult};
