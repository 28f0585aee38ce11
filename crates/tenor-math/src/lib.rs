//! # Tenor Math
//!
//! Numerical routines for the Tenor bond valuation library.
//!
//! This crate provides the two pieces of numerical machinery the yield
//! engine needs, with explicitly owned convergence semantics:
//!
//! - **Root-finding**: [`solvers::newton_raphson`] with a bounded iteration
//!   budget, plus [`solvers::bisection`] as a bracketing fallback
//! - **Interpolation**: [`interpolation::LinearInterpolator`] with opt-in
//!   linear extrapolation beyond the data range
//!
//! ## Example: solving a yield
//!
//! ```rust
//! use tenor_math::solvers::{newton_raphson, SolverConfig};
//!
//! // One-year bond: 4.5 coupon plus 100 principal, quoted at 102.17
//! let f = |r: f64| 104.5 / (1.0 + r) - 102.17;
//! let df = |r: f64| -104.5 / ((1.0 + r) * (1.0 + r));
//!
//! let result = newton_raphson(f, df, 0.0, &SolverConfig::default()).unwrap();
//! assert!((f(result.root)).abs() < 1e-10);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod interpolation;
pub mod solvers;

pub use error::{MathError, MathResult};
