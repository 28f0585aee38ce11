//! # Tenor Core
//!
//! Core types for the Tenor bond valuation library.
//!
//! This crate provides:
//!
//! - **Dates**: A [`Date`](types::Date) newtype over `chrono::NaiveDate`
//!   with the operations curve construction needs
//! - **Day Counts**: The [`Act360`](daycounts::Act360) convention used for
//!   maturity measurement throughout the library
//! - **Errors**: The [`CoreError`](error::CoreError) type shared by the
//!   workspace

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod daycounts;
pub mod error;
pub mod types;

pub use daycounts::{Act360, DayCount};
pub use error::{CoreError, CoreResult};
pub use types::Date;
