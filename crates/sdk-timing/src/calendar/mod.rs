//! UTC calendar arithmetic.
//!
//! The calendar module provides:
//! - Broken-down UTC calendar fields
//! - Gregorian leap-year rules
//! - Closed-form conversion from calendar fields to Unix epoch seconds

pub mod engine;
pub mod types;

pub use types::{is_leap_year, BrokenDownTime};

pub use engine::{leap_days_since_epoch, to_epoch_seconds};
